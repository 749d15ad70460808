//! Binary entry point for the wmcp-wait MCP server.

use anyhow::Context;
use clap::Parser;
use rmcp::ServiceExt;
use tokio_util::sync::CancellationToken;
use wmcp_wait::{
    Config, WaitServer,
    config::{ENV_MAX_DURATION, ENV_TOOL_DESCRIPTION},
};

/// Walrus MCP Wait Server: chunked waits and the current time.
#[derive(Parser)]
#[command(name = "wmcp-wait", version, about)]
struct Cli {
    /// Longest a single wait call may block, in seconds (minimum 1).
    #[arg(long, env = ENV_MAX_DURATION)]
    max_duration_seconds: Option<String>,

    /// Description advertised for the wait tool.
    #[arg(long, env = ENV_TOOL_DESCRIPTION)]
    tool_description: Option<String>,
}

/// Cancel `shutdown` on SIGINT or SIGTERM.
async fn listen_for_shutdown(shutdown: CancellationToken) {
    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to register SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = tokio::signal::ctrl_c() => tracing::info!("Received SIGINT. Shutting down..."),
        () = terminate => tracing::info!("Received SIGTERM. Shutting down..."),
        () = shutdown.cancelled() => return,
    }
    shutdown.cancel();
}

async fn run(config: Config) -> anyhow::Result<()> {
    let shutdown = CancellationToken::new();
    tokio::spawn(listen_for_shutdown(shutdown.clone()));

    tracing::info!("Connecting server to stdio transport...");
    let server = WaitServer::new(config, shutdown.clone());
    let service = server
        .serve_with_ct(rmcp::transport::stdio(), shutdown.clone())
        .await
        .context("failed to start server")?;
    tracing::info!("MCP Wait Server running on stdio. Waiting for requests...");

    let reason = service.waiting().await.context("server error")?;
    tracing::info!("Server stopped ({reason:?}).");
    shutdown.cancel();
    Ok(())
}

// Exits through `std::process::exit`: the stdio transport reads stdin on a
// blocking thread that dropping the runtime would wait on while stdin stays open.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    wmcp_wait::log::init();
    let config = Config::resolve(cli.max_duration_seconds.as_deref(), cli.tool_description);

    let code = match run(config).await {
        Ok(()) => {
            tracing::info!("Server shutdown complete.");
            0
        }
        Err(e) => {
            tracing::error!("Fatal error during server startup or execution: {e:#}");
            tracing::error!("{e:?}");
            1
        }
    };
    std::process::exit(code);
}
