//! MCP server providing a chunked `wait` tool and a `get_datetime` tool.
//!
//! Hosts cap how long a single tool call may block. Waits longer than the
//! configured ceiling are served one chunk per call: each call blocks for at
//! most the ceiling and tells the caller how many seconds remain.

use rmcp::{
    ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::{Implementation, ServerCapabilities, ServerInfo},
    tool_handler,
};
use tokio_util::sync::CancellationToken;
pub mod config;
pub mod error;
pub mod log;
pub mod policy;
pub mod tools;

pub use config::Config;

/// MCP wait server.
#[derive(Debug, Clone)]
pub struct WaitServer {
    pub(crate) config: Config,
    pub(crate) shutdown: CancellationToken,
    pub(crate) tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for WaitServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "wmcp-wait".into(),
                title: Some("Walrus MCP Wait Server".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(
                "Wait server providing bounded waits and the current UTC time. \
                 When a wait reports remaining seconds, call wait again with exactly that value."
                    .into(),
            ),
        }
    }
}
