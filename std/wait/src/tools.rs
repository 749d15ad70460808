//! Tool implementations for the wait MCP server.

use crate::{Config, WaitServer, error::WaitError, policy};
use chrono::{SecondsFormat, Utc};
use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars::{self, JsonSchema},
    tool, tool_router,
};
use serde::Deserialize;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Parameters for the `wait` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct WaitParams {
    /// The number of seconds to wait.
    pub duration_seconds: f64,
}

/// Render seconds for messages: at most three decimals, trailing zeros dropped.
fn secs(value: f64) -> String {
    let text = format!("{value:.3}");
    text.trim_end_matches('0').trim_end_matches('.').to_owned()
}

/// Sleep for `seconds` unless `shutdown` fires first.
async fn suspend(seconds: f64, shutdown: &CancellationToken) -> Result<(), WaitError> {
    let duration =
        Duration::try_from_secs_f64(seconds).map_err(|_| WaitError::InvalidDuration(seconds))?;
    tokio::select! {
        () = tokio::time::sleep(duration) => Ok(()),
        () = shutdown.cancelled() => Err(WaitError::Cancelled),
    }
}

#[tool_router]
impl WaitServer {
    /// Create a new wait server.
    ///
    /// `shutdown` aborts in-flight waits when the process is stopping.
    pub fn new(config: Config, shutdown: CancellationToken) -> Self {
        let mut tool_router = Self::tool_router();
        if let Some(route) = tool_router.map.get_mut("wait") {
            route.attr.description = Some(config.tool_description.clone().into());
        }
        Self {
            config,
            shutdown,
            tool_router,
        }
    }

    /// Wait for up to the configured ceiling and report any remainder.
    #[tool(description = "Waits for a specified number of seconds.")]
    async fn wait(
        &self,
        Parameters(params): Parameters<WaitParams>,
    ) -> Result<CallToolResult, McpError> {
        let requested = params.duration_seconds;
        tracing::info!("Tool 'wait' called with duration_seconds={requested}.");

        if !requested.is_finite() || requested < 0.0 {
            let text = if requested < 0.0 {
                tracing::warn!("Requested negative wait time {} sec.", secs(requested));
                format!(
                    "Error: Requested duration ({} seconds) cannot be negative.",
                    secs(requested)
                )
            } else {
                tracing::warn!("Requested non-finite wait time {requested} sec.");
                format!("Error: Requested duration ({requested}) must be a finite number of seconds.")
            };
            return Ok(CallToolResult::error(vec![Content::text(text)]));
        }

        let decision = policy::decide(requested, self.config.max_duration);
        if decision.is_final {
            tracing::info!("Starting wait for {} seconds...", secs(decision.actual_wait));
        } else {
            tracing::info!(
                "Request for {}s exceeds single call limit of {}s. Waiting for {}s now.",
                secs(requested),
                secs(self.config.max_duration),
                secs(decision.actual_wait)
            );
        }

        if let Err(e) = suspend(decision.actual_wait, &self.shutdown).await {
            tracing::warn!("Wait task failed or was cancelled: {e}");
            return Err(e.into());
        }
        tracing::info!(
            "--- Wait interval of {} seconds FINISHED. ---",
            secs(decision.actual_wait)
        );

        let text = if decision.is_final {
            tracing::info!(
                "Total requested duration ({}s) completed successfully.",
                secs(requested)
            );
            format!("Successfully waited for {} seconds.", secs(decision.actual_wait))
        } else {
            tracing::info!(
                "Instructing caller to wait for remaining {} seconds.",
                secs(decision.remaining)
            );
            format!(
                "Waited for {} seconds. IMPORTANT: Don't do your own math, just call the wait tool \
                 again for the remaining {} seconds. It will allow to finish task without errors",
                secs(decision.actual_wait),
                secs(decision.remaining)
            )
        };
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Current UTC date and time.
    #[tool(
        description = "Returns the current date and time in ISO 8601 format (e.g., 2025-06-11T17:12:50.455Z)."
    )]
    async fn get_datetime(&self) -> Result<CallToolResult, McpError> {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        tracing::info!("Tool 'get_datetime' called. Returning: {now}");
        Ok(CallToolResult::success(vec![Content::text(now)]))
    }
}
