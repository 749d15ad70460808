//! Startup configuration for the wait server.

/// Environment variable holding the per-call ceiling in seconds.
pub const ENV_MAX_DURATION: &str = "MCP_WAIT_MAX_DURATION_SECONDS";
/// Environment variable overriding the `wait` tool description.
pub const ENV_TOOL_DESCRIPTION: &str = "MCP_WAIT_TOOL_DESCRIPTION";

/// Ceiling used when none is configured.
pub const DEFAULT_MAX_DURATION: f64 = 210.0;
/// Lowest ceiling the server accepts.
pub const MIN_MAX_DURATION: f64 = 1.0;
/// Advertised description of the `wait` tool.
pub const DEFAULT_TOOL_DESCRIPTION: &str = "Waits for a specified number of seconds. \
Use this to create a delay after starting a long-running operation (like a script or \
download via another tool), allowing it time to complete before you proceed or check its status.";

/// Parse the longest numeric prefix of `raw`, so `"12abc"` reads as 12.
///
/// Non-finite values (`NaN`, `inf`) are rejected.
fn leading_seconds(raw: &str) -> Option<f64> {
    raw.char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .rev()
        .filter_map(|end| raw[..end].parse::<f64>().ok())
        .find(|secs| secs.is_finite())
}

/// Immutable server configuration, resolved once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Longest a single `wait` call may block, in seconds. Never below 1.0.
    pub max_duration: f64,
    /// Description advertised for the `wait` tool.
    pub tool_description: String,
}

impl Config {
    /// Build a configuration from raw settings.
    ///
    /// Invalid or missing values fall back to the defaults with a log line.
    pub fn resolve(max_duration: Option<&str>, tool_description: Option<String>) -> Self {
        let max_duration = match max_duration.map(str::trim) {
            None | Some("") => {
                tracing::info!(
                    "{ENV_MAX_DURATION} not set. Using default max duration per call: {DEFAULT_MAX_DURATION} seconds."
                );
                DEFAULT_MAX_DURATION
            }
            Some(raw) => match leading_seconds(raw) {
                Some(secs) => {
                    tracing::info!(
                        "Using max duration per call from {ENV_MAX_DURATION}: {secs} seconds."
                    );
                    secs
                }
                None => {
                    tracing::warn!(
                        "Invalid value in {ENV_MAX_DURATION} ('{raw}'). Using default: {DEFAULT_MAX_DURATION} seconds."
                    );
                    DEFAULT_MAX_DURATION
                }
            },
        };
        let max_duration = max_duration.max(MIN_MAX_DURATION);
        tracing::info!("Effective max duration per call: {max_duration} seconds.");

        let tool_description = match tool_description.filter(|d| !d.is_empty()) {
            Some(desc) => {
                tracing::info!("Using custom tool description from {ENV_TOOL_DESCRIPTION}.");
                desc
            }
            None => {
                tracing::info!("{ENV_TOOL_DESCRIPTION} not set. Using default tool description.");
                DEFAULT_TOOL_DESCRIPTION.to_owned()
            }
        };

        Self {
            max_duration,
            tool_description,
        }
    }

    /// Configuration with the given ceiling and the default description.
    pub fn with_max_duration(max_duration: f64) -> Self {
        Self {
            max_duration: max_duration.max(MIN_MAX_DURATION),
            tool_description: DEFAULT_TOOL_DESCRIPTION.to_owned(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_max_duration(DEFAULT_MAX_DURATION)
    }
}
