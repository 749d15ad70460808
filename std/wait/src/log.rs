//! Stderr logging in the `<timestamp> - <LEVEL> - <message>` line format.
//!
//! Stdout carries the MCP transport, so nothing may be logged there.

use chrono::{SecondsFormat, Utc};
use std::fmt;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter, format::Writer},
    registry::LookupSpan,
    util::SubscriberInitExt,
};

/// Event formatter producing one `<timestamp> - <LEVEL> - <message>` line per event.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(
            writer,
            "{} - {} - ",
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            level_name(event.metadata().level())
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn level_name(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "ERROR",
        Level::WARN => "WARNING",
        Level::INFO => "INFO",
        Level::DEBUG => "DEBUG",
        Level::TRACE => "TRACE",
    }
}

/// Subscriber writing [`LineFormat`] lines to `writer`, without ANSI styling.
pub(crate) fn subscriber<W>(writer: W, filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_env_filter(filter)
        .event_format(LineFormat)
        .finish()
}

/// Install the global subscriber. `RUST_LOG` overrides the default `info` filter.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    subscriber(std::io::stderr, filter).init();
}


#[cfg(test)]
mod tests {
    use super::{subscriber, testing::Capture};
    use tracing_subscriber::EnvFilter;

    #[test]
    fn formats_timestamp_level_and_message() {
        let capture = Capture::default();
        tracing::subscriber::with_default(subscriber(capture.clone(), EnvFilter::new("info")), || {
            tracing::warn!("Requested negative wait time -5 sec.");
            tracing::info!("ready");
            tracing::debug!("filtered out");
        });

        let output = capture.contents();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);

        let (timestamp, rest) = lines[0].split_once(" - ").unwrap();
        assert!(timestamp.ends_with('Z'), "timestamp: {timestamp}");
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
        assert_eq!(rest, "WARNING - Requested negative wait time -5 sec.");
        assert!(lines[1].ends_with(" - INFO - ready"));
    }

    #[test]
    fn structured_fields_are_plain_text() {
        let capture = Capture::default();
        tracing::subscriber::with_default(subscriber(capture.clone(), EnvFilter::new("info")), || {
            tracing::info!(quit_reason = "Cancelled", "serve finished");
        });

        let output = capture.contents();
        assert!(!output.contains('\x1b'), "ansi escapes in {output:?}");
        assert!(output.contains(" - INFO - serve finished quit_reason="), "{output:?}");
        assert!(output.contains("Cancelled"), "{output:?}");
    }
}
