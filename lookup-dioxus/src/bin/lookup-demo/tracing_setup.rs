//! Tracing subscriber for the lookup-demo binary.
//!
//! Installed before Dioxus launches so dioxus-logger does not install its own.
//! Webview chatter (pointer and selection events) is dropped by pattern.

use std::fs::File;
use std::io;
use std::sync::Mutex;

use lookup_dioxus::config::LoggingConfig;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::{self, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Formats events normally, then discards lines containing a suppressed pattern.
struct QuietFormatter {
    inner: fmt::format::Format,
    suppressed: Vec<String>,
}

impl QuietFormatter {
    fn new(suppressed: Vec<String>) -> Self {
        Self {
            inner: fmt::format::Format::default().with_target(false),
            suppressed,
        }
    }

    fn is_suppressed(&self, line: &str) -> bool {
        self.suppressed.iter().any(|pattern| line.contains(pattern.as_str()))
    }
}

impl<S, N> FormatEvent<S, N> for QuietFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> std::fmt::Result {
        let mut line = String::new();
        self.inner.format_event(ctx, Writer::new(&mut line), event)?;
        if self.is_suppressed(&line) {
            return Ok(());
        }
        write!(writer, "{line}")
    }
}

/// Install the global subscriber described by `config`.
///
/// `RUST_LOG` overrides the configured level. Logs go to the configured
/// file, or stderr when it is unset or cannot be created.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let log_file = config
        .log_file
        .as_ref()
        .and_then(|path| File::create(path).ok().map(|file| (path, file)));

    let (writer, to_file) = match log_file {
        Some((path, file)) => {
            eprintln!("Logging to {}", path.display());
            (BoxMakeWriter::new(Mutex::new(file)), true)
        }
        None => (BoxMakeWriter::new(io::stderr), false),
    };

    let fmt_layer = fmt::layer()
        .with_ansi(!to_file)
        .with_writer(writer)
        .event_format(QuietFormatter::new(config.suppressed_patterns.clone()));

    tracing_subscriber::registry().with(env_filter).with(fmt_layer).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_with_patterns_are_suppressed() {
        let formatter = QuietFormatter::new(vec!["mousemove".to_string(), "SelectionDidChange".to_string()]);
        assert!(formatter.is_suppressed("DEBUG Dispatched mousemove to element 12"));
        assert!(formatter.is_suppressed("SelectionDidChange"));
        assert!(!formatter.is_suppressed("INFO Selected Some(Object {\"symbol\": \"R_100\"})"));
    }

    #[test]
    fn default_patterns_cover_pointer_noise() {
        let formatter = QuietFormatter::new(LoggingConfig::default().suppressed_patterns);
        assert!(formatter.is_suppressed("mouseenter on .cq-item"));
    }
}
