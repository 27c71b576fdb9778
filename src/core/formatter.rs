//! Formatters render a [`LogEntry`] into the bytes handed to a sink
//!
//! Any `Fn(&LogEntry) -> Vec<u8>` closure is a formatter, so one-off layouts
//! don't need a named type. Formatters run outside the logger's lock and must
//! be pure: no I/O, no hidden state.

use super::log_entry::LogEntry;
use super::timestamp::TimestampFormat;

pub trait Formatter: Send + Sync {
    fn format(&self, entry: &LogEntry) -> Vec<u8>;
}

impl<F> Formatter for F
where
    F: Fn(&LogEntry) -> Vec<u8> + Send + Sync,
{
    fn format(&self, entry: &LogEntry) -> Vec<u8> {
        self(entry)
    }
}

/// Escape control characters so one entry always renders as one line
fn sanitize_message(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Human-readable single-line layout
///
/// `[2025-01-08T10:30:45.123Z] [INFO ] svc src/main.rs:42 - Request processed`
///
/// The prefix segment is left out when the prefix is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultFormatter {
    timestamp_format: TimestampFormat,
}

impl DefaultFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    fn render(&self, entry: &LogEntry, level: &str) -> Vec<u8> {
        let mut output = format!(
            "[{}] [{}] ",
            self.timestamp_format.format(&entry.timestamp),
            level
        );
        if !entry.prefix.is_empty() {
            output.push_str(&entry.prefix);
            output.push(' ');
        }
        output.push_str(&format!(
            "{}:{} - {}\n",
            entry.file,
            entry.line,
            sanitize_message(&entry.message)
        ));
        output.into_bytes()
    }
}

impl Formatter for DefaultFormatter {
    fn format(&self, entry: &LogEntry) -> Vec<u8> {
        self.render(entry, &format!("{:5}", entry.level))
    }
}

/// Same layout as [`DefaultFormatter`] with the level painted in ANSI colors
#[cfg(feature = "console")]
#[derive(Debug, Clone, Default)]
pub struct ColorFormatter {
    inner: DefaultFormatter,
}

#[cfg(feature = "console")]
impl ColorFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.inner = self.inner.with_timestamp_format(format);
        self
    }
}

#[cfg(feature = "console")]
impl Formatter for ColorFormatter {
    fn format(&self, entry: &LogEntry) -> Vec<u8> {
        use colored::Colorize;

        let level = format!("{:5}", entry.level)
            .color(entry.level.color_code())
            .to_string();
        self.inner.render(entry, &level)
    }
}

/// Discards every entry
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFormatter;

impl Formatter for NoopFormatter {
    fn format(&self, _entry: &LogEntry) -> Vec<u8> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use chrono::TimeZone;
    use chrono::Utc;

    fn entry(level: LogLevel, message: &str) -> LogEntry {
        let timestamp = Utc
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime");
        LogEntry::new(level, message)
            .with_timestamp(timestamp)
            .with_location("src/main.rs", 42, 2)
    }

    #[test]
    fn test_default_layout() {
        let out = DefaultFormatter::new().format(&entry(LogLevel::Info, "Request processed"));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[2025-01-08T10:30:45.000Z] [INFO ] src/main.rs:42 - Request processed\n"
        );
    }

    #[test]
    fn test_default_layout_with_prefix() {
        let out = DefaultFormatter::new()
            .format(&entry(LogLevel::Warn, "boom").with_prefix("svc"));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[2025-01-08T10:30:45.000Z] [WARN ] svc src/main.rs:42 - boom\n"
        );
    }

    #[test]
    fn test_message_injection_is_escaped() {
        let out = DefaultFormatter::new().format(&entry(
            LogLevel::Error,
            "User login\nERROR fake entry\tinjected\r",
        ));
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("User login\\nERROR fake entry\\tinjected\\r"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_custom_timestamp_format() {
        let formatter =
            DefaultFormatter::new().with_timestamp_format(TimestampFormat::Custom("%H:%M".into()));
        let out = formatter.format(&entry(LogLevel::Debug, "tick"));
        assert!(String::from_utf8(out).unwrap().starts_with("[10:30] [DEBUG]"));
    }

    #[test]
    fn test_default_is_deterministic() {
        let e = entry(LogLevel::Info, "same");
        let formatter = DefaultFormatter::new();
        assert_eq!(formatter.format(&e), formatter.format(&e));
    }

    #[test]
    fn test_closure_formatter() {
        let formatter = |e: &LogEntry| format!("{}|{}", e.level, e.message).into_bytes();
        assert_eq!(formatter.format(&entry(LogLevel::Error, "x")), b"ERROR|x".to_vec());
    }

    #[test]
    fn test_noop_formatter() {
        assert!(NoopFormatter.format(&entry(LogLevel::Info, "gone")).is_empty());
    }

    #[cfg(feature = "console")]
    #[test]
    fn test_color_formatter_keeps_layout() {
        colored::control::set_override(false);
        let out = ColorFormatter::new().format(&entry(LogLevel::Info, "colored"));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("INFO"));
        assert!(text.contains("src/main.rs:42 - colored"));
    }
}
