//! Log entry structure

use super::log_level::LogLevel;
use chrono::{DateTime, Utc};

/// One rendered-to-be log call.
///
/// Built fresh by the logger for every call and handed to the formatter by
/// reference; nothing keeps it afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub prefix: String,
    /// Caller depth actually used to resolve `file` and `line`.
    pub call_depth: usize,
    pub file: String,
    pub line: u32,
    pub message: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            prefix: String::new(),
            call_depth: 0,
            file: super::call_site::UNKNOWN_FILE.to_string(),
            line: 0,
            message: message.into(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_location(mut self, file: impl Into<String>, line: u32, call_depth: usize) -> Self {
        self.file = file.into();
        self.line = line;
        self.call_depth = call_depth;
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
