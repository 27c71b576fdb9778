//! Core logger types and traits

pub mod call_site;
pub mod error;
pub mod formatter;
pub mod leveled;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod sink;
pub mod timestamp;

pub use call_site::{
    CallSite, CallSiteResolver, NoopResolver, TrackedCallerResolver, DEFAULT_CALL_DEPTH,
    UNKNOWN_FILE,
};
pub use error::{LoggerError, Result};
#[cfg(feature = "console")]
pub use formatter::ColorFormatter;
pub use formatter::{DefaultFormatter, Formatter, NoopFormatter};
pub use leveled::LeveledLogger;
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, LoggerConfig};
pub use sink::Sink;
pub use timestamp::TimestampFormat;
