//! # logx
//!
//! A minimal, embeddable logging facade: one [`Logger`] value that renders
//! leveled messages with a pluggable [`Formatter`] and writes them to a
//! swappable [`Sink`], tagging every entry with the file and line of the call.
//!
//! ## Features
//!
//! - **Thread Safe**: configuration can change while other threads log
//! - **Pluggable**: formatters, sinks and call-site resolvers are traits
//! - **Call Sites**: `#[track_caller]` reports the application's file and line
//! - **No Globals**: construct a logger and pass it where it is needed
//!
//! ```
//! use logx::{info, Logger, MemorySink};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! let logger = Logger::new(Some(sink.clone()));
//!
//! info!(logger, "value={}", 42);
//! assert!(sink.contents().contains("value=42"));
//! ```

pub mod core;
pub mod macros;
pub mod mask;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        CallSite, CallSiteResolver, DefaultFormatter, Formatter, LeveledLogger, LogEntry, LogLevel,
        Logger, LoggerBuilder, LoggerConfig, LoggerError, NoopFormatter, NoopResolver, Result,
        Sink, TimestampFormat, TrackedCallerResolver,
    };
    pub use crate::sinks::{FileSink, MemorySink, StderrSink, StdoutSink, WriterSink};
}

#[cfg(feature = "console")]
pub use crate::core::ColorFormatter;
pub use crate::core::{
    CallSite, CallSiteResolver, DefaultFormatter, Formatter, LeveledLogger, LogEntry, LogLevel,
    Logger, LoggerBuilder, LoggerConfig, LoggerError, NoopFormatter, NoopResolver, Result, Sink,
    TimestampFormat, TrackedCallerResolver, DEFAULT_CALL_DEPTH,
};
pub use crate::sinks::{FileSink, MemorySink, StderrSink, StdoutSink, WriterSink};
