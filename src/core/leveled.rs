//! Object-safe logging interface
//!
//! Application code that should not care which logger it writes to can take
//! a `&dyn LeveledLogger` (or a generic) and have a [`Logger`], a test double,
//! or any other implementation injected.
//!
//! [`Logger`]: super::Logger

use super::{error::Result, formatter::Formatter, log_level::LogLevel, sink::Sink};
use std::fmt;
use std::sync::Arc;

pub trait LeveledLogger: Send + Sync {
    fn set_output(&self, output: Option<Arc<dyn Sink>>);

    fn set_prefix(&self, prefix: String);

    fn set_formatter(&self, formatter: Arc<dyn Formatter>);

    #[track_caller]
    fn debug(&self, message: &dyn fmt::Display);

    #[track_caller]
    fn info(&self, message: &dyn fmt::Display);

    #[track_caller]
    fn warn(&self, message: &dyn fmt::Display);

    #[track_caller]
    fn error(&self, message: &dyn fmt::Display);

    /// Log at `level`, reporting the destination's write error.
    #[track_caller]
    fn log(&self, level: LogLevel, message: &dyn fmt::Display) -> Result<()>;
}

impl LeveledLogger for super::Logger {
    fn set_output(&self, output: Option<Arc<dyn Sink>>) {
        super::Logger::set_output(self, output);
    }

    fn set_prefix(&self, prefix: String) {
        super::Logger::set_prefix(self, prefix);
    }

    fn set_formatter(&self, formatter: Arc<dyn Formatter>) {
        super::Logger::set_formatter(self, formatter);
    }

    #[track_caller]
    fn debug(&self, message: &dyn fmt::Display) {
        super::Logger::debug(self, message);
    }

    #[track_caller]
    fn info(&self, message: &dyn fmt::Display) {
        super::Logger::info(self, message);
    }

    #[track_caller]
    fn warn(&self, message: &dyn fmt::Display) {
        super::Logger::warn(self, message);
    }

    #[track_caller]
    fn error(&self, message: &dyn fmt::Display) {
        super::Logger::error(self, message);
    }

    #[track_caller]
    fn log(&self, level: LogLevel, message: &dyn fmt::Display) -> Result<()> {
        super::Logger::log(self, level, message)
    }
}
