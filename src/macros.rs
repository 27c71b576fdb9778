//! Logging macros for ergonomic log message formatting.
//!
//! These macros accept the same format strings as `format!`. The arguments
//! are passed to the logger as `format_args!`, so the message is only
//! rendered once, inside the logger, and the reported call site is the line
//! where the macro was invoked.
//!
//! # Examples
//!
//! ```
//! use logx::prelude::*;
//! use logx::info;
//!
//! let logger = Logger::default();
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit level, returning the sink's write result.
///
/// # Examples
///
/// ```
/// # use logx::prelude::*;
/// # let logger = Logger::default();
/// use logx::log;
/// log!(logger, LogLevel::Info, "Simple message").unwrap();
/// let result = log!(logger, LogLevel::Error, "Error code: {}", 500);
/// assert!(result.is_ok());
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format_args!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use logx::prelude::*;
/// # let logger = Logger::default();
/// use logx::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(format_args!($($arg)+))
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use logx::prelude::*;
/// # let logger = Logger::default();
/// use logx::info;
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(format_args!($($arg)+))
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use logx::prelude::*;
/// # let logger = Logger::default();
/// use logx::warn;
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(format_args!($($arg)+))
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use logx::prelude::*;
/// # let logger = Logger::default();
/// use logx::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(format_args!($($arg)+))
    };
}
