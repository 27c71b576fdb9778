//! Main logger implementation

use super::{
    call_site::{CallSite, CallSiteResolver, TrackedCallerResolver, DEFAULT_CALL_DEPTH},
    error::Result,
    formatter::{DefaultFormatter, Formatter},
    log_entry::LogEntry,
    log_level::LogLevel,
    sink::Sink,
};
use crate::sinks::StdoutSink;
use chrono::Utc;
use parking_lot::RwLock;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// One generation of logger configuration.
///
/// The logger never mutates a generation that a log call may be reading:
/// changes go through [`Logger::reconfigure`], which swaps in a fresh copy
/// whenever the current one is shared.
#[derive(Clone)]
pub struct LoggerConfig {
    /// Destination for rendered entries; `None` writes to stdout.
    pub output: Option<Arc<dyn Sink>>,
    pub prefix: String,
    pub formatter: Arc<dyn Formatter>,
    /// Frames to skip when resolving the call site; 0 means
    /// [`DEFAULT_CALL_DEPTH`].
    pub call_depth: usize,
    pub resolver: Arc<dyn CallSiteResolver>,
}

impl LoggerConfig {
    /// Depth handed to the resolver, with the 0 sentinel replaced.
    pub fn effective_call_depth(&self) -> usize {
        if self.call_depth == 0 {
            DEFAULT_CALL_DEPTH
        } else {
            self.call_depth
        }
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            output: None,
            prefix: String::new(),
            formatter: Arc::new(DefaultFormatter::default()),
            call_depth: 0,
            resolver: Arc::new(TrackedCallerResolver),
        }
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("output", &self.output.as_ref().map(|sink| sink.name()))
            .field("prefix", &self.prefix)
            .field("call_depth", &self.call_depth)
            .finish_non_exhaustive()
    }
}

/// A leveled logger with swappable configuration.
///
/// Every method takes `&self`; share one logger between threads with an
/// `Arc`. Log calls snapshot the whole configuration under a read lock, then
/// format and write with no lock held, so a slow sink never blocks
/// reconfiguration.
pub struct Logger {
    config: RwLock<Arc<LoggerConfig>>,
}

impl Logger {
    /// Create a logger writing to `output` with the default formatter.
    ///
    /// Passing `None` sends every entry to stdout until an output is set.
    #[must_use]
    pub fn new(output: Option<Arc<dyn Sink>>) -> Self {
        Self::from_config(LoggerConfig {
            output,
            ..LoggerConfig::default()
        })
    }

    #[must_use]
    pub fn from_config(config: LoggerConfig) -> Self {
        Self {
            config: RwLock::new(Arc::new(config)),
        }
    }

    /// Create a builder for configuring a logger
    ///
    /// # Example
    ///
    /// ```
    /// use logx::{Logger, MemorySink};
    /// use std::sync::Arc;
    ///
    /// let sink = Arc::new(MemorySink::new());
    /// let logger = Logger::builder()
    ///     .output(sink.clone())
    ///     .prefix("svc")
    ///     .build();
    ///
    /// logger.info("ready");
    /// assert!(sink.contents().contains("svc"));
    /// ```
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Apply several configuration changes as a single generation.
    ///
    /// `update` runs under the exclusive lock; keep it to plain assignments.
    pub fn reconfigure(&self, update: impl FnOnce(&mut LoggerConfig)) {
        let mut config = self.config.write();
        update(Arc::make_mut(&mut config));
    }

    pub fn set_output(&self, output: Option<Arc<dyn Sink>>) {
        self.reconfigure(|config| config.output = output);
    }

    pub fn set_prefix(&self, prefix: impl Into<String>) {
        let prefix = prefix.into();
        self.reconfigure(|config| config.prefix = prefix);
    }

    pub fn set_formatter(&self, formatter: Arc<dyn Formatter>) {
        self.reconfigure(|config| config.formatter = formatter);
    }

    /// Set the caller depth handed to the resolver; 0 restores
    /// [`DEFAULT_CALL_DEPTH`].
    ///
    /// With the default [`TrackedCallerResolver`] the application call site
    /// is found through `#[track_caller]`, not by walking frames: depths 1
    /// and 2 both report it (the logger's own wrapper frame is never
    /// reported), and anything deeper reports `???:0`. Helpers that wrap the
    /// logger should be marked `#[track_caller]` instead of raising the depth;
    /// the location then points at the helper's caller.
    pub fn set_call_depth(&self, call_depth: usize) {
        self.reconfigure(|config| config.call_depth = call_depth);
    }

    pub fn set_resolver(&self, resolver: Arc<dyn CallSiteResolver>) {
        self.reconfigure(|config| config.resolver = resolver);
    }

    /// Snapshot of the current configuration generation.
    pub fn config(&self) -> Arc<LoggerConfig> {
        Arc::clone(&self.config.read())
    }

    pub fn output(&self) -> Option<Arc<dyn Sink>> {
        self.config.read().output.clone()
    }

    pub fn prefix(&self) -> String {
        self.config.read().prefix.clone()
    }

    pub fn call_depth(&self) -> usize {
        self.config.read().call_depth
    }

    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        let _ = self.write_entry(LogLevel::Debug, &message);
    }

    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        let _ = self.write_entry(LogLevel::Info, &message);
    }

    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) {
        let _ = self.write_entry(LogLevel::Warn, &message);
    }

    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        let _ = self.write_entry(LogLevel::Error, &message);
    }

    /// Log at `level` and report the sink's write error, if any.
    ///
    /// The error is exactly what the sink returned.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl fmt::Display) -> Result<()> {
        self.write_entry(level, &message)
    }

    #[track_caller]
    fn write_entry(&self, level: LogLevel, message: &dyn fmt::Display) -> Result<()> {
        let caller = Location::caller();
        let config = self.config();

        let call_depth = config.effective_call_depth();
        let message = message.to_string();
        let site = config
            .resolver
            .resolve(call_depth, caller)
            .unwrap_or_else(CallSite::unknown);

        let entry = LogEntry {
            timestamp: Utc::now(),
            level,
            prefix: config.prefix.clone(),
            call_depth,
            file: site.file,
            line: site.line,
            message,
        };
        let bytes = config.formatter.format(&entry);

        // Stdout stands in for this write only; the stored output stays unset.
        match config.output.as_deref() {
            Some(sink) => sink.write(&bytes)?,
            None => StdoutSink.write(&bytes)?,
        };
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(None)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &*self.config())
            .finish()
    }
}

/// Builder for configuring a Logger
///
/// # Example
///
/// ```
/// use logx::{DefaultFormatter, Logger, StderrSink, TimestampFormat};
/// use std::sync::Arc;
///
/// let logger = Logger::builder()
///     .output(Arc::new(StderrSink))
///     .formatter(DefaultFormatter::new().with_timestamp_format(TimestampFormat::Rfc3339))
///     .prefix("worker")
///     .build();
/// ```
#[derive(Default)]
pub struct LoggerBuilder {
    config: LoggerConfig,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn output<S: Sink + 'static>(mut self, sink: Arc<S>) -> Self {
        self.config.output = Some(sink as Arc<dyn Sink>);
        self
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.config.formatter = Arc::new(formatter);
        self
    }

    /// Set the caller depth; 0 keeps the default.
    #[must_use]
    pub fn call_depth(mut self, call_depth: usize) -> Self {
        self.config.call_depth = call_depth;
        self
    }

    #[must_use]
    pub fn resolver<R: CallSiteResolver + 'static>(mut self, resolver: R) -> Self {
        self.config.resolver = Arc::new(resolver);
        self
    }

    pub fn build(self) -> Logger {
        Logger::from_config(self.config)
    }
}
