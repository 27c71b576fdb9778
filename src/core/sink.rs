//! Sink trait for log output destinations

use super::error::Result;

/// A byte destination for rendered entries.
///
/// The logger holds sinks behind an `Arc` and calls `write` from many threads
/// at once without any lock of its own, so implementations serialize
/// internally when the underlying target needs it. The logger never closes or
/// flushes a sink.
pub trait Sink: Send + Sync {
    /// Write one rendered entry, returning the number of bytes accepted.
    fn write(&self, buf: &[u8]) -> Result<usize>;

    fn name(&self) -> &str;
}
