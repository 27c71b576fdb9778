//! Adapter turning any `std::io::Write` into a sink

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::io::Write;

/// Wraps a writer behind a mutex so concurrent entries never interleave.
///
/// The writer is flushed after every entry.
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write(&self, buf: &[u8]) -> Result<usize> {
        let mut writer = self.writer.lock();
        writer.write_all(buf)?;
        writer.flush()?;
        Ok(buf.len())
    }

    fn name(&self) -> &str {
        "writer"
    }
}
