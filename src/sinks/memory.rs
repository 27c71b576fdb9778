//! In-memory sink

use crate::core::{Result, Sink};
use parking_lot::Mutex;

/// Collects rendered entries in a buffer; handy for tests and for capturing
/// output before handing it elsewhere.
#[derive(Debug, Default)]
pub struct MemorySink {
    buffer: Mutex<Vec<u8>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw bytes written so far
    pub fn bytes(&self) -> Vec<u8> {
        self.buffer.lock().clone()
    }

    /// Buffer contents as text, with invalid UTF-8 replaced
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }
}

impl Sink for MemorySink {
    fn write(&self, buf: &[u8]) -> Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
