//! Console sinks

use crate::core::{Result, Sink};
use std::io::Write;

/// Process standard output; also where the logger writes when no output is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write(&self, buf: &[u8]) -> Result<usize> {
        // The stdout lock keeps one entry from interleaving with another.
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(buf)?;
        stdout.flush()?;
        Ok(buf.len())
    }

    fn name(&self) -> &str {
        "stdout"
    }
}

/// Process standard error
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl Sink for StderrSink {
    fn write(&self, buf: &[u8]) -> Result<usize> {
        let mut stderr = std::io::stderr().lock();
        stderr.write_all(buf)?;
        stderr.flush()?;
        Ok(buf.len())
    }

    fn name(&self) -> &str {
        "stderr"
    }
}
