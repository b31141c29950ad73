//! Destinations for rendered lines

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use crate::error::{LoggerError, Result};

/// Anything that accepts one fully rendered line at a time
pub trait LineSink: Send + Sync {
    /// Deliver `line`; the sink adds its own line terminator
    fn write_line(&self, line: &str) -> Result<()>;
}

/// Writes to standard output
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl LineSink for ConsoleSink {
    fn write_line(&self, line: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        writeln!(out, "{}", line)
            .and_then(|_| out.flush())
            .map_err(|source| LoggerError::SinkIo {
                sink: "console",
                source,
            })
    }
}

/// Collects lines in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LineSink for MemorySink {
    fn write_line(&self, line: &str) -> Result<()> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
        Ok(())
    }
}

/// Shared sinks work too, so tests can keep a handle to what they pass in
impl<T: LineSink + ?Sized> LineSink for std::sync::Arc<T> {
    fn write_line(&self, line: &str) -> Result<()> {
        (**self).write_line(line)
    }
}
