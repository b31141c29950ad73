//! Numbered log files with line-count rotation
//!
//! Lines go to `<dir>/log<index>.<ext>`. After a file has received more than
//! `capacity` lines the index moves on and the next line starts a new file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{LoggerError, Result};

use super::sink::LineSink;

/// Default extension for log files
pub const DEFAULT_EXTENSION: &str = "txt";

/// Where the next line goes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RotationState {
    /// Index of the file currently being written
    pub current_file_index: u64,
    /// Lines written to that file so far
    pub current_line_count: u64,
}

/// Path of the numbered log file `index` inside `dir`
pub fn log_file_path(dir: &Path, index: u64, extension: &str) -> PathBuf {
    dir.join(format!("log{}.{}", index, extension))
}

/// File sink that rolls over to a new numbered file by line count
#[derive(Debug)]
pub struct RotatingFileSink {
    dir: PathBuf,
    extension: String,
    capacity: u64,
    state: Mutex<RotationState>,
}

impl RotatingFileSink {
    pub fn new(dir: impl Into<PathBuf>, capacity: u64) -> Self {
        Self::with_extension(dir, capacity, DEFAULT_EXTENSION)
    }

    pub fn with_extension(
        dir: impl Into<PathBuf>,
        capacity: u64,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
            capacity,
            state: Mutex::new(RotationState::default()),
        }
    }

    /// Current rotation counters
    pub fn state(&self) -> RotationState {
        match self.state.lock() {
            Ok(state) => *state,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// File the next line will be appended to
    pub fn current_path(&self) -> PathBuf {
        log_file_path(&self.dir, self.state().current_file_index, &self.extension)
    }

    /// Append one line and advance the rotation counters
    ///
    /// Open, write, count, and rotate all happen under the state lock. On
    /// failure the counters are left alone and the line is lost.
    pub fn append_line(&self, line: &str) -> Result<()> {
        let mut state = match self.state.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        };

        let path = log_file_path(&self.dir, state.current_file_index, &self.extension);
        let to_sink_err = |source| LoggerError::SinkIo {
            sink: "file",
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(to_sink_err)?;
        writeln!(file, "{}", line).map_err(to_sink_err)?;
        file.flush().map_err(to_sink_err)?;
        drop(file);

        state.current_line_count += 1;
        // Strictly greater: a file holds capacity + 1 lines before rolling.
        if state.current_line_count > self.capacity {
            state.current_file_index += 1;
            state.current_line_count = 0;
            tracing::debug!(
                "Rotating to {}",
                log_file_path(&self.dir, state.current_file_index, &self.extension).display()
            );
        }

        Ok(())
    }
}

impl LineSink for RotatingFileSink {
    fn write_line(&self, line: &str) -> Result<()> {
        self.append_line(line)
    }
}
