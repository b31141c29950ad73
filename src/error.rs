//! Error types for rotalog

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong inside the logger
///
/// Only [`LoggerError::ConfigInvalid`] is fatal. The other variants are
/// reported through `tracing` and the logger keeps going.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// The configuration source is missing, unreadable, or malformed
    #[error("configuration unavailable at {}: {reason}", .path.display())]
    ConfigUnavailable { path: PathBuf, reason: String },

    /// The configuration names something that does not exist (e.g. a level)
    #[error("invalid configuration: {field} = {value:?} is not one of DEBUG, INFO, WARNING, ERROR")]
    ConfigInvalid { field: &'static str, value: String },

    /// A sink could not deliver a line
    #[error("{sink} sink write failed: {source}")]
    SinkIo {
        sink: &'static str,
        #[source]
        source: io::Error,
    },

    /// The output directory could not be listed or emptied at startup
    #[error("failed to clean log directory {}: {source}", .path.display())]
    DirectoryCleanup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, LoggerError>;
