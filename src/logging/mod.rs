//! Logging core for rotalog
//!
//! Levels, formats, and messages, the sinks that receive rendered lines
//! (console, rotating files, memory), the error registry, and the
//! [`Logger`] facade that ties them together.

mod file_writer;
mod format;
mod level;
mod logger;
mod message;
mod registry;
mod retention;
mod sink;

pub use file_writer::{log_file_path, RotatingFileSink, RotationState, DEFAULT_EXTENSION};
pub use format::Format;
pub use level::{is_at_least, Level, ParseLevelError};
pub use logger::{global, init_global, Logger, StartupOptions};
pub use message::{Message, MessageIds, TIMESTAMP_FORMAT};
pub use registry::ErrorRegistry;
pub use retention::clean_log_dir;
pub use sink::{ConsoleSink, LineSink, MemorySink};
