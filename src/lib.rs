//! rotalog - leveled logging to the console and to line-rotated files
//!
//! One [`logging::Logger`] per process routes messages to a console sink and
//! a numbered file sink, each with its own enabled flag, minimum level, and
//! rendered fields, and keeps error-level messages around for inspection.

pub mod config;
pub mod error;
pub mod logging;

pub use error::{LoggerError, Result};
pub use logging::{init_global, Level, Logger, StartupOptions};
