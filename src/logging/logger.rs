//! The logging facade
//!
//! A [`Logger`] owns the merged configuration, one console sink, one file
//! sink, the message id generator, and the error registry. Build one with
//! [`Logger::start`] (or [`Logger::with_sinks`] in tests), or use
//! [`init_global`] for the conventional one-per-process instance.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock, PoisonError};

use crate::config::{self, LoggerConfig, SinkSettings};
use crate::error::Result;

use super::file_writer::{RotatingFileSink, DEFAULT_EXTENSION};
use super::level::Level;
use super::message::{Message, MessageIds};
use super::registry::ErrorRegistry;
use super::retention::clean_log_dir;
use super::sink::{ConsoleSink, LineSink};

/// Where the logger keeps its files and finds its configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupOptions {
    /// Output directory for numbered log files; emptied at startup
    pub logs_dir: PathBuf,
    /// Configuration source; `None` means built-in defaults
    pub config_path: Option<PathBuf>,
    /// Extension of the numbered log files
    pub file_extension: String,
}

impl StartupOptions {
    pub fn new(logs_dir: impl Into<PathBuf>) -> Self {
        Self {
            logs_dir: logs_dir.into(),
            config_path: None,
            file_extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    pub fn with_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.file_extension = extension.into();
        self
    }
}

impl Default for StartupOptions {
    fn default() -> Self {
        Self::new(config::logs_dir()).with_config(config::config_file_path())
    }
}

/// Leveled logger routing to a console sink and a file sink
pub struct Logger {
    config: LoggerConfig,
    console: Box<dyn LineSink>,
    file: Box<dyn LineSink>,
    ids: MessageIds,
    errors: ErrorRegistry,
}

impl Logger {
    /// Clean the output directory, merge configuration, and open sinks
    ///
    /// Cleanup problems and an unreadable configuration source are logged
    /// and tolerated. An invalid configuration value is returned as an error.
    pub fn start(options: StartupOptions) -> Result<Self> {
        match clean_log_dir(&options.logs_dir) {
            Ok(0) => {}
            Ok(count) => tracing::info!(
                "Removed {} stale log files from {}",
                count,
                options.logs_dir.display()
            ),
            Err(e) => tracing::warn!("{}", e),
        }

        if let Err(e) = fs::create_dir_all(&options.logs_dir) {
            tracing::warn!(
                "Failed to create log directory {}: {}",
                options.logs_dir.display(),
                e
            );
        }

        let config = config::resolve(options.config_path.as_deref())?;
        tracing::debug!("Logger configuration: {:?}", config);

        let file = RotatingFileSink::with_extension(
            options.logs_dir,
            config.file_capacity,
            options.file_extension,
        );

        Ok(Self::with_sinks(config, ConsoleSink, file))
    }

    /// Build a logger over arbitrary sinks
    pub fn with_sinks(
        config: LoggerConfig,
        console: impl LineSink + 'static,
        file: impl LineSink + 'static,
    ) -> Self {
        Self {
            config,
            console: Box::new(console),
            file: Box::new(file),
            ids: MessageIds::new(),
            errors: ErrorRegistry::new(),
        }
    }

    /// The configuration this logger was started with
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Log `text` at `level` and return the new message's id
    ///
    /// Sink failures are reported through `tracing` and otherwise ignored.
    /// Errors are retained whether or not any sink accepted them.
    pub fn log(&self, level: Level, text: impl Into<String>, params: &[&str]) -> u64 {
        let params = params.iter().map(|p| p.to_string()).collect();
        let message = Message::new(self.ids.next_id(), level, text, params);
        let id = message.id();

        dispatch("console", &self.config.console, &*self.console, &message);
        dispatch("file", &self.config.file, &*self.file, &message);

        if level == Level::Error {
            self.errors.push(message);
        }

        id
    }

    pub fn log_debug(&self, text: impl Into<String>) -> u64 {
        self.log(Level::Debug, text, &[])
    }

    pub fn log_info(&self, text: impl Into<String>) -> u64 {
        self.log(Level::Info, text, &[])
    }

    pub fn log_warning(&self, text: impl Into<String>) -> u64 {
        self.log(Level::Warning, text, &[])
    }

    pub fn log_error(&self, text: impl Into<String>) -> u64 {
        self.log(Level::Error, text, &[])
    }

    /// Retained errors in retention order
    pub fn errors(&self) -> Vec<Message> {
        self.errors.snapshot()
    }

    /// Retained errors rendered as `timestamp LEVEL id text`
    pub fn error_report(&self) -> Vec<String> {
        self.errors().iter().map(Message::report_line).collect()
    }

    /// Write the error report, one line per retained error
    pub fn write_errors<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.error_report() {
            writeln!(out, "{}", line)?;
        }
        out.flush()
    }

    /// Print the error report to standard output
    pub fn print_errors(&self) -> io::Result<()> {
        self.write_errors(&mut io::stdout().lock())
    }

    /// Forget every retained error with this id
    pub fn clear(&self, id: u64) {
        let removed = self.errors.remove(id);
        tracing::debug!("Cleared {} retained errors with id {}", removed, id);
    }
}

fn dispatch(name: &'static str, settings: &SinkSettings, sink: &dyn LineSink, message: &Message) {
    if !settings.accepts(message.level()) {
        return;
    }

    let line = settings.format.render(message);
    if line.trim().is_empty() {
        return;
    }

    if let Err(e) = sink.write_line(&line) {
        tracing::warn!("Dropped message {} for {} sink: {}", message.id(), name, e);
    }
}

static GLOBAL: OnceLock<Logger> = OnceLock::new();
static INIT_LOCK: Mutex<()> = Mutex::new(());

/// Start the process-wide logger, or return it if already started
///
/// Startup runs at most once even when called from many threads at the same
/// time. Options passed after the first successful call are ignored. A
/// failed startup leaves the global unset so a later call may retry.
pub fn init_global(options: StartupOptions) -> Result<&'static Logger> {
    if let Some(logger) = GLOBAL.get() {
        return Ok(logger);
    }

    let _guard = INIT_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(logger) = GLOBAL.get() {
        return Ok(logger);
    }

    let logger = Logger::start(options)?;
    Ok(GLOBAL.get_or_init(|| logger))
}

/// The process-wide logger, if [`init_global`] has succeeded
pub fn global() -> Option<&'static Logger> {
    GLOBAL.get()
}
