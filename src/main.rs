use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use rotalog::logging::{self, StartupOptions};

fn main() -> Result<()> {
    // The logger reports its own problems through tracing, on stderr
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "rotalog=warn".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let logger = logging::init_global(StartupOptions::default())
        .context("Failed to start logger")?;

    let mut i = 0;
    while i < 100 {
        logger.log_debug(format!("MessageDebug{}", i));
        i += 1;
        logger.log_info(format!("MessageInfo{}", i));
        i += 1;
    }

    logger.log_warning("Demo finished emitting sample messages");
    let first = logger.log_error("First sample error");
    logger.log_error("Second sample error");
    logger.clear(first);

    logger
        .print_errors()
        .context("Failed to print retained errors")?;

    Ok(())
}
