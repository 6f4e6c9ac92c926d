//! Logging setup.
//!
//! Stdout belongs to the TUI, so the fmt layer writes to a log file next
//! to the save file instead. `RUST_LOG` controls the filter; the default
//! only keeps this crate's entries at info and above.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "unbored.log";

/// Initialize logging into `<dir>/unbored.log`, ANSI off.
pub fn init(dir: &Path) -> io::Result<()> {
    let file = File::create(dir.join(LOG_FILE))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("unbored=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(Arc::new(file)).with_ansi(false))
        .init();

    Ok(())
}
