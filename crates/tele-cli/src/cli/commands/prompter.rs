//! Default command: the interactive teleprompter.

use anyhow::Result;
use tele_core::{Config, logging};

pub fn run(config: &Config) -> Result<()> {
    // Flushes buffered log lines on drop.
    let _log_guard = logging::init(config)?;
    tracing::info!(
        start_dir = %config.browser_start_dir().display(),
        extensions = ?config.allowed_extensions,
        "starting teleprompter"
    );

    tele_tui::run_teleprompter(config)
}
