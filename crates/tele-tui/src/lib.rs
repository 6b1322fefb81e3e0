//! Full-screen teleprompter TUI.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;
pub mod widgets;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
pub use features::{prompter, source};
pub use runtime::TuiRuntime;
use tele_core::Config;

/// Runs the teleprompter until the user quits.
///
/// Returns an error if stdout is not a terminal or the selected file cannot
/// be read; the terminal is restored before the error is returned.
pub fn run_teleprompter(config: &Config) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!("The teleprompter requires a terminal on stdout.");
    }

    let mut runtime = TuiRuntime::new(config)?;
    let result = runtime.run();
    let lines = runtime.state().lines.len();
    drop(runtime);

    match &result {
        Ok(()) => tracing::info!(lines, "teleprompter exited"),
        Err(err) => tracing::error!(error = %format!("{err:#}"), "teleprompter failed"),
    }
    result
}
