//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer never touches the clock, the filesystem or the terminal; it
//! asks for those through an effect.

use std::path::PathBuf;
use std::time::Duration;

/// Cadence of the auto-scroll tick.
pub const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// How long a transient error stays on screen.
pub const ERROR_CLEAR_DELAY: Duration = Duration::from_secs(2);

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Deliver `UiEvent::Tick` after the given delay.
    ScheduleTick { after: Duration },

    /// Deliver `UiEvent::ClearError` after the given delay.
    ScheduleErrorClear { after: Duration },

    /// Read the file and deliver its bytes as `UiEvent::SourceLoaded`.
    /// A failed read ends the run.
    LoadFile { path: PathBuf },
}

impl UiEffect {
    pub fn tick() -> Self {
        Self::ScheduleTick {
            after: TICK_INTERVAL,
        }
    }

    pub fn error_clear() -> Self {
        Self::ScheduleErrorClear {
            after: ERROR_CLEAR_DELAY,
        }
    }
}
