//! UI event types.
//!
//! Everything the reducer reacts to arrives as a `UiEvent`: terminal input
//! from crossterm plus the deferred events the runtime's timer queue fires.

use std::path::PathBuf;
use std::time::Instant;

use crossterm::event::Event;

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Raw terminal event (key, paste, resize).
    Terminal(Event),

    /// Auto-scroll tick; `at` is when the timer fired.
    Tick { at: Instant },

    /// Expiry of the transient error message.
    ClearError,

    /// Contents of a file requested with `UiEffect::LoadFile`.
    SourceLoaded { path: PathBuf, bytes: Vec<u8> },
}
