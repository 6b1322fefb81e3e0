//! Source feature: kind menu, text entry and file selection.

mod render;
mod state;
mod update;

pub use render::{render_acquiring, render_menu};
pub use state::{AcquireState, AcquireWidget, SourceKind, SourceSettings};
pub use update::{handle_acquiring_key, handle_menu_key, handle_paste, handle_source_loaded};
