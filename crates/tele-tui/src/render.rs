//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame`, and never
//! mutate state or return effects.

use ratatui::Frame;

use crate::features::{prompter, source};
use crate::state::{AppState, Screen};

/// Renders the current screen to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    match &app.screen {
        Screen::SelectingSource { cursor } => source::render_menu(app, *cursor, frame, area),
        Screen::Acquiring(acquire) => source::render_acquiring(app, acquire, frame, area),
        Screen::Running => prompter::render(app, frame, area),
    }
}
