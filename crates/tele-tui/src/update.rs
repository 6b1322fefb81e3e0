//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyEvent, KeyEventKind};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::{prompter, source};
use crate::state::{AppState, Screen};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::Tick { .. } => {
            if !app.is_running() {
                // Stale timer from before a screen change.
                return vec![];
            }
            prompter::handle_tick(&mut app.scroll, app.lines.len())
        }
        UiEvent::ClearError => {
            app.last_error = None;
            vec![]
        }
        UiEvent::SourceLoaded { path, bytes } => source::handle_source_loaded(app, &path, &bytes),
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, &key),
        Event::Paste(text) => {
            source::handle_paste(app, &text);
            vec![]
        }
        Event::Resize(columns, rows) => {
            handle_resize(app, columns, rows);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: &KeyEvent) -> Vec<UiEffect> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    match app.screen {
        Screen::SelectingSource { .. } => source::handle_menu_key(app, key),
        Screen::Acquiring(_) => source::handle_acquiring_key(app, key),
        Screen::Running => prompter::handle_key(&mut app.scroll, app.lines.len(), key),
    }
}

fn handle_resize(app: &mut AppState, columns: u16, rows: u16) {
    app.viewport.resize(columns, rows);
    if let Screen::Acquiring(acquire) = &mut app.screen {
        acquire.resize(app.viewport.width, app.viewport.height);
    }
    tracing::debug!(
        width = app.viewport.width,
        height = app.viewport.height,
        "viewport resized"
    );
}
