//! Source acquisition reducer (SelectingSource and Acquiring screens).

use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent};

use super::state::{AcquireState, AcquireWidget, SourceKind};
use crate::common::{decode_source, keys, wrap};
use crate::effects::UiEffect;
use crate::state::{AppState, Screen};

/// Handles a key press on the source menu.
pub fn handle_menu_key(app: &mut AppState, key: &KeyEvent) -> Vec<UiEffect> {
    let Screen::SelectingSource { cursor } = &mut app.screen else {
        return vec![];
    };

    if keys::is_quit(key) {
        return vec![UiEffect::Quit];
    }

    if keys::is_up(key) {
        *cursor = cursor.saturating_sub(1);
    } else if keys::is_down(key) {
        *cursor = (*cursor + 1).min(SourceKind::ALL.len() - 1);
    } else if key.code == KeyCode::Enter {
        let kind = SourceKind::from_index(*cursor);
        app.source_kind = kind;
        app.screen = Screen::Acquiring(AcquireState::build(
            kind,
            &app.sources,
            app.viewport.width,
            app.viewport.height,
        ));
        tracing::info!(kind = kind.label(), "source kind selected");
    }

    vec![]
}

/// Handles a key press while acquiring text or a file.
pub fn handle_acquiring_key(app: &mut AppState, key: &KeyEvent) -> Vec<UiEffect> {
    let Screen::Acquiring(acquire) = &mut app.screen else {
        return vec![];
    };

    if key.code == KeyCode::Esc {
        back_to_menu(app);
        return vec![];
    }

    match &mut acquire.widget {
        AcquireWidget::Text(entry) => {
            // Plain `q` is text here.
            if keys::is_ctrl_c(key) {
                return vec![UiEffect::Quit];
            }
            if key.code == KeyCode::Enter {
                let text = entry.value();
                return start_running(app, &text);
            }
            entry.update(*key);
            vec![]
        }
        AcquireWidget::File(browser) => {
            if keys::is_quit(key) {
                return vec![UiEffect::Quit];
            }
            let outcome = browser.update(*key);
            if let Some(path) = outcome.did_select_file() {
                tracing::info!(path = %path.display(), "file selected");
                return vec![UiEffect::LoadFile {
                    path: path.to_path_buf(),
                }];
            }
            if let Some(path) = outcome.did_select_disabled_file() {
                return reject_selection(app, path);
            }
            vec![]
        }
        AcquireWidget::Unsupported => {
            if keys::is_quit(key) {
                return vec![UiEffect::Quit];
            }
            vec![]
        }
    }
}

/// Inserts pasted text into the text entry; ignored elsewhere.
pub fn handle_paste(app: &mut AppState, text: &str) {
    if let Screen::Acquiring(AcquireState {
        widget: AcquireWidget::Text(entry),
        ..
    }) = &mut app.screen
    {
        entry.insert_str(text);
    }
}

/// Accepts file contents requested by `UiEffect::LoadFile`.
pub fn handle_source_loaded(app: &mut AppState, path: &Path, bytes: &[u8]) -> Vec<UiEffect> {
    let accepting = matches!(
        &app.screen,
        Screen::Acquiring(AcquireState {
            kind: SourceKind::File,
            ..
        })
    );
    if !accepting {
        tracing::warn!(
            path = %path.display(),
            screen = app.screen_name(),
            "ignoring file contents outside file selection"
        );
        return vec![];
    }

    tracing::info!(path = %path.display(), bytes = bytes.len(), "file loaded");
    start_running(app, &decode_source(bytes))
}

fn start_running(app: &mut AppState, text: &str) -> Vec<UiEffect> {
    let wrapped = wrap(text, app.viewport.width);
    app.lines.extend(wrapped);
    app.scroll.clamp(app.lines.len());
    app.screen = Screen::Running;
    tracing::info!(lines = app.lines.len(), width = app.viewport.width, "prompter started");
    vec![UiEffect::tick()]
}

fn reject_selection(app: &mut AppState, path: &Path) -> Vec<UiEffect> {
    let message = format!("{} is not valid.", path.display());
    tracing::debug!(%message, "rejected selection");
    app.last_error = Some(message);
    vec![UiEffect::error_clear()]
}

fn back_to_menu(app: &mut AppState) {
    tracing::debug!("back to source menu");
    app.screen = Screen::SelectingSource {
        cursor: app.source_kind.index(),
    };
}
