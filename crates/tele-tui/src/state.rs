//! Application state.
//!
//! `AppState` is owned by the runtime and mutated only by `update`.

use tele_core::Config;

use crate::features::prompter::ScrollState;
use crate::features::source::{AcquireState, SourceKind, SourceSettings};
use crate::widgets::Theme;

/// Viewport height before the first resize arrives.
pub const INITIAL_VIEWPORT_HEIGHT: usize = 20;

/// Rows outside the prompter body (header, two separators, footer).
pub const CHROME_ROWS: usize = 4;

/// Top-level screen.
#[derive(Debug)]
pub enum Screen {
    SelectingSource { cursor: usize },
    Acquiring(AcquireState),
    Running,
}

/// Terminal-derived dimensions; 0 width means not yet known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
}

impl Viewport {
    /// Applies a terminal resize.
    pub fn resize(&mut self, columns: u16, rows: u16) {
        self.width = usize::from(columns);
        self.height = usize::from(rows).saturating_sub(CHROME_ROWS);
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 0,
            height: INITIAL_VIEWPORT_HEIGHT,
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub should_quit: bool,
    pub screen: Screen,
    pub source_kind: SourceKind,
    pub lines: Vec<String>,
    pub scroll: ScrollState,
    pub viewport: Viewport,
    pub last_error: Option<String>,
    pub sources: SourceSettings,
    pub theme: Theme,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self::with_settings(
            SourceSettings {
                start_dir: config.browser_start_dir(),
                allowed_extensions: config.allowed_extensions.clone(),
                show_hidden: config.show_hidden,
            },
            Theme::from_config(&config.theme),
        )
    }

    pub fn with_settings(sources: SourceSettings, theme: Theme) -> Self {
        Self {
            should_quit: false,
            screen: Screen::SelectingSource { cursor: 0 },
            source_kind: SourceKind::default(),
            lines: Vec::new(),
            scroll: ScrollState::default(),
            viewport: Viewport::default(),
            last_error: None,
            sources,
            theme,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.screen, Screen::Running)
    }

    /// Short name of the current screen for logs.
    pub fn screen_name(&self) -> &'static str {
        match self.screen {
            Screen::SelectingSource { .. } => "selecting",
            Screen::Acquiring(_) => "acquiring",
            Screen::Running => "running",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let app = AppState::new(&Config::default());
        assert!(matches!(app.screen, Screen::SelectingSource { cursor: 0 }));
        assert!(app.scroll.auto_scroll);
        assert_eq!(app.scroll.offset, 0);
        assert_eq!(app.viewport.height, 20);
        assert_eq!(app.viewport.width, 0);
        assert!(app.lines.is_empty());
        assert!(app.last_error.is_none());
    }

    #[test]
    fn test_resize_saturates() {
        let mut viewport = Viewport::default();
        viewport.resize(100, 30);
        assert_eq!(viewport, Viewport { width: 100, height: 26 });
        viewport.resize(10, 2);
        assert_eq!(viewport.height, 0);
    }
}
