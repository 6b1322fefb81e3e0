//! Source selection and acquisition state.

use std::fmt;
use std::path::PathBuf;

use crate::widgets::{
    BrowserOptions, DirBrowser, FileBrowser, LineInput, LineInputOptions, TextEntry,
};

pub const TEXT_PLACEHOLDER: &str = "Enter your text...";

/// Entry width when the terminal width is unknown or too small.
pub const DEFAULT_ENTRY_WIDTH: usize = 50;

/// Browser rows when the viewport is unknown or too small.
pub const DEFAULT_BROWSER_HEIGHT: usize = 10;

/// Where the prompter text comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    #[default]
    Text,
    File,
    Url,
}

impl SourceKind {
    pub const ALL: [Self; 3] = [Self::Text, Self::File, Self::Url];

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    pub fn index(self) -> usize {
        match self {
            Self::Text => 0,
            Self::File => 1,
            Self::Url => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::File => "File",
            Self::Url => "URL",
        }
    }

    pub fn is_supported(self) -> bool {
        !matches!(self, Self::Url)
    }
}

/// File browser settings taken from the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSettings {
    pub start_dir: PathBuf,
    pub allowed_extensions: Vec<String>,
    pub show_hidden: bool,
}

/// The widget backing the Acquiring screen.
pub enum AcquireWidget {
    Text(Box<dyn TextEntry>),
    File(Box<dyn FileBrowser>),
    /// Kinds with no acquisition support yet.
    Unsupported,
}

/// State of the Acquiring screen; dropped when leaving it.
pub struct AcquireState {
    pub kind: SourceKind,
    pub widget: AcquireWidget,
}

impl fmt::Debug for AcquireState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widget = match self.widget {
            AcquireWidget::Text(_) => "text",
            AcquireWidget::File(_) => "file",
            AcquireWidget::Unsupported => "unsupported",
        };
        f.debug_struct("AcquireState")
            .field("kind", &self.kind)
            .field("widget", &widget)
            .finish()
    }
}

impl AcquireState {
    pub fn with_text_entry(entry: Box<dyn TextEntry>) -> Self {
        Self {
            kind: SourceKind::Text,
            widget: AcquireWidget::Text(entry),
        }
    }

    pub fn with_browser(browser: Box<dyn FileBrowser>) -> Self {
        Self {
            kind: SourceKind::File,
            widget: AcquireWidget::File(browser),
        }
    }

    pub fn unsupported(kind: SourceKind) -> Self {
        Self {
            kind,
            widget: AcquireWidget::Unsupported,
        }
    }

    /// Builds the production widget for `kind`.
    pub fn build(kind: SourceKind, settings: &SourceSettings, width: usize, height: usize) -> Self {
        match kind {
            SourceKind::Text => Self::with_text_entry(Box::new(LineInput::new(LineInputOptions {
                placeholder: TEXT_PLACEHOLDER.to_string(),
                char_limit: 0,
                width: entry_width(width),
                focused: true,
            }))),
            SourceKind::File => Self::with_browser(Box::new(DirBrowser::open(BrowserOptions {
                start_dir: settings.start_dir.clone(),
                allowed_extensions: settings.allowed_extensions.clone(),
                show_hidden: settings.show_hidden,
                height: browser_height(height),
                dir_allowed: true,
                file_allowed: true,
            }))),
            SourceKind::Url => Self::unsupported(kind),
        }
    }

    /// Propagates a terminal resize to the widget.
    pub fn resize(&mut self, width: usize, height: usize) {
        match &mut self.widget {
            AcquireWidget::Text(entry) => entry.set_width(entry_width(width)),
            AcquireWidget::File(browser) => browser.set_height(browser_height(height)),
            AcquireWidget::Unsupported => {}
        }
    }
}

/// Terminal width minus a margin, or the default when that leaves nothing.
pub fn entry_width(width: usize) -> usize {
    width
        .checked_sub(4)
        .filter(|w| *w > 0)
        .unwrap_or(DEFAULT_ENTRY_WIDTH)
}

/// Viewport height minus room for the browser chrome, or the default.
pub fn browser_height(viewport: usize) -> usize {
    viewport
        .checked_sub(6)
        .filter(|h| *h > 0)
        .unwrap_or(DEFAULT_BROWSER_HEIGHT)
}
