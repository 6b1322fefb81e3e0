//! Widget capabilities and their production implementations.

pub mod file_browser;
pub mod line_input;
pub mod theme;

pub use file_browser::{BrowserEntry, BrowserOptions, BrowserOutcome, DirBrowser, FileBrowser};
pub use line_input::{LineInput, LineInputOptions, TextEntry};
pub use theme::{Role, StyleSheet, Theme};
