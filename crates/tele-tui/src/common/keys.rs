//! Key matching helpers shared by the screen handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn plain(key: &KeyEvent) -> bool {
    !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// Ctrl+C.
pub fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// `q` or Ctrl+C.
pub fn is_quit(key: &KeyEvent) -> bool {
    is_ctrl_c(key) || (key.code == KeyCode::Char('q') && plain(key))
}

/// Up arrow or `k`.
pub fn is_up(key: &KeyEvent) -> bool {
    key.code == KeyCode::Up || (key.code == KeyCode::Char('k') && plain(key))
}

/// Down arrow or `j`.
pub fn is_down(key: &KeyEvent) -> bool {
    key.code == KeyCode::Down || (key.code == KeyCode::Char('j') && plain(key))
}

/// Unmodified character key.
pub fn is_char(key: &KeyEvent, ch: char) -> bool {
    key.code == KeyCode::Char(ch) && plain(key)
}
