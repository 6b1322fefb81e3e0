//! Single-line text entry for typed prompter scripts.
//!
//! `TextEntry` is the seam the source screen talks to; `LineInput` is the
//! implementation used at runtime.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use unicode_width::UnicodeWidthChar;

/// Capability consumed by the source controller for free-text input.
pub trait TextEntry {
    /// Applies a key press to the buffer.
    fn update(&mut self, key: KeyEvent);

    /// Inserts pasted text at the cursor.
    fn insert_str(&mut self, text: &str);

    /// Current contents.
    fn value(&self) -> String;

    /// Cursor position in characters.
    fn cursor(&self) -> usize;

    fn options(&self) -> &LineInputOptions;

    fn set_width(&mut self, width: usize);

    /// The part of the value that fits the display width around the
    /// cursor, plus the cursor column inside it.
    fn visible_window(&self) -> (String, usize);
}

/// Widget configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineInputOptions {
    pub placeholder: String,
    /// Maximum number of characters; 0 means unbounded.
    pub char_limit: usize,
    /// Display width in columns.
    pub width: usize,
    pub focused: bool,
}

impl Default for LineInputOptions {
    fn default() -> Self {
        Self {
            placeholder: String::new(),
            char_limit: 0,
            width: 50,
            focused: false,
        }
    }
}

/// Editable single line with a character cursor.
#[derive(Debug, Clone, Default)]
pub struct LineInput {
    text: String,
    cursor: usize,
    options: LineInputOptions,
}

impl LineInput {
    pub fn new(options: LineInputOptions) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            options,
        }
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn remaining_capacity(&self) -> usize {
        if self.options.char_limit == 0 {
            usize::MAX
        } else {
            self.options.char_limit.saturating_sub(self.char_len())
        }
    }

    fn delete_prev_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = char_to_byte_index(&self.text, self.cursor - 1);
        let end = char_to_byte_index(&self.text, self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
    }

    fn delete_next_char(&mut self) {
        if self.cursor >= self.char_len() {
            return;
        }
        let start = char_to_byte_index(&self.text, self.cursor);
        let end = char_to_byte_index(&self.text, self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    fn delete_to_start(&mut self) {
        let end = char_to_byte_index(&self.text, self.cursor);
        self.text.replace_range(..end, "");
        self.cursor = 0;
    }

    fn delete_to_end(&mut self) {
        let start = char_to_byte_index(&self.text, self.cursor);
        self.text.truncate(start);
    }

    fn delete_word_left(&mut self) {
        let chars: Vec<char> = self.text.chars().collect();
        let target = scan_word_left(&chars, self.cursor);
        let start = char_to_byte_index(&self.text, target);
        let end = char_to_byte_index(&self.text, self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor = target;
    }

    fn move_word_left(&mut self) {
        let chars: Vec<char> = self.text.chars().collect();
        self.cursor = scan_word_left(&chars, self.cursor);
    }

    fn move_word_right(&mut self) {
        let chars: Vec<char> = self.text.chars().collect();
        let mut idx = self.cursor;
        while idx < chars.len() && chars[idx].is_whitespace() {
            idx += 1;
        }
        while idx < chars.len() && !chars[idx].is_whitespace() {
            idx += 1;
        }
        self.cursor = idx;
    }
}

impl TextEntry for LineInput {
    fn update(&mut self, key: KeyEvent) {
        if matches!(key.kind, KeyEventKind::Release) || !self.options.focused {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('a') if ctrl => self.cursor = 0,
            KeyCode::Char('e') if ctrl => self.cursor = self.char_len(),
            KeyCode::Char('u') if ctrl => self.delete_to_start(),
            KeyCode::Char('k') if ctrl => self.delete_to_end(),
            KeyCode::Char('w') if ctrl => self.delete_word_left(),
            KeyCode::Char('b') if alt => self.move_word_left(),
            KeyCode::Char('f') if alt => self.move_word_right(),
            KeyCode::Char(ch) if !ctrl && !alt => {
                let mut buf = [0u8; 4];
                self.insert_str(ch.encode_utf8(&mut buf));
            }
            KeyCode::Backspace if alt || ctrl => self.delete_word_left(),
            KeyCode::Backspace => self.delete_prev_char(),
            KeyCode::Delete => self.delete_next_char(),
            KeyCode::Left if alt || ctrl => self.move_word_left(),
            KeyCode::Right if alt || ctrl => self.move_word_right(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.char_len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.char_len(),
            _ => {}
        }
    }

    fn insert_str(&mut self, text: &str) {
        // Single line: line breaks and tabs become spaces.
        let cleaned: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' || c == '\t' { ' ' } else { c })
            .filter(|c| !c.is_control())
            .take(self.remaining_capacity())
            .collect();
        if cleaned.is_empty() {
            return;
        }

        let byte_idx = char_to_byte_index(&self.text, self.cursor);
        self.text.insert_str(byte_idx, &cleaned);
        self.cursor += cleaned.chars().count();
    }

    fn value(&self) -> String {
        self.text.clone()
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn options(&self) -> &LineInputOptions {
        &self.options
    }

    fn set_width(&mut self, width: usize) {
        self.options.width = width;
    }

    fn visible_window(&self) -> (String, usize) {
        let width = self.options.width.max(1);
        let chars: Vec<char> = self.text.chars().collect();

        // Walk left from the cursor until the window is full.
        let mut start = self.cursor;
        let mut used = 1; // cursor cell
        while start > 0 {
            let w = chars[start - 1].width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            start -= 1;
        }

        let mut visible = String::new();
        let mut shown = 0;
        let mut cursor_col = 0;
        for (idx, ch) in chars.iter().enumerate().skip(start) {
            let w = ch.width().unwrap_or(0);
            if shown + w > width {
                break;
            }
            if idx == self.cursor {
                cursor_col = shown;
            }
            shown += w;
            visible.push(*ch);
        }
        if self.cursor >= chars.len() {
            cursor_col = shown;
        }

        (visible, cursor_col)
    }
}

fn scan_word_left(chars: &[char], mut idx: usize) -> usize {
    idx = idx.min(chars.len());
    while idx > 0 && chars[idx - 1].is_whitespace() {
        idx -= 1;
    }
    while idx > 0 && !chars[idx - 1].is_whitespace() {
        idx -= 1;
    }
    idx
}

fn char_to_byte_index(line: &str, col: usize) -> usize {
    if col == 0 {
        return 0;
    }
    line.char_indices()
        .nth(col)
        .map_or(line.len(), |(i, _)| i)
}
