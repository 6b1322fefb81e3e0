//! Text utilities for TUI rendering.

use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates from the start, keeping the tail (`…/dir/file.txt`).
///
/// Used for paths where the end is the interesting part.
pub fn truncate_start_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut kept: Vec<char> = Vec::new();
    let mut kept_width = 0;
    for ch in text.chars().rev() {
        let ch_width = ch.width().unwrap_or(0);
        if kept_width + ch_width + 1 > max_width {
            break;
        }
        kept_width += ch_width;
        kept.push(ch);
    }
    let mut truncated = String::from("…");
    truncated.extend(kept.into_iter().rev());
    truncated
}

/// Removes escape bytes so file content cannot drive the terminal.
///
/// Borrowed when there is nothing to strip.
pub fn sanitize_for_display(s: &str) -> Cow<'_, str> {
    if s.contains('\x1b') {
        Cow::Owned(s.replace('\x1b', ""))
    } else {
        Cow::Borrowed(s)
    }
}

/// Decodes raw source bytes for wrapping (lossy UTF-8, escapes stripped).
pub fn decode_source(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    sanitize_for_display(&text).into_owned()
}
