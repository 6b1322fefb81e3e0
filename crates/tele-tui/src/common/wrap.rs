//! Greedy word wrapping for prompter lines.
//!
//! Text is tokenized on whitespace runs, so explicit line breaks in the
//! source collapse like any other whitespace. Widths are measured in
//! terminal columns.

use std::mem;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width used when the terminal width is unknown (0).
pub const DEFAULT_WIDTH: usize = 80;

/// Columns reserved for the prompter's side margins.
pub const WRAP_MARGIN: usize = 4;

/// Wrap width used when `width - WRAP_MARGIN` leaves no room.
pub const MIN_WRAP_WIDTH: usize = 40;

/// Returns the column budget for a line given the terminal width.
pub fn effective_width(width: usize) -> usize {
    let width = if width == 0 { DEFAULT_WIDTH } else { width };
    match width.checked_sub(WRAP_MARGIN) {
        Some(w) if w > 0 => w,
        _ => MIN_WRAP_WIDTH,
    }
}

/// Reflows `text` into lines no wider than `effective_width(width)`.
///
/// Always returns at least one line; whitespace-only input yields `[""]`.
/// Tokens wider than the budget are hard-split into full-width chunks and
/// the leftover chunk keeps accumulating words.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let limit = effective_width(width);
    let mut words = text.split_whitespace();

    let Some(first) = words.next() else {
        return vec![String::new()];
    };

    let mut lines = Vec::new();
    let mut current = split_oversized(first, limit, &mut lines);
    let mut current_width = current.width();

    for word in words {
        let word_width = word.width();

        if word_width > limit {
            if !current.is_empty() {
                lines.push(mem::take(&mut current));
            }
            current = split_oversized(word, limit, &mut lines);
            current_width = current.width();
            continue;
        }

        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= limit {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(mem::replace(&mut current, word.to_string()));
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Pushes full-width chunks of `word` onto `lines` and returns the remainder.
///
/// Every chunk takes at least one character, so a glyph wider than `limit`
/// still makes progress.
fn split_oversized(word: &str, limit: usize, lines: &mut Vec<String>) -> String {
    let mut rest = word;

    while rest.width() > limit {
        let mut taken = 0;
        let mut split_at = 0;
        for (idx, ch) in rest.char_indices() {
            let ch_width = ch.width().unwrap_or(0);
            if split_at > 0 && taken + ch_width > limit {
                break;
            }
            taken += ch_width;
            split_at = idx + ch.len_utf8();
        }
        lines.push(rest[..split_at].to_string());
        rest = &rest[split_at..];
    }

    rest.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_width_defaults_and_floor() {
        assert_eq!(effective_width(0), 76);
        assert_eq!(effective_width(14), 10);
        assert_eq!(effective_width(5), 1);
        assert_eq!(effective_width(4), MIN_WRAP_WIDTH);
        assert_eq!(effective_width(2), MIN_WRAP_WIDTH);
    }

    #[test]
    fn test_greedy_fill_follows_column_budget() {
        // Budget is 10 columns; "of wrapping" would be 11.
        let lines = wrap("hello world this is a test of wrapping", 14);
        assert_eq!(
            lines,
            vec!["hello", "world this", "is a test", "of", "wrapping"]
        );
    }

    #[test]
    fn test_exact_fit_stays_on_one_line() {
        let lines = wrap("abcd efghi", 14);
        assert_eq!(lines, vec!["abcd efghi"]);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert_eq!(wrap("", 80), vec![String::new()]);
        assert_eq!(wrap(" \n\t  ", 80), vec![String::new()]);
    }

    #[test]
    fn test_newlines_collapse_like_spaces() {
        let lines = wrap("first line\n\nsecond\tline", 80);
        assert_eq!(lines, vec!["first line second line"]);
    }

    #[test]
    fn test_oversized_first_token_is_hard_split() {
        let lines = wrap("abcdefghijklmnopqrstuvw xy", 14);
        assert_eq!(lines, vec!["abcdefghij", "klmnopqrst", "uvw xy"]);
    }

    #[test]
    fn test_oversized_token_mid_stream_flushes_current_line() {
        let lines = wrap("hi abcdefghijklm yo", 14);
        assert_eq!(lines, vec!["hi", "abcdefghij", "klm yo"]);
    }

    #[test]
    fn test_oversized_token_with_exact_multiple() {
        let lines = wrap("abcdefghijklmnopqrst z", 14);
        assert_eq!(lines, vec!["abcdefghij", "klmnopqrst", "z"]);
    }

    #[test]
    fn test_lines_respect_budget() {
        let text = "The quick brown fox jumps over the lazy dog and keeps running \
                    through the forest until supercalifragilisticexpialidocious night";
        for width in [10, 14, 30, 60] {
            let limit = effective_width(width);
            for line in wrap(text, width) {
                assert!(line.width() <= limit, "{line:?} wider than {limit}");
            }
        }
    }

    #[test]
    fn test_floor_width_used_for_tiny_terminals() {
        let text = "word ".repeat(20);
        let lines = wrap(&text, 3);
        assert!(lines.iter().all(|l| l.width() <= MIN_WRAP_WIDTH));
        assert_eq!(lines[0].width(), 39);
    }

    #[test]
    fn test_rewrap_is_stable() {
        let text = "one two three four five six seven eight nine ten eleven \
                    twelve thirteen fourteen extraordinarilylongwordthatsplits end";
        let first = wrap(text, 20);
        let second = wrap(&first.join(" "), 20);
        assert_eq!(first, second);
    }

    #[test]
    fn test_wide_glyphs_measured_in_columns() {
        // Each CJK glyph is two columns; budget 6 fits three.
        let lines = wrap("中文中文中文", 10);
        assert_eq!(lines, vec!["中文中", "文中文"]);
    }

    #[test]
    fn test_glyph_wider_than_budget_still_progresses() {
        // Budget 1 column, each glyph is 2 columns.
        let lines = wrap("中文 a", 5);
        assert_eq!(lines, vec!["中", "文", "a"]);
    }
}
