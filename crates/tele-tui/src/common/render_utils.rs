//! Rendering helpers shared by the screens.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::widgets::{Role, StyleSheet};

/// Widest a separator rule gets.
pub const SEPARATOR_WIDTH: u16 = 60;

/// Key hint separator.
pub const HINT_SEPARATOR: &str = " • ";

/// Renders a horizontal rule at the top row of `area`.
pub fn render_separator(frame: &mut Frame, area: Rect, styles: &dyn StyleSheet) {
    if area.height == 0 {
        return;
    }
    let rule = "─".repeat(usize::from(area.width.min(SEPARATOR_WIDTH)));
    let row = Rect::new(area.x, area.y, area.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(rule, styles.role(Role::Separator)))),
        row,
    );
}

/// Renders the bottom line: the transient error when set, otherwise hints.
pub fn render_footer(
    frame: &mut Frame,
    area: Rect,
    hints: &[(&str, &str)],
    error: Option<&str>,
    styles: &dyn StyleSheet,
) {
    if area.height == 0 {
        return;
    }
    let line = match error {
        Some(message) => Line::from(Span::styled(message.to_string(), styles.role(Role::Error))),
        None => Line::from(Span::styled(hint_text(hints), styles.role(Role::Help))),
    };
    frame.render_widget(Paragraph::new(line), Rect::new(area.x, area.y, area.width, 1));
}

/// Formats `key: action` pairs joined with bullets.
pub fn hint_text(hints: &[(&str, &str)]) -> String {
    hints
        .iter()
        .map(|(key, action)| format!("{key}: {action}"))
        .collect::<Vec<_>>()
        .join(HINT_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_text_joins_pairs() {
        assert_eq!(
            hint_text(&[("space", "pause/play"), ("q", "quit")]),
            "space: pause/play • q: quit"
        );
        assert_eq!(hint_text(&[]), "");
    }
}
