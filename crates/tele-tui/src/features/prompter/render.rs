//! Running screen rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::state::ScrollState;
use super::view::{DepthBand, Row, map_viewport};
use crate::common::render_utils::{render_footer, render_separator};
use crate::state::AppState;
use crate::widgets::{Role, StyleSheet};

const HINTS: &[(&str, &str)] = &[
    ("space", "pause/play"),
    ("↑/↓", "manual scroll"),
    ("r", "reset"),
    ("q", "quit"),
];

/// Left padding of non-center rows.
const ROW_INDENT: &str = "  ";

pub fn render(app: &AppState, frame: &mut Frame, area: Rect) {
    let styles: &dyn StyleSheet = &app.theme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            header_text(&app.scroll, app.lines.len()),
            styles.role(Role::Header),
        ))),
        chunks[0],
    );
    render_separator(frame, chunks[1], styles);

    let rows = map_viewport(app.scroll.offset, usize::from(chunks[2].height), &app.lines);
    frame.render_widget(Paragraph::new(body_lines(&rows, styles)), chunks[2]);

    render_separator(frame, chunks[3], styles);
    render_footer(frame, chunks[4], HINTS, app.last_error.as_deref(), styles);
}

/// `🎬 Teleprompter [PLAYING] | Line 3/10`.
pub fn header_text(scroll: &ScrollState, len: usize) -> String {
    let status = if scroll.auto_scroll { "PLAYING" } else { "PAUSED" };
    let current = if len == 0 { 0 } else { scroll.offset + 1 };
    format!("🎬 Teleprompter [{status}] | Line {current}/{len}")
}

pub fn body_lines<'a>(rows: &[Row<'a>], styles: &dyn StyleSheet) -> Vec<Line<'a>> {
    rows.iter()
        .map(|row| match *row {
            Row::Blank => Line::default(),
            Row::Line {
                text,
                band: DepthBand::Center,
                ..
            } => Line::from(Span::styled(
                format!("  ▶ {text} ◀  "),
                styles.band(DepthBand::Center),
            )),
            Row::Line { text, band, .. } => Line::from(vec![
                Span::raw(ROW_INDENT),
                Span::styled(text, styles.band(band)),
            ]),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::Theme;

    #[test]
    fn test_header_text() {
        let mut scroll = ScrollState::default();
        assert_eq!(
            header_text(&scroll, 10),
            "🎬 Teleprompter [PLAYING] | Line 1/10"
        );
        scroll.offset = 4;
        scroll.toggle();
        assert_eq!(
            header_text(&scroll, 10),
            "🎬 Teleprompter [PAUSED] | Line 5/10"
        );
    }

    #[test]
    fn test_body_marks_center_row() {
        let doc: Vec<String> = ["one", "two", "three"].iter().map(|s| s.to_string()).collect();
        let theme = Theme::default();
        let rows = map_viewport(1, 3, &doc);
        let lines = body_lines(&rows, &theme);

        let text: Vec<String> = lines.iter().map(ToString::to_string).collect();
        assert_eq!(text, vec!["  one", "  ▶ two ◀  ", "  three"]);
        assert_eq!(lines[1].spans[0].style, theme.band(DepthBand::Center));
        assert_eq!(lines[0].spans[1].style, theme.band(DepthBand::Near));
    }
}
