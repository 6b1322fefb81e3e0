//! Source menu and acquisition screens.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use super::state::{AcquireState, AcquireWidget, SourceKind};
use crate::common::render_utils::{render_footer, render_separator};
use crate::common::truncate_start_with_ellipsis;
use crate::state::AppState;
use crate::widgets::{BrowserEntry, FileBrowser, Role, StyleSheet, TextEntry};

const MENU_HINTS: &[(&str, &str)] = &[("↑/↓", "move"), ("enter", "select"), ("q", "quit")];
const TEXT_HINTS: &[(&str, &str)] = &[("enter", "start"), ("esc", "back"), ("ctrl+c", "quit")];
const FILE_HINTS: &[(&str, &str)] = &[
    ("↑/↓", "move"),
    ("enter", "open/select"),
    ("←", "parent"),
    ("esc", "back"),
    ("q", "quit"),
];
const UNSUPPORTED_HINTS: &[(&str, &str)] = &[("esc", "back"), ("q", "quit")];

/// Standard screen frame: title, rule, body, rule, footer.
struct Sections {
    title: Rect,
    body: Rect,
    rule: Rect,
    footer: Rect,
}

fn sections(frame: &mut Frame, area: Rect, title: &str, styles: &dyn StyleSheet) -> Sections {
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
            title.to_string(),
            styles.role(Role::Header),
        ))),
        chunks[0],
    );
    render_separator(frame, chunks[1], styles);

    Sections {
        title: chunks[0],
        body: chunks[2],
        rule: chunks[3],
        footer: chunks[4],
    }
}

pub fn render_menu(app: &AppState, cursor: usize, frame: &mut Frame, area: Rect) {
    let styles: &dyn StyleSheet = &app.theme;
    let layout = sections(frame, area, "🎬 Teleprompter", styles);
    frame.render_widget(Paragraph::new(menu_lines(cursor, styles)), layout.body);
    render_separator(frame, layout.rule, styles);
    render_footer(
        frame,
        layout.footer,
        MENU_HINTS,
        app.last_error.as_deref(),
        styles,
    );
}

pub fn render_acquiring(app: &AppState, acquire: &AcquireState, frame: &mut Frame, area: Rect) {
    let styles: &dyn StyleSheet = &app.theme;
    let error = app.last_error.as_deref();

    match &acquire.widget {
        AcquireWidget::Text(entry) => {
            let layout = sections(frame, area, "Enter your script", styles);
            let body = Rect::new(layout.body.x, layout.body.y, layout.body.width, 1);
            frame.render_widget(Paragraph::new(entry_line(entry.as_ref(), styles)), body);
            render_separator(frame, layout.rule, styles);
            render_footer(frame, layout.footer, TEXT_HINTS, error, styles);
        }
        AcquireWidget::File(browser) => {
            let layout = sections(frame, area, "Select a file", styles);
            let dir = browser.current_dir().display().to_string();
            let dir = truncate_start_with_ellipsis(&dir, usize::from(layout.title.width) / 2);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(dir, styles.role(Role::Help))))
                    .alignment(Alignment::Right),
                layout.title,
            );
            render_browser(browser.as_ref(), frame, layout.body, styles);
            render_separator(frame, layout.rule, styles);
            render_footer(frame, layout.footer, FILE_HINTS, error, styles);
        }
        AcquireWidget::Unsupported => {
            let layout = sections(frame, area, acquire.kind.label(), styles);
            let message = format!(
                "{} sources are not supported yet. Press esc to choose another source.",
                acquire.kind.label()
            );
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(message, styles.role(Role::Disabled)))),
                layout.body,
            );
            render_separator(frame, layout.rule, styles);
            render_footer(frame, layout.footer, UNSUPPORTED_HINTS, error, styles);
        }
    }
}

/// Rows of the source-kind menu.
pub fn menu_lines(cursor: usize, styles: &dyn StyleSheet) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("Choose a source:"), Line::default()];
    for kind in SourceKind::ALL {
        let selected = kind.index() == cursor;
        let marker = if selected { "▶ " } else { "  " };
        let mut label = kind.label().to_string();
        if !kind.is_supported() {
            label.push_str(" (unsupported)");
        }
        let style = match (selected, kind.is_supported()) {
            (true, _) => styles.role(Role::Selected),
            (false, true) => styles.role(Role::Item),
            (false, false) => styles.role(Role::Disabled),
        };
        lines.push(Line::from(Span::styled(format!("{marker}{label}"), style)));
    }
    lines
}

/// The entry field: placeholder when empty, otherwise the visible window
/// with a reversed cursor cell.
pub fn entry_line(entry: &dyn TextEntry, styles: &dyn StyleSheet) -> Line<'static> {
    let options = entry.options();
    let value = entry.value();
    let cursor_style = styles.role(Role::Cursor);

    if value.is_empty() {
        return Line::from(vec![
            Span::raw("> "),
            Span::styled(" ", cursor_style),
            Span::styled(options.placeholder.clone(), styles.role(Role::Placeholder)),
        ]);
    }

    let (visible, col) = entry.visible_window();

    let before: String = visible.chars().take(col).collect();
    let mut rest = visible.chars().skip(col);
    let at = rest.next().map_or_else(|| " ".to_string(), |c| c.to_string());
    let after: String = rest.collect();

    Line::from(vec![
        Span::raw("> "),
        Span::raw(before),
        Span::styled(at, cursor_style),
        Span::raw(after),
    ])
}

fn render_browser(browser: &dyn FileBrowser, frame: &mut Frame, area: Rect, styles: &dyn StyleSheet) {
    if let Some(status) = browser.status() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                status.to_string(),
                styles.role(Role::Error),
            ))),
            area,
        );
        return;
    }
    if browser.entries().is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Empty directory",
                styles.role(Role::Help),
            ))),
            area,
        );
        return;
    }

    let height = browser.height().min(usize::from(area.height));
    let items: Vec<ListItem> = browser
        .entries()
        .iter()
        .skip(browser.offset())
        .take(height)
        .map(|entry| ListItem::new(entry_label(entry, styles)))
        .collect();

    let list = List::new(items)
        .highlight_style(styles.role(Role::Selected))
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    list_state.select(Some(browser.selected().saturating_sub(browser.offset())));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// One browser row: directories get a trailing slash, filtered files are dimmed.
pub fn entry_label(entry: &BrowserEntry, styles: &dyn StyleSheet) -> Line<'static> {
    if entry.is_dir {
        Line::from(Span::styled(
            format!("{}/", entry.name),
            styles.role(Role::Directory),
        ))
    } else if entry.enabled {
        Line::from(Span::styled(entry.name.clone(), styles.role(Role::Item)))
    } else {
        Line::from(Span::styled(entry.name.clone(), styles.role(Role::Disabled)))
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crossterm::event::{KeyCode, KeyEvent};

    use super::*;
    use crate::widgets::{LineInput, LineInputOptions, Theme};

    fn text(line: &Line<'_>) -> String {
        line.to_string()
    }

    #[test]
    fn test_menu_marks_cursor_and_unsupported_url() {
        let theme = Theme::default();
        let lines = menu_lines(1, &theme);
        let rows: Vec<String> = lines.iter().skip(2).map(text).collect();
        assert_eq!(rows, vec!["  Text", "▶ File", "  URL (unsupported)"]);
        assert_eq!(lines[3].spans[0].style, theme.role(Role::Selected));
        assert_eq!(lines[4].spans[0].style, theme.role(Role::Disabled));
    }

    #[test]
    fn test_entry_line_placeholder() {
        let theme = Theme::default();
        let entry = LineInput::new(LineInputOptions {
            placeholder: "Enter your text...".to_string(),
            focused: true,
            ..LineInputOptions::default()
        });
        assert_eq!(text(&entry_line(&entry, &theme)), ">  Enter your text...");
    }

    #[test]
    fn test_entry_line_cursor_in_middle() {
        let theme = Theme::default();
        let mut entry = LineInput::new(LineInputOptions {
            focused: true,
            ..LineInputOptions::default()
        });
        entry.insert_str("hello");
        entry.update(KeyEvent::from(KeyCode::Left));
        entry.update(KeyEvent::from(KeyCode::Left));

        let line = entry_line(&entry, &theme);
        assert_eq!(text(&line), "> hello");
        assert_eq!(line.spans[2].content, "l");
        assert_eq!(line.spans[2].style, theme.role(Role::Cursor));
    }

    #[test]
    fn test_entry_labels() {
        let theme = Theme::default();
        let dir = BrowserEntry {
            name: "drafts".to_string(),
            path: PathBuf::from("drafts"),
            is_dir: true,
            enabled: true,
        };
        let blocked = BrowserEntry {
            name: "photo.png".to_string(),
            path: PathBuf::from("photo.png"),
            is_dir: false,
            enabled: false,
        };
        assert_eq!(text(&entry_label(&dir, &theme)), "drafts/");
        assert_eq!(
            entry_label(&blocked, &theme).spans[0].style,
            theme.role(Role::Disabled)
        );
    }
}
