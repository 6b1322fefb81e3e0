//! Scroll engine reducer (Running screen).

use crossterm::event::KeyEvent;

use super::state::ScrollState;
use crate::common::keys;
use crate::effects::UiEffect;

/// Handles a key press while the prompter is running.
pub fn handle_key(scroll: &mut ScrollState, len: usize, key: &KeyEvent) -> Vec<UiEffect> {
    if keys::is_quit(key) {
        return vec![UiEffect::Quit];
    }

    if keys::is_char(key, ' ') {
        scroll.toggle();
        tracing::debug!(auto_scroll = scroll.auto_scroll, "toggled auto-scroll");
    } else if keys::is_up(key) {
        scroll.scroll_up();
    } else if keys::is_down(key) {
        scroll.scroll_down(len);
    } else if keys::is_char(key, 'r') {
        scroll.reset();
    }

    vec![]
}

/// Advances one auto-scroll step and schedules the next tick.
pub fn handle_tick(scroll: &mut ScrollState, len: usize) -> Vec<UiEffect> {
    scroll.advance(len);
    vec![UiEffect::tick()]
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        let mut scroll = ScrollState::default();
        assert_eq!(
            handle_key(&mut scroll, 3, &key(KeyCode::Char('q'))),
            vec![UiEffect::Quit]
        );
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut scroll, 3, &ctrl_c), vec![UiEffect::Quit]);
    }

    #[test]
    fn test_manual_scroll_and_reset() {
        let mut scroll = ScrollState::default();
        handle_key(&mut scroll, 5, &key(KeyCode::Char('j')));
        handle_key(&mut scroll, 5, &key(KeyCode::Down));
        assert_eq!(scroll.offset, 2);
        handle_key(&mut scroll, 5, &key(KeyCode::Char('k')));
        assert_eq!(scroll.offset, 1);
        handle_key(&mut scroll, 5, &key(KeyCode::Char('r')));
        assert_eq!(scroll.offset, 0);
    }

    #[test]
    fn test_pause_resume_ticks() {
        let mut scroll = ScrollState::default();
        handle_key(&mut scroll, 10, &key(KeyCode::Char(' ')));
        for _ in 0..5 {
            assert_eq!(handle_tick(&mut scroll, 10), vec![UiEffect::tick()]);
        }
        assert_eq!(scroll.offset, 0);

        handle_key(&mut scroll, 10, &key(KeyCode::Char(' ')));
        handle_tick(&mut scroll, 10);
        assert_eq!(scroll.offset, 1);
    }

    #[test]
    fn test_tick_at_last_line_still_reschedules() {
        let mut scroll = ScrollState {
            offset: 2,
            auto_scroll: true,
        };
        assert_eq!(handle_tick(&mut scroll, 3), vec![UiEffect::tick()]);
        assert_eq!(scroll.offset, 2);
    }
}
