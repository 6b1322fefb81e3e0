//! Scroll engine state.

/// Position and play state of the prompter.
///
/// Every method that moves the offset takes the current line count and
/// leaves `offset <= len.saturating_sub(1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: usize,
    pub auto_scroll: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            offset: 0,
            auto_scroll: true,
        }
    }
}

impl ScrollState {
    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self, len: usize) {
        if self.offset + 1 < len {
            self.offset += 1;
        }
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    pub fn toggle(&mut self) {
        self.auto_scroll = !self.auto_scroll;
    }

    /// One tick of auto-scroll. Returns true if the offset moved.
    pub fn advance(&mut self, len: usize) -> bool {
        if !self.auto_scroll {
            return false;
        }
        let before = self.offset;
        self.scroll_down(len);
        self.offset != before
    }

    pub fn clamp(&mut self, len: usize) {
        self.offset = self.offset.min(len.saturating_sub(1));
    }
}
