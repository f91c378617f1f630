/// Which row is selected and which window of rows is on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub selected: usize,
    pub first_visible: usize,
    pub visible_count: usize,
}

impl SelectionState {
    /// Whether `index` falls inside `[first_visible, first_visible + visible_count)`.
    pub fn is_visible(&self, index: usize) -> bool {
        index >= self.first_visible && index < self.first_visible + self.visible_count
    }

    /// Scroll the least amount needed to bring `index` on screen.
    pub fn scroll_into_view(&mut self, index: usize) {
        if index < self.first_visible {
            self.first_visible = index;
        } else if self.visible_count > 0 && index >= self.first_visible + self.visible_count {
            self.first_visible = index + 1 - self.visible_count;
        }
    }

    /// Select `index` (clamped to `len`) and scroll minimally to it.
    pub fn select(&mut self, index: usize, len: usize) {
        if len == 0 {
            *self = Self {
                visible_count: self.visible_count,
                ..Self::default()
            };
            return;
        }
        self.selected = index.min(len - 1);
        self.scroll_into_view(self.selected);
    }

    pub fn select_previous(&mut self, len: usize) {
        self.select(self.selected.saturating_sub(1), len);
    }

    pub fn select_next(&mut self, len: usize) {
        self.select(self.selected.saturating_add(1), len);
    }

    pub fn select_first(&mut self, len: usize) {
        self.select(0, len);
    }

    pub fn select_last(&mut self, len: usize) {
        self.select(len.saturating_sub(1), len);
    }

    /// Viewport height changed; keep the selection on screen.
    pub fn set_visible_count(&mut self, count: usize) {
        self.visible_count = count;
        self.scroll_into_view(self.selected);
    }
}
