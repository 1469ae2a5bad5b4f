use crate::catalog::Listing;

/// Tracks which card is centered in the carousel. The index always refers to
/// the currently visible subset, never the full dataset.
#[derive(Debug, Default)]
pub struct FocusTracker {
    focused: usize,
}

impl FocusTracker {
    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Carousel moved to `new_index`. Clamped into `0..visible_len`; an empty
    /// subset pins the index at 0.
    pub fn on_slide_change(&mut self, new_index: usize, visible_len: usize) {
        self.focused = clamp_index(new_index, visible_len);
    }

    /// The visible subset shrank without changing identity; keep the focus
    /// but pull it back in range.
    pub fn sync(&mut self, visible_len: usize) {
        self.focused = clamp_index(self.focused, visible_len);
    }

    /// The visible subset changed identity (filter commit); the old focus
    /// target may no longer exist.
    pub fn reset(&mut self) {
        self.focused = 0;
    }

    pub fn current<'a>(&self, subset: &[&'a Listing]) -> Option<&'a Listing> {
        subset.get(clamp_index(self.focused, subset.len())).copied()
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        index.min(len - 1)
    }
}
