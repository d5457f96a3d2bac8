//! Sliding window over the matched sequence.

use std::ops::Range;

/// A contiguous slice `[start, start + page_size)` of the matched records.
///
/// `start` stays within `[0, max(0, len - page_size)]` for the `len` it was
/// last clamped against. Requests outside that range clamp rather than fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    start: usize,
    page_size: usize,
}

impl Window {
    /// Creates a window at the start. `page_size` must be at least 1.
    pub fn new(page_size: usize) -> Self {
        debug_assert!(page_size > 0);
        Window {
            start: 0,
            page_size,
        }
    }

    /// Index of the first visible record.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Number of records in a full window.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Largest valid start for `len` matched records.
    pub fn max_start(&self, len: usize) -> usize {
        len.saturating_sub(self.page_size)
    }

    /// Moves back to the first record.
    pub fn reset(&mut self) {
        self.start = 0;
    }

    /// Pulls `start` back into range after `len` changed.
    pub fn clamp(&mut self, len: usize) {
        self.start = self.start.min(self.max_start(len));
    }

    /// Jumps to `start`, clamped.
    pub fn seek(&mut self, start: usize, len: usize) {
        self.start = start.min(self.max_start(len));
    }

    /// Moves by `delta` whole pages, clamped at both ends.
    pub fn advance(&mut self, delta: isize, len: usize) {
        let step = delta as i128 * self.page_size as i128;
        let target = (self.start as i128 + step).max(0);
        let max = self.max_start(len) as i128;
        self.start = target.min(max) as usize;
    }

    /// Changes the page size and re-clamps.
    pub fn resize(&mut self, page_size: usize, len: usize) {
        debug_assert!(page_size > 0);
        self.page_size = page_size;
        self.clamp(len);
    }

    /// Index range of the visible records.
    pub fn range(&self, len: usize) -> Range<usize> {
        let start = self.start.min(len);
        let end = start.saturating_add(self.page_size).min(len);
        start..end
    }

    /// Returns `true` unless the window is at the first record.
    pub fn has_prev(&self) -> bool {
        self.start > 0
    }

    /// Returns `true` if records remain past the window.
    pub fn has_next(&self, len: usize) -> bool {
        self.start < self.max_start(len)
    }

    /// Number of pages needed to show `len` records (0 when empty).
    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// 1-based page number of the window; the final window counts as the
    /// last page even when it is not page-aligned. 0 when empty.
    pub fn page(&self, len: usize) -> usize {
        if len == 0 {
            0
        } else if !self.has_next(len) {
            self.page_count(len)
        } else {
            self.start / self.page_size + 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_clamps_at_end() {
        let mut w = Window::new(3);
        w.seek(6, 7);
        assert_eq!(w.start(), 4);
        w.advance(1, 7);
        assert_eq!(w.start(), 4);
        assert_eq!(w.range(7), 4..7);
    }

    #[test]
    fn advance_clamps_at_start() {
        let mut w = Window::new(3);
        w.seek(3, 10);
        w.advance(-5, 10);
        assert_eq!(w.start(), 0);
        assert!(!w.has_prev());
    }

    #[test]
    fn short_collection_pins_to_zero() {
        let mut w = Window::new(5);
        w.advance(1, 3);
        assert_eq!(w.start(), 0);
        assert_eq!(w.range(3), 0..3);
        assert_eq!(w.range(0), 0..0);
        assert!(!w.has_next(3));
    }

    #[test]
    fn clamp_after_shrink() {
        let mut w = Window::new(2);
        w.seek(8, 10);
        assert_eq!(w.start(), 8);
        w.clamp(5);
        assert_eq!(w.start(), 3);
    }

    #[test]
    fn huge_delta_does_not_overflow() {
        let mut w = Window::new(usize::MAX / 2);
        w.advance(isize::MAX, 10);
        assert_eq!(w.start(), 0);
        w.advance(isize::MIN, 10);
        assert_eq!(w.start(), 0);
    }

    #[test]
    fn pages() {
        let mut w = Window::new(3);
        assert_eq!(w.page_count(7), 3);
        assert_eq!(w.page(7), 1);
        w.advance(1, 7);
        assert_eq!(w.page(7), 2);
        w.advance(1, 7);
        assert_eq!(w.start(), 4);
        assert_eq!(w.page(7), 3);
        assert_eq!(w.page(0), 0);
        assert_eq!(w.page_count(0), 0);
    }

    #[test]
    fn resize_reclamps() {
        let mut w = Window::new(2);
        w.seek(6, 8);
        w.resize(5, 8);
        assert_eq!(w.start(), 3);
        assert_eq!(w.page_size(), 5);
    }
}
