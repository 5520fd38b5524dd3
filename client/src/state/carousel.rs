//! Paging state for the project carousel.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use std::ops::Range;

/// Cards shown per carousel page.
pub const DEFAULT_PAGE_SIZE: usize = 2;

/// Wrap-around pager over `len` items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    page_size: usize,
    page: usize,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

impl Carousel {
    /// A zero `page_size` is treated as one.
    pub fn new(len: usize, page_size: usize) -> Self {
        Self { len, page_size: page_size.max(1), page: 0 }
    }

    /// Number of pages; an empty carousel still has one (empty) page.
    pub fn page_count(&self) -> usize {
        self.len.div_ceil(self.page_size).max(1)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn next(&mut self) {
        self.page = (self.page + 1) % self.page_count();
    }

    pub fn prev(&mut self) {
        let count = self.page_count();
        self.page = (self.page + count - 1) % count;
    }

    /// Jump to `page`. Out-of-range pages are rejected.
    pub fn go_to(&mut self, page: usize) -> bool {
        if page >= self.page_count() {
            return false;
        }
        self.page = page;
        true
    }

    /// Item indices on the current page.
    pub fn visible(&self) -> Range<usize> {
        let start = (self.page * self.page_size).min(self.len);
        let end = (start + self.page_size).min(self.len);
        start..end
    }

    /// Controls are only useful with more than one page.
    pub fn has_controls(&self) -> bool {
        self.page_count() > 1
    }
}
