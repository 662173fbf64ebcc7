use tracing::debug;

use crate::core::data::viewport::Viewport;

/// Pages of previously viewed regions, with page 0 as the home view.
///
/// Navigating back and then zooming again discards the pages that were ahead
/// of the current one, like a browser history.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewHistory {
    pages: Vec<Viewport>,
    current: usize,
}

impl ViewHistory {
    #[must_use]
    pub fn new(home: Viewport) -> Self {
        Self {
            pages: vec![home],
            current: 0,
        }
    }

    /// Records `viewport` as the page after the current one and moves to it.
    /// Returns the new page number.
    pub fn push(&mut self, viewport: Viewport) -> usize {
        let discarded = self.pages.len() - (self.current + 1);
        self.pages.truncate(self.current + 1);
        self.pages.push(viewport);
        self.current = self.pages.len() - 1;

        debug!(page = self.current, discarded, "view history page added");

        self.current
    }

    /// Moves to `page` if it exists; otherwise leaves the history unchanged.
    pub fn go_to(&mut self, page: usize) -> Option<&Viewport> {
        if page >= self.pages.len() {
            return None;
        }

        self.current = page;
        debug!(page, "view history moved");

        Some(&self.pages[page])
    }

    pub fn back(&mut self) -> Option<&Viewport> {
        let page = self.current.checked_sub(1)?;
        self.go_to(page)
    }

    pub fn forward(&mut self) -> Option<&Viewport> {
        self.go_to(self.current + 1)
    }

    #[must_use]
    pub fn current(&self) -> &Viewport {
        &self.pages[self.current]
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn pages(&self) -> &[Viewport] {
        &self.pages
    }
}
