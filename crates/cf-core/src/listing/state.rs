//! Listing view state: current query and window.

use super::pipeline::{ListingQuery, StatusFilter, Window};

/// Holds the user's list selection.
///
/// Changing the status filter or the priority toggle resets the window to
/// its initial value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingState {
    query: ListingQuery,
    window: Window,
    initial: Window,
}

impl ListingState {
    pub fn new(query: ListingQuery, initial: Window) -> Self {
        Self {
            query,
            window: initial,
            initial,
        }
    }

    /// Paged listing starting at page 1.
    pub fn paged(query: ListingQuery, page_size: usize) -> Self {
        Self::new(
            query,
            Window::Page {
                number: 1,
                size: page_size,
            },
        )
    }

    /// Incremental reveal starting with `step` visible items.
    pub fn revealing(query: ListingQuery, step: usize) -> Self {
        Self::new(query, Window::Reveal { visible: step })
    }

    pub fn query(&self) -> &ListingQuery {
        &self.query
    }

    pub fn window(&self) -> Window {
        self.window
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        if self.query.status_filter != filter {
            self.query.status_filter = filter;
            self.reset_window();
        }
    }

    pub fn set_prioritize_flagged(&mut self, enabled: bool) {
        if self.query.prioritize_flagged != enabled {
            self.query.prioritize_flagged = enabled;
            self.reset_window();
        }
    }

    pub fn toggle_prioritize_flagged(&mut self) {
        let enabled = !self.query.prioritize_flagged;
        self.set_prioritize_flagged(enabled);
    }

    /// Advance one page, never past `total_pages`.
    pub fn next_page(&mut self, total_pages: usize) {
        if let Window::Page { number, size } = self.window {
            let last = total_pages.max(1);
            self.window = Window::Page {
                number: (number + 1).min(last),
                size,
            };
        }
    }

    pub fn previous_page(&mut self) {
        if let Window::Page { number, size } = self.window {
            self.window = Window::Page {
                number: number.saturating_sub(1).max(1),
                size,
            };
        }
    }

    /// Grow a reveal window by its initial size.
    pub fn reveal_more(&mut self) {
        if let (Window::Reveal { visible }, Window::Reveal { visible: step }) =
            (self.window, self.initial)
        {
            self.window = Window::Reveal {
                visible: visible + step,
            };
        }
    }

    fn reset_window(&mut self) {
        self.window = self.initial;
    }
}
