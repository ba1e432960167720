//! Derived view of the feed: the visible page plus pagination metadata.

use crate::models::Post;

/// One recomputed page of the feed.
///
/// Borrows the posts it shows; the controller re-derives a fresh view after
/// every state change, so nothing here is ever stale.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedView<'a> {
    /// Posts on the current page, in feed order
    pub visible: Vec<&'a Post>,
    /// Current page, 1-based and already clamped to `[1, total_pages]`
    pub current_page: usize,
    /// Total pages for the active filter, never below 1
    pub total_pages: usize,
    /// Whether pagination controls should be shown at all
    pub has_multiple_pages: bool,
}

impl<'a> FeedView<'a> {
    /// True when no post matches the active filters.
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Whether a previous page exists.
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}
