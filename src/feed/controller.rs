//! Feed view controller: owns the view state and derives visible pages.

use crate::models::Post;

use super::filter::{matches_category, matches_search};
use super::view::FeedView;
use super::{CATEGORY_ALL, PAGE_SIZE};

/// Derive one page of the feed from the full post list and view state.
///
/// Pure: the same inputs always produce the same view. A `page` beyond the
/// last page is clamped down silently; an empty or fully filtered-out post
/// list yields an empty single-page view rather than an error.
pub fn recompute<'a>(
    posts: &'a [Post],
    category: &str,
    search: &str,
    page: usize,
) -> FeedView<'a> {
    let filtered: Vec<&Post> = posts
        .iter()
        .filter(|post| matches_category(post, category) && matches_search(post, search))
        .collect();

    let total_pages = filtered.len().div_ceil(PAGE_SIZE).max(1);
    let current_page = page.clamp(1, total_pages);

    let start = (current_page - 1) * PAGE_SIZE;
    let visible: Vec<&Post> = filtered
        .iter()
        .skip(start)
        .take(PAGE_SIZE)
        .copied()
        .collect();

    FeedView {
        has_multiple_pages: filtered.len() > PAGE_SIZE,
        visible,
        current_page,
        total_pages,
    }
}

/// Owns the post list and the transient view state.
///
/// All mutation goes through the operations below; the UI never touches the
/// fields directly. Changing the category or the search term resets to the
/// first page, page navigation leaves both filters alone.
#[derive(Debug)]
pub struct FeedController {
    posts: Vec<Post>,
    category: String,
    search: String,
    page: usize,
}

impl Default for FeedController {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedController {
    /// Create a controller with no posts, showing everything on page 1.
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            category: CATEGORY_ALL.to_string(),
            search: String::new(),
            page: 1,
        }
    }

    /// Create a controller pre-populated with posts.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let mut controller = Self::new();
        controller.set_posts(posts);
        controller
    }

    /// Replace the post list. Filters survive; the page starts over.
    pub fn set_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;
        self.page = 1;
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Set the active category and reset to the first page.
    pub fn set_category(&mut self, category: &str) {
        self.category = category.to_string();
        self.page = 1;
    }

    /// Set the search term (stored lowercased) and reset to the first page.
    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_lowercase();
        self.page = 1;
    }

    /// Advance one page, stopping at the last page of the active filter.
    pub fn next_page(&mut self) {
        let total = self.recompute().total_pages;
        self.page = (self.page + 1).min(total);
    }

    /// Go back one page, stopping at page 1.
    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Jump to a specific page, clamped into the valid range.
    pub fn go_to_page(&mut self, page: usize) {
        let total = self.recompute().total_pages;
        self.page = page.clamp(1, total);
    }

    /// Derive the current view and persist any page clamp it performed.
    pub fn view(&mut self) -> FeedView<'_> {
        let current_page = self.recompute().current_page;
        self.page = current_page;
        recompute(&self.posts, &self.category, &self.search, self.page)
    }

    /// Derive the current view without touching stored state.
    pub fn recompute(&self) -> FeedView<'_> {
        recompute(&self.posts, &self.category, &self.search, self.page)
    }

    /// All selectable categories: `"all"` plus every distinct tag present
    /// in the feed, sorted.
    pub fn categories(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .posts
            .iter()
            .flat_map(|post| post.categories.iter().cloned())
            .collect();
        tags.sort();
        tags.dedup();

        let mut categories = Vec::with_capacity(tags.len() + 1);
        categories.push(CATEGORY_ALL.to_string());
        categories.extend(tags);
        categories
    }
}
