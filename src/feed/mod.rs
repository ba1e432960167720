//! Feed view core: filtering, search, and pagination over the post list.
//!
//! The controller owns the three pieces of view state (active category,
//! search term, current page) and derives the visible slice of posts from
//! them. It performs no rendering and no IO; the UI layer consumes the
//! derived [`FeedView`] and the loader supplies the posts.

mod controller;
mod filter;
mod view;

pub use controller::{recompute, FeedController};
pub use filter::{matches_category, matches_search, strip_markup};
pub use view::FeedView;

/// Posts per page.
pub const PAGE_SIZE: usize = 5;

/// Category sentinel that disables filtering.
pub const CATEGORY_ALL: &str = "all";
