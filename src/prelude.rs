//! Prelude module for convenient imports.
//!
//! ```ignore
//! use lectern::prelude::*;
//! ```

// Core application types
pub use crate::app::{App, AppMessage, Focus};

// Feed core
pub use crate::feed::{FeedController, FeedView, CATEGORY_ALL, PAGE_SIZE};

// Model types
pub use crate::models::Post;

// Loading
pub use crate::loader::{load_feed, FeedSource};

// UI entry point
pub use crate::ui::render;
