//! Messages from background tasks to the app.

use crate::models::Post;

/// Async events delivered to the event loop over the app channel.
#[derive(Debug)]
pub enum AppMessage {
    /// The feed finished loading
    FeedLoaded(Vec<Post>),
    /// The feed could not be loaded; the feed stays empty
    FeedLoadFailed(String),
}
