//! One-shot feed loading from a local file or an HTTP resource.
//!
//! The feed is read exactly once at startup: no retry, no timeout, no
//! cancellation. A failed load is logged and the application keeps running
//! with an empty feed.

use std::path::{Path, PathBuf};

use crate::error::FeedError;
use crate::models::Post;

/// Default feed location when no `--feed` argument is given.
pub const DEFAULT_FEED_PATH: &str = "feed.json";

/// Where the feed comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    /// A JSON file on disk
    File(PathBuf),
    /// A JSON resource over HTTP(S)
    Url(String),
}

impl FeedSource {
    /// Interpret a CLI value: anything with an http(s) scheme is a URL,
    /// everything else a file path.
    pub fn parse(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            FeedSource::Url(value.to_string())
        } else {
            FeedSource::File(PathBuf::from(value))
        }
    }

    /// Resolve the detail page for a post next to the feed itself.
    ///
    /// A feed at `https://host/blog/feed.json` links to
    /// `https://host/blog/posts/{slug}.html`; a feed file links to the
    /// `posts/` directory beside it.
    pub fn detail_location(&self, slug: &str) -> String {
        let page = format!("posts/{slug}.html");
        match self {
            FeedSource::Url(url) => match url.rsplit_once('/') {
                Some((base, _)) => format!("{base}/{page}"),
                None => page,
            },
            FeedSource::File(path) => path
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join(page)
                .to_string_lossy()
                .into_owned(),
        }
    }
}

/// Load and deserialize the feed.
///
/// The wire format is a JSON array of post objects; field defaults are
/// handled by the [`Post`] deserializer, so a sparse feed still loads.
pub async fn load_feed(source: &FeedSource) -> Result<Vec<Post>, FeedError> {
    match source {
        FeedSource::File(path) => load_from_file(path),
        FeedSource::Url(url) => load_from_url(url).await,
    }
}

fn load_from_file(path: &Path) -> Result<Vec<Post>, FeedError> {
    let json = std::fs::read_to_string(path).map_err(|source| FeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let posts = serde_json::from_str(&json)?;
    Ok(posts)
}

async fn load_from_url(url: &str) -> Result<Vec<Post>, FeedError> {
    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FeedError::HttpStatus(status.as_u16()));
    }
    let posts = response.json().await?;
    Ok(posts)
}
