use serde::{Deserialize, Serialize};

use super::{deserialize_nullable_string, deserialize_nullable_strings};

/// A single feed entry as published in `feed.json`.
///
/// Posts are read-only: the loader deserializes them once and the feed
/// controller only ever borrows them. Absent or null fields fall back to
/// empty values rather than failing the whole feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique slug, also the basename of the detail page (`posts/{slug}.html`)
    pub slug: String,
    /// Post title
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub title: String,
    /// Body as an HTML-bearing string
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub content: String,
    /// Category tags; empty means the post only appears under "all"
    #[serde(default, deserialize_with = "deserialize_nullable_strings")]
    pub categories: Vec<String>,
    /// Display-ready date string, rendered verbatim
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub formatted_date: String,
}

impl Post {
    /// Relative path of the detail page for this post.
    pub fn detail_page(&self) -> String {
        format!("posts/{}.html", self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_post() {
        let json = r#"{
            "slug": "first-post",
            "title": "First Post",
            "content": "<p>Hello</p>",
            "categories": ["life", "writing"],
            "formattedDate": "12 de março de 2024"
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.slug, "first-post");
        assert_eq!(post.title, "First Post");
        assert_eq!(post.content, "<p>Hello</p>");
        assert_eq!(post.categories, vec!["life", "writing"]);
        assert_eq!(post.formatted_date, "12 de março de 2024");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let json = r#"{"slug": "bare"}"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.slug, "bare");
        assert!(post.title.is_empty());
        assert!(post.content.is_empty());
        assert!(post.categories.is_empty());
        assert!(post.formatted_date.is_empty());
    }

    #[test]
    fn test_null_fields_default_to_empty() {
        let json = r#"{"slug": "nulls", "title": null, "categories": null}"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert!(post.title.is_empty());
        assert!(post.categories.is_empty());
    }

    #[test]
    fn test_detail_page_path() {
        let post: Post = serde_json::from_str(r#"{"slug": "my-post"}"#).unwrap();
        assert_eq!(post.detail_page(), "posts/my-post.html");
    }
}
