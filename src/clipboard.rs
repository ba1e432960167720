//! Copying posts to the system clipboard.
//!
//! Self-contained module: formats a post as plain text and hands it to the
//! OS clipboard via `arboard`. No coupling to UI or application state.

use crate::error::FeedError;
use crate::html::html_to_text;
use crate::models::Post;

/// Plain-text rendition of a post for sharing: title, blank line, body.
///
/// Posts without a title just yield the body text.
pub fn format_post_text(post: &Post) -> String {
    let body = html_to_text(&post.content);
    if post.title.is_empty() {
        body
    } else if body.is_empty() {
        post.title.clone()
    } else {
        format!("{}\n\n{}", post.title, body)
    }
}

/// Copy a post to the system clipboard as plain text.
///
/// Uses `arboard` to reach the OS clipboard (NSPasteboard on macOS,
/// X11/Wayland on Linux). Failures are reported, not fatal; the caller
/// surfaces them through the snackbar.
pub fn copy_post_text(post: &Post) -> Result<(), FeedError> {
    let text = format_post_text(post);

    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| FeedError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| FeedError::Clipboard(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, content: &str) -> Post {
        Post {
            slug: "p".to_string(),
            title: title.to_string(),
            content: content.to_string(),
            categories: Vec::new(),
            formatted_date: String::new(),
        }
    }

    #[test]
    fn test_format_title_and_body() {
        let p = post("A Title", "<p>The body.</p>");
        assert_eq!(format_post_text(&p), "A Title\n\nThe body.");
    }

    #[test]
    fn test_format_without_title() {
        let p = post("", "<p>Only a body.</p>");
        assert_eq!(format_post_text(&p), "Only a body.");
    }

    #[test]
    fn test_format_without_body() {
        let p = post("Lone title", "");
        assert_eq!(format_post_text(&p), "Lone title");
    }

    #[test]
    fn test_format_strips_markup_from_body() {
        let p = post("T", "<p>First</p><p>Second with <b>bold</b></p>");
        assert_eq!(format_post_text(&p), "T\n\nFirst\n\nSecond with bold");
    }
}
