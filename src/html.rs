//! Plain-text conversion of post bodies for terminal display and copy.
//!
//! Feed content is simple HTML (paragraphs, line breaks, inline emphasis,
//! links). The terminal shows plain text, so block-level tags become line
//! breaks, every other tag is dropped, and the few entities the feed uses
//! are decoded. Search filtering does NOT go through here; it uses the raw
//! `feed::strip_markup` rule.

use once_cell::sync::Lazy;
use regex::Regex;

/// Tags that end a block of text.
static BLOCK_BREAK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)</p\s*>|</h[1-6]\s*>|</li\s*>").expect("Invalid block break regex")
});

/// Explicit line breaks.
static LINE_BREAK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").expect("Invalid line break regex"));

/// List item openers, turned into a bullet.
static LIST_ITEM_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<li[^>]*>").expect("Invalid list item regex"));

/// Any remaining tag.
static TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"));

/// Runs of three or more newlines.
static EXTRA_BLANK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("Invalid blank run regex"));

/// Convert an HTML-bearing post body to readable plain text.
///
/// Paragraph and heading closers become blank lines, `<br>` a single line
/// break, list items a `- ` bullet. Whatever tags remain are removed and
/// common entities decoded. Leading/trailing whitespace is trimmed.
pub fn html_to_text(html: &str) -> String {
    let text = BLOCK_BREAK_REGEX.replace_all(html, "\n\n");
    let text = LINE_BREAK_REGEX.replace_all(&text, "\n");
    let text = LIST_ITEM_REGEX.replace_all(&text, "- ");
    let text = TAG_REGEX.replace_all(&text, "");
    let text = decode_entities(&text);
    let text = EXTRA_BLANK_REGEX.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Decode the entities that actually appear in feed content.
fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_become_blank_lines() {
        let html = "<p>First paragraph.</p><p>Second paragraph.</p>";
        assert_eq!(html_to_text(html), "First paragraph.\n\nSecond paragraph.");
    }

    #[test]
    fn test_br_becomes_line_break() {
        let html = "line one<br>line two<br/>line three";
        assert_eq!(html_to_text(html), "line one\nline two\nline three");
    }

    #[test]
    fn test_inline_tags_are_dropped() {
        let html = "<p>Some <b>bold</b> and <em>italic</em> text</p>";
        assert_eq!(html_to_text(html), "Some bold and italic text");
    }

    #[test]
    fn test_links_keep_their_text() {
        let html = r#"<p>See <a href="posts/other.html">the other post</a>.</p>"#;
        assert_eq!(html_to_text(html), "See the other post.");
    }

    #[test]
    fn test_list_items_become_bullets() {
        let html = "<ul><li>first</li><li>second</li></ul>";
        assert_eq!(html_to_text(html), "- first\n\n- second");
    }

    #[test]
    fn test_entities_are_decoded() {
        let html = "<p>Fish &amp; chips, 1 &lt; 2, &quot;quoted&quot;</p>";
        assert_eq!(html_to_text(html), "Fish & chips, 1 < 2, \"quoted\"");
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(html_to_text("just words"), "just words");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(html_to_text(""), "");
    }
}
