//! Post matching predicates for category and search filtering.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Post;

use super::CATEGORY_ALL;

/// Matches anything between `<` and `>`, including an unterminated `<` that
/// runs to the end of the text. Deliberately not a real markup parser; the
/// detail pages carry well-formed HTML and search only needs the visible
/// text, so the crude rule is kept as-is.
static MARKUP_TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>?").expect("Invalid markup tag regex"));

/// Strip markup tags from an HTML-bearing string.
///
/// Removes every `<...>` run; an unclosed `<` swallows the rest of the
/// input. The output is plain text suitable for substring search.
pub fn strip_markup(content: &str) -> String {
    MARKUP_TAG_REGEX.replace_all(content, "").into_owned()
}

/// Whether a post belongs to the active category.
///
/// The `"all"` sentinel matches every post. Comparison is exact: category
/// tags are stored in canonical form in the feed.
pub fn matches_category(post: &Post, category: &str) -> bool {
    category == CATEGORY_ALL || post.categories.iter().any(|c| c == category)
}

/// Whether a post matches the active search term.
///
/// `term` must already be lowercase. An empty term matches everything.
/// The title is searched as-is (lowercased); the body is tag-stripped
/// first so markup never produces a hit.
pub fn matches_search(post: &Post, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let title = post.title.to_lowercase();
    let body = strip_markup(&post.content).to_lowercase();

    title.contains(term) || body.contains(term)
}
