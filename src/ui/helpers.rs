//! Small text helpers for rendering.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Truncate a string to a display width, appending "..." when cut.
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return take_width(s, max_width);
    }

    let mut truncated = take_width(s, max_width - 3);
    truncated.push_str("...");
    truncated
}

/// Take the longest prefix that fits in `max_width` columns.
fn take_width(s: &str, max_width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

/// Greedy word wrap to a display width.
///
/// Words wider than the line are hard-split. Empty input yields no lines.
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 || text.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.lines() {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let sep = usize::from(!current.is_empty());
            if current.width() + sep + word.width() <= max_width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
            } else {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                // Hard-split oversized words
                let mut rest = word;
                while rest.width() > max_width {
                    let head = take_width(rest, max_width);
                    if head.is_empty() {
                        break;
                    }
                    rest = &rest[head.len()..];
                    lines.push(head);
                }
                current = rest.to_string();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}
