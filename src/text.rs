//! Text neutralization helpers
//!
//! Every record-sourced string (titles, descriptions, tags, link text,
//! detail bullets) passes through `escape_markup` before display. The
//! catalog is externally supplied, so markup-significant characters must
//! reach the screen in escaped form, never raw.

/// Escape `& < > " '` into HTML entity form
pub fn escape_markup(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Clamp to `limit` characters, appending an ellipsis when truncated
pub fn truncate_chars(input: &str, limit: usize) -> String {
    match input.char_indices().nth(limit) {
        Some((byte_ix, _)) => format!("{}…", &input[..byte_ix]),
        None => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_tag_is_neutralized() {
        let escaped = escape_markup("<script>alert('x')</script>");
        assert_eq!(escaped, "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
    }

    #[test]
    fn test_ampersand_escaped_first_class() {
        assert_eq!(escape_markup("a & b"), "a &amp; b");
        // Already-escaped input is escaped again, not passed through
        assert_eq!(escape_markup("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_markup("Terminal UI in Rust"), "Terminal UI in Rust");
    }

    #[test]
    fn test_truncate_only_when_over_limit() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 5), "hello");
        assert_eq!(truncate_chars("hello world", 5), "hello…");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé…");
    }
}
