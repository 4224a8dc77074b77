//! HTML escaping for user-supplied text.
//!
//! Works come back from the server exactly as visitors typed them. Every
//! piece of that text goes through [`escape_html`] once, at render time, and
//! the result is carried as [`Markup`] so it is never escaped twice.

use std::fmt;

use serde_json::Value;

/// HTML that is safe to insert as markup.
///
/// Only produced by escaping raw text or by the crate's own templates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Markup(String);

impl Markup {
    /// Wrap a trusted template string. Callers must not pass visitor input.
    pub(crate) fn trusted(html: impl Into<String>) -> Self {
        Markup(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape `& < > " '` to their HTML entities.
///
/// Not idempotent: `&amp;` becomes `&amp;amp;`.
pub fn escape_html(raw: &str) -> Markup {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    Markup(out)
}

/// Escape an arbitrary JSON value. Anything that is not a string yields
/// empty markup.
pub fn escape_value(value: &Value) -> Markup {
    match value {
        Value::String(s) => escape_html(s),
        _ => Markup::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn unescape(html: &str) -> String {
        html.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&")
    }

    #[test]
    fn test_escapes_all_five() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#).as_str(),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_non_ascii_untouched() {
        assert_eq!(escape_html("早睡早起 ✓").as_str(), "早睡早起 ✓");
    }

    #[test]
    fn test_double_escape() {
        let once = escape_html("&");
        let twice = escape_html(once.as_str());
        assert_eq!(twice.as_str(), "&amp;amp;");
    }

    #[test]
    fn test_non_string_values() {
        assert!(escape_value(&json!(42)).is_empty());
        assert!(escape_value(&json!(null)).is_empty());
        assert!(escape_value(&json!(["<"])).is_empty());
        assert!(escape_value(&json!({"a": "<"})).is_empty());
        assert_eq!(escape_value(&json!("<b>")).as_str(), "&lt;b&gt;");
    }

    proptest! {
        /// Escaped output never contains a raw special character except the
        /// `&` that starts an entity, and it decodes back to the input.
        #[test]
        fn escaped_text_has_no_raw_specials(raw in ".{0,200}") {
            let escaped = escape_html(&raw);
            let s = escaped.as_str();
            prop_assert!(!s.contains('<'));
            prop_assert!(!s.contains('>'));
            prop_assert!(!s.contains('"'));
            prop_assert!(!s.contains('\''));
            for (i, _) in s.match_indices('&') {
                let rest = &s[i..];
                prop_assert!(
                    rest.starts_with("&amp;")
                        || rest.starts_with("&lt;")
                        || rest.starts_with("&gt;")
                        || rest.starts_with("&quot;")
                        || rest.starts_with("&#39;")
                );
            }
            prop_assert_eq!(unescape(s), raw);
        }
    }
}
