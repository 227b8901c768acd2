//! Character-driven scanners for tag text: deciding whether a bracketed
//! substring is a tag, and splitting an opening tag into its name and
//! attributes.

use std::mem;

use crate::tags::{fold_tag_name, TagAttributes};

/// The result of scanning one bracketed substring.
pub(crate) struct ScannedTag {
    /// Case-folded, trimmed tag name. May be empty for degenerate input
    /// like `[=x]`; an empty name never matches the registry.
    pub name: String,
    pub closer: bool,
    /// Attributes, present only for opening tags whose inner text contains
    /// `=` or a space.
    pub attrs: Option<TagAttributes>,
}

/// Examines one bracketed substring, delimiters included, and decides
/// whether it is syntactically a tag. Returns `None` for text that must be
/// treated as literal data.
pub(crate) fn scan_tag(raw: &str, opener: &str, closer: &str) -> Option<ScannedTag> {
    // The delimiter matches may not overlap.
    if raw.len() < opener.len() + closer.len() {
        return None;
    }
    if !raw.starts_with(opener) || !raw.ends_with(closer) {
        return None;
    }
    if raw.contains('\n') || raw.contains('\r') {
        return None;
    }
    let mut inner = raw[opener.len()..raw.len() - closer.len()].trim();
    if inner.is_empty() {
        return None;
    }

    let mut is_closer = false;
    if let Some(rest) = inner.strip_prefix('/') {
        inner = rest;
        is_closer = true;
    }

    // Closing tags never carry attributes.
    if !is_closer && (inner.contains('=') || inner.contains(' ')) {
        let (name, attrs) = scan_options(inner);
        return Some(ScannedTag {
            name: fold_tag_name(name.as_deref().unwrap_or("")),
            closer: false,
            attrs: Some(attrs),
        });
    }

    Some(ScannedTag {
        name: fold_tag_name(inner),
        closer: is_closer,
        attrs: None,
    })
}

/// Splits the inside of an opening tag into its primary name and attribute
/// map.
///
/// A three-state scan: reading a key, reading an unquoted value, reading a
/// quoted value. Quotes preserve spaces and are stripped from the stored
/// value; a bare key commits as a presence flag with an empty value; the
/// key before the first `=` or space doubles as the tag's name.
///
/// `quote author="Dan Watson"` scans to name `quote` and
/// `{author: Dan Watson}`; `url=http://x popup` scans to name `url` and
/// `{url: http://x, popup: ""}`.
pub(crate) fn scan_options(data: &str) -> (Option<String>, TagAttributes) {
    let mut name = None;
    let mut attrs = TagAttributes::default();
    let mut in_value = false;
    let mut in_quote = false;
    let mut key = String::new();
    let mut value = String::new();

    let chars: Vec<char> = data.chars().collect();
    for (pos, &ch) in chars.iter().enumerate() {
        if in_value {
            if in_quote {
                if ch == '"' {
                    in_quote = false;
                } else {
                    value.push(ch);
                }
            } else if ch == '"' {
                in_quote = true;
            } else if ch == ' ' {
                attrs.insert(mem::take(&mut key), mem::take(&mut value));
                in_value = false;
            } else {
                value.push(ch);
            }
        } else if ch == '=' {
            in_value = true;
            // The leading key doubles as the tag name; it still commits as
            // an attribute below.
            if name.is_none() {
                name = Some(key.clone());
            }
        } else if ch == ' ' {
            if name.is_none() {
                name = Some(mem::take(&mut key));
            } else if !key.is_empty() {
                attrs.insert(mem::take(&mut key), String::new());
            }
        } else {
            key.push(ch);
        }

        if pos == chars.len() - 1 && !key.is_empty() {
            attrs.insert(key.clone(), value.clone());
        }
    }

    (name, attrs)
}

#[cfg(test)]
pub mod tests {
    use super::{scan_options, scan_tag};

    fn scan(raw: &str) -> Option<(String, bool)> {
        scan_tag(raw, "[", "]").map(|t| (t.name, t.closer))
    }

    #[test]
    fn bare_tags() {
        assert_eq!(scan("[b]"), Some(("b".to_string(), false)));
        assert_eq!(scan("[/b]"), Some(("b".to_string(), true)));
        assert_eq!(scan("[ B ]"), Some(("b".to_string(), false)));
    }

    #[test]
    fn rejects_non_tags() {
        assert!(scan("[]").is_none());
        assert!(scan("[  ]").is_none());
        assert!(scan("[b").is_none());
        assert!(scan("b]").is_none());
        assert!(scan("[a\nb]").is_none());
        assert!(scan("[a\rb]").is_none());
    }

    #[test]
    fn primary_name_from_value() {
        let tag = scan_tag("[url=http://example.com]", "[", "]").unwrap();
        assert_eq!(tag.name, "url");
        let attrs = tag.attrs.unwrap();
        assert_eq!(attrs["url"], "http://example.com");
    }

    #[test]
    fn quoted_values_preserve_spaces() {
        let (name, attrs) = scan_options("quote author=\"Dan Watson\"");
        assert_eq!(name.as_deref(), Some("quote"));
        assert_eq!(attrs["author"], "Dan Watson");
    }

    #[test]
    fn presence_flags_and_quoted_query_strings() {
        let (name, attrs) = scan_options("url=\"http://test.com/s.php?a=bcd efg\" popup");
        assert_eq!(name.as_deref(), Some("url"));
        assert_eq!(attrs["url"], "http://test.com/s.php?a=bcd efg");
        assert_eq!(attrs["popup"], "");
    }

    #[test]
    fn duplicate_keys_last_wins() {
        let (_, attrs) = scan_options("tag a=1 a=2");
        assert_eq!(attrs["a"], "2");
    }

    #[test]
    fn closers_never_carry_attributes() {
        // "b x" is scanned as a plain (unregistrable) name, not as options.
        let tag = scan_tag("[/b x]", "[", "]").unwrap();
        assert!(tag.closer);
        assert!(tag.attrs.is_none());
        assert_eq!(tag.name, "b x");
    }
}
