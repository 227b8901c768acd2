use std::borrow::Cow;

/// Ampersand first, so the entities inserted by the later pairs are not
/// themselves escaped.
pub(crate) const REPLACE_ESCAPE: &[(&str, &str)] = &[("&", "&amp;"), ("<", "&lt;"), (">", "&gt;")];

/// `---` must be rewritten before `--` can match its prefix.
pub(crate) const REPLACE_COSMETIC: &[(&str, &str)] = &[
    ("---", "&mdash;"),
    ("--", "&ndash;"),
    ("...", "&#8230;"),
    ("(c)", "&copy;"),
    ("(reg)", "&reg;"),
    ("(tm)", "&trade;"),
];

/// Applies each `(find, replace)` pair once, in order, over the whole
/// string.
pub(crate) fn replace_pairs(data: &str, pairs: &[(&str, &str)]) -> String {
    let mut out = data.to_string();
    for (find, repl) in pairs {
        out = out.replace(find, repl);
    }
    out
}

/// HTML-escapes `&`, `<` and `>`.
pub(crate) fn escape_html(data: &str) -> Cow<'_, str> {
    let matcher = jetscii::bytes!(b'&', b'<', b'>');
    if matcher.find(data.as_bytes()).is_none() {
        return Cow::Borrowed(data);
    }
    Cow::Owned(replace_pairs(data, REPLACE_ESCAPE))
}

/// Applies the cosmetic typographic replacements, in their fixed order.
pub(crate) fn replace_cosmetic(data: &str) -> String {
    replace_pairs(data, REPLACE_COSMETIC)
}

/// CRLF/CR → LF. Returns the input unchanged when it contains no carriage
/// return.
pub(crate) fn normalize_newlines(data: &str) -> Cow<'_, str> {
    let matcher = jetscii::bytes!(b'\r');
    if matcher.find(data.as_bytes()).is_none() {
        return Cow::Borrowed(data);
    }

    let mut out = String::with_capacity(data.len());
    let mut chars = data.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
pub mod tests {
    use super::{escape_html, normalize_newlines, replace_cosmetic};

    #[test]
    fn escape_ampersand_first() {
        assert_eq!(escape_html("a < b & c > d"), "a &lt; b &amp; c &gt; d");
    }

    #[test]
    fn escape_untouched_is_borrowed() {
        assert!(matches!(
            escape_html("plain text"),
            std::borrow::Cow::Borrowed(_)
        ));
    }

    #[test]
    fn cosmetic_order() {
        assert_eq!(replace_cosmetic("a --- b -- c"), "a &mdash; b &ndash; c");
        assert_eq!(replace_cosmetic("wait..."), "wait&#8230;");
        assert_eq!(
            replace_cosmetic("(c) (reg) (tm)"),
            "&copy; &reg; &trade;"
        );
    }

    #[test]
    fn cosmetic_does_not_rescan_entities() {
        // The escape pass runs first; its output must survive the cosmetic
        // pass untouched.
        assert_eq!(replace_cosmetic("&lt;"), "&lt;");
    }

    #[test]
    fn newline_normalization() {
        assert_eq!(normalize_newlines("a\r\nb\rc\nd"), "a\nb\nc\nd");
        assert!(matches!(
            normalize_newlines("a\nb"),
            std::borrow::Cow::Borrowed(_)
        ));
    }
}
