use rustc_hash::FxHashMap;

/// Attribute values parsed from an opening tag, keyed by attribute name.
///
/// When an attribute name is repeated, the last occurrence wins. Bare
/// attributes with no `=` are stored with an empty value.
pub type TagAttributes = FxHashMap<String, String>;

/// The callback invoked to render one instance of a tag.
///
/// Arguments, in order:
///
/// - the tag's inner content: already recursively rendered when the spec
///   has `render_embedded` set, verbatim-and-transformed otherwise, and
///   `None` for standalone tags;
/// - the attributes parsed from the opening tag, if it carried any;
/// - the user context passed to [`Parser::format_with`](crate::Parser::format_with),
///   if any;
/// - the spec of the enclosing tag, or `None` at top level.
pub type RenderFn<Ctx> = Box<
    dyn Fn(Option<&str>, Option<&TagAttributes>, Option<&Ctx>, Option<&TagSpec>) -> String
        + Send
        + Sync,
>;

/// Per-tag behavior flags, fixed at registration time.
#[derive(Debug, Clone, PartialEq)]
pub struct TagSpec {
    /// The registry key: the tag's case-folded, trimmed name.
    pub name: String,
    /// Close this tag at the first newline, whether or not an explicit
    /// closing tag follows. Used by line-oriented tags such as list items.
    pub newline_closes: bool,
    /// Close this tag when another opening tag of the same name appears.
    /// The new opening tag is not consumed; it starts the next instance.
    pub same_tag_closes: bool,
    /// The tag has no content and no closing counterpart; it renders
    /// immediately from its attributes alone.
    pub standalone: bool,
    /// Recursively render tags nested in this tag's content. When unset,
    /// the content is treated as opaque text.
    pub render_embedded: bool,
    /// Replace newlines in this tag's content with the parser's configured
    /// newline replacement.
    pub transform_newlines: bool,
    /// HTML-escape `&`, `<` and `>` in this tag's content.
    pub escape_html: bool,
    /// Autolink URL-like substrings in this tag's content.
    pub replace_links: bool,
    /// Apply cosmetic replacements (`--`, `...`, `(c)`, ...) to this tag's
    /// content.
    pub replace_cosmetic: bool,
}

impl TagSpec {
    /// A spec with the stock defaults: embedded rendering, newline
    /// transformation, escaping, autolinking and cosmetic replacement all
    /// enabled.
    ///
    /// ```
    /// use bracken::TagSpec;
    ///
    /// let spec = TagSpec::new("Quote");
    /// assert_eq!(spec.name, "quote");
    /// assert!(spec.render_embedded);
    /// assert!(!spec.newline_closes);
    /// ```
    pub fn new(name: &str) -> Self {
        TagSpec {
            name: fold_tag_name(name),
            newline_closes: false,
            same_tag_closes: false,
            standalone: false,
            render_embedded: true,
            transform_newlines: true,
            escape_html: true,
            replace_links: true,
            replace_cosmetic: true,
        }
    }
}

/// The case-insensitive registry key for a tag name.
pub(crate) fn fold_tag_name(name: &str) -> String {
    caseless::default_case_fold_str(name.trim())
}
