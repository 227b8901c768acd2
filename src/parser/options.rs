//! Configuration for the parser.

/// Construction-time configuration, consumed by
/// [`Parser::with_options`](crate::Parser::with_options).
///
/// Every field has a sensible default; `Options::default()` gives the
/// stock forum-style setup.
#[derive(Debug, Clone)]
pub struct Options {
    /// The replacement emitted for a newline, at top level and inside tags
    /// with `transform_newlines` set.  Defaults to `"<br />"`.
    ///
    /// ```rust
    /// # use bracken::{Options, Parser};
    /// let mut options = Options::default();
    /// options.newline = "<br>\n".to_string();
    /// let parser: Parser = Parser::with_options(options);
    /// assert_eq!(parser.format("a\nb"), "a<br>\nb");
    /// ```
    pub newline: String,

    /// Normalize CRLF and lone CR to LF before tokenizing.  Defaults to
    /// `true`.
    ///
    /// ```rust
    /// # use bracken::{Options, Parser};
    /// let mut options = Options::default();
    /// options.normalize_newlines = false;
    /// let parser: Parser = Parser::with_options(options);
    /// assert_eq!(parser.format("a\rb"), "a\rb");
    /// ```
    pub normalize_newlines: bool,

    /// Install the default tag set (`b`, `i`, `list`, `*`, `url`, `quote`)
    /// on construction.  Defaults to `true`.
    ///
    /// ```rust
    /// # use bracken::{Options, Parser};
    /// let mut options = Options::default();
    /// options.install_defaults = false;
    /// let parser: Parser = Parser::with_options(options);
    /// assert_eq!(parser.format("[b]hi[/b]"), "[b]hi[/b]");
    /// ```
    pub install_defaults: bool,

    /// Globally enable HTML escaping of text spans.  ANDed with each tag's
    /// own `escape_html` flag.  Defaults to `true`.
    ///
    /// ```rust
    /// # use bracken::{Options, Parser};
    /// assert_eq!(bracken::bbcode_to_html("1 < 2"), "1 &lt; 2");
    ///
    /// let mut options = Options::default();
    /// options.escape_html = false;
    /// let parser: Parser = Parser::with_options(options);
    /// assert_eq!(parser.format("1 < 2"), "1 < 2");
    /// ```
    pub escape_html: bool,

    /// Globally enable autolinking of URL-like substrings.  ANDed with each
    /// tag's own `replace_links` flag.  Defaults to `true`.
    ///
    /// ```rust
    /// # use bracken::{Options, Parser};
    /// let mut options = Options::default();
    /// options.replace_links = false;
    /// let parser: Parser = Parser::with_options(options);
    /// assert_eq!(parser.format("www.example.com"), "www.example.com");
    /// ```
    pub replace_links: bool,

    /// Globally enable cosmetic typographic replacements (`---`, `--`,
    /// `...`, `(c)`, `(reg)`, `(tm)`).  ANDed with each tag's own
    /// `replace_cosmetic` flag.  Defaults to `true`.
    ///
    /// ```rust
    /// # use bracken::{Options, Parser};
    /// assert_eq!(bracken::bbcode_to_html("a -- b"), "a &ndash; b");
    ///
    /// let mut options = Options::default();
    /// options.replace_cosmetic = false;
    /// let parser: Parser = Parser::with_options(options);
    /// assert_eq!(parser.format("a -- b"), "a -- b");
    /// ```
    pub replace_cosmetic: bool,

    /// The opening tag delimiter.  Defaults to `"["`.
    ///
    /// ```rust
    /// # use bracken::{Options, Parser};
    /// let mut options = Options::default();
    /// options.tag_opener = "{".to_string();
    /// options.tag_closer = "}".to_string();
    /// let parser: Parser = Parser::with_options(options);
    /// assert_eq!(parser.format("{b}hi{/b}"), "<strong>hi</strong>");
    /// ```
    pub tag_opener: String,

    /// The closing tag delimiter.  Defaults to `"]"`.
    pub tag_closer: String,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            newline: "<br />".to_string(),
            normalize_newlines: true,
            install_defaults: true,
            escape_html: true,
            replace_links: true,
            replace_cosmetic: true,
            tag_opener: "[".to_string(),
            tag_closer: "]".to_string(),
        }
    }
}
