//! A configurable BBCode-to-HTML renderer.
//!
//! Bracket-delimited markup (`[name]...[/name]`, tags with optional
//! attributes) is tokenized into a flat stream, then rendered by walking
//! the stream recursively, consulting a registry of per-tag render
//! callbacks. Rendering is fail-soft: malformed or unrecognized markup
//! degrades to literal text, and some output is always produced.
//!
//! The easiest way in is the convenience function:
//!
//! ```rust
//! assert_eq!(
//!     bracken::bbcode_to_html("[b]hi[/b]"),
//!     "<strong>hi</strong>"
//! );
//! ```
//!
//! For anything beyond the default tag set, own a [`Parser`] and register
//! your own tags:
//!
//! ```rust
//! use bracken::{Parser, TagAttributes, TagSpec};
//!
//! let mut parser: Parser = Parser::new();
//! parser.register(
//!     TagSpec::new("wave"),
//!     |value: Option<&str>, _: Option<&TagAttributes>, _: Option<&()>, _: Option<&TagSpec>| {
//!         format!("~{}~", value.unwrap_or(""))
//!     },
//! );
//! assert_eq!(parser.format("[wave]hi[/wave]"), "~hi~");
//! ```

mod autolink;
mod character_set;
pub mod parser;
mod scanners;
mod strings;
mod tags;
mod tokens;


pub use crate::parser::options::Options;
pub use crate::parser::Parser;
pub use crate::tags::{RenderFn, TagAttributes, TagSpec};
pub use crate::tokens::{Token, TokenValue};

/// Renders BBCode as HTML with a freshly constructed default parser.
///
/// When rendering more than once, build a [`Parser`] and reuse it instead.
///
/// ```rust
/// assert_eq!(
///     bracken::bbcode_to_html("[url]http://example.com[/url]"),
///     "<a href=\"http://example.com\">http://example.com</a>"
/// );
/// ```
pub fn bbcode_to_html(input: &str) -> String {
    Parser::<()>::new().format(input)
}

/// Extracts the plain text of BBCode input with a freshly constructed
/// default parser, discarding all tags.
///
/// ```rust
/// assert_eq!(bracken::strip_bbcode("[b]hi[/b]\nthere", false), "hi\nthere");
/// ```
pub fn strip_bbcode(input: &str, strip_newlines: bool) -> String {
    Parser::<()>::new().strip(input, strip_newlines)
}
