//! The tag registry, tokenizer, closing-token matcher and recursive
//! renderer.

pub mod options;

use std::borrow::Cow;

use rustc_hash::FxHashMap;

pub use crate::parser::options::Options;

use crate::autolink;
use crate::scanners;
use crate::strings;
use crate::tags::{fold_tag_name, RenderFn, TagAttributes, TagSpec};
use crate::tokens::{Token, TokenValue};

// Nesting deeper than this renders inner content as opaque text instead of
// recursing, so pathological input cannot exhaust the stack.
const MAX_TAG_DEPTH: usize = 100;

struct TagEntry<Ctx> {
    spec: TagSpec,
    render: RenderFn<Ctx>,
}

/// A configured BBCode parser: a tag registry plus rendering options.
///
/// `Ctx` is an arbitrary caller-defined context type passed through to the
/// render callbacks by [`format_with`](Parser::format_with); it defaults to
/// `()` for parsers that need none.
///
/// Registration mutates the parser; formatting does not. A parser that is
/// fully configured before being shared can serve any number of concurrent
/// `format` calls.
pub struct Parser<Ctx = ()> {
    options: Options,
    tags: FxHashMap<String, TagEntry<Ctx>>,
}

impl<Ctx> Default for Parser<Ctx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Ctx> Parser<Ctx> {
    /// A parser with [`Options::default`], including the default tag set.
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// A parser with the given options.
    pub fn with_options(options: Options) -> Self {
        let mut parser = Parser {
            options,
            tags: FxHashMap::default(),
        };
        if parser.options.install_defaults {
            parser.install_default_formatters();
        }
        parser
    }

    /// Registers a render callback for a tag, overwriting any existing
    /// registration under the same (case-folded) name.
    ///
    /// ```rust
    /// use bracken::{Parser, TagAttributes, TagSpec};
    ///
    /// let mut parser: Parser = Parser::new();
    /// parser.register(
    ///     TagSpec::new("color"),
    ///     |value: Option<&str>, attrs: Option<&TagAttributes>, _: Option<&()>, _: Option<&TagSpec>| {
    ///         let color = attrs
    ///             .and_then(|a| a.get("color").map(String::as_str))
    ///             .unwrap_or("inherit");
    ///         format!("<span style=\"color: {}\">{}</span>", color, value.unwrap_or(""))
    ///     },
    /// );
    /// assert_eq!(
    ///     parser.format("[color=red]hi[/color]"),
    ///     "<span style=\"color: red\">hi</span>"
    /// );
    /// ```
    pub fn register<F>(&mut self, mut spec: TagSpec, render: F)
    where
        F: Fn(Option<&str>, Option<&TagAttributes>, Option<&Ctx>, Option<&TagSpec>) -> String
            + Send
            + Sync
            + 'static,
    {
        spec.name = fold_tag_name(&spec.name);
        self.tags.insert(
            spec.name.clone(),
            TagEntry {
                spec,
                render: Box::new(render),
            },
        );
    }

    /// Registers a tag rendered by substituting into a template string.
    ///
    /// `{value}` expands to the tag's inner content; any other `{name}`
    /// placeholder expands to the attribute of that name, or to nothing if
    /// the tag instance has no such attribute. Substituted content is never
    /// rescanned for placeholders.
    ///
    /// ```rust
    /// use bracken::{Parser, TagSpec};
    ///
    /// let mut parser: Parser = Parser::new();
    /// parser.register_simple(TagSpec::new("s"), "<del>{value}</del>");
    /// assert_eq!(parser.format("[s]gone[/s]"), "<del>gone</del>");
    /// ```
    pub fn register_simple(&mut self, spec: TagSpec, template: &str) {
        let template = template.to_string();
        self.register(
            spec,
            move |value: Option<&str>,
                  attrs: Option<&TagAttributes>,
                  _: Option<&Ctx>,
                  _: Option<&TagSpec>| { expand_template(&template, value, attrs) },
        );
    }

    fn install_default_formatters(&mut self) {
        self.register_simple(TagSpec::new("b"), "<strong>{value}</strong>");
        self.register_simple(TagSpec::new("i"), "<em>{value}</em>");
        self.register_simple(
            TagSpec {
                transform_newlines: false,
                ..TagSpec::new("list")
            },
            "<ul>{value}</ul>",
        );
        self.register_simple(
            TagSpec {
                newline_closes: true,
                same_tag_closes: true,
                ..TagSpec::new("*")
            },
            "<li>{value}</li>",
        );
        // The url tag's content is its own href; linkifying or beautifying
        // it would corrupt the attribute value.
        self.register_simple(
            TagSpec {
                replace_links: false,
                replace_cosmetic: false,
                ..TagSpec::new("url")
            },
            "<a href=\"{value}\">{value}</a>",
        );
        self.register_simple(TagSpec::new("quote"), "<blockquote>{value}</blockquote>");
    }

    /// Tokenizes the input into a flat stream of tag, newline and data
    /// tokens. Tokenization is total: any input produces a stream whose
    /// concatenated `raw` text reproduces the (newline-normalized) input.
    ///
    /// ```rust
    /// use bracken::{Parser, TokenValue};
    ///
    /// let parser: Parser = Parser::new();
    /// let tokens = parser.tokenize("[b]hi[/b]");
    /// assert!(matches!(tokens[0].value, TokenValue::TagStart { .. }));
    /// let rebuilt: String = tokens.iter().map(|t| t.raw.as_str()).collect();
    /// assert_eq!(rebuilt, "[b]hi[/b]");
    /// ```
    pub fn tokenize(&self, input: &str) -> Vec<Token> {
        let data = if self.options.normalize_newlines {
            strings::normalize_newlines(input)
        } else {
            Cow::Borrowed(input)
        };
        let data = data.as_ref();
        let opener = self.options.tag_opener.as_str();
        let closer = self.options.tag_closer.as_str();

        let mut tokens = Vec::new();
        let mut pos = 0;
        while pos < data.len() {
            let start = match data[pos..].find(opener) {
                Some(offset) => pos + offset,
                None => break,
            };
            if start > pos {
                newline_tokenize(&data[pos..start], &mut tokens);
            }

            let end = data[start..].find(closer).map(|offset| start + offset);
            let next_opener = data[start + opener.len()..]
                .find(opener)
                .map(|offset| start + opener.len() + offset);
            match (next_opener, end) {
                // Another opener before this one closes: the span up to it
                // cannot be a tag. This is a heuristic; it misparses
                // literal text holding a `[` run before a real tag closes,
                // and that is accepted behavior.
                (Some(next), Some(end)) if next < end => {
                    newline_tokenize(&data[start..next], &mut tokens);
                    pos = next;
                }
                (_, Some(end)) if end > start => {
                    let tag = &data[start..end + closer.len()];
                    match scanners::scan_tag(tag, opener, closer) {
                        // Well-formed and recognized; anything else is data.
                        Some(scanned) if self.tags.contains_key(&scanned.name) => {
                            let value = if scanned.closer {
                                TokenValue::TagEnd { name: scanned.name }
                            } else {
                                TokenValue::TagStart {
                                    name: scanned.name,
                                    attrs: scanned.attrs,
                                }
                            };
                            tokens.push(Token {
                                value,
                                raw: tag.to_string(),
                            });
                        }
                        _ => newline_tokenize(tag, &mut tokens),
                    }
                    pos = end + closer.len();
                }
                // An unmatched opener; it and everything after it is
                // trailing data.
                _ => {
                    pos = start;
                    break;
                }
            }
        }
        if pos < data.len() {
            newline_tokenize(&data[pos..], &mut tokens);
        }
        tokens
    }

    /// Finds the effective close for the tag opened just before
    /// `tokens[pos]`. Returns the closing token's index and whether the
    /// renderer consumes that token; the end of the stream closes any tag.
    fn find_closing_token(&self, spec: &TagSpec, tokens: &[Token], mut pos: usize) -> (usize, bool) {
        let mut embed_count = 0;
        while pos < tokens.len() {
            match &tokens[pos].value {
                // The first newline closes every enclosing newline-closing
                // tag, however deeply nested.
                TokenValue::Newline if spec.newline_closes => return (pos, true),
                TokenValue::TagStart { name, .. } if *name == spec.name => {
                    if spec.same_tag_closes {
                        return (pos, false);
                    }
                    embed_count += 1;
                }
                TokenValue::TagEnd { name } if *name == spec.name => {
                    if embed_count > 0 {
                        embed_count -= 1;
                    } else {
                        return (pos, true);
                    }
                }
                _ => {}
            }
            pos += 1;
        }
        (pos, false)
    }

    /// Applies the escape → cosmetic → autolink pipeline to a text span.
    /// Each per-span flag is ANDed with the parser-global flag, and each
    /// pass runs once, on the previous pass's output.
    fn transform(&self, data: &str, escape: bool, links: bool, cosmetic: bool) -> String {
        let mut out = if self.options.escape_html && escape {
            strings::escape_html(data).into_owned()
        } else {
            data.to_string()
        };
        if self.options.replace_cosmetic && cosmetic {
            out = strings::replace_cosmetic(&out);
        }
        if self.options.replace_links && links {
            out = autolink::replace_links(&out);
        }
        out
    }

    fn render_tokens(
        &self,
        tokens: &[Token],
        context: Option<&Ctx>,
        parent: Option<&TagSpec>,
        depth: usize,
    ) -> String {
        let mut out = String::new();
        let mut idx = 0;
        while idx < tokens.len() {
            let token = &tokens[idx];
            match &token.value {
                TokenValue::TagStart { name, attrs } => {
                    let entry = match self.tags.get(name) {
                        Some(entry) => entry,
                        None => {
                            out.push_str(&token.raw);
                            idx += 1;
                            continue;
                        }
                    };
                    let spec = &entry.spec;
                    if spec.standalone {
                        out.push_str(&(entry.render)(None, attrs.as_ref(), context, parent));
                    } else {
                        let (end, consumed) = self.find_closing_token(spec, tokens, idx + 1);
                        let inner_tokens = &tokens[idx + 1..end];
                        let inner = if spec.render_embedded && depth < MAX_TAG_DEPTH {
                            self.render_tokens(inner_tokens, context, Some(spec), depth + 1)
                        } else {
                            let mut text = String::new();
                            for t in inner_tokens {
                                text.push_str(&t.raw);
                            }
                            let mut text = self.transform(
                                &text,
                                spec.escape_html,
                                spec.replace_links,
                                spec.replace_cosmetic,
                            );
                            if spec.transform_newlines {
                                text = text.replace('\n', &self.options.newline);
                            }
                            text
                        };
                        out.push_str(&(entry.render)(
                            Some(&inner),
                            attrs.as_ref(),
                            context,
                            parent,
                        ));
                        // An unconsumed close (same-tag or end of stream)
                        // is re-examined as the next token.
                        idx = if consumed { end } else { end - 1 };
                    }
                }
                TokenValue::Newline => {
                    if parent.map_or(true, |p| p.transform_newlines) {
                        out.push_str(&self.options.newline);
                    } else {
                        out.push_str(&token.raw);
                    }
                }
                TokenValue::Data => {
                    let (escape, links, cosmetic) = match parent {
                        Some(p) => (p.escape_html, p.replace_links, p.replace_cosmetic),
                        None => (
                            self.options.escape_html,
                            self.options.replace_links,
                            self.options.replace_cosmetic,
                        ),
                    };
                    out.push_str(&self.transform(&token.raw, escape, links, cosmetic));
                }
                // A closing tag with no matching opener renders as nothing.
                TokenValue::TagEnd { .. } => {}
            }
            idx += 1;
        }
        out
    }

    /// Renders the input as HTML.
    ///
    /// Formatting never fails: malformed tags pass through as literal
    /// text, and unterminated tags close implicitly at end of input.
    ///
    /// ```rust
    /// use bracken::Parser;
    ///
    /// let parser: Parser = Parser::new();
    /// assert_eq!(parser.format("[i]hi[/i]"), "<em>hi</em>");
    /// assert_eq!(parser.format("[b]unterminated"), "<strong>unterminated</strong>");
    /// ```
    pub fn format(&self, input: &str) -> String {
        let tokens = self.tokenize(input);
        self.render_tokens(&tokens, None, None, 0)
    }

    /// Renders the input as HTML, passing `context` to every render
    /// callback.
    ///
    /// ```rust
    /// use bracken::{Parser, TagAttributes, TagSpec};
    ///
    /// struct User {
    ///     name: String,
    /// }
    ///
    /// let mut parser: Parser<User> = Parser::new();
    /// parser.register(
    ///     TagSpec {
    ///         standalone: true,
    ///         ..TagSpec::new("me")
    ///     },
    ///     |_: Option<&str>, _: Option<&TagAttributes>, user: Option<&User>, _: Option<&TagSpec>| {
    ///         user.map(|u| u.name.clone()).unwrap_or_default()
    ///     },
    /// );
    ///
    /// let user = User {
    ///     name: "ada".to_string(),
    /// };
    /// assert_eq!(parser.format_with("hi [me]", &user), "hi ada");
    /// ```
    pub fn format_with(&self, input: &str, context: &Ctx) -> String {
        let tokens = self.tokenize(input);
        self.render_tokens(&tokens, Some(context), None, 0)
    }

    /// Extracts the plain text of the input, discarding all recognized
    /// tags; newlines are kept unless `strip_newlines` is set.
    ///
    /// ```rust
    /// use bracken::Parser;
    ///
    /// let parser: Parser = Parser::new();
    /// assert_eq!(parser.strip("[b]hi[/b]\nthere", false), "hi\nthere");
    /// assert_eq!(parser.strip("[b]hi[/b]\nthere", true), "hithere");
    /// ```
    pub fn strip(&self, input: &str, strip_newlines: bool) -> String {
        let mut out = String::new();
        for token in self.tokenize(input) {
            match token.value {
                TokenValue::Data => out.push_str(&token.raw),
                TokenValue::Newline if !strip_newlines => out.push_str(&token.raw),
                _ => {}
            }
        }
        out
    }
}

/// Splits text containing no tags into Data and Newline tokens such that
/// concatenating their raw text reproduces it.
fn newline_tokenize(data: &str, tokens: &mut Vec<Token>) {
    let mut parts = data.split('\n').peekable();
    while let Some(part) = parts.next() {
        if !part.is_empty() {
            tokens.push(Token::data(part));
        }
        if parts.peek().is_some() {
            tokens.push(Token::newline());
        }
    }
}

/// Single left-to-right template expansion: `{value}` takes the rendered
/// content, `{name}` takes the attribute of that name, unknown placeholders
/// expand to nothing. Substituted content is not rescanned.
fn expand_template(template: &str, value: Option<&str>, attrs: Option<&TagAttributes>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        match rest[open + 1..].find('}') {
            Some(close) => {
                let key = &rest[open + 1..open + 1 + close];
                if key == "value" {
                    out.push_str(value.unwrap_or(""));
                } else if let Some(v) = attrs.and_then(|a| a.get(key)) {
                    out.push_str(v);
                }
                rest = &rest[open + close + 2..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
