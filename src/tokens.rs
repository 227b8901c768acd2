use crate::tags::TagAttributes;

/// A single token produced by [`Parser::tokenize`](crate::Parser::tokenize).
///
/// Concatenating the `raw` text of every token in a stream, in order,
/// reproduces the tokenizer's (newline-normalized) input exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is, with any parsed payload.
    pub value: TokenValue,
    /// The exact substring of the input this token was derived from.
    pub raw: String,
}

/// The kinds of token the tokenizer emits.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// An opening tag whose name is registered, e.g. `[url=http://x]`.
    TagStart {
        /// The case-folded tag name.
        name: String,
        /// Attributes parsed from the opening tag, if it carried any.
        attrs: Option<TagAttributes>,
    },
    /// A closing tag whose name is registered, e.g. `[/url]`.
    TagEnd {
        /// The case-folded tag name.
        name: String,
    },
    /// A literal line feed.
    Newline,
    /// A run of literal text containing no newline and no recognized tag.
    Data,
}

impl Token {
    pub(crate) fn newline() -> Self {
        Token {
            value: TokenValue::Newline,
            raw: "\n".to_string(),
        }
    }

    pub(crate) fn data(text: &str) -> Self {
        Token {
            value: TokenValue::Data,
            raw: text.to_string(),
        }
    }
}
