use super::*;

#[test]
fn custom_tag_with_attributes() {
    let mut parser: Parser = Parser::new();
    parser.register(
        TagSpec::new("size"),
        |value: Option<&str>,
         attrs: Option<&TagAttributes>,
         _: Option<&()>,
         _: Option<&TagSpec>| {
            let px = attrs
                .and_then(|a| a.get("size").map(String::as_str))
                .unwrap_or("13");
            format!(
                "<span style=\"font-size: {}px\">{}</span>",
                px,
                value.unwrap_or("")
            )
        },
    );
    assert_eq!(
        parser.format("[size=12]big[/size]"),
        "<span style=\"font-size: 12px\">big</span>"
    );
}

#[test]
fn simple_formatter_substitutes_attributes() {
    let mut parser: Parser = Parser::new();
    parser.register_simple(
        TagSpec::new("quote"),
        "<blockquote data-author=\"{author}\">{value}</blockquote>",
    );
    assert_eq!(
        parser.format("[quote author=\"Dan Watson\"]text[/quote]"),
        "<blockquote data-author=\"Dan Watson\">text</blockquote>"
    );
}

#[test]
fn unknown_placeholders_expand_to_nothing() {
    let mut parser: Parser = Parser::new();
    parser.register_simple(TagSpec::new("x"), "<{missing}>{value}</x>");
    assert_eq!(parser.format("[x]a[/x]"), "<>a</x>");
}

#[test]
fn registration_overwrites() {
    let mut parser: Parser = Parser::new();
    parser.register_simple(TagSpec::new("b"), "<bb>{value}</bb>");
    assert_eq!(parser.format("[b]x[/b]"), "<bb>x</bb>");
}

#[test]
fn standalone_tags_render_from_attributes_alone() {
    let mut parser: Parser = Parser::new();
    parser.register_simple(
        TagSpec {
            standalone: true,
            ..TagSpec::new("hr")
        },
        "<hr />",
    );
    assert_eq!(parser.format("a[hr]b"), "a<hr />b");
    // A stray closer for a standalone tag renders as nothing.
    assert_eq!(parser.format("a[hr]b[/hr]c"), "a<hr />bc");
}

#[test]
fn opaque_content_is_not_parsed_for_tags() {
    let mut parser: Parser = Parser::new();
    parser.register_simple(
        TagSpec {
            render_embedded: false,
            transform_newlines: false,
            replace_links: false,
            replace_cosmetic: false,
            ..TagSpec::new("code")
        },
        "<pre>{value}</pre>",
    );
    assert_eq!(
        parser.format("[code][b]x[/b][/code]"),
        "<pre>[b]x[/b]</pre>"
    );
    assert_eq!(parser.format("[code]a\nb[/code]"), "<pre>a\nb</pre>");
    assert_eq!(parser.format("[code]a < b[/code]"), "<pre>a &lt; b</pre>");
}

#[test]
fn opaque_content_transforms_newlines_when_asked() {
    let mut parser: Parser = Parser::new();
    parser.register_simple(
        TagSpec {
            render_embedded: false,
            ..TagSpec::new("raw")
        },
        "{value}",
    );
    assert_eq!(parser.format("[raw]a\nb[/raw]"), "a<br />b");
}

#[test]
fn parent_spec_is_the_enclosing_tag() {
    let mut parser: Parser = Parser::new();
    parser.register(
        TagSpec::new("who"),
        |_: Option<&str>, _: Option<&TagAttributes>, _: Option<&()>, parent: Option<&TagSpec>| {
            match parent {
                Some(p) => format!("in {}", p.name),
                None => "at top".to_string(),
            }
        },
    );
    assert_eq!(parser.format("[who][/who]"), "at top");
    assert_eq!(parser.format("[b][who][/who][/b]"), "<strong>in b</strong>");
}

#[test]
fn deep_nesting_is_bounded() {
    let parser: Parser = Parser::new();
    let input = format!("{}x", "[b]".repeat(150));
    // Tags at depths 0 through 100 still render; the one at the limit
    // takes the rest of the input as opaque text.
    let expected = format!(
        "{}{}x{}",
        "<strong>".repeat(101),
        "[b]".repeat(49),
        "</strong>".repeat(101)
    );
    assert_eq!(parser.format(&input), expected);
}

#[test]
fn parser_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>(_: &T) {}
    let parser: Parser = Parser::new();
    assert_send_sync(&parser);
}
