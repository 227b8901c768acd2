use super::*;
use ntest::timeout;

// input: python3 -c 'n = 2000; print("[b]" * n)'
#[test]
#[timeout(4000)]
fn deeply_nested_unterminated_tags() {
    let n = 2_000;
    let input = "[b]".repeat(n);
    let html = bbcode_to_html(&input);
    assert!(html.starts_with("<strong>"));
    assert!(html.ends_with("</strong>"));
}

// input: python3 -c 'n = 10000; print("[b]" * n + "[/b]" * n)'
#[test]
#[timeout(4000)]
fn deeply_nested_balanced_tags() {
    // Not interested in the actual html, just that we terminate quickly
    // without blowing the stack.
    let n = 10_000;
    let input = format!("{}{}", "[b]".repeat(n), "[/b]".repeat(n));
    let _ = bbcode_to_html(&input);
}

// input: python3 -c 'n = 50000; print("[" * n)'
#[test]
#[timeout(4000)]
fn opener_runs() {
    let n = 50_000;
    let input = "[".repeat(n);
    assert_eq!(bbcode_to_html(&input), input);
}

// input: python3 -c 'n = 50000; print("]" * n)'
#[test]
#[timeout(4000)]
fn closer_runs() {
    let n = 50_000;
    let input = "]".repeat(n);
    assert_eq!(bbcode_to_html(&input), input);
}

// input: python3 -c 'n = 20000; print("[b]x[/b]" * n)'
#[test]
#[timeout(4000)]
fn many_sibling_tags() {
    let n = 20_000;
    let input = "[b]x[/b]".repeat(n);
    assert_eq!(bbcode_to_html(&input), "<strong>x</strong>".repeat(n));
}
