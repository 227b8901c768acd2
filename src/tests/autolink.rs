use super::*;

#[test]
fn bare_www_host() {
    compare(
        "www.example.com",
        "<a href=\"www.example.com\">www.example.com</a>",
    );
}

#[test]
fn scheme_url_in_prose() {
    compare(
        "see https://example.com/x for info",
        "see <a href=\"https://example.com/x\">https://example.com/x</a> for info",
    );
}

#[test]
fn bare_domain_with_path() {
    compare(
        "see example.com/page now",
        "see <a href=\"example.com/page\">example.com/page</a> now",
    );
    compare("see example.com now", "see example.com now");
}

#[test]
fn links_inside_tags() {
    compare(
        "[b]www.example.com[/b]",
        "<strong><a href=\"www.example.com\">www.example.com</a></strong>",
    );
}

#[test]
fn url_tag_does_not_relink_its_own_href() {
    compare(
        "[url]www.example.com[/url]",
        "<a href=\"www.example.com\">www.example.com</a>",
    );
}

#[test]
fn autolink_runs_after_escaping() {
    compare(
        "x<y http://example.com/a",
        "x&lt;y <a href=\"http://example.com/a\">http://example.com/a</a>",
    );
}

#[test]
fn escaped_entity_after_url_is_not_swallowed() {
    compare(
        "see http://example.com<",
        "see <a href=\"http://example.com\">http://example.com</a>&lt;",
    );
}

#[test]
fn trailing_sentence_punctuation_stays_outside() {
    compare(
        "visit www.example.com.",
        "visit <a href=\"www.example.com\">www.example.com</a>.",
    );
}
