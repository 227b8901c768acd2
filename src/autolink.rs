//! Heuristic URL detection for the autolink text pass.
//!
//! Hand-rolled scanners, not regular expressions: a candidate position is
//! probed for a scheme-prefixed URL, a bare `www.` host, or a bare
//! domain-like token followed by `/`. Matches are trimmed of trailing
//! punctuation and unbalanced closing parentheses.

use unicode_categories::UnicodeCategories;

use crate::character_set::character_set;

static SCHEMES: phf::Set<&'static str> = phf::phf_set! {
    "http", "https", "ftp", "ftps", "irc", "file",
};

const WWW_DELIMS: [bool; 256] = character_set(b"*_~([");
const LINK_END_ASSORTMENT: [bool; 256] = character_set(b"?!.,:*_~'\"");

/// Wraps every URL-like substring in an anchor element whose href and text
/// are both the matched text, verbatim.
///
/// This pass runs on already-escaped output, and its own output is never
/// re-escaped.
pub(crate) fn replace_links(contents: &str) -> String {
    let bytes = contents.as_bytes();
    let len = contents.len();
    let mut out = String::with_capacity(len);
    let mut last = 0;
    let mut i = 0;

    while i < len {
        let found = match bytes[i] {
            b':' => url_match(contents, i),
            b'w' => www_match(contents, i),
            b'/' => domain_match(contents, i),
            _ => None,
        };
        if let Some((start, end)) = found {
            out.push_str(&contents[last..start]);
            let url = &contents[start..end];
            out.push_str("<a href=\"");
            out.push_str(url);
            out.push_str("\">");
            out.push_str(url);
            out.push_str("</a>");
            last = end;
            i = end;
        } else {
            i += 1;
        }
    }

    out.push_str(&contents[last..]);
    out
}

/// Matches a `scheme://host...` URL around the `:` at `i`. Returns the byte
/// range of the whole match.
fn url_match(contents: &str, i: usize) -> Option<(usize, usize)> {
    let bytes = contents.as_bytes();
    let size = contents.len();

    if size - i < 4 || bytes[i + 1] != b'/' || bytes[i + 2] != b'/' {
        return None;
    }

    let mut rewind = 0;
    while rewind < i && bytes[i - rewind - 1].is_ascii_alphabetic() {
        rewind += 1;
    }
    if rewind == 0 || !SCHEMES.contains(&contents[i - rewind..i]) {
        return None;
    }

    let mut link_end = 3 + check_domain(&contents[i + 3..])?;
    while i + link_end < size && !bytes[i + link_end].is_ascii_whitespace() {
        link_end += 1;
    }
    link_end = autolink_delim(&contents[i..], link_end);

    Some((i - rewind, i + link_end))
}

/// Matches a bare `www.` host starting at `i`.
fn www_match(contents: &str, i: usize) -> Option<(usize, usize)> {
    let bytes = contents.as_bytes();

    if i > 0 && !bytes[i - 1].is_ascii_whitespace() && !WWW_DELIMS[bytes[i - 1] as usize] {
        return None;
    }
    if !contents[i..].starts_with("www.") {
        return None;
    }

    let mut link_end = check_domain(&contents[i..])?;
    while i + link_end < contents.len() && !bytes[i + link_end].is_ascii_whitespace() {
        link_end += 1;
    }
    link_end = autolink_delim(&contents[i..], link_end);

    Some((i, i + link_end))
}

/// Matches a bare domain around the `/` at `i`: `label(.label)+/`, where
/// the final label is 2-4 ASCII letters. The `/` and any path after it are
/// part of the match.
fn domain_match(contents: &str, i: usize) -> Option<(usize, usize)> {
    let bytes = contents.as_bytes();

    let mut rewind = 0;
    while rewind < i {
        let b = bytes[i - rewind - 1];
        if b.is_ascii_alphanumeric() || b == b'.' || b == b'-' {
            rewind += 1;
        } else {
            break;
        }
    }
    if rewind == 0 {
        return None;
    }
    // An underscore glues the host to the preceding word; a preceding `/`
    // or `:` means this host sits inside some other URL-shaped run (for
    // example an unrecognized scheme) and must not be linked on its own.
    if i > rewind {
        let prev = bytes[i - rewind - 1];
        if prev == b'_' || prev == b'/' || prev == b':' {
            return None;
        }
    }

    let host = &contents[i - rewind..i];
    let dot = host.rfind('.')?;
    let tld = &host[dot + 1..];
    if dot == 0 || tld.len() < 2 || tld.len() > 4 || !tld.bytes().all(|b| b.is_ascii_alphabetic())
    {
        return None;
    }

    let start = i - rewind;
    let mut link_end = rewind + 1;
    while start + link_end < contents.len()
        && !bytes[start + link_end].is_ascii_whitespace()
    {
        link_end += 1;
    }
    link_end = autolink_delim(&contents[start..], link_end);

    Some((start, start + link_end))
}

/// Scans a hostname from the front of `data`, returning how far it runs.
/// A valid hostname has at least one dot-separated label and no underscore
/// in its last two labels.
fn check_domain(data: &str) -> Option<usize> {
    let mut np = 0;
    let mut uscore1 = 0;
    let mut uscore2 = 0;

    for (i, c) in data.char_indices() {
        if c == '_' {
            uscore2 += 1;
        } else if c == '.' {
            uscore1 = uscore2;
            uscore2 = 0;
            np += 1;
        } else if !is_valid_hostchar(c) && c != '-' {
            if uscore1 == 0 && uscore2 == 0 && np > 0 {
                return Some(i);
            }
            return None;
        }
    }

    if uscore1 == 0 && uscore2 == 0 && np > 0 {
        Some(data.len())
    } else {
        None
    }
}

fn is_valid_hostchar(ch: char) -> bool {
    !ch.is_whitespace() && !ch.is_punctuation()
}

/// Backs the match end off trailing punctuation, HTML entities, and
/// unbalanced closing parentheses.
fn autolink_delim(data: &str, mut link_end: usize) -> usize {
    let bytes = data.as_bytes();

    for (i, &b) in bytes.iter().enumerate().take(link_end) {
        if b == b'<' {
            link_end = i;
            break;
        }
    }

    while link_end > 0 {
        let cclose = bytes[link_end - 1];
        let copen = if cclose == b')' { Some(b'(') } else { None };

        if LINK_END_ASSORTMENT[cclose as usize] {
            link_end -= 1;
        } else if cclose == b';' && link_end >= 2 {
            let mut new_end = link_end - 2;
            while new_end > 0 && bytes[new_end].is_ascii_alphabetic() {
                new_end -= 1;
            }
            if new_end < link_end - 2 && bytes[new_end] == b'&' {
                link_end = new_end;
            } else {
                link_end -= 1;
            }
        } else if let Some(copen) = copen {
            let mut opening = 0;
            let mut closing = 0;
            for &b in bytes.iter().take(link_end) {
                if b == copen {
                    opening += 1;
                } else if b == cclose {
                    closing += 1;
                }
            }
            if closing <= opening {
                break;
            }
            link_end -= 1;
        } else {
            break;
        }
    }

    link_end
}
