//! Rewriting of in-book hyperlinks into StarDict cross references.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

/// Compiled regex for MOBI position links.
///
/// Matches `<a filepos=0000123>text</a>` style anchors; the link text is captured.
static FILEPOS_LINK: OnceLock<Regex> = OnceLock::new();

/// Returns the cached link regex pattern.
fn filepos_regex() -> &'static Regex {
    FILEPOS_LINK.get_or_init(|| {
        Regex::new(r"<a\s+filepos[^>]+>(.*?)</a>").expect("Invalid filepos link regex pattern")
    })
}

/// Replaces every `filepos` anchor with a `bword://` link to its own text.
///
/// Position links point into the book's flow, which does not exist once the
/// entries are exported; pointing them at the headword they display keeps
/// them usable in StarDict readers.
pub fn rewrite_links(html: &str) -> Cow<'_, str> {
    filepos_regex().replace_all(html, r#"<a href="bword://$1">$1</a>"#)
}
