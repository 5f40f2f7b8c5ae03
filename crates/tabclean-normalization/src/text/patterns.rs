//! Compiled patterns and single-step rewrites for the text pipeline.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tabclean_model::DEFAULT_STOP_WORDS;

/// HTML tags and their attributes.
pub(crate) static HTML_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("Invalid HTML tag regex"));

/// One or more literal backslashes before an apostrophe.
pub(crate) static ESCAPED_APOSTROPHE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\+'").expect("Invalid escaped apostrophe regex"));

/// Maximal whitespace-free runs, checked one by one for URL shape.
pub(crate) static NON_SPACE_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+").expect("Invalid token regex"));

/// Code points outside the Basic Multilingual Plane.
pub(crate) static ASTRAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{10000}-\x{10FFFF}]").expect("Invalid emoji regex"));

/// Anything that is not a letter, number, underscore or whitespace.
///
/// Unlike `[^\w\s]`, this also drops combining marks, variation selectors,
/// joiners and connector punctuation.
pub(crate) static PUNCTUATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}_\s]").expect("Invalid punctuation regex"));

/// `@` followed by a non-whitespace run.
pub(crate) static HANDLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\S+").expect("Invalid handle regex"));

/// Built-in stop-word alternation.
pub(crate) static DEFAULT_STOP_WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    stop_word_regex(DEFAULT_STOP_WORDS.iter().copied())
        .expect("Invalid default stop-word regex")
        .expect("Empty default stop-word list")
});

/// HTML character references, replaced in this order.
pub(crate) const HTML_ENTITIES: &[(&str, &str)] = &[
    ("&amp;", "&"),
    ("&gt;", ">"),
    ("&lt;", "<"),
    ("&quot;", "\""),
];

/// Retweet marker, removed as a plain substring.
pub(crate) const RETWEET_MARKER: &str = "rt";

/// Builds a whole-word alternation over the given words, in order.
///
/// Returns `Ok(None)` for an empty list.
pub(crate) fn stop_word_regex<'a>(
    words: impl IntoIterator<Item = &'a str>,
) -> Result<Option<Regex>, regex::Error> {
    let alternatives: Vec<String> = words.into_iter().map(regex::escape).collect();
    if alternatives.is_empty() {
        return Ok(None);
    }
    Regex::new(&format!(r"\b(?:{})\b", alternatives.join("|"))).map(Some)
}

/// Replaces HTML character references.
pub(crate) fn replace_entities(text: &str) -> String {
    HTML_ENTITIES
        .iter()
        .fold(text.to_string(), |acc, (entity, replacement)| {
            acc.replace(entity, replacement)
        })
}

/// Removes every whitespace-free run that looks like a URL.
pub(crate) fn remove_url_tokens(text: &str) -> String {
    NON_SPACE_RUN_REGEX
        .replace_all(text, |caps: &Captures<'_>| {
            let token = &caps[0];
            if looks_like_url(token) {
                String::new()
            } else {
                token.to_string()
            }
        })
        .into_owned()
}

/// A token looks like a URL when a `.` followed by an ASCII letter appears
/// anywhere after its first character.
pub(crate) fn looks_like_url(token: &str) -> bool {
    token.char_indices().skip(1).any(|(idx, ch)| {
        ch == '.'
            && token[idx + 1..]
                .chars()
                .next()
                .is_some_and(|next| next.is_ascii_alphabetic())
    })
}
