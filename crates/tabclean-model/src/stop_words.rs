//! Default stop-word list for text cleaning.

/// Words removed as whole words by the text cleaner.
///
/// Order matters: the list is compiled into a single alternation and the
/// first alternative that matches at a position wins, so `it` is tried
/// before `it's` and `its`.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", //
    "be", "but", "by", //
    "de", "des", //
    "e", "el", //
    "for", //
    "hi", "hey", "he", //
    "if", "i", "in", "into", "is", "it", "it's", "its", //
    "la", "le", "les", //
    "no", "not", //
    "of", "on", "or", //
    "que", //
    "row", //
    "s", "she", "so", "such", //
    "to", "that", "the", "their", "then", "there", "these", "they", "they're", "this", //
    "was", "where", "will", "with",
];
