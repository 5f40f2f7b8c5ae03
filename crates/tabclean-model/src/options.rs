//! Configuration options for table cleaning.

use serde::{Deserialize, Serialize};

use crate::stop_words::DEFAULT_STOP_WORDS;

/// Column the text cleaner rewrites unless configured otherwise.
pub const DEFAULT_TEXT_COLUMN: &str = "text";

/// Options for the free-text cleaner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextCleanOptions {
    /// Name of the column to rewrite.
    pub column: String,

    /// Remove every character that is neither a word character nor whitespace.
    /// Default: true.
    pub strip_punctuation: bool,

    /// Remove astral-plane code points (emoji and similar symbols).
    /// Default: false.
    pub strip_emoji: bool,

    /// Words removed as whole words, tried in order.
    pub stop_words: Vec<String>,
}

impl Default for TextCleanOptions {
    fn default() -> Self {
        Self {
            column: DEFAULT_TEXT_COLUMN.to_string(),
            strip_punctuation: true,
            strip_emoji: false,
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }
}

impl TextCleanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }

    pub fn with_punctuation_stripping(mut self, enable: bool) -> Self {
        self.strip_punctuation = enable;
        self
    }

    pub fn with_emoji_stripping(mut self, enable: bool) -> Self {
        self.strip_emoji = enable;
        self
    }

    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true when the stop-word list is the built-in one.
    pub fn uses_default_stop_words(&self) -> bool {
        self.stop_words.len() == DEFAULT_STOP_WORDS.len()
            && self
                .stop_words
                .iter()
                .zip(DEFAULT_STOP_WORDS)
                .all(|(a, b)| a == b)
    }
}

/// How categorical values are numbered when encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryOrder {
    /// Codes follow the order in which values first appear in the column.
    #[default]
    FirstSeen,
    /// Codes follow the sorted order of the distinct values.
    Lexical,
}

/// Options for the numerical/categorical feature cleaner.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericalCleanOptions {
    /// Code assignment order for categorical columns.
    pub category_order: CategoryOrder,

    /// Treat empty or whitespace-only strings as missing in categorical columns.
    /// Default: false.
    pub blank_as_missing: bool,

    /// Required number of columns. `None` accepts any width.
    pub expected_width: Option<usize>,
}

impl NumericalCleanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category_order(mut self, order: CategoryOrder) -> Self {
        self.category_order = order;
        self
    }

    pub fn with_blank_as_missing(mut self, enable: bool) -> Self {
        self.blank_as_missing = enable;
        self
    }

    pub fn with_expected_width(mut self, width: usize) -> Self {
        self.expected_width = Some(width);
        self
    }
}
