//! Free-text column cleaning.
//!
//! The pipeline runs in a fixed order and each step sees the output of the
//! previous one:
//!
//! 1. lower-case
//! 2. strip HTML tags
//! 3. decode `&amp;`, `&gt;`, `&lt;`, `&quot;`
//! 4. collapse escaped apostrophes
//! 5. drop URL-like tokens
//! 6. drop every `rt` substring (also inside words: "party" becomes "pay")
//! 7. drop astral-plane symbols, when enabled
//! 8. drop stop words
//! 9. drop punctuation, when enabled
//! 10. drop `@handle` tokens
//!
//! Whitespace left behind by removals is kept as is.

mod patterns;

use std::sync::LazyLock;

use polars::prelude::{Column, DataFrame, DataType, IntoColumn, IntoSeries, StringChunked};
use regex::Regex;
use tabclean_model::TextCleanOptions;

use crate::error::{CleanError, Result};
use patterns::{
    ASTRAL_REGEX, DEFAULT_STOP_WORD_REGEX, ESCAPED_APOSTROPHE_REGEX, HANDLE_REGEX,
    HTML_TAG_REGEX, PUNCTUATION_REGEX, RETWEET_MARKER, remove_url_tokens, replace_entities,
    stop_word_regex,
};

static DEFAULT_PIPELINE: LazyLock<TextPipeline> = LazyLock::new(TextPipeline::default);

/// A text pipeline compiled from [`TextCleanOptions`].
#[derive(Debug, Clone)]
pub struct TextPipeline {
    stop_words: Option<Regex>,
    strip_punctuation: bool,
    strip_emoji: bool,
}

impl Default for TextPipeline {
    fn default() -> Self {
        Self {
            stop_words: Some(DEFAULT_STOP_WORD_REGEX.clone()),
            strip_punctuation: true,
            strip_emoji: false,
        }
    }
}

impl TextPipeline {
    /// Compile a pipeline, reusing the built-in stop-word pattern when possible.
    pub fn from_options(options: &TextCleanOptions) -> Result<Self> {
        let stop_words = if options.uses_default_stop_words() {
            Some(DEFAULT_STOP_WORD_REGEX.clone())
        } else {
            stop_word_regex(options.stop_words.iter().map(String::as_str))?
        };
        Ok(Self {
            stop_words,
            strip_punctuation: options.strip_punctuation,
            strip_emoji: options.strip_emoji,
        })
    }

    /// Run every step on a single value.
    pub fn clean(&self, raw: &str) -> String {
        let text = raw.to_lowercase();
        let text = HTML_TAG_REGEX.replace_all(&text, "");
        let text = replace_entities(&text);
        let text = ESCAPED_APOSTROPHE_REGEX.replace_all(&text, "'");
        let text = remove_url_tokens(&text);
        let mut text = text.replace(RETWEET_MARKER, "");

        if self.strip_emoji {
            text = ASTRAL_REGEX.replace_all(&text, "").into_owned();
        }
        if let Some(stop_words) = &self.stop_words {
            text = stop_words.replace_all(&text, "").into_owned();
        }
        if self.strip_punctuation {
            text = PUNCTUATION_REGEX.replace_all(&text, "").into_owned();
        }
        HANDLE_REGEX.replace_all(&text, "").into_owned()
    }
}

/// Clean a single value with the default options.
///
/// # Examples
///
/// ```
/// use tabclean_normalization::clean_text_value;
///
/// assert_eq!(clean_text_value("Thanks &amp; see you"), "thanks  see you");
/// assert_eq!(clean_text_value("what a party"), "what  pay");
/// ```
pub fn clean_text_value(raw: &str) -> String {
    DEFAULT_PIPELINE.clean(raw)
}

/// Clean the `"text"` column of a DataFrame with the default options.
pub fn clean_text(df: &DataFrame) -> Result<DataFrame> {
    clean_text_with(df, &TextCleanOptions::default())
}

/// Clean the configured text column of a DataFrame.
///
/// Returns a new DataFrame with the same columns in the same order; only
/// the text column is rewritten. Null cells stay null.
pub fn clean_text_with(df: &DataFrame, options: &TextCleanOptions) -> Result<DataFrame> {
    let target = options.column.as_str();
    let source = df
        .column(target)
        .map_err(|_| CleanError::MissingColumn(target.to_string()))?;

    if source.dtype() != &DataType::String {
        return Err(CleanError::UnsupportedType {
            column: target.to_string(),
            dtype: source.dtype().to_string(),
        });
    }

    let pipeline = TextPipeline::from_options(options)?;
    let values = source.str()?;
    let cleaned: StringChunked = values
        .into_iter()
        .map(|value| value.map(|text| pipeline.clean(text)))
        .collect();
    let cleaned = cleaned.with_name(source.name().clone()).into_series();

    tracing::debug!(
        column = %target,
        rows = df.height(),
        nulls = values.null_count(),
        "Cleaned text column"
    );

    let columns: Vec<Column> = df
        .get_columns()
        .iter()
        .map(|column| {
            if column.name().as_str() == target {
                cleaned.clone().into_column()
            } else {
                column.clone()
            }
        })
        .collect();

    DataFrame::new(columns).map_err(CleanError::Polars)
}
