//! Tests for cleaning options.

use tabclean_model::{CategoryOrder, DEFAULT_STOP_WORDS, NumericalCleanOptions, TextCleanOptions};

#[test]
fn text_defaults_target_text_column() {
    let options = TextCleanOptions::default();
    assert_eq!(options.column, "text");
    assert!(options.strip_punctuation);
    assert!(!options.strip_emoji);
    assert!(options.uses_default_stop_words());
    assert_eq!(options.stop_words.len(), DEFAULT_STOP_WORDS.len());
}

#[test]
fn stop_word_order_keeps_short_forms_first() {
    let position = |word: &str| DEFAULT_STOP_WORDS.iter().position(|w| *w == word).unwrap();
    assert!(position("it") < position("it's"));
    assert!(position("they") < position("they're"));
    assert_eq!(DEFAULT_STOP_WORDS.first(), Some(&"a"));
    assert_eq!(DEFAULT_STOP_WORDS.last(), Some(&"with"));
}

#[test]
fn text_builder_overrides() {
    let options = TextCleanOptions::new()
        .with_column("body")
        .with_punctuation_stripping(false)
        .with_emoji_stripping(true)
        .with_stop_words(["foo", "bar"]);
    assert_eq!(options.column, "body");
    assert!(!options.strip_punctuation);
    assert!(options.strip_emoji);
    assert_eq!(options.stop_words, vec!["foo".to_string(), "bar".to_string()]);
    assert!(!options.uses_default_stop_words());
}

#[test]
fn text_options_deserialize_partial_json() {
    let options: TextCleanOptions =
        serde_json::from_str(r#"{"column": "tweet", "strip_emoji": true}"#).unwrap();
    assert_eq!(options.column, "tweet");
    assert!(options.strip_emoji);
    assert!(options.strip_punctuation);
    assert!(options.uses_default_stop_words());
}

#[test]
fn numerical_defaults() {
    let options = NumericalCleanOptions::default();
    assert_eq!(options.category_order, CategoryOrder::FirstSeen);
    assert!(!options.blank_as_missing);
    assert_eq!(options.expected_width, None);
}

#[test]
fn numerical_options_round_trip_json() {
    let options = NumericalCleanOptions::new()
        .with_category_order(CategoryOrder::Lexical)
        .with_blank_as_missing(true)
        .with_expected_width(15);
    let json = serde_json::to_string(&options).unwrap();
    assert!(json.contains(r#""category_order":"lexical""#));
    let parsed: NumericalCleanOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, options);
}
