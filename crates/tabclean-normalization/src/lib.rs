//! Table cleaning for text and feature preprocessing.
//!
//! Two independent, stateless cleaners over Polars DataFrames:
//!
//! - **text**: rewrites a free-text column through an ordered pipeline
//!   (lower-casing, markup and URL removal, stop words, punctuation)
//! - **numerical**: imputes missing values (rounded mean for continuous
//!   columns, mode for categorical columns) and encodes categorical columns
//!   as integer codes
//!
//! Both take the input frame by reference and return a new frame with the
//! same height, column names and column order.
//!
//! # Example
//!
//! ```
//! use polars::prelude::*;
//! use tabclean_normalization::{clean_numerical, clean_text};
//!
//! let tweets = df!("text" => ["RT <b>Great</b> news!"]).unwrap();
//! let cleaned = clean_text(&tweets).unwrap();
//! assert_eq!(cleaned.column("text").unwrap().str().unwrap().get(0), Some(" great news"));
//!
//! let features = df!(
//!     "age" => [Some(1i64), Some(2), None, Some(3)],
//!     "city" => [Some("a"), Some("a"), Some("b"), None],
//! )
//! .unwrap();
//! let cleaned = clean_numerical(&features).unwrap();
//! assert_eq!(cleaned.column("age").unwrap().i64().unwrap().get(2), Some(2));
//! assert_eq!(cleaned.column("city").unwrap().i64().unwrap().get(3), Some(0));
//! ```

mod error;

pub mod numerical;
pub mod text;

// Error type
pub use error::{CleanError, Result};

// Text cleaning
pub use text::{TextPipeline, clean_text, clean_text_value, clean_text_with};

// Feature cleaning
pub use numerical::{
    clean_numerical, clean_numerical_with, column_mode, encode_categories, impute_mean,
};

// Options
pub use tabclean_model::{CategoryOrder, NumericalCleanOptions, TextCleanOptions};
