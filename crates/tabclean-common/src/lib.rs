//! Shared utilities for tabclean crates.
//!
//! This crate provides Polars helpers used across the workspace: dtype
//! classification for feature columns, missing-value aware float access,
//! and value formatting for diagnostics.

pub mod series;

// Re-export commonly used functions at crate root for convenience
pub use series::{
    ColumnKind, column_kind, float_values, format_numeric, is_numeric_dtype, non_blank,
};
