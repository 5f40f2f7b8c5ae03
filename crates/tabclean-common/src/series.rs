//! Polars series and dtype utility functions.
//!
//! Feature columns are classified from their runtime dtype rather than a
//! declared schema, so every cleaner goes through [`column_kind`].

use polars::prelude::{DataType, Float64Chunked, PolarsResult, Series};

/// How a feature column is treated by the cleaners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// String-valued column: mode imputation and integer encoding.
    Categorical,
    /// Integer or float column: mean imputation.
    Continuous,
    /// Any other dtype (booleans, dates, nested types).
    Unsupported,
}

/// Returns true for integer and floating-point dtypes.
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Classifies a column by its dtype.
///
/// # Examples
///
/// ```
/// use polars::prelude::DataType;
/// use tabclean_common::{ColumnKind, column_kind};
///
/// assert_eq!(column_kind(&DataType::String), ColumnKind::Categorical);
/// assert_eq!(column_kind(&DataType::Int32), ColumnKind::Continuous);
/// assert_eq!(column_kind(&DataType::Boolean), ColumnKind::Unsupported);
/// ```
pub fn column_kind(dtype: &DataType) -> ColumnKind {
    if matches!(dtype, DataType::String) {
        ColumnKind::Categorical
    } else if is_numeric_dtype(dtype) {
        ColumnKind::Continuous
    } else {
        ColumnKind::Unsupported
    }
}

/// Reads a numeric series as `f64` values, treating `NaN` as missing.
///
/// The returned array keeps the series name. Callers must check
/// [`is_numeric_dtype`] first; other dtypes fail the cast or produce nulls.
pub fn float_values(series: &Series) -> PolarsResult<Float64Chunked> {
    let cast = series.cast(&DataType::Float64)?;
    let values: Float64Chunked = cast
        .f64()?
        .into_iter()
        .map(|value| value.filter(|v| !v.is_nan()))
        .collect();
    Ok(values.with_name(series.name().clone()))
}

/// Returns the value unless it is empty or whitespace-only.
pub fn non_blank(value: &str) -> Option<&str> {
    if value.trim().is_empty() { None } else { Some(value) }
}

/// Formats a floating-point number as a string without trailing zeros after decimal.
///
/// Integer-valued floats like 40.0 are formatted as "40", not "4".
///
/// # Examples
///
/// ```
/// use tabclean_common::format_numeric;
///
/// assert_eq!(format_numeric(2.0), "2");
/// assert_eq!(format_numeric(1.50), "1.5");
/// assert_eq!(format_numeric(40.0), "40");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    // Only trim trailing zeros if there's a decimal point
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        s
    }
}
