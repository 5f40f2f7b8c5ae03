//! Feature table cleaning.
//!
//! Each column is handled on its own, in column order, based on its dtype:
//! string columns are categorical (mode imputation, then integer codes) and
//! integer or float columns are continuous (rounded-mean imputation).

mod encoding;
mod imputation;

use polars::prelude::{Column, DataFrame, DataType, IntoColumn, NamedFrom, Series};
use tabclean_common::{ColumnKind, column_kind, non_blank};
use tabclean_model::NumericalCleanOptions;

use crate::error::{CleanError, Result};

pub use encoding::{column_mode, encode_categories};
pub use imputation::impute_mean;

/// Clean a feature table with the default options.
pub fn clean_numerical(df: &DataFrame) -> Result<DataFrame> {
    clean_numerical_with(df, &NumericalCleanOptions::default())
}

/// Impute and encode every column of a feature table.
///
/// Returns a new DataFrame with the same height and column order. Fails on
/// the first column that is empty or has an unsupported dtype.
pub fn clean_numerical_with(df: &DataFrame, options: &NumericalCleanOptions) -> Result<DataFrame> {
    if let Some(expected) = options.expected_width
        && df.width() != expected
    {
        return Err(CleanError::ShapeMismatch {
            expected,
            actual: df.width(),
        });
    }

    let mut columns: Vec<Column> = Vec::with_capacity(df.width());
    for column in df.get_columns() {
        let series = column.as_materialized_series();
        // An untyped all-null column has nothing to impute from either.
        if series.dtype() == &DataType::Null {
            return Err(CleanError::EmptyColumn(series.name().to_string()));
        }
        let cleaned = match column_kind(series.dtype()) {
            ColumnKind::Categorical => encode_column(series, options)?,
            ColumnKind::Continuous => impute_mean(series)?,
            ColumnKind::Unsupported => {
                return Err(CleanError::UnsupportedType {
                    column: series.name().to_string(),
                    dtype: series.dtype().to_string(),
                });
            }
        };
        columns.push(cleaned.into_column());
    }

    tracing::debug!(
        rows = df.height(),
        columns = df.width(),
        "Cleaned feature table"
    );

    DataFrame::new(columns).map_err(CleanError::Polars)
}

/// Fill a string column with its mode and replace values by integer codes.
fn encode_column(series: &Series, options: &NumericalCleanOptions) -> Result<Series> {
    let values: Vec<Option<&str>> = series
        .str()?
        .into_iter()
        .map(|value| {
            if options.blank_as_missing {
                value.and_then(non_blank)
            } else {
                value
            }
        })
        .collect();

    let Some(mode) = column_mode(&values) else {
        return Err(CleanError::EmptyColumn(series.name().to_string()));
    };

    let missing = values.iter().filter(|value| value.is_none()).count();
    let filled: Vec<&str> = values.iter().map(|value| value.unwrap_or(mode)).collect();
    let codes = encode_categories(&filled, options.category_order);
    let categories = codes.iter().max().map_or(0, |max| max + 1);

    tracing::debug!(
        column = %series.name(),
        mode,
        missing,
        categories,
        "Encoded categorical column"
    );
    if categories == 1 {
        tracing::warn!(
            column = %series.name(),
            "Categorical column has a single value after imputation"
        );
    }

    Ok(Series::new(series.name().clone(), codes))
}
