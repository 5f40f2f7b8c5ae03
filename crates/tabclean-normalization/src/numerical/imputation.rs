//! Mean imputation for continuous columns.

use polars::prelude::{ChunkAgg, NamedFrom, Series};
use tabclean_common::{float_values, format_numeric};

use crate::error::{CleanError, Result};

/// Fill missing cells of a numeric series with the mean of its present values.
///
/// The mean is rounded to the nearest integer, ties to even (2.5 becomes 2).
/// Present values and the series dtype are left unchanged. `NaN` counts as
/// missing in float columns.
pub fn impute_mean(series: &Series) -> Result<Series> {
    let name = series.name().to_string();
    let values = float_values(series)?;

    let missing = values.null_count();
    let count = values.len() - missing;
    if count == 0 {
        return Err(CleanError::EmptyColumn(name));
    }

    let sum = values.sum().unwrap_or(0.0);
    let fill = (sum / count as f64).round_ties_even();

    tracing::debug!(
        column = %name,
        fill = %format_numeric(fill),
        missing,
        "Imputed continuous column"
    );

    if missing == 0 {
        return Ok(series.clone());
    }

    let filler = Series::new(series.name().clone(), &[fill])
        .cast(series.dtype())?
        .new_from_index(0, series.len());
    let present = values.is_not_null();
    Ok(series.zip_with(&present, &filler)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_half_to_even() {
        let series = Series::new("x".into(), &[Some(2.0), Some(3.0), None]);
        let filled = impute_mean(&series).unwrap();
        assert_eq!(filled.f64().unwrap().get(2), Some(2.0));

        let series = Series::new("x".into(), &[Some(3.0), Some(4.0), None]);
        let filled = impute_mean(&series).unwrap();
        assert_eq!(filled.f64().unwrap().get(2), Some(4.0));
    }

    #[test]
    fn test_keeps_present_values_unrounded() {
        let series = Series::new("x".into(), &[Some(1.25), None, Some(2.5)]);
        let filled = impute_mean(&series).unwrap();
        let values: Vec<_> = filled.f64().unwrap().into_iter().collect();
        assert_eq!(values, vec![Some(1.25), Some(2.0), Some(2.5)]);
    }

    #[test]
    fn test_nan_is_missing() {
        let series = Series::new("x".into(), &[Some(4.0), Some(f64::NAN), Some(6.0)]);
        let filled = impute_mean(&series).unwrap();
        assert_eq!(filled.f64().unwrap().get(1), Some(5.0));
    }

    #[test]
    fn test_no_missing_returns_same_values() {
        let series = Series::new("x".into(), &[1i32, 2, 3]);
        let filled = impute_mean(&series).unwrap();
        assert!(filled.equals(&series));
    }

    #[test]
    fn test_all_missing_fails() {
        let series = Series::new("x".into(), &[None::<f64>, None]);
        assert!(matches!(
            impute_mean(&series),
            Err(CleanError::EmptyColumn(name)) if name == "x"
        ));
    }
}
