//! Mode imputation and integer encoding for categorical columns.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tabclean_model::CategoryOrder;

/// Most frequent non-missing value.
///
/// Ties resolve to the smallest value in string order. Returns `None` when
/// every value is missing.
///
/// # Examples
///
/// ```
/// use tabclean_normalization::column_mode;
///
/// assert_eq!(column_mode(&[Some("b"), Some("a"), Some("b"), None]), Some("b"));
/// assert_eq!(column_mode(&[Some("b"), Some("a")]), Some("a"));
/// assert_eq!(column_mode(&[None, None]), None);
/// ```
pub fn column_mode<'a>(values: &[Option<&'a str>]) -> Option<&'a str> {
    let mut counts: BTreeMap<&'a str, usize> = BTreeMap::new();
    for &value in values.iter().flatten() {
        *counts.entry(value).or_insert(0) += 1;
    }

    // Ascending key order: only a strictly higher count replaces the best.
    let mut best: Option<(&'a str, usize)> = None;
    for (value, count) in counts {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Map each value to an integer code.
///
/// Equal values share a code. Codes start at zero and are assigned by first
/// appearance or by sorted order of the distinct values.
///
/// # Examples
///
/// ```
/// use tabclean_normalization::{CategoryOrder, encode_categories};
///
/// let values = ["b", "a", "b", "c"];
/// assert_eq!(encode_categories(&values, CategoryOrder::FirstSeen), vec![0, 1, 0, 2]);
/// assert_eq!(encode_categories(&values, CategoryOrder::Lexical), vec![1, 0, 1, 2]);
/// ```
pub fn encode_categories(values: &[&str], order: CategoryOrder) -> Vec<i64> {
    let mut codes: HashMap<&str, i64> = HashMap::new();
    match order {
        CategoryOrder::FirstSeen => {
            for &value in values {
                let next = codes.len() as i64;
                codes.entry(value).or_insert(next);
            }
        }
        CategoryOrder::Lexical => {
            let distinct: BTreeSet<&str> = values.iter().copied().collect();
            for (code, value) in distinct.into_iter().enumerate() {
                codes.insert(value, code as i64);
            }
        }
    }
    values.iter().map(|value| codes[value]).collect()
}
