//! Numeric reductions shared by the report builders.

use crate::error::ReportError;

/// Rounds to one decimal place, halves away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Mean of `count` values summing to `total`, rounded to one decimal.
///
/// The mean of zero values is undefined and fails rather than defaulting
/// to zero.
pub fn mean(total: f64, count: usize) -> Result<f64, ReportError> {
    if count == 0 {
        return Err(ReportError::ZeroCount);
    }
    Ok(round1(total / count as f64))
}

/// Index and value of the smallest selected value.
///
/// Comparison is strict, so on ties the earliest record wins.
pub fn min_entry<T, V, F>(items: &[T], value: F) -> Option<(usize, V)>
where
    V: PartialOrd + Copy,
    F: Fn(&T) -> V,
{
    let mut records = items.iter().enumerate();
    let (index, first) = records.next()?;
    let mut best = (index, value(first));
    for (index, item) in records {
        let candidate = value(item);
        if candidate < best.1 {
            best = (index, candidate);
        }
    }
    Some(best)
}

/// Index and value of the largest selected value.
///
/// Comparison is strict, so on ties the earliest record wins.
pub fn max_entry<T, V, F>(items: &[T], value: F) -> Option<(usize, V)>
where
    V: PartialOrd + Copy,
    F: Fn(&T) -> V,
{
    let mut records = items.iter().enumerate();
    let (index, first) = records.next()?;
    let mut best = (index, value(first));
    for (index, item) in records {
        let candidate = value(item);
        if candidate > best.1 {
            best = (index, candidate);
        }
    }
    Some(best)
}

/// Every index whose selected value equals `target`, in input order.
pub fn positions_of<T, V, F>(items: &[T], target: V, value: F) -> Vec<usize>
where
    V: PartialEq + Copy,
    F: Fn(&T) -> V,
{
    items
        .iter()
        .enumerate()
        .filter(|&(_, item)| value(item) == target)
        .map(|(index, _)| index)
        .collect()
}
