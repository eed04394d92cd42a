//! Top-down merge sort over keyed records.

use super::key::{Keyed, SortKey};
use crate::error::{Result, WellnessError};

/// Direction of the ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortOrder {
    /// Smallest key first.
    Ascending,
    /// Largest key first.
    #[default]
    Descending,
}

impl SortOrder {
    /// Whether key `a` must be placed strictly before key `b`.
    fn precedes(self, a: f64, b: f64) -> bool {
        match self {
            SortOrder::Ascending => a < b,
            SortOrder::Descending => a > b,
        }
    }
}

/// Returns the indices of `records` in sorted order.
///
/// # Errors
///
/// Returns [`WellnessError::KeyMismatch`] if some record does not carry
/// `key` or holds a NaN for it.
pub fn sort_indices<T: Keyed>(records: &[T], key: SortKey, order: SortOrder) -> Result<Vec<usize>> {
    let keyed = records
        .iter()
        .enumerate()
        .map(|(i, r)| match r.key_value(key) {
            Some(v) if !v.is_nan() => Ok((v, i)),
            _ => Err(WellnessError::KeyMismatch {
                key: key.to_string(),
                record_id: Some(r.record_id()),
            }),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(merge_sort(keyed, order)
        .into_iter()
        .map(|(_, i)| i)
        .collect())
}

/// Returns a new, stably sorted copy of `records`.
///
/// The input slice is left untouched. Sequences of length 0 or 1 are
/// returned as-is.
pub fn sort<T: Keyed + Clone>(records: &[T], key: SortKey, order: SortOrder) -> Result<Vec<T>> {
    Ok(sort_indices(records, key, order)?
        .into_iter()
        .map(|i| records[i].clone())
        .collect())
}

fn merge_sort(mut items: Vec<(f64, usize)>, order: SortOrder) -> Vec<(f64, usize)> {
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, order);
    let right = merge_sort(right, order);
    merge(left, right, order)
}

fn merge(
    left: Vec<(f64, usize)>,
    right: Vec<(f64, usize)>,
    order: SortOrder,
) -> Vec<(f64, usize)> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        // Right front wins only when strictly preferred; ties keep left.
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => order.precedes(r.0, l.0),
            _ => break,
        };
        if take_right {
            merged.extend(right.next());
        } else {
            merged.extend(left.next());
        }
    }
    merged.extend(left);
    merged.extend(right);
    merged
}
