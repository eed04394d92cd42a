//! Stable ranking of records by a numeric field.
//!
//! The ranker is a top-down merge sort: split at the midpoint, order each
//! half, then merge by repeatedly taking the preferred front. On equal keys
//! the left (earlier) run always wins, which makes the sort stable.
//!
//! Records expose their sortable fields through the [`Keyed`] trait, so the
//! same ranker orders raw, scored and enriched records.

mod key;
mod merge;

pub use key::{Keyed, SortKey};
pub use merge::{sort, sort_indices, SortOrder};
