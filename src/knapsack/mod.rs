//! 0/1 knapsack selection of wellness interventions.
//!
//! Given a validated [`Catalog`] of (time cost, benefit) items and a time
//! budget, [`select`] returns the benefit-maximizing subset whose total cost
//! fits the budget.
//!
//! # Tie-break
//!
//! At every state the subproblem that *excludes* the current item is solved
//! first and kept unless including the item is strictly better. Among
//! equal-benefit subsets the one reached through "exclude" branches wins.
//! [`select_iterative`] is the bottom-up table form with the same tie-break
//! and always returns the same selection.
//!
//! # Complexity
//!
//! O(n × capacity) time and space per call. The memo table is allocated per
//! call and dropped on return; no state is shared between selections.

mod solver;
mod types;

pub use solver::{select, select_iterative, Selection};
pub use types::{Catalog, InterventionItem};
