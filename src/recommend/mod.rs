//! Recommendation orchestration.
//!
//! For every ranked record: compute the effective time budget from its
//! stress score, run the knapsack selector against the shared catalog, and
//! attach the resulting [`RecommendationBundle`].
//!
//! Records are independent of one another, so with the `parallel` feature
//! and [`RecommendConfig::parallel`] set, they are processed with rayon.
//! Output order always matches input order.

mod config;
mod runner;
mod types;

pub use config::RecommendConfig;
pub use runner::{recommend, Recommender};
pub use types::{EnrichedRecord, RecommendationBundle};
