//! Stress-index ranking and time-budgeted wellness recommendations.
//!
//! The crate turns behavioral telemetry into a per-person stress index,
//! ranks people by it, and picks for each person the set of wellness
//! interventions with the highest total benefit that fits a time budget.
//!
//! - **Score** ([`score`]): weighted, normalized combination of four
//!   signals into a stress index in [0, 10].
//! - **Rank** ([`rank`]): stable top-down merge sort by any numeric field.
//! - **Knapsack** ([`knapsack`]): memoized 0/1 knapsack over a validated
//!   intervention catalog; ties keep the exclude branch.
//! - **Recommend** ([`recommend`]): per-record budget adjustment and
//!   selection, optionally parallel with rayon.
//!
//! Around the core:
//!
//! - [`dataset`]: deterministic and seeded synthetic records.
//! - [`report`]: flat rows, CSV export and a terminal table.
//! - [`pipeline`]: the whole chain behind one call.
//!
//! # Example
//!
//! ```
//! use u_wellness::knapsack::Catalog;
//! use u_wellness::pipeline::{Pipeline, PipelineConfig};
//!
//! let out = Pipeline::run_generated(
//!     &Catalog::default_interventions(),
//!     &PipelineConfig::default(),
//! ).unwrap();
//!
//! assert_eq!(out.rows.len(), 22);
//! assert!(out.rows[0].stress_index >= out.rows[21].stress_index);
//! ```
//!
//! # Features
//!
//! - `parallel`: per-record recommendation with rayon.
//! - `serde`: `Serialize`/`Deserialize` on the data types.
//! - `wasm`: WebAssembly bindings.
//! - `cli`: the `wellness-report` binary.

pub mod dataset;
mod error;
pub mod knapsack;
pub mod pipeline;
pub mod rank;
pub mod recommend;
pub mod report;
pub mod score;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Result, WellnessError};
