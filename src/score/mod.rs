//! Stress-index derivation.
//!
//! Collapses four behavioral signals into a single scalar in [0, 10]:
//!
//! | Signal | Normalization | Weight |
//! |--------|---------------|--------|
//! | continuous focus minutes | `x / 240`, unclamped | 0.45 |
//! | meetings | `x / 10`, unclamped | 0.25 |
//! | self-reported wellbeing (1–10) | `(10 - x) / 10` | 0.20 |
//! | minutes since last break | `min(x / 240, 1)` | 0.10 |
//!
//! The weighted sum is scaled by 10 and rounded to three decimals.
//! The focus and meeting components are intentionally left unclamped, so
//! extreme inputs (more than 240 focus minutes or 10 meetings) can score
//! above 10. This is accepted, not rejected.
//!
//! Scoring is applied per record with no cross-record dependency.

mod engine;
mod types;

pub use engine::{
    score, score_all, validate_record, StressComponents, FOCUS_NORM_MINUTES, FOCUS_WEIGHT,
    MEETING_NORM_COUNT, MEETING_WEIGHT, PAUSE_NORM_MINUTES, RECOVERY_WEIGHT, SCORE_SCALE,
    SELF_REPORT_MAX, SELF_REPORT_MIN, WELLBEING_WEIGHT,
};
pub use types::{PersonRecord, ScoredRecord};
