//! Weighted stress-score computation.

use super::types::{PersonRecord, ScoredRecord};
use crate::error::{Result, WellnessError};
use tracing::{debug, warn};

/// Weight of the continuous-focus component.
pub const FOCUS_WEIGHT: f64 = 0.45;
/// Weight of the meeting-load component.
pub const MEETING_WEIGHT: f64 = 0.25;
/// Weight of the inverse-wellbeing component.
pub const WELLBEING_WEIGHT: f64 = 0.20;
/// Weight of the recovery-deficit component.
pub const RECOVERY_WEIGHT: f64 = 0.10;

/// Focus minutes that map to a component value of 1.0.
pub const FOCUS_NORM_MINUTES: f64 = 240.0;
/// Meeting count that maps to a component value of 1.0.
pub const MEETING_NORM_COUNT: f64 = 10.0;
/// Minutes since last break at which the recovery deficit saturates.
pub const PAUSE_NORM_MINUTES: f64 = 240.0;

/// Lowest valid self-report value.
pub const SELF_REPORT_MIN: f64 = 1.0;
/// Highest valid self-report value.
pub const SELF_REPORT_MAX: f64 = 10.0;

/// Final multiplier applied to the weighted sum.
pub const SCORE_SCALE: f64 = 10.0;

/// The four normalized signals of a record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StressComponents {
    /// `avg_continuous_minutes / 240`, unclamped.
    pub focus: f64,
    /// `num_meetings / 10`, unclamped.
    pub meetings: f64,
    /// `(10 - self_report) / 10`.
    pub wellbeing_deficit: f64,
    /// `min(last_pause_minutes / 240, 1)`.
    pub recovery_deficit: f64,
}

impl StressComponents {
    /// Normalizes the raw signals of `record`.
    ///
    /// Does not validate; call [`validate_record`] first.
    pub fn from_record(record: &PersonRecord) -> Self {
        Self {
            focus: record.avg_continuous_minutes / FOCUS_NORM_MINUTES,
            meetings: f64::from(record.num_meetings) / MEETING_NORM_COUNT,
            wellbeing_deficit: (SELF_REPORT_MAX - record.self_report) / SELF_REPORT_MAX,
            recovery_deficit: (record.last_pause_minutes / PAUSE_NORM_MINUTES).min(1.0),
        }
    }

    /// Weighted sum of the components, before scaling.
    pub fn weighted_sum(&self) -> f64 {
        FOCUS_WEIGHT * self.focus
            + MEETING_WEIGHT * self.meetings
            + WELLBEING_WEIGHT * self.wellbeing_deficit
            + RECOVERY_WEIGHT * self.recovery_deficit
    }
}

/// Checks that every signal of `record` is finite and in range.
///
/// # Errors
///
/// Returns [`WellnessError::MalformedRecord`] naming the first bad field.
pub fn validate_record(record: &PersonRecord) -> Result<()> {
    let malformed = |field: &'static str, reason: String| WellnessError::MalformedRecord {
        id: record.id,
        field,
        reason,
    };

    for (field, value) in [
        ("avg_continuous_minutes", record.avg_continuous_minutes),
        ("last_pause_minutes", record.last_pause_minutes),
    ] {
        if !value.is_finite() {
            return Err(malformed(field, format!("is not a finite number ({value})")));
        }
        if value < 0.0 {
            return Err(malformed(field, format!("must be non-negative, got {value}")));
        }
    }

    let sr = record.self_report;
    if !sr.is_finite() || !(SELF_REPORT_MIN..=SELF_REPORT_MAX).contains(&sr) {
        return Err(malformed(
            "self_report",
            format!("must be within [{SELF_REPORT_MIN}, {SELF_REPORT_MAX}], got {sr}"),
        ));
    }

    Ok(())
}

/// Computes the stress score of a single record.
///
/// # Errors
///
/// Returns [`WellnessError::MalformedRecord`] if the record fails
/// [`validate_record`].
pub fn score(record: &PersonRecord) -> Result<f64> {
    validate_record(record)?;
    let raw = StressComponents::from_record(record).weighted_sum() * SCORE_SCALE;
    let rounded = round3(raw);
    if !(0.0..=SCORE_SCALE).contains(&rounded) {
        warn!(
            id = record.id,
            score = rounded,
            "stress score outside [0, 10] due to unclamped focus/meeting inputs"
        );
    }
    Ok(rounded)
}

/// Scores every record, returning a new vector in input order.
///
/// The batch fails on the first malformed record; no partial output is
/// returned.
pub fn score_all(records: &[PersonRecord]) -> Result<Vec<ScoredRecord>> {
    let scored = records
        .iter()
        .map(|r| score(r).map(|s| ScoredRecord::new(r.clone(), s)))
        .collect::<Result<Vec<_>>>()?;
    debug!(records = scored.len(), "scored records");
    Ok(scored)
}

/// Rounds to 3 decimals, half-to-even on the exact binary value.
fn round3(x: f64) -> f64 {
    format!("{x:.3}").parse().unwrap_or(x)
}
