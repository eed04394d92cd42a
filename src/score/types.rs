//! Person records before and after scoring.

/// Raw behavioral telemetry for one person.
///
/// Produced by a record source (see [`crate::dataset`]) and never mutated
/// by the pipeline; scoring produces a [`ScoredRecord`] copy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonRecord {
    /// Person identifier.
    pub id: u32,

    /// Display name.
    pub name: String,

    /// Average length of an uninterrupted focus block, in minutes.
    pub avg_continuous_minutes: f64,

    /// Number of meetings in the observation window.
    pub num_meetings: u32,

    /// Self-reported wellbeing on a 1–10 scale (higher is better).
    pub self_report: f64,

    /// Minutes elapsed since the last break.
    pub last_pause_minutes: f64,
}

impl PersonRecord {
    /// Creates a record from its raw fields.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        avg_continuous_minutes: f64,
        num_meetings: u32,
        self_report: f64,
        last_pause_minutes: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            avg_continuous_minutes,
            num_meetings,
            self_report,
            last_pause_minutes,
        }
    }
}

/// A [`PersonRecord`] with its stress score attached.
///
/// The score is assigned once by [`score_all`](super::score_all) and is
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredRecord {
    record: PersonRecord,
    stress_score: f64,
}

impl ScoredRecord {
    pub(crate) fn new(record: PersonRecord, stress_score: f64) -> Self {
        Self {
            record,
            stress_score,
        }
    }

    /// The underlying raw record.
    pub fn record(&self) -> &PersonRecord {
        &self.record
    }

    /// Person identifier.
    pub fn id(&self) -> u32 {
        self.record.id
    }

    /// The derived stress score.
    pub fn stress_score(&self) -> f64 {
        self.stress_score
    }

    /// Consumes the scored record, returning the raw record.
    pub fn into_record(self) -> PersonRecord {
        self.record
    }
}
