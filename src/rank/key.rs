//! Sortable record fields.

use crate::error::WellnessError;
use crate::recommend::EnrichedRecord;
use crate::score::{PersonRecord, ScoredRecord};
use std::fmt;
use std::str::FromStr;

/// A numeric record field the ranker can order by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SortKey {
    Id,
    AvgContinuousMinutes,
    NumMeetings,
    SelfReport,
    LastPauseMinutes,
    StressScore,
    RecommendedTotalTime,
    RecommendedTotalBenefit,
}

impl SortKey {
    /// All keys, in column order.
    pub const ALL: [SortKey; 8] = [
        SortKey::Id,
        SortKey::AvgContinuousMinutes,
        SortKey::NumMeetings,
        SortKey::SelfReport,
        SortKey::LastPauseMinutes,
        SortKey::StressScore,
        SortKey::RecommendedTotalTime,
        SortKey::RecommendedTotalBenefit,
    ];

    /// Column name of this key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::AvgContinuousMinutes => "avg_continuous_minutes",
            SortKey::NumMeetings => "num_meetings",
            SortKey::SelfReport => "self_report",
            SortKey::LastPauseMinutes => "last_pause_minutes",
            SortKey::StressScore => "stress_score",
            SortKey::RecommendedTotalTime => "recommended_total_time",
            SortKey::RecommendedTotalBenefit => "recommended_total_benefit",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = WellnessError;

    /// Parses a column name. `stress_index` is accepted as an alias of
    /// `stress_score`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "stress_index" {
            return Ok(SortKey::StressScore);
        }
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| WellnessError::KeyMismatch {
                key: s.to_string(),
                record_id: None,
            })
    }
}

/// A record with numeric fields addressable by [`SortKey`].
pub trait Keyed {
    /// Identifier reported in [`WellnessError::KeyMismatch`].
    fn record_id(&self) -> u32;

    /// Value of `key` on this record, or `None` if the record type does
    /// not carry that field.
    fn key_value(&self, key: SortKey) -> Option<f64>;
}

impl Keyed for PersonRecord {
    fn record_id(&self) -> u32 {
        self.id
    }

    fn key_value(&self, key: SortKey) -> Option<f64> {
        match key {
            SortKey::Id => Some(f64::from(self.id)),
            SortKey::AvgContinuousMinutes => Some(self.avg_continuous_minutes),
            SortKey::NumMeetings => Some(f64::from(self.num_meetings)),
            SortKey::SelfReport => Some(self.self_report),
            SortKey::LastPauseMinutes => Some(self.last_pause_minutes),
            SortKey::StressScore
            | SortKey::RecommendedTotalTime
            | SortKey::RecommendedTotalBenefit => None,
        }
    }
}

impl Keyed for ScoredRecord {
    fn record_id(&self) -> u32 {
        self.id()
    }

    fn key_value(&self, key: SortKey) -> Option<f64> {
        match key {
            SortKey::StressScore => Some(self.stress_score()),
            _ => self.record().key_value(key),
        }
    }
}

impl Keyed for EnrichedRecord {
    fn record_id(&self) -> u32 {
        self.id()
    }

    fn key_value(&self, key: SortKey) -> Option<f64> {
        match key {
            SortKey::RecommendedTotalTime => Some(f64::from(self.bundle().total_time)),
            SortKey::RecommendedTotalBenefit => Some(self.bundle().total_benefit as f64),
            _ => self.scored().key_value(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_key() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_parse_alias_and_unknown() {
        assert_eq!("stress_index".parse::<SortKey>().unwrap(), SortKey::StressScore);
        match "salary".parse::<SortKey>() {
            Err(WellnessError::KeyMismatch { key, record_id }) => {
                assert_eq!(key, "salary");
                assert_eq!(record_id, None);
            }
            other => panic!("expected KeyMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_raw_record_has_no_stress_score() {
        let r = PersonRecord::new(3, "Carolina", 210.0, 8, 3.0, 240.0);
        assert_eq!(r.key_value(SortKey::NumMeetings), Some(8.0));
        assert_eq!(r.key_value(SortKey::StressScore), None);
    }
}
