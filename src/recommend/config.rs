//! Recommendation configuration.
//!
//! [`RecommendConfig`] holds the base time budget and the high-stress
//! budget adjustment.

use crate::error::{Result, WellnessError};

/// Configuration for the recommendation step.
///
/// # Defaults
///
/// ```
/// use u_wellness::recommend::RecommendConfig;
///
/// let config = RecommendConfig::default();
/// assert_eq!(config.base_time_budget, 30);
/// assert_eq!(config.effective_budget(7.0), 40);
/// assert_eq!(config.effective_budget(6.999), 30);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_wellness::recommend::RecommendConfig;
///
/// let config = RecommendConfig::default()
///     .with_base_time_budget(55)
///     .with_parallel(true);
/// assert_eq!(config.effective_budget(9.8), 60);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecommendConfig {
    /// Minutes available for interventions per person.
    pub base_time_budget: u32,

    /// Stress score at or above which the budget is raised.
    pub high_stress_threshold: f64,

    /// Extra minutes granted to high-stress records.
    pub high_stress_boost: u32,

    /// Ceiling on the raised budget.
    ///
    /// Applied to high-stress records only, so a high-stress record can end
    /// up with less than `base_time_budget` when the base exceeds it.
    pub max_time_budget: u32,

    /// Whether to process records in parallel using rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled. Output order
    /// is the same either way.
    pub parallel: bool,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            base_time_budget: 30,
            high_stress_threshold: 7.0,
            high_stress_boost: 10,
            max_time_budget: 60,
            parallel: false,
        }
    }
}

impl RecommendConfig {
    /// Sets the base time budget in minutes.
    pub fn with_base_time_budget(mut self, minutes: u32) -> Self {
        self.base_time_budget = minutes;
        self
    }

    /// Sets the stress score at or above which the budget is raised.
    pub fn with_high_stress_threshold(mut self, threshold: f64) -> Self {
        self.high_stress_threshold = threshold;
        self
    }

    /// Sets the extra minutes granted to high-stress records.
    pub fn with_high_stress_boost(mut self, minutes: u32) -> Self {
        self.high_stress_boost = minutes;
        self
    }

    /// Sets the ceiling on the raised budget.
    pub fn with_max_time_budget(mut self, minutes: u32) -> Self {
        self.max_time_budget = minutes;
        self
    }

    /// Sets whether records are processed in parallel.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Budget used for a record with the given stress score.
    ///
    /// `min(base + boost, max)` when `stress_score >= threshold`, otherwise
    /// the base budget.
    pub fn effective_budget(&self, stress_score: f64) -> u32 {
        if stress_score >= self.high_stress_threshold {
            self.base_time_budget
                .saturating_add(self.high_stress_boost)
                .min(self.max_time_budget)
        } else {
            self.base_time_budget
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.base_time_budget == 0 {
            return Err(WellnessError::InvalidConfig(
                "base_time_budget must be positive".into(),
            ));
        }
        if !self.high_stress_threshold.is_finite() {
            return Err(WellnessError::InvalidConfig(
                "high_stress_threshold must be finite".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = RecommendConfig::default();
        assert_eq!(config.base_time_budget, 30);
        assert!((config.high_stress_threshold - 7.0).abs() < 1e-12);
        assert_eq!(config.high_stress_boost, 10);
        assert_eq!(config.max_time_budget, 60);
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_effective_budget_threshold_is_inclusive() {
        let config = RecommendConfig::default();
        assert_eq!(config.effective_budget(7.0), 40);
        assert_eq!(config.effective_budget(9.8), 40);
        assert_eq!(config.effective_budget(6.999), 30);
        assert_eq!(config.effective_budget(0.0), 30);
    }

    #[test]
    fn test_effective_budget_is_capped() {
        let config = RecommendConfig::default().with_base_time_budget(55);
        assert_eq!(config.effective_budget(8.0), 60);
        assert_eq!(config.effective_budget(2.0), 55);
    }

    #[test]
    fn test_ceiling_applies_to_high_stress_only() {
        let config = RecommendConfig::default().with_base_time_budget(90);
        assert_eq!(config.effective_budget(8.0), 60);
        assert_eq!(config.effective_budget(1.0), 90);
    }

    #[test]
    fn test_builder_sets_adjustment() {
        let config = RecommendConfig::default()
            .with_high_stress_threshold(8.5)
            .with_high_stress_boost(20)
            .with_max_time_budget(45);
        assert!(config.validate().is_ok());
        assert_eq!(config.effective_budget(8.4), 30);
        assert_eq!(config.effective_budget(8.5), 45);

        let config = config.with_max_time_budget(100);
        assert_eq!(config.effective_budget(9.0), 50);
    }

    #[test]
    fn test_validate_zero_budget() {
        let config = RecommendConfig::default().with_base_time_budget(0);
        assert!(matches!(
            config.validate(),
            Err(WellnessError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_nan_threshold() {
        let config = RecommendConfig {
            high_stress_threshold: f64::NAN,
            ..RecommendConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
