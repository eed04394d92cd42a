//! Per-record recommendation.
//!
//! [`Recommender`] applies the knapsack selector to every ranked record:
//! effective budget → selection → bundle.

use super::config::RecommendConfig;
use super::types::{EnrichedRecord, RecommendationBundle};
use crate::error::Result;
use crate::knapsack::{select, Catalog};
use crate::score::ScoredRecord;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, trace};

/// Executes the recommendation step.
///
/// # Usage
///
/// ```
/// use u_wellness::knapsack::Catalog;
/// use u_wellness::recommend::{RecommendConfig, Recommender};
/// use u_wellness::score::{score_all, PersonRecord};
///
/// let scored = score_all(&[PersonRecord::new(1, "Helena", 240.0, 9, 2.0, 300.0)]).unwrap();
/// let catalog = Catalog::default_interventions();
/// let enriched = Recommender::run(&scored, &catalog, &RecommendConfig::default()).unwrap();
/// assert_eq!(enriched[0].bundle().budget, 40);
/// ```
pub struct Recommender;

impl Recommender {
    /// Builds the recommendation for every record, preserving input order.
    ///
    /// # Errors
    ///
    /// Returns [`WellnessError::InvalidConfig`](crate::WellnessError::InvalidConfig)
    /// if `config` fails validation.
    pub fn run(
        ranked: &[ScoredRecord],
        catalog: &Catalog,
        config: &RecommendConfig,
    ) -> Result<Vec<EnrichedRecord>> {
        config.validate()?;
        let start = Instant::now();

        let enriched = if config.parallel {
            recommend_parallel(ranked, catalog, config)
        } else {
            ranked
                .iter()
                .map(|r| Self::recommend_one(r, catalog, config))
                .collect()
        };

        debug!(
            records = enriched.len(),
            catalog = catalog.len(),
            parallel = config.parallel,
            elapsed_us = start.elapsed().as_micros() as u64,
            "recommendations built"
        );
        Ok(enriched)
    }

    /// Builds the recommendation for a single record.
    pub fn recommend_one(
        record: &ScoredRecord,
        catalog: &Catalog,
        config: &RecommendConfig,
    ) -> EnrichedRecord {
        let budget = config.effective_budget(record.stress_score());
        let selection = select(catalog, i64::from(budget));
        let bundle = RecommendationBundle::from_selection(catalog, &selection, budget);
        trace!(
            id = record.id(),
            stress = record.stress_score(),
            budget,
            total_time = bundle.total_time,
            total_benefit = bundle.total_benefit,
            "record recommended"
        );
        EnrichedRecord::new(record.clone(), bundle)
    }
}

/// Convenience wrapper around [`Recommender::run`].
pub fn recommend(
    ranked: &[ScoredRecord],
    catalog: &Catalog,
    config: &RecommendConfig,
) -> Result<Vec<EnrichedRecord>> {
    Recommender::run(ranked, catalog, config)
}

#[cfg(feature = "parallel")]
fn recommend_parallel(
    ranked: &[ScoredRecord],
    catalog: &Catalog,
    config: &RecommendConfig,
) -> Vec<EnrichedRecord> {
    // Indexed parallel collect keeps input order.
    ranked
        .par_iter()
        .map(|r| Recommender::recommend_one(r, catalog, config))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn recommend_parallel(
    ranked: &[ScoredRecord],
    catalog: &Catalog,
    config: &RecommendConfig,
) -> Vec<EnrichedRecord> {
    ranked
        .iter()
        .map(|r| Recommender::recommend_one(r, catalog, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WellnessError;
    use crate::knapsack::InterventionItem;
    use crate::score::{score_all, PersonRecord};

    fn scored() -> Vec<ScoredRecord> {
        score_all(&[
            PersonRecord::new(8, "Helena", 240.0, 9, 2.0, 300.0),
            PersonRecord::new(1, "Alice", 120.0, 6, 4.0, 180.0),
            PersonRecord::new(9, "Igor", 30.0, 1, 9.0, 15.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_order_preserved() {
        let out = Recommender::run(
            &scored(),
            &Catalog::default_interventions(),
            &RecommendConfig::default(),
        )
        .unwrap();
        let ids: Vec<u32> = out.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![8, 1, 9]);
    }

    #[test]
    fn test_high_stress_gets_boosted_budget() {
        let out = Recommender::run(
            &scored(),
            &Catalog::default_interventions(),
            &RecommendConfig::default(),
        )
        .unwrap();
        assert!(out[0].stress_score() >= 7.0);
        assert_eq!(out[0].bundle().budget, 40);
        assert_eq!(out[1].bundle().budget, 30);
        assert_eq!(out[2].bundle().budget, 30);
        for r in &out {
            assert!(r.bundle().total_time <= r.bundle().budget);
        }
    }

    #[test]
    fn test_bundle_resolves_catalog_items() {
        let catalog = Catalog::default_interventions();
        let out = Recommender::run(&scored(), &catalog, &RecommendConfig::default()).unwrap();
        let bundle = out[1].bundle();
        assert_eq!(bundle.chosen_indices, vec![0, 2, 5, 6, 8]);
        assert_eq!(bundle.total_time, 30);
        assert_eq!(bundle.total_benefit, 19);
        for (item, &i) in bundle.chosen_items.iter().zip(&bundle.chosen_indices) {
            assert_eq!(item, &catalog.items()[i]);
        }
    }

    #[test]
    fn test_items_label() {
        let catalog = Catalog::new(vec![
            InterventionItem::new("walk", 10, 5),
            InterventionItem::new("tea", 5, 3),
        ])
        .unwrap();
        let enriched = Recommender::recommend_one(
            &scored()[2],
            &catalog,
            &RecommendConfig::default(),
        );
        assert_eq!(enriched.bundle().items_label(), "walk(10m); tea(5m)");
    }

    #[test]
    fn test_parallel_flag_gives_same_output() {
        let catalog = Catalog::default_interventions();
        let serial = Recommender::run(&scored(), &catalog, &RecommendConfig::default()).unwrap();
        let parallel = Recommender::run(
            &scored(),
            &catalog,
            &RecommendConfig::default().with_parallel(true),
        )
        .unwrap();
        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let err = recommend(
            &scored(),
            &Catalog::default_interventions(),
            &RecommendConfig::default().with_base_time_budget(0),
        )
        .unwrap_err();
        assert!(matches!(err, WellnessError::InvalidConfig(_)));
    }

    #[test]
    fn test_huge_base_budget_takes_whole_catalog() {
        let catalog = Catalog::default_interventions();
        let config = RecommendConfig::default().with_base_time_budget(u32::MAX);
        assert!(config.validate().is_ok());

        let out = recommend(&scored(), &catalog, &config).unwrap();
        // High stress is still capped at the ceiling.
        assert_eq!(out[0].bundle().budget, 60);
        assert!(out[0].bundle().total_time <= 60);
        for r in &out[1..] {
            assert_eq!(r.bundle().budget, u32::MAX);
            assert_eq!(r.bundle().chosen_indices, (0..catalog.len()).collect::<Vec<_>>());
            assert_eq!(r.bundle().total_time, 80);
            assert_eq!(r.bundle().total_benefit, 43);
        }
    }

    #[test]
    fn test_empty_input() {
        let out = recommend(
            &[],
            &Catalog::default_interventions(),
            &RecommendConfig::default(),
        )
        .unwrap();
        assert!(out.is_empty());
    }
}
