//! End-to-end pipeline: score → rank → recommend → report rows.

use crate::dataset;
use crate::error::{Result, WellnessError};
use crate::knapsack::Catalog;
use crate::rank::{sort, SortKey, SortOrder};
use crate::recommend::{recommend, EnrichedRecord, RecommendConfig};
use crate::report::{self, ReportRow};
use crate::score::{score_all, PersonRecord};
use std::time::Instant;
use tracing::{debug, info};

/// Configuration for a full pipeline run.
///
/// ```
/// use u_wellness::pipeline::PipelineConfig;
/// use u_wellness::rank::SortOrder;
///
/// let config = PipelineConfig::default()
///     .with_n_records(40)
///     .with_sort_order(SortOrder::Ascending);
/// assert_eq!(config.recommend.base_time_budget, 30);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PipelineConfig {
    /// Number of synthetic records to generate in [`Pipeline::run_generated`].
    pub n_records: usize,

    /// Field to rank by.
    pub sort_key: SortKey,

    /// Ranking direction.
    pub sort_order: SortOrder,

    /// Recommendation settings.
    pub recommend: RecommendConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            n_records: dataset::BASE_LEN,
            sort_key: SortKey::StressScore,
            sort_order: SortOrder::Descending,
            recommend: RecommendConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Sets the number of generated records.
    pub fn with_n_records(mut self, n: usize) -> Self {
        self.n_records = n;
        self
    }

    /// Sets the ranking direction.
    pub fn with_sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }

    /// Sets the ranking field.
    pub fn with_sort_key(mut self, key: SortKey) -> Self {
        self.sort_key = key;
        self
    }

    /// Sets the recommendation settings.
    pub fn with_recommend(mut self, recommend: RecommendConfig) -> Self {
        self.recommend = recommend;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if matches!(
            self.sort_key,
            SortKey::RecommendedTotalTime | SortKey::RecommendedTotalBenefit
        ) {
            return Err(WellnessError::InvalidConfig(format!(
                "cannot rank by `{}` before recommendations exist",
                self.sort_key
            )));
        }
        self.recommend.validate()
    }
}

/// Output of a pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    /// Enriched records in ranked order.
    pub records: Vec<EnrichedRecord>,
    /// Report rows, one per record, same order.
    pub rows: Vec<ReportRow>,
}

/// Executes the full pipeline.
pub struct Pipeline;

impl Pipeline {
    /// Runs the pipeline over caller-supplied records.
    pub fn run(
        records: &[PersonRecord],
        catalog: &Catalog,
        config: &PipelineConfig,
    ) -> Result<PipelineOutput> {
        config.validate()?;
        let start = Instant::now();

        let scored = score_all(records)?;
        let ranked = sort(&scored, config.sort_key, config.sort_order)?;
        debug!(
            key = %config.sort_key,
            order = ?config.sort_order,
            "records ranked"
        );
        let enriched = recommend(&ranked, catalog, &config.recommend)?;
        let rows = report::rows(&enriched);

        info!(
            records = enriched.len(),
            budget = config.recommend.base_time_budget,
            elapsed_us = start.elapsed().as_micros() as u64,
            "pipeline finished"
        );
        Ok(PipelineOutput {
            records: enriched,
            rows,
        })
    }

    /// Generates `config.n_records` synthetic records and runs the pipeline.
    pub fn run_generated(catalog: &Catalog, config: &PipelineConfig) -> Result<PipelineOutput> {
        Self::run(&dataset::generate(config.n_records), catalog, config)
    }
}
