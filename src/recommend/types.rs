//! Recommendation output types.

use crate::knapsack::{Catalog, InterventionItem, Selection};
use crate::score::{PersonRecord, ScoredRecord};

/// Interventions chosen for one person.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecommendationBundle {
    /// Chosen items, in catalog order.
    pub chosen_items: Vec<InterventionItem>,
    /// Catalog indices of `chosen_items`.
    pub chosen_indices: Vec<usize>,
    /// Sum of the chosen time costs.
    pub total_time: u32,
    /// Sum of the chosen benefits.
    pub total_benefit: u64,
    /// Effective budget the selection ran with.
    pub budget: u32,
}

impl RecommendationBundle {
    /// Resolves a selection back to catalog items.
    pub fn from_selection(catalog: &Catalog, selection: &Selection, budget: u32) -> Self {
        let chosen_items: Vec<InterventionItem> = selection
            .chosen_indices
            .iter()
            .filter_map(|&i| catalog.get(i).cloned())
            .collect();
        let total_time = chosen_items.iter().map(|it| it.time_cost).sum();
        let total_benefit = chosen_items.iter().map(|it| u64::from(it.benefit)).sum();
        Self {
            chosen_items,
            chosen_indices: selection.chosen_indices.clone(),
            total_time,
            total_benefit,
            budget,
        }
    }

    /// `"name(Nm); name(Nm)"` rendering of the chosen items.
    pub fn items_label(&self) -> String {
        self.chosen_items
            .iter()
            .map(|it| format!("{}({}m)", it.name, it.time_cost))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// A scored record with its recommendation attached.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnrichedRecord {
    scored: ScoredRecord,
    bundle: RecommendationBundle,
}

impl EnrichedRecord {
    pub(crate) fn new(scored: ScoredRecord, bundle: RecommendationBundle) -> Self {
        Self { scored, bundle }
    }

    /// Person identifier.
    pub fn id(&self) -> u32 {
        self.scored.id()
    }

    /// The raw record.
    pub fn record(&self) -> &PersonRecord {
        self.scored.record()
    }

    /// The scored record.
    pub fn scored(&self) -> &ScoredRecord {
        &self.scored
    }

    /// The derived stress score.
    pub fn stress_score(&self) -> f64 {
        self.scored.stress_score()
    }

    /// The chosen interventions.
    pub fn bundle(&self) -> &RecommendationBundle {
        &self.bundle
    }
}
