//! WebAssembly bindings.
//!
//! Records and report rows cross the boundary as plain JS objects whose
//! keys match the Rust field names.

use crate::knapsack::Catalog;
use crate::pipeline::{Pipeline, PipelineConfig};
use crate::recommend::RecommendConfig;
use crate::score::PersonRecord;
use wasm_bindgen::prelude::*;

/// Scores, ranks (highest stress first) and recommends for `records`
/// against the built-in catalog, returning the report rows.
#[wasm_bindgen(js_name = recommendRecords)]
pub fn recommend_records(records: JsValue, base_time_budget: u32) -> Result<JsValue, JsError> {
    let records: Vec<PersonRecord> = serde_wasm_bindgen::from_value(records)?;
    let config = PipelineConfig::default()
        .with_recommend(RecommendConfig::default().with_base_time_budget(base_time_budget));
    let out = Pipeline::run(&records, &Catalog::default_interventions(), &config)?;
    Ok(serde_wasm_bindgen::to_value(&out.rows)?)
}

/// The built-in intervention catalog.
#[wasm_bindgen(js_name = defaultCatalog)]
pub fn default_catalog() -> Result<JsValue, JsError> {
    Ok(serde_wasm_bindgen::to_value(
        Catalog::default_interventions().items(),
    )?)
}
