//! Flat tabular report of enriched records.
//!
//! [`rows`] projects enriched records onto the report columns;
//! [`write_csv`] and [`save_csv`] export them, [`render_table`] formats the
//! first few rows for a terminal.

use crate::error::Result;
use crate::recommend::EnrichedRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Report column names, in output order.
pub const COLUMNS: [&str; 10] = [
    "id",
    "name",
    "avg_continuous_minutes",
    "num_meetings",
    "self_report",
    "last_pause_minutes",
    "stress_index",
    "recommended_total_time",
    "recommended_total_benefit",
    "recommended_items",
];

/// One report line.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportRow {
    /// Record identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Average minutes of uninterrupted focus.
    pub avg_continuous_minutes: f64,
    /// Meetings in the period.
    pub num_meetings: u32,
    /// Self-reported wellbeing, 1 to 10.
    pub self_report: f64,
    /// Minutes since the last break.
    pub last_pause_minutes: f64,
    /// Stress score, rounded to 3 decimals.
    pub stress_index: f64,
    /// Minutes used by the recommended items.
    pub recommended_total_time: u32,
    /// Summed benefit of the recommended items.
    pub recommended_total_benefit: u64,
    /// `"name(Nm)"` per chosen item, joined with `"; "`.
    pub recommended_items: String,
}

impl ReportRow {
    /// Projects an enriched record onto the report columns.
    pub fn from_enriched(record: &EnrichedRecord) -> Self {
        let raw = record.record();
        let bundle = record.bundle();
        Self {
            id: raw.id,
            name: raw.name.clone(),
            avg_continuous_minutes: raw.avg_continuous_minutes,
            num_meetings: raw.num_meetings,
            self_report: raw.self_report,
            last_pause_minutes: raw.last_pause_minutes,
            stress_index: record.stress_score(),
            recommended_total_time: bundle.total_time,
            recommended_total_benefit: bundle.total_benefit,
            recommended_items: bundle.items_label(),
        }
    }

    /// Field values as strings, in [`COLUMNS`] order.
    pub fn fields(&self) -> [String; 10] {
        [
            self.id.to_string(),
            self.name.clone(),
            self.avg_continuous_minutes.to_string(),
            self.num_meetings.to_string(),
            self.self_report.to_string(),
            self.last_pause_minutes.to_string(),
            self.stress_index.to_string(),
            self.recommended_total_time.to_string(),
            self.recommended_total_benefit.to_string(),
            self.recommended_items.clone(),
        ]
    }
}

/// Projects every enriched record, keeping order.
pub fn rows(records: &[EnrichedRecord]) -> Vec<ReportRow> {
    records.iter().map(ReportRow::from_enriched).collect()
}

/// Writes a header line followed by one CSV line per row.
pub fn write_csv<W: Write>(rows: &[ReportRow], writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(COLUMNS)?;
    for row in rows {
        csv.write_record(row.fields())?;
    }
    csv.flush()?;
    Ok(())
}

/// Writes the CSV report to `path`, creating or truncating it.
pub fn save_csv(rows: &[ReportRow], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_csv(rows, BufWriter::new(file))?;
    info!(path = %path.display(), rows = rows.len(), "report saved");
    Ok(())
}

/// Renders the first `limit` rows as a left-aligned text table.
pub fn render_table(rows: &[ReportRow], limit: usize) -> String {
    let shown: Vec<[String; 10]> = rows.iter().take(limit).map(ReportRow::fields).collect();

    let mut widths = COLUMNS.map(|c| c.chars().count());
    for fields in &shown {
        for (w, f) in widths.iter_mut().zip(fields) {
            *w = (*w).max(f.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, COLUMNS.iter().copied(), &widths);
    for fields in &shown {
        push_line(&mut out, fields.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let rendered: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:<w$}"))
        .collect();
    out.push_str(rendered.join("  ").trim_end());
    out.push('\n');
}
