/// Presentation layer: turn a [`QueryOutcome`] into printable text.
///
/// ```text
///   QueryOutcome::Table  ──► table   (aligned grid with headers)
///   QueryOutcome::Scalar ──► scalar  (bordered label/value box)
///   either, as JSON      ──► serde_json
/// ```

pub mod scalar;
pub mod table;

use anyhow::{Context, Result};

use crate::query::QueryOutcome;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Grid table or scalar box.
    #[default]
    Pretty,
    /// Pretty-printed JSON: an array of row objects, or `{label, value}`.
    Json,
}

/// Render `outcome` for display. `columns` is the dataset header, used for
/// the table layout even when no rows survive filtering.
pub fn render(outcome: &QueryOutcome, columns: &[String], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(outcome).context("serialising result"),
        OutputFormat::Pretty => match outcome {
            QueryOutcome::Table(result) => table::render(columns, result),
            QueryOutcome::Scalar(result) => Ok(scalar::render(result)),
        },
    }
}
