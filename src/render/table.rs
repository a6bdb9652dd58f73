use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;

use crate::query::TableResult;

// ---------------------------------------------------------------------------
// Grid table
// ---------------------------------------------------------------------------

/// Render rows as an aligned grid with a header line.
///
/// The rows are packed into a single all-`Utf8` record batch and printed with
/// Arrow's pretty printer, so column widths follow the longest cell.
pub fn render(columns: &[String], result: &TableResult) -> Result<String> {
    if columns.is_empty() {
        return Ok(String::new());
    }

    let schema = Schema::new(
        columns
            .iter()
            .map(|name| Field::new(name, DataType::Utf8, false))
            .collect::<Vec<_>>(),
    );
    let arrays: Vec<ArrayRef> = columns
        .iter()
        .map(|name| {
            let cells: Vec<&str> = result
                .rows
                .iter()
                .map(|row| row.get(name).unwrap_or(""))
                .collect();
            Arc::new(StringArray::from(cells)) as ArrayRef
        })
        .collect();

    let batch = RecordBatch::try_new(Arc::new(schema), arrays)
        .context("building display batch")?;
    log::debug!("rendering {} rows as a table", batch.num_rows());

    let formatted = pretty_format_batches(&[batch]).context("formatting table")?;
    Ok(formatted.to_string())
}
