use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result, bail};
use arrow::util::display::{ArrayFormatter, FormatOptions};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a tabular dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`             – comma-separated, header row defines the columns
/// * `.tsv`             – same, tab-separated
/// * `.json`            – `[{ "col": value, ... }, ...]`
/// * `.parquet` / `.pq` – any flat schema, every cell rendered as text
///
/// Files with any other extension are read as CSV.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "parquet" | "pq" => load_parquet(path),
        "json" => load_json(path),
        "tsv" => load_delimited(path, b'\t'),
        _ => load_delimited(path, b','),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    log::info!(
        "loaded {} rows x {} columns from {}",
        dataset.len(),
        dataset.columns.len(),
        path.display()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV / TSV loader
// ---------------------------------------------------------------------------

fn load_delimited(path: &Path, delimiter: u8) -> Result<Dataset> {
    log::debug!("reading {} as delimited text", path.display());
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .context("opening file")?;

    // A UTF-8 byte-order mark would otherwise stick to the first column name.
    let headers: Vec<String> = reader
        .headers()
        .context("reading header row")?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();
    ensure_unique_headers(&headers)?;

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("record {}", row_no + 1))?;
        records.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    Ok(Dataset::from_records(headers, records))
}

/// Columns are looked up by name, so a repeated name would make one of them
/// unreachable.
fn ensure_unique_headers(headers: &[String]) -> Result<()> {
    let mut seen = HashSet::with_capacity(headers.len());
    for header in headers {
        if !seen.insert(header.as_str()) {
            bail!("duplicate column name '{header}' in header");
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "name": "iphone 15", "brand": "apple", "price": 999, "rating": 4.9 },
///   ...
/// ]
/// ```
///
/// The first object fixes the column order; every object must carry the same
/// keys.
fn load_json(path: &Path) -> Result<Dataset> {
    log::debug!("reading {} as JSON records", path.display());
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut headers: Vec<String> = Vec::new();
    let mut rows = Vec::with_capacity(records.len());

    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        if i == 0 {
            headers = obj.keys().cloned().collect();
        } else if obj.len() != headers.len() || !headers.iter().all(|h| obj.contains_key(h)) {
            bail!("Row {i}: keys differ from the first row");
        }

        let values = headers
            .iter()
            .map(|h| json_to_text(&obj[h]).with_context(|| format!("Row {i}, column '{h}'")))
            .collect::<Result<Vec<_>>>()?;
        rows.push(values);
    }

    Ok(Dataset::from_records(headers, rows))
}

fn json_to_text(val: &JsonValue) -> Result<String> {
    match val {
        JsonValue::String(s) => Ok(s.clone()),
        JsonValue::Number(n) => Ok(n.to_string()),
        JsonValue::Bool(b) => Ok(b.to_string()),
        JsonValue::Null => Ok(String::new()),
        JsonValue::Array(_) | JsonValue::Object(_) => bail!("nested values are not supported"),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file, rendering each cell with Arrow's display formatter.
///
/// Nulls become empty strings, which then fail numeric coercion if a filter
/// touches them.
fn load_parquet(path: &Path) -> Result<Dataset> {
    log::debug!("reading {} as parquet", path.display());
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let headers: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    ensure_unique_headers(&headers)?;
    let reader = builder.build().context("building parquet reader")?;

    let options = FormatOptions::default();
    let mut rows = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let formatters = batch
            .columns()
            .iter()
            .map(|col| ArrayFormatter::try_new(col.as_ref(), &options))
            .collect::<Result<Vec<_>, _>>()
            .context("preparing column formatters")?;

        for row in 0..batch.num_rows() {
            rows.push(
                formatters
                    .iter()
                    .map(|f| f.value(row).to_string())
                    .collect::<Vec<_>>(),
            );
        }
    }

    Ok(Dataset::from_records(headers, rows))
}
