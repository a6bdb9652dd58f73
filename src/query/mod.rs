//! Query core: condition parsing, filtering, ordering and aggregation.
//!
//! ```text
//!  raw conditions ──► condition::parse ──┐
//!                                        ▼
//!  rows ───────────────────────────► filter ──► sort ──┬──► aggregate ──► ScalarResult
//!                                                      └──────────────► TableResult
//! ```
//!
//! Every stage is a pure function over borrowed rows and fails fast: the first
//! bad condition, missing column or non-numeric cell aborts the whole query.

use thiserror::Error;

use crate::data::Row;

pub mod aggregate;
pub mod condition;
pub mod filter;
pub mod pipeline;
pub mod sort;

pub use aggregate::{AggregationKind, aggregate};
pub use condition::{Condition, Operator};
pub use filter::filter;
pub use pipeline::{AggregationRequest, QueryOutcome, ScalarResult, TableResult, run};
pub use sort::{Direction, OrderRequest, sort};

/// Errors raised by the query core. None of them are recovered from inside
/// the pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error("invalid condition format '{0}', expected 'column operator value'")]
    ConditionFormat(String),

    #[error("column '{0}' not found")]
    MissingColumn(String),

    #[error("column '{column}': value '{value}' is not a number")]
    NumericCoercion { column: String, value: String },

    #[error("cannot aggregate an empty set of rows")]
    EmptyInput,

    #[error("unknown aggregation type '{0}', expected one of avg, min, max")]
    UnsupportedAggregation(String),

    #[error("invalid order-by '{0}', expected 'column=direction'")]
    OrderFormat(String),

    #[error("--aggregate-column and --agg-type must be given together")]
    IncompleteAggregation,
}

/// Read `column` from `row` and coerce it to `f64`.
///
/// Surrounding whitespace is ignored and single underscores between digits
/// are accepted as separators (`1_000`). Anything else Rust's float parser
/// rejects is a [`QueryError::NumericCoercion`].
pub(crate) fn numeric_cell(row: &Row, column: &str) -> Result<f64, QueryError> {
    let raw = row
        .get(column)
        .ok_or_else(|| QueryError::MissingColumn(column.to_string()))?;
    parse_number(raw.trim()).ok_or_else(|| QueryError::NumericCoercion {
        column: column.to_string(),
        value: raw.to_string(),
    })
}

fn parse_number(text: &str) -> Option<f64> {
    if !text.contains('_') {
        return text.parse().ok();
    }
    let bytes = text.as_bytes();
    let separators_ok = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    if !separators_ok {
        return None;
    }
    text.replace('_', "").parse().ok()
}
