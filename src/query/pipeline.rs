use serde::Serialize;

use crate::data::Row;

use super::aggregate::{AggregationKind, aggregate};
use super::condition::{Condition, parse};
use super::filter::filter;
use super::sort::{OrderRequest, sort};
use super::QueryError;

// ---------------------------------------------------------------------------
// Requests and results
// ---------------------------------------------------------------------------

/// Column plus reduction to compute instead of printing the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationRequest {
    pub column: String,
    pub kind: AggregationKind,
}

impl AggregationRequest {
    /// Combine the two independently supplied parts into an optional request.
    ///
    /// Both present → `Some`, both absent → `None`, only one →
    /// [`QueryError::IncompleteAggregation`]. An unknown kind is
    /// [`QueryError::UnsupportedAggregation`].
    pub fn from_parts(
        column: Option<String>,
        kind: Option<String>,
    ) -> Result<Option<Self>, QueryError> {
        match (column, kind) {
            (Some(column), Some(kind)) => Ok(Some(AggregationRequest {
                column,
                kind: kind.parse()?,
            })),
            (None, None) => Ok(None),
            _ => Err(QueryError::IncompleteAggregation),
        }
    }
}

/// Filtered (and possibly ordered) rows to display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TableResult {
    pub rows: Vec<Row>,
}

/// One aggregated number and the reduction that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScalarResult {
    pub label: AggregationKind,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryOutcome {
    Table(TableResult),
    Scalar(ScalarResult),
}

// ---------------------------------------------------------------------------
// Orchestration
// ---------------------------------------------------------------------------

/// Run the full query: parse → filter → sort → aggregate or pass through.
///
/// All conditions are parsed before any row is looked at, so a malformed
/// condition fails even on an empty dataset. An empty `order_spec` means no
/// ordering.
pub fn run(
    rows: &[Row],
    raw_conditions: &[String],
    order_spec: Option<&str>,
    aggregation: Option<&AggregationRequest>,
) -> Result<QueryOutcome, QueryError> {
    let conditions = raw_conditions
        .iter()
        .map(|raw| parse(raw))
        .collect::<Result<Vec<Condition>, QueryError>>()?;

    let filtered = filter(rows, &conditions)?;

    let order = order_spec
        .filter(|spec| !spec.is_empty())
        .map(OrderRequest::parse)
        .transpose()?;
    let ordered = sort(filtered, order.as_ref())?;

    match aggregation {
        Some(request) => {
            let value = aggregate(&ordered, &request.column, request.kind)?;
            Ok(QueryOutcome::Scalar(ScalarResult {
                label: request.kind,
                value,
            }))
        }
        None => Ok(QueryOutcome::Table(TableResult { rows: ordered })),
    }
}
