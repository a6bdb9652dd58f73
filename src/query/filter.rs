use crate::data::Row;

use super::{Condition, QueryError, numeric_cell};

/// Keep the rows that satisfy every condition, in input order.
///
/// An empty condition list keeps everything. The first missing column or
/// non-numeric cell aborts the whole call.
pub fn filter(rows: &[Row], conditions: &[Condition]) -> Result<Vec<Row>, QueryError> {
    let mut kept = Vec::with_capacity(rows.len());
    for row in rows {
        if matches_all(row, conditions)? {
            kept.push(row.clone());
        }
    }
    Ok(kept)
}

fn matches_all(row: &Row, conditions: &[Condition]) -> Result<bool, QueryError> {
    for condition in conditions {
        let value = numeric_cell(row, condition.column())?;
        if !condition.accepts(value) {
            return Ok(false);
        }
    }
    Ok(true)
}
