use std::fmt;

use crate::data::Row;

use super::{QueryError, numeric_cell};

/// Sort direction of an [`OrderRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// `desc` in any case is descending; every other value is ascending.
    pub fn from_lenient(s: &str) -> Self {
        if s.eq_ignore_ascii_case("desc") {
            Direction::Desc
        } else {
            Direction::Asc
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Asc => f.write_str("asc"),
            Direction::Desc => f.write_str("desc"),
        }
    }
}

/// Column and direction to order rows by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub column: String,
    pub direction: Direction,
}

impl OrderRequest {
    /// Parse `column=direction`, splitting at the first `=`.
    pub fn parse(spec: &str) -> Result<Self, QueryError> {
        let (column, direction) = spec
            .split_once('=')
            .ok_or_else(|| QueryError::OrderFormat(spec.to_string()))?;
        Ok(OrderRequest {
            column: column.to_string(),
            direction: Direction::from_lenient(direction),
        })
    }
}

/// Order `rows` numerically by the requested column.
///
/// `None` returns the input untouched. Keys are all coerced before anything
/// moves, and the sort is stable in both directions.
pub fn sort(rows: Vec<Row>, order: Option<&OrderRequest>) -> Result<Vec<Row>, QueryError> {
    let Some(order) = order else {
        return Ok(rows);
    };

    // `+ 0.0` folds -0.0 into 0.0 so the two compare as a tie under total_cmp.
    let mut keyed = rows
        .into_iter()
        .map(|row| Ok((numeric_cell(&row, &order.column)? + 0.0, row)))
        .collect::<Result<Vec<(f64, Row)>, QueryError>>()?;

    match order.direction {
        Direction::Asc => keyed.sort_by(|(a, _), (b, _)| a.total_cmp(b)),
        Direction::Desc => keyed.sort_by(|(a, _), (b, _)| b.total_cmp(a)),
    }

    Ok(keyed.into_iter().map(|(_, row)| row).collect())
}
