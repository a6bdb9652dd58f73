use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::data::Row;

use super::{QueryError, numeric_cell};

/// Single-column numeric reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationKind {
    /// Arithmetic mean
    Avg,
    /// Smallest value
    Min,
    /// Largest value
    Max,
}

impl AggregationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AggregationKind::Avg => "avg",
            AggregationKind::Min => "min",
            AggregationKind::Max => "max",
        }
    }
}

impl FromStr for AggregationKind {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "avg" => Ok(AggregationKind::Avg),
            "min" => Ok(AggregationKind::Min),
            "max" => Ok(AggregationKind::Max),
            other => Err(QueryError::UnsupportedAggregation(other.to_string())),
        }
    }
}

impl fmt::Display for AggregationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reduce `column` of `rows` with `kind`.
///
/// Empty input is an error rather than `0` or `NaN`.
pub fn aggregate(rows: &[Row], column: &str, kind: AggregationKind) -> Result<f64, QueryError> {
    let values = rows
        .iter()
        .map(|row| numeric_cell(row, column))
        .collect::<Result<Vec<f64>, QueryError>>()?;

    if values.is_empty() {
        return Err(QueryError::EmptyInput);
    }

    let result = match kind {
        AggregationKind::Avg => values.iter().sum::<f64>() / values.len() as f64,
        AggregationKind::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
        AggregationKind::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(values: &[&str]) -> Vec<Row> {
        values
            .iter()
            .map(|v| [("rating", *v)].into_iter().collect())
            .collect()
    }

    #[test]
    fn average() {
        let avg = aggregate(&rows(&["4.5", "4.9"]), "rating", AggregationKind::Avg).unwrap();
        assert!((avg - 4.7).abs() < 1e-12);
    }

    #[test]
    fn min_and_max() {
        let input = rows(&["3", "-1.5", "8", "2"]);
        assert_eq!(aggregate(&input, "rating", AggregationKind::Min), Ok(-1.5));
        assert_eq!(aggregate(&input, "rating", AggregationKind::Max), Ok(8.0));
    }

    #[test]
    fn single_row() {
        let input = rows(&["7"]);
        for kind in [AggregationKind::Avg, AggregationKind::Min, AggregationKind::Max] {
            assert_eq!(aggregate(&input, "rating", kind), Ok(7.0));
        }
    }

    #[test]
    fn empty_input_is_an_error() {
        for kind in [AggregationKind::Avg, AggregationKind::Min, AggregationKind::Max] {
            assert_eq!(aggregate(&[], "rating", kind), Err(QueryError::EmptyInput));
        }
    }

    #[test]
    fn bad_cells_propagate() {
        assert_eq!(
            aggregate(&rows(&["1"]), "price", AggregationKind::Max),
            Err(QueryError::MissingColumn("price".into()))
        );
        assert!(matches!(
            aggregate(&rows(&["1", "-"]), "rating", AggregationKind::Min),
            Err(QueryError::NumericCoercion { .. })
        ));
    }

    #[test]
    fn kind_from_str() {
        assert_eq!("min".parse::<AggregationKind>(), Ok(AggregationKind::Min));
        assert_eq!(
            "median".parse::<AggregationKind>(),
            Err(QueryError::UnsupportedAggregation("median".into()))
        );
        assert_eq!(AggregationKind::Max.to_string(), "max");
    }
}
