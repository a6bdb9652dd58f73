use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use super::QueryError;

// Two-character operators come first: the alternation is leftmost-first, so
// `<=` would otherwise match as `<` followed by a stray `=`.
static CONDITION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\w+)\s*(<=|>=|=|>|<)\s*([+-]?(?:\d+(?:\.\d*)?|\.\d+))$")
        .expect("condition pattern is valid")
});

// ---------------------------------------------------------------------------
// Operator
// ---------------------------------------------------------------------------

/// Comparison operator of a [`Condition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Lt,
    Gt,
    Eq,
    Le,
    Ge,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::Eq => "=",
            Operator::Le => "<=",
            Operator::Ge => ">=",
        }
    }

    /// Apply the operator to `lhs op rhs`. `Eq` is exact float equality.
    #[allow(clippy::float_cmp)]
    pub fn evaluate(self, lhs: f64, rhs: f64) -> bool {
        match self {
            Operator::Lt => lhs < rhs,
            Operator::Gt => lhs > rhs,
            Operator::Eq => lhs == rhs,
            Operator::Le => lhs <= rhs,
            Operator::Ge => lhs >= rhs,
        }
    }
}

impl FromStr for Operator {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<" => Ok(Operator::Lt),
            ">" => Ok(Operator::Gt),
            "=" => Ok(Operator::Eq),
            "<=" => Ok(Operator::Le),
            ">=" => Ok(Operator::Ge),
            other => Err(QueryError::ConditionFormat(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ---------------------------------------------------------------------------
// Condition
// ---------------------------------------------------------------------------

/// One `column op threshold` predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    column: String,
    operator: Operator,
    threshold: f64,
}

impl Condition {
    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether `value` satisfies this condition.
    pub fn accepts(&self, value: f64) -> bool {
        self.operator.evaluate(value, self.threshold)
    }
}

/// Parse `raw` (e.g. `"rating>=4.7"`) into a [`Condition`].
///
/// Whitespace is allowed only around the operator.
pub fn parse(raw: &str) -> Result<Condition, QueryError> {
    let format_error = || QueryError::ConditionFormat(raw.to_string());

    let caps = CONDITION_PATTERN.captures(raw).ok_or_else(format_error)?;
    let operator = caps[2].parse::<Operator>().map_err(|_| format_error())?;
    let threshold = caps[3].parse::<f64>().map_err(|_| format_error())?;

    Ok(Condition {
        column: caps[1].to_string(),
        operator,
        threshold,
    })
}

impl FromStr for Condition {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.column, self.operator, self.threshold)
    }
}
