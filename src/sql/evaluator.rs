use super::ast::{CompareOp, Comparison, Condition};
use crate::error::{Error, Result};
use crate::storage::table::{Record, Schema};

/// A condition tree with column names resolved to positions in one table's
/// header, ready to be evaluated against each of its rows.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Compare {
        index: usize,
        op: CompareOp,
        value: String,
    },
    All(Vec<Predicate>),
    Any(Vec<Predicate>),
}

impl Predicate {
    /// Resolves every column in `condition` against `schema`. The first
    /// unknown column is reported by name.
    pub fn bind(condition: &Condition, schema: &Schema) -> Result<Self> {
        match condition {
            Condition::Compare(Comparison { column, op, value }) => {
                let index = schema
                    .column_index(column)
                    .ok_or_else(|| Error::ColumnNotFound(column.clone()))?;
                Ok(Predicate::Compare {
                    index,
                    op: *op,
                    value: value.clone(),
                })
            }
            Condition::And(parts) => parts
                .iter()
                .map(|part| Self::bind(part, schema))
                .collect::<Result<Vec<_>>>()
                .map(Predicate::All),
            Condition::Or(parts) => parts
                .iter()
                .map(|part| Self::bind(part, schema))
                .collect::<Result<Vec<_>>>()
                .map(Predicate::Any),
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        match self {
            // A row too short to hold the column never matches.
            Predicate::Compare { index, op, value } => record
                .get(*index)
                .is_some_and(|actual| compare(*op, actual.trim(), value)),
            Predicate::All(parts) => parts.iter().all(|p| p.matches(record)),
            Predicate::Any(parts) => parts.iter().any(|p| p.matches(record)),
        }
    }
}

/// Applies one operator to a stored value and a literal.
///
/// `==`, `!=` and `LIKE` are case-insensitive text comparisons (`LIKE` is
/// substring containment). `>` and `<` are numeric; if either side does not
/// parse as a number the comparison is simply false.
pub fn compare(op: CompareOp, actual: &str, expected: &str) -> bool {
    match op {
        CompareOp::Eq => actual.to_lowercase() == expected.to_lowercase(),
        CompareOp::NotEq => actual.to_lowercase() != expected.to_lowercase(),
        CompareOp::Gt => numeric(actual, expected).is_some_and(|(a, b)| a > b),
        CompareOp::Lt => numeric(actual, expected).is_some_and(|(a, b)| a < b),
        CompareOp::Like => actual
            .to_lowercase()
            .contains(&expected.to_lowercase()),
    }
}

fn numeric(actual: &str, expected: &str) -> Option<(f64, f64)> {
    let a = actual.parse::<f64>().ok()?;
    let b = expected.parse::<f64>().ok()?;
    Some((a, b))
}
