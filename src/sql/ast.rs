use std::fmt;

/// One parsed statement. Names are kept as written; cleaning and
/// validation happen when the statement runs against a database.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Use {
        database: String,
    },
    CreateDatabase {
        name: String,
    },
    CreateTable {
        name: String,
        columns: Vec<String>,
    },
    DropDatabase {
        name: String,
    },
    DropTable {
        name: String,
    },
    AlterTable {
        table: String,
        action: AlterAction,
    },
    Insert {
        table: String,
        values: Vec<String>,
    },
    Select {
        table: String,
        projection: Projection,
        condition: Option<Condition>,
    },
    Update {
        table: String,
        assignments: Vec<Assignment>,
        condition: Option<Condition>,
    },
    Delete {
        table: String,
        condition: Condition,
    },
    Join {
        left: String,
        right: String,
        left_column: String,
        right_column: String,
    },
}

impl Statement {
    /// Only `USE` and `CREATE DATABASE` may run with no database selected.
    pub fn requires_database(&self) -> bool {
        !matches!(
            self,
            Statement::Use { .. } | Statement::CreateDatabase { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AlterAction {
    AddColumn(String),
    DropColumn(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    AllColumns,
    Columns(Vec<String>),
}

/// `column = value` in an UPDATE's SET list. The value is already sanitized.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub value: String,
}

impl Assignment {
    pub fn new(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }
}

/// Parsed WHERE clause: a single comparison, or a group of sub-conditions
/// joined by one connective.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Compare(Comparison),
    And(Vec<Condition>),
    Or(Vec<Condition>),
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (connective, parts) = match self {
            Condition::Compare(cmp) => {
                return write!(f, "{} {} {}", cmp.column, cmp.op, cmp.value)
            }
            Condition::And(parts) => (Connective::And, parts),
            Condition::Or(parts) => (Connective::Or, parts),
        };
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                write!(f, " {} ", connective)?;
            }
            write!(f, "({})", part)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub column: String,
    pub op: CompareOp,
    pub value: String,
}

impl Comparison {
    pub fn new(column: impl Into<String>, op: CompareOp, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            op,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    NotEq,
    Gt,
    Lt,
    Like,
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            CompareOp::Eq => "==",
            CompareOp::NotEq => "!=",
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
            CompareOp::Like => "LIKE",
        };
        f.write_str(op)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    And,
    Or,
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connective::And => f.write_str("AND"),
            Connective::Or => f.write_str("OR"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_display() {
        let condition = Condition::Or(vec![
            Condition::And(vec![
                Condition::Compare(Comparison::new("age", CompareOp::Gt, "26")),
                Condition::Compare(Comparison::new("city", CompareOp::NotEq, "Leeds")),
            ]),
            Condition::Compare(Comparison::new("name", CompareOp::Like, "al")),
        ]);

        assert_eq!(
            condition.to_string(),
            "((age > 26) AND (city != Leeds)) OR (name LIKE al)"
        );
    }
}
