use std::fmt;
use std::path::PathBuf;

use tracing::{debug, info, warn};

use super::ast::*;
use super::evaluator::Predicate;
use super::join::join_tables;
use super::literal::{clean_name, is_valid_identifier};
use super::parser::parse_statement;
use crate::error::{Error, ErrorKind, Result};
use crate::storage::database::{Catalog, Database};
use crate::storage::table::{Record, Schema, Table, ID_COLUMN};

/// Result of a statement that ran successfully.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// Statement with no result set.
    Ok,
    /// Rows produced by SELECT or JOIN.
    Rows(Table),
}

/// What the caller gets back for one statement. Renders as `[OK]`,
/// `[OK]\n<header>\n<rows...>` or `[ERROR] <message>`.
#[derive(Debug)]
pub enum Response {
    Ok(Output),
    Error { kind: ErrorKind, message: String },
}

impl Response {
    pub fn is_ok(&self) -> bool {
        matches!(self, Response::Ok(_))
    }

    pub fn rows(&self) -> Option<&Table> {
        match self {
            Response::Ok(Output::Rows(table)) => Some(table),
            _ => None,
        }
    }
}

impl From<Result<Output>> for Response {
    fn from(result: Result<Output>) -> Self {
        match result {
            Ok(output) => Response::Ok(output),
            Err(err) => Response::Error {
                kind: err.kind(),
                // responses are a single line
                message: err.to_string().replace(['\r', '\n'], " "),
            },
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Ok(Output::Ok) => write!(f, "[OK]"),
            Response::Ok(Output::Rows(table)) => write!(f, "[OK]\n{}", table),
            Response::Error { message, .. } => write!(f, "[ERROR] {}", message),
        }
    }
}

/// One client's view of the data root: the catalog plus the currently
/// selected database. Every statement runs against this context; nothing is
/// cached between statements apart from the selection.
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    current: Option<Database>,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            current: None,
        }
    }

    /// Opens (and if needed creates) the data root at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::new(Catalog::open(root)?))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Name of the selected database, if any.
    pub fn current_database(&self) -> Option<&str> {
        self.current.as_ref().map(Database::name)
    }

    /// Parses and runs one `;`-terminated statement. Never fails: errors are
    /// turned into an `[ERROR]` response.
    pub fn execute(&mut self, sql: &str) -> Response {
        let result = parse_statement(sql)
            .map_err(Error::from)
            .and_then(|statement| self.execute_statement(statement));

        if let Err(err) = &result {
            warn!(kind = ?err.kind(), error = %err, "statement rejected");
        }
        result.into()
    }

    pub fn execute_statement(&mut self, statement: Statement) -> Result<Output> {
        debug!(?statement, database = ?self.current_database(), "executing statement");

        if statement.requires_database() && self.current.is_none() {
            return Err(Error::NoDatabaseSelected);
        }

        match statement {
            Statement::Use { database } => self.use_database(&database),
            Statement::CreateDatabase { name } => self.create_database(&name),
            Statement::DropDatabase { name } => self.drop_database(&name),
            Statement::CreateTable { name, columns } => {
                self.executor()?.create_table(&name, &columns)
            }
            Statement::DropTable { name } => self.executor()?.drop_table(&name),
            Statement::AlterTable { table, action } => self.executor()?.alter_table(&table, &action),
            Statement::Insert { table, values } => self.executor()?.insert(&table, &values),
            Statement::Select {
                table,
                projection,
                condition,
            } => self
                .executor()?
                .select(&table, &projection, condition.as_ref()),
            Statement::Update {
                table,
                assignments,
                condition,
            } => self
                .executor()?
                .update(&table, &assignments, condition.as_ref()),
            Statement::Delete { table, condition } => self.executor()?.delete(&table, &condition),
            Statement::Join {
                left,
                right,
                left_column,
                right_column,
            } => self
                .executor()?
                .join(&left, &right, &left_column, &right_column),
        }
    }

    fn executor(&self) -> Result<Executor<'_>> {
        self.current
            .as_ref()
            .map(Executor::new)
            .ok_or(Error::NoDatabaseSelected)
    }

    fn use_database(&mut self, name: &str) -> Result<Output> {
        let name = object_name(name)?;
        let database = self.catalog.open_database(&name)?;
        debug!(database = %name, "selected database");
        self.current = Some(database);
        Ok(Output::Ok)
    }

    fn create_database(&mut self, name: &str) -> Result<Output> {
        let name = object_name(name)?;
        let database = self.catalog.create_database(&name)?;
        info!(database = %name, "created database");
        self.current = Some(database);
        Ok(Output::Ok)
    }

    fn drop_database(&mut self, name: &str) -> Result<Output> {
        let name = object_name(name)?;
        self.catalog.drop_database(&name)?;
        info!(database = %name, "dropped database");
        if self.current_database() == Some(name.as_str()) {
            self.current = None;
        }
        Ok(Output::Ok)
    }
}

/// Table-level operations against one database. Every operation reads the
/// table file, works on it in memory and, if it changes anything, writes the
/// whole file back.
pub struct Executor<'a> {
    db: &'a Database,
}

impl<'a> Executor<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub fn create_table(&self, name: &str, columns: &[String]) -> Result<Output> {
        let name = object_name(name)?;
        if self.db.table_exists(&name) {
            return Err(Error::TableAlreadyExists(name));
        }

        // the schema already holds `id`, so a user column of that name is a duplicate
        let mut schema = Schema::with_id(Vec::new());
        for column in columns {
            let column = column.trim();
            if !is_valid_identifier(column) {
                return Err(Error::InvalidColumnName(column.to_string()));
            }
            if schema.contains(column) {
                return Err(Error::DuplicateColumn(column.to_string()));
            }
            schema.push(column.to_lowercase());
        }

        self.db.create_table(&Table::new(name.as_str(), schema))?;
        info!(table = %name, columns = columns.len(), "created table");
        Ok(Output::Ok)
    }

    pub fn drop_table(&self, name: &str) -> Result<Output> {
        let name = object_name(name)?;
        self.db.drop_table(&name)?;
        info!(table = %name, "dropped table");
        Ok(Output::Ok)
    }

    pub fn alter_table(&self, name: &str, action: &AlterAction) -> Result<Output> {
        let name = object_name(name)?;
        let mut table = self.db.load_table(&name)?;

        match action {
            AlterAction::AddColumn(column) => {
                let column = column.trim();
                if is_primary_key(column) {
                    return Err(Error::PrimaryKey);
                }
                if !is_valid_identifier(column) {
                    return Err(Error::InvalidColumnName(column.to_string()));
                }
                if table.schema.contains(column) {
                    return Err(Error::DuplicateColumn(column.to_string()));
                }
                table.add_column(column.to_lowercase());
                info!(table = %name, column, "added column");
            }
            AlterAction::DropColumn(column) => {
                let column = column.trim();
                if is_primary_key(column) {
                    return Err(Error::PrimaryKey);
                }
                if !table.drop_column(column) {
                    return Err(Error::ColumnNotFound(column.to_string()));
                }
                info!(table = %name, column, "dropped column");
            }
        }

        self.db.save_table(&table)?;
        Ok(Output::Ok)
    }

    /// Appends one row. The value count is not checked against the header.
    pub fn insert(&self, name: &str, values: &[String]) -> Result<Output> {
        let name = object_name(name)?;
        let mut table = self.db.load_table(&name)?;

        let id = self.next_id(&table)?;
        let mut record = Record::new(vec![id.to_string()]);
        for value in values {
            record.push(value.replace(['\t', '\r', '\n'], " "));
        }

        // The id is recorded before the row so it is never handed out twice.
        self.db.record_issued_id(&name, id)?;
        table.add_record(record);
        self.db.save_table(&table)?;

        debug!(table = %name, id, values = values.len(), "inserted row");
        Ok(Output::Ok)
    }

    pub fn select(
        &self,
        name: &str,
        projection: &Projection,
        condition: Option<&Condition>,
    ) -> Result<Output> {
        let name = object_name(name)?;
        let table = self.db.load_table(&name)?;

        let indices: Vec<usize> = match projection {
            Projection::AllColumns => (0..table.column_count()).collect(),
            Projection::Columns(columns) => columns
                .iter()
                .map(|c| {
                    table
                        .get_column_index(c)
                        .ok_or_else(|| Error::ColumnNotFound(c.clone()))
                })
                .collect::<Result<_>>()?,
        };
        let matched = scan(&table, condition)?;

        let header = indices
            .iter()
            .map(|&i| table.schema.columns()[i].clone())
            .collect();
        let records = table
            .iter()
            .zip(&matched)
            .filter(|(_, hit)| **hit)
            .map(|(record, _)| {
                // short rows simply have fewer fields
                Record::new(
                    indices
                        .iter()
                        .filter_map(|&i| record.get(i))
                        .map(str::to_string)
                        .collect(),
                )
            })
            .collect::<Vec<_>>();

        debug!(table = %name, rows = records.len(), "selected rows");
        Ok(Output::Rows(Table::with_records(
            name,
            Schema::new(header),
            records,
        )))
    }

    pub fn update(
        &self,
        name: &str,
        assignments: &[Assignment],
        condition: Option<&Condition>,
    ) -> Result<Output> {
        let name = object_name(name)?;
        let mut table = self.db.load_table(&name)?;

        let mut targets = Vec::with_capacity(assignments.len());
        for assignment in assignments {
            if is_primary_key(&assignment.column) {
                return Err(Error::PrimaryKey);
            }
            let index = table
                .get_column_index(&assignment.column)
                .ok_or_else(|| Error::ColumnNotFound(assignment.column.clone()))?;
            targets.push((index, assignment.value.as_str()));
        }
        let matched = scan(&table, condition)?;

        let mut updated = 0;
        for (record, hit) in table.records.iter_mut().zip(matched) {
            if !hit {
                continue;
            }
            for &(index, value) in &targets {
                record.set(index, value);
            }
            updated += 1;
        }

        self.db.save_table(&table)?;
        debug!(table = %name, rows = updated, "updated rows");
        Ok(Output::Ok)
    }

    pub fn delete(&self, name: &str, condition: &Condition) -> Result<Output> {
        let name = object_name(name)?;
        let mut table = self.db.load_table(&name)?;

        let matched = scan(&table, Some(condition))?;
        let before = table.row_count();
        let mut hits = matched.into_iter();
        table.records.retain(|_| !hits.next().unwrap_or(false));
        let removed = before - table.row_count();

        // Nothing matched: leave the file exactly as it was.
        if removed > 0 {
            self.db.save_table(&table)?;
        }
        debug!(table = %name, rows = removed, "deleted rows");
        Ok(Output::Ok)
    }

    pub fn join(
        &self,
        left: &str,
        right: &str,
        left_column: &str,
        right_column: &str,
    ) -> Result<Output> {
        let left = self.db.load_table(&object_name(left)?)?;
        let right = self.db.load_table(&object_name(right)?)?;
        join_tables(&left, &right, left_column.trim(), right_column.trim()).map(Output::Rows)
    }

    /// One past the highest id ever issued for the table, the highest id
    /// still stored, and the number of data rows.
    fn next_id(&self, table: &Table) -> Result<u64> {
        let issued = self.db.last_issued_id(&table.name)?.unwrap_or(0);
        let stored = table.max_id().unwrap_or(0);
        let rows = table.row_count() as u64;
        issued
            .max(stored)
            .max(rows)
            .checked_add(1)
            .ok_or_else(|| Error::IdExhausted(table.name.clone()))
    }
}

/// Shared row scan for SELECT, UPDATE and DELETE: binds `condition` to the
/// table's header and marks each row it selects. With no condition every row
/// is selected.
fn scan(table: &Table, condition: Option<&Condition>) -> Result<Vec<bool>> {
    let Some(condition) = condition else {
        return Ok(vec![true; table.row_count()]);
    };
    let predicate = Predicate::bind(condition, &table.schema)?;
    let matched: Vec<bool> = table.iter().map(|record| predicate.matches(record)).collect();
    debug!(
        table = %table.name,
        %condition,
        matched = matched.iter().filter(|hit| **hit).count(),
        "scanned rows"
    );
    Ok(matched)
}

fn object_name(raw: &str) -> Result<String> {
    clean_name(raw).ok_or_else(|| Error::InvalidName(raw.to_string()))
}

fn is_primary_key(column: &str) -> bool {
    column.trim().eq_ignore_ascii_case(ID_COLUMN)
}
