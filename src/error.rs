use thiserror::Error;

use crate::sql::parser::ParseError;
use crate::storage::tab::TabError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("No database selected")]
    NoDatabaseSelected,

    #[error("Database does not exist: {0}")]
    DatabaseNotFound(String),

    #[error("Database already exists: {0}")]
    DatabaseAlreadyExists(String),

    #[error("Table does not exist: {0}")]
    TableNotFound(String),

    #[error("Table already exists: {0}")]
    TableAlreadyExists(String),

    #[error("Column does not exist: {0}")]
    ColumnNotFound(String),

    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    #[error("Invalid column name: {0}")]
    InvalidColumnName(String),

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Cannot modify primary key column 'id'")]
    PrimaryKey,

    #[error("No more ids can be issued for table: {0}")]
    IdExhausted(String),

    #[error(transparent)]
    Storage(#[from] TabError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of an [`Error`], used for logging and by callers
/// that want to tell a bad statement apart from a broken data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed statement shape.
    Syntax,
    /// Well-formed statement that violates the schema or the grammar's rules.
    Semantic,
    /// Statement that does not fit the current database/table state.
    State,
    /// Filesystem failure.
    Io,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Parse(ParseError::MixedConnectives)
            | Error::Parse(ParseError::UnsupportedOperator(_)) => ErrorKind::Semantic,
            Error::Parse(_) => ErrorKind::Syntax,
            Error::ColumnNotFound(_)
            | Error::DuplicateColumn(_)
            | Error::InvalidColumnName(_)
            | Error::InvalidName(_)
            | Error::PrimaryKey => ErrorKind::Semantic,
            Error::NoDatabaseSelected
            | Error::DatabaseNotFound(_)
            | Error::DatabaseAlreadyExists(_)
            | Error::TableNotFound(_)
            | Error::TableAlreadyExists(_)
            | Error::IdExhausted(_)
            | Error::Storage(TabError::EmptyFile(_)) => ErrorKind::State,
            Error::Storage(TabError::Io(_)) | Error::Io(_) => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
