pub mod cli;
pub mod error;
pub mod sql;
pub mod storage;

pub use error::{Error, ErrorKind, Result};
pub use sql::{Output, Response, Session};
pub use storage::table::{Record, Schema, Table};
