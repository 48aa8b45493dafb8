pub mod table;
pub mod tab;
pub mod database;

pub use table::{Record, Schema, Table, ID_COLUMN};
pub use tab::{TabError, TabReader, TabWriter};
pub use database::{Catalog, Database};
