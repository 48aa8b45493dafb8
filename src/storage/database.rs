use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::tab::{TabReader, TabWriter, TABLE_EXTENSION};
use super::table::Table;
use crate::error::{Error, Result};

const SEQUENCE_EXTENSION: &str = "seq";

/// The data root: one sub-directory per database.
#[derive(Debug, Clone)]
pub struct Catalog {
    root: PathBuf,
}

impl Catalog {
    /// Opens the data root, creating it if it does not exist yet.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn database_exists(&self, name: &str) -> bool {
        self.root.join(name).is_dir()
    }

    pub fn create_database(&self, name: &str) -> Result<Database> {
        let path = self.root.join(name);
        if path.exists() {
            return Err(Error::DatabaseAlreadyExists(name.to_string()));
        }
        fs::create_dir(&path)?;
        debug!(database = name, path = %path.display(), "created database directory");
        Ok(Database::new(name, path))
    }

    pub fn open_database(&self, name: &str) -> Result<Database> {
        if !self.database_exists(name) {
            return Err(Error::DatabaseNotFound(name.to_string()));
        }
        Ok(Database::new(name, self.root.join(name)))
    }

    /// Removes the database directory and every table in it.
    pub fn drop_database(&self, name: &str) -> Result<()> {
        if !self.database_exists(name) {
            return Err(Error::DatabaseNotFound(name.to_string()));
        }
        fs::remove_dir_all(self.root.join(name))?;
        Ok(())
    }
}

/// One database directory. Table files live directly inside it as
/// `<table>.tab`, each with an optional `<table>.seq` holding the last id
/// handed out by INSERT.
#[derive(Debug, Clone, PartialEq)]
pub struct Database {
    name: String,
    path: PathBuf,
}

impl Database {
    fn new(name: impl Into<String>, path: PathBuf) -> Self {
        Self {
            name: name.into(),
            path,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table_path(&self, table: &str) -> PathBuf {
        self.path.join(format!("{}.{}", table, TABLE_EXTENSION))
    }

    fn sequence_path(&self, table: &str) -> PathBuf {
        self.path.join(format!("{}.{}", table, SEQUENCE_EXTENSION))
    }

    pub fn table_exists(&self, table: &str) -> bool {
        self.table_path(table).is_file()
    }

    pub fn load_table(&self, table: &str) -> Result<Table> {
        let path = self.table_path(table);
        if !path.is_file() {
            return Err(Error::TableNotFound(table.to_string()));
        }
        let loaded = TabReader::new().read_file(&path, table)?;
        debug!(
            table,
            rows = loaded.row_count(),
            columns = loaded.column_count(),
            "loaded table"
        );
        Ok(loaded)
    }

    /// Overwrites the table's file with its full contents.
    pub fn save_table(&self, table: &Table) -> Result<()> {
        TabWriter::new().write_file(&self.table_path(&table.name), table)?;
        debug!(table = %table.name, rows = table.row_count(), "wrote table");
        Ok(())
    }

    pub fn create_table(&self, table: &Table) -> Result<()> {
        if self.table_exists(&table.name) {
            return Err(Error::TableAlreadyExists(table.name.clone()));
        }
        self.save_table(table)
    }

    pub fn drop_table(&self, table: &str) -> Result<()> {
        let path = self.table_path(table);
        if !path.is_file() {
            return Err(Error::TableNotFound(table.to_string()));
        }
        fs::remove_file(path)?;
        match fs::remove_file(self.sequence_path(table)) {
            Err(e) if e.kind() != IoErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }

    /// Last id issued for `table`, if it has ever been recorded.
    pub fn last_issued_id(&self, table: &str) -> Result<Option<u64>> {
        match fs::read_to_string(self.sequence_path(table)) {
            Ok(contents) => Ok(contents.trim().parse().ok()),
            Err(e) if e.kind() == IoErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn record_issued_id(&self, table: &str, id: u64) -> Result<()> {
        fs::write(self.sequence_path(table), id.to_string())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::table::{Record, Schema};
    use tempfile::TempDir;

    fn catalog() -> (TempDir, Catalog) {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::open(dir.path().join("databases")).unwrap();
        (dir, catalog)
    }

    #[test]
    fn test_open_creates_root() {
        let (dir, catalog) = catalog();
        assert!(dir.path().join("databases").is_dir());
        assert_eq!(catalog.root(), dir.path().join("databases"));
    }

    #[test]
    fn test_create_open_drop_database() {
        let (_dir, catalog) = catalog();

        let db = catalog.create_database("school").unwrap();
        assert_eq!(db.name(), "school");
        assert!(matches!(
            catalog.create_database("school"),
            Err(Error::DatabaseAlreadyExists(_))
        ));
        assert!(catalog.open_database("school").is_ok());

        catalog.drop_database("school").unwrap();
        assert!(matches!(
            catalog.open_database("school"),
            Err(Error::DatabaseNotFound(_))
        ));
        assert!(matches!(
            catalog.drop_database("school"),
            Err(Error::DatabaseNotFound(_))
        ));
    }

    #[test]
    fn test_table_files() {
        let (_dir, catalog) = catalog();
        let db = catalog.create_database("school").unwrap();

        let mut table = Table::new("marks", Schema::with_id(vec!["name".to_string()]));
        db.create_table(&table).unwrap();
        assert!(db.table_path("marks").ends_with("marks.tab"));
        assert!(matches!(
            db.create_table(&table),
            Err(Error::TableAlreadyExists(_))
        ));

        table.add_record(Record::new(vec!["1".into(), "Simon".into()]));
        db.save_table(&table).unwrap();
        assert_eq!(db.load_table("marks").unwrap(), table);

        db.record_issued_id("marks", 1).unwrap();
        assert_eq!(db.last_issued_id("marks").unwrap(), Some(1));

        db.drop_table("marks").unwrap();
        assert!(!db.table_exists("marks"));
        assert_eq!(db.last_issued_id("marks").unwrap(), None);
        assert!(matches!(db.load_table("marks"), Err(Error::TableNotFound(_))));
        assert!(matches!(db.drop_table("marks"), Err(Error::TableNotFound(_))));
    }
}
