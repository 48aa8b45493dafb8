use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::table::{Record, Schema, Table};
use thiserror::Error;

/// File extension of a table file.
pub const TABLE_EXTENSION: &str = "tab";

const DELIMITER: char = '\t';

#[derive(Error, Debug)]
pub enum TabError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Table file has no header: {0}")]
    EmptyFile(String),
}

/// Reads `.tab` files: a header row of column names, then one record per
/// line, fields separated by tabs.
#[derive(Debug, Default)]
pub struct TabReader;

impl TabReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_file(&self, path: &Path, table_name: &str) -> Result<Table, TabError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        self.read_from_reader(reader, table_name)
    }

    pub fn read_from_reader<R: BufRead>(&self, reader: R, table_name: &str) -> Result<Table, TabError> {
        let mut lines = reader.lines();

        let header = match lines.next() {
            Some(line) => line?,
            None => return Err(TabError::EmptyFile(table_name.to_string())),
        };
        if header.trim().is_empty() {
            return Err(TabError::EmptyFile(table_name.to_string()));
        }

        let columns: Vec<String> = header
            .split(DELIMITER)
            .map(|c| c.trim().to_string())
            .collect();

        let mut records = Vec::new();
        for line in lines {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            records.push(Record::new(
                line.split(DELIMITER).map(str::to_string).collect(),
            ));
        }

        Ok(Table::with_records(table_name, Schema::new(columns), records))
    }
}

/// Writes a whole table back to disk in a single write.
#[derive(Debug, Default)]
pub struct TabWriter;

impl TabWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write_file(&self, path: &Path, table: &Table) -> Result<(), TabError> {
        fs::write(path, table.to_string())?;
        Ok(())
    }
}
