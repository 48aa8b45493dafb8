use std::collections::HashMap;
use std::fmt;

/// Name of the synthetic primary key that leads every header.
pub const ID_COLUMN: &str = "id";

/// Ordered column names with a case-insensitive lookup index.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    columns: Vec<String>,
    column_index: HashMap<String, usize>,
}

impl Schema {
    pub fn new(columns: Vec<String>) -> Self {
        let mut schema = Self {
            columns,
            column_index: HashMap::new(),
        };
        schema.reindex();
        schema
    }

    /// Header of a freshly created table: `id` followed by `columns`.
    pub fn with_id(columns: impl IntoIterator<Item = String>) -> Self {
        let mut all = vec![ID_COLUMN.to_string()];
        all.extend(columns);
        Self::new(all)
    }

    /// First position of `name`, ignoring case.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_index.get(&name.to_lowercase()).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.as_str()).collect()
    }

    pub fn push(&mut self, name: impl Into<String>) {
        self.columns.push(name.into());
        self.reindex();
    }

    pub fn remove(&mut self, index: usize) -> String {
        let removed = self.columns.remove(index);
        self.reindex();
        removed
    }

    fn reindex(&mut self) {
        self.column_index.clear();
        for (i, name) in self.columns.iter().enumerate() {
            self.column_index.entry(name.to_lowercase()).or_insert(i);
        }
    }
}

/// One data row. Values are untyped text aligned by position with the header;
/// rows written by a permissive INSERT may be shorter or longer than it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub values: Vec<String>,
}

impl Record {
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(|v| v.as_str())
    }

    /// Overwrites the value at `index`. Positions past the end of a short
    /// row are left alone and `false` is returned.
    pub fn set(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.values.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    pub fn push(&mut self, value: impl Into<String>) {
        self.values.push(value.into());
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.values.len() {
            Some(self.values.remove(index))
        } else {
            None
        }
    }

    /// The synthetic id in the first field, if it parses.
    pub fn id(&self) -> Option<u64> {
        self.get(0).and_then(|v| v.trim().parse().ok())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub name: String,
    pub schema: Schema,
    pub records: Vec<Record>,
}

impl Table {
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema,
            records: Vec::new(),
        }
    }

    pub fn with_records(name: impl Into<String>, schema: Schema, records: Vec<Record>) -> Self {
        Self {
            name: name.into(),
            schema,
            records,
        }
    }

    pub fn add_record(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    pub fn column_count(&self) -> usize {
        self.schema.column_count()
    }

    pub fn get_column_index(&self, name: &str) -> Option<usize> {
        self.schema.column_index(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Largest id currently stored, ignoring rows whose id does not parse.
    pub fn max_id(&self) -> Option<u64> {
        self.records.iter().filter_map(Record::id).max()
    }

    /// Appends a column to the header and a blank field at its position in
    /// every row. Rows too short to reach that position are left alone, so a
    /// following [`Table::drop_column`] restores every row exactly.
    pub fn add_column(&mut self, name: impl Into<String>) {
        let index = self.schema.column_count();
        self.schema.push(name);
        for record in &mut self.records {
            if record.len() >= index {
                record.values.insert(index, String::new());
            }
        }
    }

    /// Removes the named column from the header and from every row that is
    /// long enough to hold it. Returns `false` if there is no such column.
    pub fn drop_column(&mut self, name: &str) -> bool {
        let Some(index) = self.schema.column_index(name) else {
            return false;
        };
        self.schema.remove(index);
        for record in &mut self.records {
            record.remove(index);
        }
        true
    }
}

/// Tab-separated rendering: the header line, then one line per record, each
/// terminated by `\n`. This is both the on-disk format and the body of a
/// query response.
impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.schema.columns().join("\t"))?;
        for record in &self.records {
            writeln!(f, "{}", record.values.join("\t"))?;
        }
        Ok(())
    }
}
