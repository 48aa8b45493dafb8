use tracing::debug;

use crate::error::{Error, Result};
use crate::storage::table::{Record, Schema, Table, ID_COLUMN};

/// Nested-loop equality join of `left` and `right` on one column each.
///
/// Every pair of rows whose key fields are exactly equal produces one output
/// row: a fresh sequential id, then all of the left row, then all of the right
/// row. Output columns are qualified as `<table>.<column>`. Both join keys and
/// both source `id` columns are dropped from the result.
pub fn join_tables(
    left: &Table,
    right: &Table,
    left_column: &str,
    right_column: &str,
) -> Result<Table> {
    let left_key = left
        .get_column_index(left_column)
        .ok_or_else(|| Error::ColumnNotFound(left_column.to_string()))?;
    let right_key = right
        .get_column_index(right_column)
        .ok_or_else(|| Error::ColumnNotFound(right_column.to_string()))?;

    let mut header = vec![ID_COLUMN.to_string()];
    header.extend(qualified(left));
    header.extend(qualified(right));

    let mut joined = Table::new(format!("{}_{}", left.name, right.name), Schema::new(header));
    let left_width = left.column_count();

    for l in left.iter() {
        let Some(lv) = l.get(left_key) else {
            continue;
        };
        for r in right.iter() {
            if r.get(right_key) != Some(lv) {
                continue;
            }

            let mut values = Vec::with_capacity(1 + left_width + r.len());
            values.push((joined.row_count() + 1).to_string());
            values.extend(l.values.iter().cloned());
            // the left row is fitted to its header so right-hand values and the
            // suppressed columns line up with the joined header
            values.resize(1 + left_width, String::new());
            values.extend(r.values.iter().cloned());
            joined.add_record(Record::new(values));
        }
    }

    let suppressed = [
        qualify(&left.name, &left.schema.columns()[left_key]),
        qualify(&right.name, &right.schema.columns()[right_key]),
        qualify(&left.name, ID_COLUMN),
        qualify(&right.name, ID_COLUMN),
    ];
    for column in &suppressed {
        joined.drop_column(column);
    }

    debug!(
        left = %left.name,
        right = %right.name,
        rows = joined.row_count(),
        "joined tables"
    );
    Ok(joined)
}

fn qualified(table: &Table) -> impl Iterator<Item = String> + '_ {
    table
        .schema
        .columns()
        .iter()
        .map(move |column| qualify(&table.name, column))
}

fn qualify(table: &str, column: &str) -> String {
    format!("{}.{}", table, column)
}
