//! A small column-ordered table of JSON cells.
//!
//! nflverse datasets are wide and their columns drift between seasons, so rows
//! are kept as positional `Value` vectors under a shared header instead of
//! typed structs.

use serde_json::{Map, Value};

/// Rows of heterogeneous cells sharing one ordered header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

/// Borrowed view of a single row with by-name lookup.
#[derive(Debug, Clone, Copy)]
pub struct RowRef<'a> {
    columns: &'a [String],
    values: &'a [Value],
}

impl<'a> RowRef<'a> {
    /// Cell for `column`, or `None` if the table has no such column.
    pub fn get(&self, column: &str) -> Option<&'a Value> {
        self.columns
            .iter()
            .position(|c| c == column)
            .and_then(|idx| self.values.get(idx))
    }

    /// Cell at a column position resolved earlier with [`Table::column_index`].
    pub fn at(&self, idx: usize) -> Option<&'a Value> {
        self.values.get(idx)
    }
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table from a header and rows. Short rows are padded with nulls,
    /// long rows truncated.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        let mut table = Self::new(columns);
        for row in rows {
            table.push_row(row);
        }
        table
    }

    pub fn push_row(&mut self, mut row: Vec<Value>) {
        row.resize(self.columns.len(), Value::Null);
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = RowRef<'_>> {
        self.rows.iter().map(move |values| RowRef {
            columns: &self.columns,
            values,
        })
    }

    /// Keep only rows for which `keep` returns true.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(RowRef<'_>) -> bool,
    {
        let columns = &self.columns;
        self.rows.retain(|values| keep(RowRef { columns, values }));
    }

    /// Append a column, filling each row through `value_for`.
    pub fn add_column<F>(&mut self, name: &str, mut value_for: F)
    where
        F: FnMut(RowRef<'_>) -> Value,
    {
        let columns = &self.columns;
        let new_values: Vec<Value> = self
            .rows
            .iter()
            .map(|values| value_for(RowRef { columns, values }))
            .collect();

        match self.column_index(name) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(new_values) {
                    row[idx] = value;
                }
            }
            None => {
                self.columns.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(new_values) {
                    row.push(value);
                }
            }
        }
    }

    /// Stack tables vertically. The header is the union of all headers in
    /// first-seen order; cells a table lacks become null.
    pub fn concat(tables: Vec<Table>) -> Table {
        let mut iter = tables.into_iter();
        let Some(mut out) = iter.next() else {
            return Table::default();
        };

        for table in iter {
            if table.columns == out.columns {
                out.rows.extend(table.rows);
                continue;
            }

            for column in &table.columns {
                if !out.has_column(column) {
                    out.columns.push(column.clone());
                }
            }
            let width = out.columns.len();
            for row in out.rows.iter_mut() {
                row.resize(width, Value::Null);
            }

            let mapping: Vec<usize> = table
                .columns
                .iter()
                .filter_map(|c| out.column_index(c))
                .collect();
            for row in table.rows {
                let mut aligned = vec![Value::Null; width];
                for (value, idx) in row.into_iter().zip(&mapping) {
                    aligned[*idx] = value;
                }
                out.rows.push(aligned);
            }
        }
        out
    }

    /// Rows as ordered JSON objects.
    pub fn to_records(&self) -> Vec<Map<String, Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect::<Map<String, Value>>()
            })
            .collect()
    }
}

/// String form of a cell for case-insensitive comparisons. Null has none.
pub fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(if *b { "True" } else { "False" }.to_string()),
        other => Some(other.to_string()),
    }
}

/// Numeric equality between a cell and an integer; strings never match.
pub fn cell_equals_int(value: &Value, target: i64) -> bool {
    match value {
        Value::Number(n) => n
            .as_i64()
            .map(|v| v == target)
            .or_else(|| n.as_f64().map(|v| v == target as f64))
            .unwrap_or(false),
        _ => false,
    }
}
