use crate::{Dataset, Error};
use log::*;
use serde::Serialize;

/// One cell of a table, as decoded by whoever read the file.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
    Missing,
}

impl Value {
    /// NaN and the infinities are treated the same as an empty cell
    fn as_finite(&self) -> Option<f64> {
        match self {
            Value::Number(x) if x.is_finite() => Some(*x),
            _ => None,
        }
    }
}

/// A set of homogeneous records: one name per field, one row per record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Table {
        Table {
            columns,
            rows: vec![],
        }
    }

    /// Short rows are padded out with `Missing`; extra cells are discarded.
    pub fn push_row(&mut self, mut row: Vec<Value>) {
        row.resize(self.columns.len(), Value::Missing);
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|x| x == name)
    }

    // A field with nothing but missing cells still counts as numeric
    fn is_numeric(&self, idx: usize) -> bool {
        self.rows
            .iter()
            .all(|row| !matches!(row[idx], Value::Text(_)))
    }

    /// The fields which hold numbers, in schema order.
    pub fn numeric_columns(&self) -> Vec<&str> {
        (0..self.columns.len())
            .filter(|&idx| self.is_numeric(idx))
            .map(|idx| self.columns[idx].as_str())
            .collect()
    }
}

/// Pull one field out of a table.
///
/// Records with nothing in that field are skipped.  The table as a whole is
/// checked for numeric fields first: if there are none, it doesn't matter
/// which one was asked for.
pub fn parse_column(table: &Table, column: &str) -> Result<Dataset, Error> {
    if table.numeric_columns().is_empty() {
        return Err(Error::NoNumericColumns);
    }
    let idx = table
        .column_index(column)
        .ok_or_else(|| Error::ColumnNotFound(column.to_string()))?;
    if !table.is_numeric(idx) {
        return Err(Error::ColumnNotNumeric(column.to_string()));
    }
    let values = table
        .rows
        .iter()
        .filter_map(|row| row[idx].as_finite())
        .collect::<Vec<f64>>();
    let dropped = table.rows.len() - values.len();
    if dropped > 0 {
        debug!("Dropped {} rows with no value in \"{}\"", dropped, column);
    }
    Dataset::new(values)
}
