//! In-memory statement tables and their CSV/JSON forms.

use serde::Serialize;
use std::fmt;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

use crate::error::TacticaError;

/// One table cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Text(String),
    Bool(bool),
    Count(usize),
}

impl Value {
    /// The cell as text, or `None` when the cell is absent.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Value::Null => None,
            Value::Text(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn as_bool(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Text(s) => s.eq_ignore_ascii_case("true"),
            Value::Count(n) => *n > 0,
            Value::Null => false,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Text(s) => f.write_str(s),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Count(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

/// Named columns over rows of cells. Every row has exactly one cell per column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row, padding with `Null` or truncating to the column count.
    pub fn push_row(&mut self, mut row: Vec<Value>) {
        row.resize(self.columns.len(), Value::Null);
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Like [`Table::column_index`] but fails with `FieldNotFound`.
    pub fn require_column(&self, name: &str) -> Result<usize, TacticaError> {
        self.column_index(name).ok_or_else(|| {
            TacticaError::FieldNotFound(format!(
                "column '{name}' not in [{}]",
                self.columns.join(", ")
            ))
        })
    }

    /// Cell at row `row`, column `name`.
    pub fn get(&self, row: usize, name: &str) -> Option<&Value> {
        let col = self.column_index(name)?;
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Replace a column's values, appending the column if it is new.
    pub(crate) fn set_column(&mut self, name: &str, values: Vec<Value>) {
        let col = match self.column_index(name) {
            Some(idx) => idx,
            None => {
                self.columns.push(name.to_string());
                for row in &mut self.rows {
                    row.push(Value::Null);
                }
                self.columns.len() - 1
            }
        };
        for (row, value) in self.rows.iter_mut().zip(values) {
            row[col] = value;
        }
    }

    /// Read a CSV with a header row. Empty cells become `Null`.
    ///
    /// Short rows are padded with `Null`. Rows longer than the header are
    /// an error.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, TacticaError> {
        let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let columns: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        let mut table = Self::new(columns);

        for record in rdr.records() {
            let record = record?;
            if record.len() > table.columns.len() {
                let line = record.position().map_or(0, |p| p.line());
                return Err(TacticaError::Validation(format!(
                    "line {line}: {} cells but only {} columns (unquoted comma?)",
                    record.len(),
                    table.columns.len()
                )));
            }
            let row = record
                .iter()
                .map(|cell| {
                    if cell.is_empty() {
                        Value::Null
                    } else {
                        Value::from(cell)
                    }
                })
                .collect();
            table.push_row(row);
        }
        debug!(
            "read {} rows x {} columns",
            table.len(),
            table.columns.len()
        );
        Ok(table)
    }

    pub fn from_csv_path(path: &Path) -> Result<Self, TacticaError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Write the table as CSV with a header row.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), TacticaError> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(&self.columns)?;
        for row in &self.rows {
            wtr.write_record(row.iter().map(|v| v.to_string()))?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn to_csv_path(&self, path: &Path) -> Result<(), TacticaError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = std::fs::File::create(path)?;
        self.write_csv(file)
    }

    /// Rows as JSON objects keyed by column name.
    pub fn to_json_records(&self) -> Result<serde_json::Value, TacticaError> {
        let mut records = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let mut obj = serde_json::Map::new();
            for (col, value) in self.columns.iter().zip(row) {
                obj.insert(col.clone(), serde_json::to_value(value)?);
            }
            records.push(serde_json::Value::Object(obj));
        }
        Ok(serde_json::Value::Array(records))
    }
}
