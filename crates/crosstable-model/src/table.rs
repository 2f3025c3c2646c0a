use std::collections::BTreeMap;

use crate::Field;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    /// Builds a cell from a raw CSV value; empty input becomes `Missing`.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            CellValue::Missing
        } else {
            CellValue::Text(trimmed.to_string())
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            CellValue::Missing => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    pub cells: BTreeMap<Field, CellValue>,
}

impl Row {
    pub fn new() -> Self {
        Self {
            cells: BTreeMap::new(),
        }
    }

    pub fn set(&mut self, field: Field, value: CellValue) {
        self.cells.insert(field, value);
    }

    /// Returns the cell text, treating absent and `Missing` cells alike.
    pub fn text(&self, field: Field) -> Option<&str> {
        self.cells.get(&field).and_then(CellValue::as_text)
    }
}

/// One independently-scored tournament table, immutable once built.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EventTable {
    /// Tag identifying the source event, used when tables are merged.
    pub label: Option<String>,
    /// Declared column order, preserved through export.
    pub columns: Vec<Field>,
    pub rows: Vec<Row>,
}

impl EventTable {
    pub fn new(label: Option<String>, columns: Vec<Field>) -> Self {
        Self {
            label,
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn has_column(&self, field: Field) -> bool {
        self.columns.contains(&field)
    }
}
