use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::SheetRole;

/// A single spreadsheet cell value.
///
/// Source data carries text, numbers, and empty cells; no richer typing
/// is enforced anywhere in the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Blank,
}

impl CellValue {
    /// True when the value is usable for field resolution: present and,
    /// for text, non-empty after trimming.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        match self {
            Self::Text(text) => !text.trim().is_empty(),
            Self::Number(_) => true,
            Self::Blank => false,
        }
    }

    /// Renders the value as the string the templates consume.
    ///
    /// Numbers print without a trailing `.0` when they are whole, matching
    /// how spreadsheet tools display integer cells.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(number) => {
                if number.fract() == 0.0 && number.abs() < 1e15 {
                    format!("{}", *number as i64)
                } else {
                    number.to_string()
                }
            }
            Self::Blank => String::new(),
        }
    }
}

/// A row keyed by trimmed column header. Keys are unique within the row;
/// no schema is enforced.
pub type RawRow = BTreeMap<String, CellValue>;

/// An ordered run of rows sharing one header set, identified by the
/// originating file and worksheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetTable {
    /// Original (uploaded) file name.
    pub file_name: String,
    /// Worksheet name; for CSV input this is the file name.
    pub sheet_name: String,
    /// Header names in source column order.
    pub columns: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl SheetTable {
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// A row enriched with provenance, the unit that flows through filtering,
/// selection, and generation.
///
/// Provenance fields are set exactly once when sheets are merged and are
/// never mutated afterwards; downstream stages only add or remove whole
/// rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggedRow {
    pub values: RawRow,
    /// Catalog index of the source sheet.
    pub file_index: usize,
    pub file_name: String,
    pub sheet_name: String,
    pub role: SheetRole,
    /// Row position within its source sheet.
    pub row_index: usize,
}

impl TaggedRow {
    /// Looks up a value by exact (trimmed) header name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.values.get(key)
    }
}
