use serde::{Deserialize, Serialize};

use crate::{SheetRole, SheetTable};

/// A sheet table with its assigned role. Immutable once classified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedSheet {
    pub table: SheetTable,
    pub role: SheetRole,
}

impl ClassifiedSheet {
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.table.row_count()
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.table.columns
    }

    #[must_use]
    pub fn summary(&self, index: usize) -> CatalogEntry {
        CatalogEntry {
            index,
            file_name: self.table.file_name.clone(),
            sheet_name: self.table.sheet_name.clone(),
            role: self.role,
            row_count: self.row_count(),
            columns: self.table.columns.clone(),
        }
    }
}

/// Per-sheet metadata reported back to callers alongside generation
/// results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub index: usize,
    pub file_name: String,
    pub sheet_name: String,
    pub role: SheetRole,
    pub row_count: usize,
    pub columns: Vec<String>,
}

/// Indexed catalog of classified sheets for one generation request.
///
/// Indices are dense, zero-based, and assigned in file-then-sheet
/// discovery order. The index is the only correlation key between sheets
/// of different roles; it encodes discovery order, not any semantic
/// pairing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    sheets: Vec<ClassifiedSheet>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a classified sheet, returning its assigned index.
    pub fn push(&mut self, sheet: ClassifiedSheet) -> usize {
        self.sheets.push(sheet);
        self.sheets.len() - 1
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ClassifiedSheet> {
        self.sheets.get(index)
    }

    /// Iterates entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &ClassifiedSheet)> {
        self.sheets.iter().enumerate()
    }

    /// Sheet names in index order, used for diagnostics when a template's
    /// keyword filter matches nothing.
    #[must_use]
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets
            .iter()
            .map(|sheet| sheet.table.sheet_name.clone())
            .collect()
    }

    #[must_use]
    pub fn summaries(&self) -> Vec<CatalogEntry> {
        self.iter()
            .map(|(index, sheet)| sheet.summary(index))
            .collect()
    }
}
