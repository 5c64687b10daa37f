//! Upload analysis: reads every uploaded file and builds the classified
//! sheet catalog for one generation request.

use std::path::PathBuf;

use docgen_model::{Catalog, ClassifiedSheet};

use crate::classify::classify_columns;
use crate::error::{IngestError, Result};
use crate::reader::read_sheets;

/// Descriptor for one uploaded file, as supplied by the upload source.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Name the uploader gave the file.
    pub original_name: String,
    /// Where the upload was stored on disk.
    pub stored_path: PathBuf,
    /// File extension without the leading dot.
    pub extension: String,
}

impl UploadedFile {
    /// Builds a descriptor from a local path, deriving name and extension.
    #[must_use]
    pub fn from_path(path: PathBuf) -> Self {
        let original_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();
        Self {
            original_name,
            stored_path: path,
            extension,
        }
    }
}

/// Reads and classifies every uploaded file, in upload order.
///
/// Catalog indices are assigned in strict file-then-sheet order (workbook
/// sheet order as declared in the source workbook) and are dense and
/// zero-based. A failure while reading or classifying any file aborts the
/// whole analysis, naming the offending file.
pub fn analyze_files(files: &[UploadedFile]) -> Result<Catalog> {
    let mut catalog = Catalog::new();

    for file in files {
        let tables = read_sheets(&file.stored_path, &file.original_name, &file.extension)
            .map_err(|e| IngestError::FileAnalysis {
                file: file.original_name.clone(),
                source: Box::new(e),
            })?;

        for table in tables {
            let role = classify_columns(&table.columns);
            tracing::info!(
                index = catalog.len(),
                file = %table.file_name,
                sheet = %table.sheet_name,
                role = %role,
                rows = table.row_count(),
                "analyzed sheet"
            );
            catalog.push(ClassifiedSheet { table, role });
        }
    }

    Ok(catalog)
}
