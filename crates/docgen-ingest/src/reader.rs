//! Sheet loading and normalization for CSV files and Excel workbooks.

use std::path::Path;

use calamine::{DataType, Reader, open_workbook_auto};

use docgen_model::{CellValue, RawRow, SheetTable};

use crate::error::{IngestError, Result};

/// Loads one uploaded file into zero or more normalized sheet tables.
///
/// CSV input yields exactly one table named after the original file name.
/// Workbook input yields one table per worksheet that contains at least
/// one data row, in declared worksheet order; empty worksheets are
/// dropped silently. Headers and string values are trimmed; numeric
/// values pass through unchanged.
pub fn read_sheets(path: &Path, original_name: &str, extension: &str) -> Result<Vec<SheetTable>> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    match extension.trim_start_matches('.').to_lowercase().as_str() {
        "csv" => read_csv(path, original_name).map(|table| vec![table]),
        "xlsx" | "xls" => read_workbook(path, original_name),
        other => Err(IngestError::UnsupportedExtension {
            file: original_name.to_string(),
            extension: other.to_string(),
        }),
    }
}

/// Reads a CSV file as a single sheet named after the original file.
///
/// Fails with [`IngestError::EmptyData`] when the file has zero data rows.
fn read_csv(path: &Path, original_name: &str) -> Result<SheetTable> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            source: e,
        })?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut row = RawRow::new();
        for (header, value) in headers.iter().zip(record.iter()) {
            if header.is_empty() {
                continue;
            }
            let trimmed = value.trim();
            let cell = if trimmed.is_empty() {
                CellValue::Blank
            } else {
                CellValue::Text(trimmed.to_string())
            };
            row.insert(header.clone(), cell);
        }

        if row.values().any(CellValue::is_usable) {
            rows.push(row);
        }
    }

    if rows.is_empty() {
        return Err(IngestError::EmptyData {
            file: original_name.to_string(),
        });
    }

    let columns = headers.into_iter().filter(|h| !h.is_empty()).collect();
    Ok(SheetTable {
        file_name: original_name.to_string(),
        sheet_name: original_name.to_string(),
        columns,
        rows,
    })
}

/// Reads every non-empty worksheet of an Excel workbook.
///
/// Fails with [`IngestError::EmptyData`] when no worksheet has data rows.
fn read_workbook(path: &Path, original_name: &str) -> Result<Vec<SheetTable>> {
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::WorkbookRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let sheet_names = workbook.sheet_names().to_owned();
    let mut tables = Vec::new();

    for sheet_name in sheet_names {
        let Some(range_result) = workbook.worksheet_range(&sheet_name) else {
            continue;
        };
        let range = range_result.map_err(|e| IngestError::WorkbookRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut range_rows = range.rows();
        let Some(header_row) = range_rows.next() else {
            continue;
        };

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell_to_text(cell).trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for source_row in range_rows {
            let mut row = RawRow::new();
            for (header, cell) in headers.iter().zip(source_row.iter()) {
                if header.is_empty() {
                    continue;
                }
                row.insert(header.clone(), cell_to_value(cell));
            }
            if row.values().any(CellValue::is_usable) {
                rows.push(row);
            }
        }

        if rows.is_empty() {
            tracing::debug!(sheet = %sheet_name, "skipping empty worksheet");
            continue;
        }

        let columns = headers.into_iter().filter(|h| !h.is_empty()).collect();
        tables.push(SheetTable {
            file_name: original_name.to_string(),
            sheet_name,
            columns,
            rows,
        });
    }

    if tables.is_empty() {
        return Err(IngestError::EmptyData {
            file: original_name.to_string(),
        });
    }

    Ok(tables)
}

fn cell_to_value(cell: &DataType) -> CellValue {
    match cell {
        DataType::String(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                CellValue::Blank
            } else {
                CellValue::Text(trimmed.to_string())
            }
        }
        DataType::Int(value) => CellValue::Number(*value as f64),
        DataType::Float(value) => CellValue::Number(*value),
        DataType::Bool(value) => CellValue::Text(value.to_string()),
        DataType::Empty => CellValue::Blank,
        other => CellValue::Text(other.to_string()),
    }
}

fn cell_to_text(cell: &DataType) -> String {
    cell_to_value(cell).to_text()
}
