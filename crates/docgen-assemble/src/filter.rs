//! Template-specific sheet filtering, row merging, and the row ceiling.

use docgen_model::{Catalog, ClassifiedSheet, TaggedRow, TemplateId};
use docgen_template::spec_for;

use crate::error::{AssembleError, Result};

/// Hard ceiling on the merged row set for one request. Anything larger is
/// rejected before persistence or rendering starts.
pub const MAX_MERGED_ROWS: usize = 1000;

/// Retains the catalog entries whose sheet name, case-folded, contains
/// any of the template's required keywords as a substring.
///
/// Matching is purely substring based; no tokenization and no
/// edit-distance fuzziness. Zero matches is an error whose message
/// enumerates both the keyword list and the sheet names actually found.
pub fn filter_catalog(
    catalog: &Catalog,
    template: TemplateId,
) -> Result<Vec<(usize, &ClassifiedSheet)>> {
    let keywords = spec_for(template).required_sheet_keywords;
    let mut matched = Vec::new();

    for (index, sheet) in catalog.iter() {
        let sheet_name = sheet.table.sheet_name.to_lowercase();
        let is_match = keywords
            .iter()
            .any(|keyword| sheet_name.contains(&keyword.to_lowercase()));

        if is_match {
            tracing::info!(
                template = %template,
                sheet = %sheet.table.sheet_name,
                "sheet matches template filter"
            );
            matched.push((index, sheet));
        } else {
            tracing::info!(
                template = %template,
                sheet = %sheet.table.sheet_name,
                "sheet skipped by template filter"
            );
        }
    }

    if matched.is_empty() {
        return Err(AssembleError::NoMatchingSheet {
            template,
            required: keywords.join(", "),
            found: catalog.sheet_names().join(", "),
        });
    }

    Ok(matched)
}

/// Merges filtered catalog entries into one tagged row set.
///
/// Provenance (catalog index, file, sheet, role, in-sheet position) is
/// stamped here, exactly once; downstream stages only add or remove whole
/// rows.
#[must_use]
pub fn merge_rows(filtered: &[(usize, &ClassifiedSheet)]) -> Vec<TaggedRow> {
    let mut merged = Vec::new();
    for (index, sheet) in filtered {
        for (row_index, row) in sheet.table.rows.iter().enumerate() {
            merged.push(TaggedRow {
                values: row.clone(),
                file_index: *index,
                file_name: sheet.table.file_name.clone(),
                sheet_name: sheet.table.sheet_name.clone(),
                role: sheet.role,
                row_index,
            });
        }
    }
    merged
}

/// Enforces [`MAX_MERGED_ROWS`] before any persistence or rendering.
pub fn check_row_limit(rows: &[TaggedRow]) -> Result<()> {
    if rows.len() > MAX_MERGED_ROWS {
        return Err(AssembleError::RowLimitExceeded {
            count: rows.len(),
            limit: MAX_MERGED_ROWS,
        });
    }
    Ok(())
}
