//! Row selection policies.
//!
//! The same policy table is applied twice per request, independently:
//! once to decide which rows are persisted for audit, and once (inside
//! the assembler) to decide which rows feed rendering.

use docgen_model::{RowPolicy, SheetRole, TaggedRow, TemplateId};
use docgen_template::spec_for;

/// Applies one policy to a tagged row set.
#[must_use]
pub fn apply_policy(rows: &[TaggedRow], policy: RowPolicy) -> Vec<TaggedRow> {
    match policy {
        RowPolicy::AllRows => rows.to_vec(),
        RowPolicy::UnitRowsOnly => rows
            .iter()
            .filter(|row| row.role == SheetRole::Unit)
            .cloned()
            .collect(),
        RowPolicy::FirstRowOnly => rows.iter().take(1).cloned().collect(),
    }
}

/// Rows persisted to storage for a template, per the registry's
/// persistence policy.
#[must_use]
pub fn rows_to_persist(rows: &[TaggedRow], template: TemplateId) -> Vec<TaggedRow> {
    apply_policy(rows, spec_for(template).persistence)
}

/// Drops blank cells from rows before persistence, keeping provenance
/// untouched.
#[must_use]
pub fn compact_for_persistence(rows: &[TaggedRow]) -> Vec<TaggedRow> {
    rows.iter()
        .map(|row| {
            let mut compacted = row.clone();
            compacted.values.retain(|_, cell| cell.is_usable());
            compacted
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use docgen_model::{CellValue, RawRow};

    fn tagged(role: SheetRole, row_index: usize) -> TaggedRow {
        let values: RawRow = [
            ("a".to_string(), CellValue::Text("x".to_string())),
            ("b".to_string(), CellValue::Blank),
            ("c".to_string(), CellValue::Text("  ".to_string())),
        ]
        .into_iter()
        .collect();
        TaggedRow {
            values,
            file_index: 0,
            file_name: "f.csv".to_string(),
            sheet_name: "s".to_string(),
            role,
            row_index,
        }
    }

    #[test]
    fn unit_oriented_templates_keep_unit_rows() {
        let rows = vec![
            tagged(SheetRole::Unit, 0),
            tagged(SheetRole::Content, 1),
            tagged(SheetRole::Unit, 2),
        ];
        for template in [
            TemplateId::KnowledgeSheet,
            TemplateId::LearningManagementPlan,
            TemplateId::UnitName,
            TemplateId::BehavioralAnalysisTable,
        ] {
            let selected = rows_to_persist(&rows, template);
            assert_eq!(selected.len(), 2, "{template}");
            assert!(selected.iter().all(|r| r.role == SheetRole::Unit));
        }
    }

    #[test]
    fn vocational_standard_keeps_first_row_only() {
        let rows = vec![tagged(SheetRole::Unknown, 0), tagged(SheetRole::Unknown, 1)];
        let selected = rows_to_persist(&rows, TemplateId::VocationalStandard);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].row_index, 0);
    }

    #[test]
    fn pass_through_templates_keep_everything() {
        let rows = vec![tagged(SheetRole::Unit, 0), tagged(SheetRole::Unknown, 1)];
        for template in [
            TemplateId::Course,
            TemplateId::WorkSheet,
            TemplateId::WorkAssignment,
            TemplateId::ActivityDocuments,
        ] {
            assert_eq!(rows_to_persist(&rows, template).len(), 2, "{template}");
        }
    }

    #[test]
    fn compacting_drops_blank_cells_but_keeps_provenance() {
        let rows = compact_for_persistence(&[tagged(SheetRole::Unit, 3)]);
        assert_eq!(rows[0].values.len(), 1);
        assert!(rows[0].values.contains_key("a"));
        assert_eq!(rows[0].row_index, 3);
        assert_eq!(rows[0].role, SheetRole::Unit);
    }
}
