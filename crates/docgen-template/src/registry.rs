//! Template registry: one declarative descriptor per template identifier.
//!
//! Replaces per-template conditionals with a lookup, so adding a template
//! means adding a descriptor, not touching generation control flow.

use std::collections::BTreeMap;

use docgen_model::{GenerationStrategy, RawRow, RowPolicy, TemplateId};

use crate::fields::resolve;
use crate::synonyms::{FieldSynonyms, field_synonyms};

/// Declarative description of one template's behavior.
#[derive(Debug, Clone, Copy)]
pub struct TemplateSpec {
    pub id: TemplateId,
    /// Sheet-name keywords; a catalog entry survives the sheet filter when
    /// its name contains any of these, case-folded.
    pub required_sheet_keywords: &'static [&'static str],
    pub strategy: GenerationStrategy,
    /// Which rows are persisted to storage.
    pub persistence: RowPolicy,
    /// Which rows feed rendering; independent of persistence.
    pub render_filter: RowPolicy,
    /// Identifying fields tried in order when deriving output filenames.
    pub filename_fields: &'static [&'static str],
}

const SPECS: &[TemplateSpec] = &[
    TemplateSpec {
        id: TemplateId::Course,
        required_sheet_keywords: &["หลักสูตรรายวิชา", "course", "รายวิชา"],
        strategy: GenerationStrategy::PerRow,
        persistence: RowPolicy::AllRows,
        render_filter: RowPolicy::AllRows,
        filename_fields: &["ชื่อวิชา", "รหัสวิชา", "เลขที่", "ชื่อสกุล"],
    },
    TemplateSpec {
        id: TemplateId::KnowledgeSheet,
        required_sheet_keywords: &[
            "หน่วยการเรียน",
            "เนื้อหา",
            "แบบฝึกหัดแบบทดสอบ",
            "unit",
            "Unit_name",
        ],
        strategy: GenerationStrategy::UnitCorrelated,
        persistence: RowPolicy::UnitRowsOnly,
        render_filter: RowPolicy::UnitRowsOnly,
        filename_fields: &["Unit_name"],
    },
    TemplateSpec {
        id: TemplateId::LearningManagementPlan,
        required_sheet_keywords: &["หน่วยการเรียน", "unit", "Unit_name"],
        strategy: GenerationStrategy::UnitMultiOutput,
        persistence: RowPolicy::UnitRowsOnly,
        render_filter: RowPolicy::UnitRowsOnly,
        filename_fields: &["Unit_name"],
    },
    TemplateSpec {
        id: TemplateId::VocationalStandard,
        required_sheet_keywords: &["มาตรฐานวิชาชีพ", "vocational", "standard", "มาตรฐาน"],
        strategy: GenerationStrategy::FirstRowTable,
        persistence: RowPolicy::FirstRowOnly,
        render_filter: RowPolicy::AllRows,
        filename_fields: &[],
    },
    TemplateSpec {
        id: TemplateId::WorkSheet,
        required_sheet_keywords: &["ใบงาน", "work_sheet", "worksheet"],
        strategy: GenerationStrategy::PerRowFlat,
        persistence: RowPolicy::AllRows,
        render_filter: RowPolicy::AllRows,
        filename_fields: &["ใบงานที่"],
    },
    TemplateSpec {
        id: TemplateId::WorkAssignment,
        required_sheet_keywords: &["ใบมอบหมายงาน", "assignment", "work_assignment"],
        strategy: GenerationStrategy::PerRowFlat,
        persistence: RowPolicy::AllRows,
        render_filter: RowPolicy::AllRows,
        filename_fields: &["ใบมอบหมายงานที่"],
    },
    TemplateSpec {
        id: TemplateId::UnitName,
        required_sheet_keywords: &["หน่วยการเรียน", "unit", "Unit_name"],
        strategy: GenerationStrategy::SingleAggregate,
        persistence: RowPolicy::UnitRowsOnly,
        render_filter: RowPolicy::UnitRowsOnly,
        filename_fields: &[],
    },
    TemplateSpec {
        id: TemplateId::BehavioralAnalysisTable,
        required_sheet_keywords: &["หน่วยการเรียน", "unit", "Unit_name"],
        strategy: GenerationStrategy::SingleAggregate,
        persistence: RowPolicy::UnitRowsOnly,
        render_filter: RowPolicy::UnitRowsOnly,
        filename_fields: &[],
    },
    TemplateSpec {
        id: TemplateId::ActivityDocuments,
        required_sheet_keywords: &["ใบกิจกรรม", "activity", "activities"],
        strategy: GenerationStrategy::PerRowFlat,
        persistence: RowPolicy::AllRows,
        render_filter: RowPolicy::AllRows,
        filename_fields: &["ใบกิจกรรมที่"],
    },
];

/// Looks up the descriptor for a template identifier.
#[must_use]
pub fn spec_for(template: TemplateId) -> &'static TemplateSpec {
    SPECS
        .iter()
        .find(|spec| spec.id == template)
        .expect("every TemplateId has a registry entry")
}

/// Resolves a template's whole canonical field set from one raw row.
///
/// Fields without a usable value resolve to the empty string, so the
/// returned map always carries every canonical name.
#[must_use]
pub fn map_row(template: TemplateId, row: &RawRow) -> BTreeMap<&'static str, String> {
    let table: FieldSynonyms = field_synonyms(template);
    table
        .iter()
        .map(|(canonical, candidates)| (*canonical, resolve(row, candidates)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use docgen_model::CellValue;

    #[test]
    fn every_template_id_has_a_spec() {
        for id in TemplateId::ALL {
            assert_eq!(spec_for(id).id, id);
        }
    }

    #[test]
    fn per_row_templates_have_filename_fields() {
        for id in TemplateId::ALL {
            let spec = spec_for(id);
            if matches!(
                spec.strategy,
                GenerationStrategy::PerRow | GenerationStrategy::PerRowFlat
            ) {
                assert!(!spec.filename_fields.is_empty(), "{id}");
            }
        }
    }

    #[test]
    fn map_row_resolves_synonyms_in_priority_order() {
        let mut row = RawRow::new();
        row.insert(
            "subject_name_th".to_string(),
            CellValue::Text("งานไฟฟ้า".to_string()),
        );
        row.insert("course_code".to_string(), CellValue::Text("20100".to_string()));

        let mapped = map_row(TemplateId::Course, &row);
        assert_eq!(mapped["ชื่อวิชา"], "งานไฟฟ้า");
        assert_eq!(mapped["รหัสวิชา"], "20100");
        // Unresolved fields are present but empty.
        assert_eq!(mapped["หน่วยกิต"], "");
        assert_eq!(mapped.len(), field_synonyms(TemplateId::Course).len());
    }

    #[test]
    fn unit_list_accepts_every_unit_header_spelling() {
        for header in [
            "Unit_name",
            "ชื่อหน่วยการเรียนรู้",
            "หน่วยการเรียนรู้",
            "ชื่อหน่วย",
        ] {
            let mut row = RawRow::new();
            row.insert(header.to_string(), CellValue::Text("งานกลึง".to_string()));
            let mapped = map_row(TemplateId::UnitName, &row);
            assert_eq!(mapped["ชื่อหน่วยการเรียนรู้"], "งานกลึง", "{header}");
        }
    }

    #[test]
    fn knowledge_sheet_keywords_cover_all_three_roles() {
        let spec = spec_for(TemplateId::KnowledgeSheet);
        assert!(spec.required_sheet_keywords.contains(&"หน่วยการเรียน"));
        assert!(spec.required_sheet_keywords.contains(&"เนื้อหา"));
        assert!(spec.required_sheet_keywords.contains(&"แบบฝึกหัดแบบทดสอบ"));
    }
}
