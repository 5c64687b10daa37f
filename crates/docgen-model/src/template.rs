use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// The closed set of supported template identifiers.
///
/// String forms are the identifiers callers submit with a generation
/// request and the names under which render resources are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TemplateId {
    Course,
    KnowledgeSheet,
    LearningManagementPlan,
    VocationalStandard,
    WorkSheet,
    WorkAssignment,
    UnitName,
    BehavioralAnalysisTable,
    ActivityDocuments,
}

impl TemplateId {
    pub const ALL: [Self; 9] = [
        Self::Course,
        Self::KnowledgeSheet,
        Self::LearningManagementPlan,
        Self::VocationalStandard,
        Self::WorkSheet,
        Self::WorkAssignment,
        Self::UnitName,
        Self::BehavioralAnalysisTable,
        Self::ActivityDocuments,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Course => "course",
            Self::KnowledgeSheet => "Knowledge_sheet",
            Self::LearningManagementPlan => "Learning_management_plan",
            Self::VocationalStandard => "Vocational_standard",
            Self::WorkSheet => "work_sheet",
            Self::WorkAssignment => "Work_Assignment",
            Self::UnitName => "Unit_name",
            Self::BehavioralAnalysisTable => "Behavioral_analysis_table",
            Self::ActivityDocuments => "Activity_documents",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::UnknownTemplate(value.to_string()))
    }
}

/// How documents are produced for a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationStrategy {
    /// One output document per rendered row.
    PerRow,
    /// One document summarizing all filtered rows as a unit list.
    SingleAggregate,
    /// One document per unit row, correlated positionally with content
    /// and test rows from the full row set.
    UnitCorrelated,
    /// One document per filtered unit row with an extended field set.
    UnitMultiOutput,
    /// One document; header fields from the first row, a table section
    /// from every row carrying standards data.
    FirstRowTable,
    /// One document per row using the template's own labels only.
    PerRowFlat,
}

/// Which rows a stage keeps for a template.
///
/// Applied independently to persistence selection and to the rendering
/// input; the two stages share the same policy table but are separate
/// decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowPolicy {
    /// Keep only rows whose role is `unit`.
    UnitRowsOnly,
    /// Keep only the first row overall.
    FirstRowOnly,
    /// Keep every row.
    AllRows,
}
