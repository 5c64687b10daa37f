//! Error taxonomy for document assembly.
//!
//! Every error here is fatal to the whole generation request: there is no
//! partial-success mode and no retry anywhere in this crate.

use thiserror::Error;

use docgen_ingest::IngestError;
use docgen_model::TemplateId;

#[derive(Debug, Error)]
pub enum AssembleError {
    /// Reading or classifying an uploaded file failed.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// The template's sheet-keyword filter matched nothing.
    #[error(
        "no sheet matches template {template}; required keywords: [{required}]; sheets found: [{found}]"
    )]
    NoMatchingSheet {
        template: TemplateId,
        required: String,
        found: String,
    },

    /// Merged row set exceeds the per-request ceiling.
    #[error("merged row set has {count} rows, exceeding the limit of {limit}")]
    RowLimitExceeded { count: usize, limit: usize },

    /// Post-filter row set is empty for the chosen strategy.
    #[error("no applicable rows for template {template} after filtering")]
    NoApplicableData { template: TemplateId },

    /// Unit-correlated generation found no unit rows at all.
    #[error("no unit rows found; check that a sheet carries Unit_name, Outcome, and tpqi columns")]
    NoUnitData,

    /// Standards table ended up empty after dropping unusable rows.
    #[error(
        "no valid standards rows; check columns หน่วยสมรรถนะ, สมรรถนะย่อย, เกณฑ์การปฏิบัติงาน"
    )]
    NoValidStandards,

    /// No render resource exists for the template.
    #[error("render template not found: {template}")]
    TemplateNotFound { template: TemplateId },

    /// Render, convert, or write failed for one output unit.
    #[error("failed to produce document for {unit}: {message}")]
    DocumentRender { unit: String, message: String },

    /// The persistence store rejected the selected rows.
    #[error("failed to persist selected rows: {message}")]
    Persistence { message: String },
}

pub type Result<T> = std::result::Result<T, AssembleError>;
