//! End-to-end generation pipeline for one request.
//!
//! Sequential and fail-fast: files are read one at a time, sheets
//! classified one at a time, rows rendered one at a time, in source
//! order. Uploaded temp files are removed on both success and failure
//! paths.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use docgen_ingest::{UploadedFile, analyze_files};
use docgen_model::{CatalogEntry, TemplateId};

use crate::assemble::DocumentAssembler;
use crate::collaborators::{
    DocumentConverter, DocumentDescriptor, OutputWriter, PersistenceRecord, PersistenceStore,
    Renderer, TemplateStore,
};
use crate::error::{AssembleError, Result};
use crate::filter::{check_row_limit, filter_catalog, merge_rows};
use crate::select::{compact_for_persistence, rows_to_persist};
use crate::session::SessionId;

/// One generation request.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub uploads: Vec<UploadedFile>,
    pub template: TemplateId,
}

/// What a completed request reports back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub session_id: String,
    pub template: TemplateId,
    pub documents: Vec<DocumentDescriptor>,
    /// Classified-sheet metadata for the sheets that survived filtering.
    pub sheets: Vec<CatalogEntry>,
    pub file_count: usize,
    pub total_rows: usize,
    pub saved_rows: usize,
    pub duration_ms: u128,
}

/// Runs one generation request end to end.
///
/// Stages: analyze uploads → filter sheets by template → merge rows with
/// provenance → enforce the row ceiling → select and persist audit rows →
/// assemble documents. Any stage failure aborts the request; uploaded
/// temp files are cleaned up regardless of outcome.
pub fn run_generation<S, R, C, W, P>(
    request: &GenerationRequest,
    assembler: &DocumentAssembler<S, R, C, W>,
    persistence: &P,
) -> Result<GenerationSummary>
where
    S: TemplateStore,
    R: Renderer,
    C: DocumentConverter,
    W: OutputWriter,
    P: PersistenceStore,
{
    let session = SessionId::generate();
    let started = Instant::now();
    tracing::info!(
        session = %session,
        template = %request.template,
        files = request.uploads.len(),
        "starting generation request"
    );

    let outcome = run_stages(request, assembler, persistence, &session, started);
    cleanup_uploads(&request.uploads);

    match &outcome {
        Ok(summary) => tracing::info!(
            session = %session,
            documents = summary.documents.len(),
            duration_ms = summary.duration_ms,
            "generation request complete"
        ),
        Err(error) => tracing::error!(session = %session, %error, "generation request failed"),
    }

    outcome
}

fn run_stages<S, R, C, W, P>(
    request: &GenerationRequest,
    assembler: &DocumentAssembler<S, R, C, W>,
    persistence: &P,
    session: &SessionId,
    started: Instant,
) -> Result<GenerationSummary>
where
    S: TemplateStore,
    R: Renderer,
    C: DocumentConverter,
    W: OutputWriter,
    P: PersistenceStore,
{
    let template = request.template;

    let catalog = analyze_files(&request.uploads)?;
    let filtered = filter_catalog(&catalog, template)?;
    let sheets: Vec<CatalogEntry> = filtered
        .iter()
        .map(|(index, sheet)| sheet.summary(*index))
        .collect();

    let rows = merge_rows(&filtered);
    check_row_limit(&rows)?;
    tracing::info!(session = %session, rows = rows.len(), "merged filtered sheets");

    let selected = rows_to_persist(&rows, template);
    let record = PersistenceRecord {
        session_id: session.as_str().to_string(),
        data: compact_for_persistence(&selected),
        template_id: template,
        file_count: request.uploads.len(),
        total_rows: rows.len(),
        saved_rows: selected.len(),
    };
    persistence
        .save(&record)
        .map_err(|e| AssembleError::Persistence {
            message: e.to_string(),
        })?;
    tracing::info!(
        session = %session,
        saved = record.saved_rows,
        total = record.total_rows,
        "persisted selected rows"
    );

    let documents = assembler.assemble(&rows, template, session)?;

    Ok(GenerationSummary {
        session_id: session.as_str().to_string(),
        template,
        documents,
        sheets,
        file_count: request.uploads.len(),
        total_rows: rows.len(),
        saved_rows: selected.len(),
        duration_ms: started.elapsed().as_millis(),
    })
}

/// Best-effort removal of uploaded temp files; failures are logged and
/// otherwise ignored.
fn cleanup_uploads(uploads: &[UploadedFile]) {
    for upload in uploads {
        if !upload.stored_path.exists() {
            continue;
        }
        if let Err(error) = std::fs::remove_file(&upload.stored_path) {
            tracing::warn!(
                file = %upload.stored_path.display(),
                %error,
                "failed to remove uploaded temp file"
            );
        }
    }
}
