//! Contracts for the external collaborators the assembly core drives.
//!
//! The core never owns a render engine, a document converter, or a
//! database; it calls them through these narrow traits. Implementations
//! are foreign code, so every method surfaces failures as
//! [`anyhow::Result`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use docgen_model::{TaggedRow, TemplateId};

/// Store of render template resources, keyed by template identifier.
pub trait TemplateStore {
    fn exists(&self, template: TemplateId) -> bool;
    fn load(&self, template: TemplateId) -> anyhow::Result<String>;
}

/// Turns a template resource plus a field map into markup.
///
/// The field map is a JSON value so repeated groups (tables of correlated
/// rows) can be expressed; the engine must support loop and conditional
/// constructs over them.
pub trait Renderer {
    fn render(&self, resource: &str, fields: &serde_json::Value) -> anyhow::Result<String>;
}

/// Converts rendered markup into the binary document format.
pub trait DocumentConverter {
    fn convert(&self, markup: &str) -> anyhow::Result<Vec<u8>>;
}

/// Writes one finished document to the output location.
pub trait OutputWriter {
    fn write(&self, path: &Path, bytes: &[u8]) -> anyhow::Result<()>;
}

/// Rows selected for audit persistence, with request bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceRecord {
    pub session_id: String,
    pub data: Vec<TaggedRow>,
    pub template_id: TemplateId,
    pub file_count: usize,
    pub total_rows: usize,
    pub saved_rows: usize,
}

/// Receives the rows selected for audit; generation logic never reads
/// them back.
pub trait PersistenceStore {
    fn save(&self, record: &PersistenceRecord) -> anyhow::Result<()>;
}

/// One rendered output document, as handed to the archiving collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDescriptor {
    /// Output file name.
    pub name: String,
    /// Filesystem location of the written binary.
    pub path: PathBuf,
    /// Public-facing reference.
    pub url: String,
}
