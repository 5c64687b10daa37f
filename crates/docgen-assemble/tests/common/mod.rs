//! In-memory collaborator fakes shared by the integration tests.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::anyhow;

use docgen_assemble::{
    DocumentConverter, OutputWriter, PersistenceRecord, PersistenceStore, Renderer, TemplateStore,
};
use docgen_model::{CellValue, RawRow, SheetRole, TaggedRow, TemplateId};

/// Template store with every template present (or none, when `missing`).
pub struct MemoryStore {
    pub missing: bool,
}

impl TemplateStore for MemoryStore {
    fn exists(&self, _template: TemplateId) -> bool {
        !self.missing
    }

    fn load(&self, template: TemplateId) -> anyhow::Result<String> {
        Ok(format!("{template}_template"))
    }
}

/// Renderer that emits the field map as JSON so tests can inspect what
/// would have been rendered.
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, _resource: &str, fields: &serde_json::Value) -> anyhow::Result<String> {
        Ok(fields.to_string())
    }
}

/// Renderer that always fails.
pub struct FailingRenderer;

impl Renderer for FailingRenderer {
    fn render(&self, _resource: &str, _fields: &serde_json::Value) -> anyhow::Result<String> {
        Err(anyhow!("render engine unavailable"))
    }
}

/// Converter that passes markup bytes through unchanged.
pub struct PassThroughConverter;

impl DocumentConverter for PassThroughConverter {
    fn convert(&self, markup: &str) -> anyhow::Result<Vec<u8>> {
        Ok(markup.as_bytes().to_vec())
    }
}

/// Writer that records every write in memory.
#[derive(Clone, Default)]
pub struct MemoryWriter {
    pub written: Arc<Mutex<Vec<(PathBuf, Vec<u8>)>>>,
}

impl OutputWriter for MemoryWriter {
    fn write(&self, path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
        self.written
            .lock()
            .unwrap()
            .push((path.to_path_buf(), bytes.to_vec()));
        Ok(())
    }
}

/// Persistence store that records every saved record in memory.
#[derive(Clone, Default)]
pub struct MemoryPersistence {
    pub records: Arc<Mutex<Vec<PersistenceRecord>>>,
}

impl PersistenceStore for MemoryPersistence {
    fn save(&self, record: &PersistenceRecord) -> anyhow::Result<()> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// Builds a tagged row from header/value pairs.
pub fn tagged_row(role: SheetRole, row_index: usize, pairs: &[(&str, &str)]) -> TaggedRow {
    let values: RawRow = pairs
        .iter()
        .map(|(k, v)| {
            let cell = if v.is_empty() {
                CellValue::Blank
            } else {
                CellValue::Text((*v).to_string())
            };
            ((*k).to_string(), cell)
        })
        .collect();
    TaggedRow {
        values,
        file_index: 0,
        file_name: "upload.xlsx".to_string(),
        sheet_name: "sheet".to_string(),
        role,
        row_index,
    }
}

/// Decodes a written document back into the field map the renderer saw.
pub fn written_fields(bytes: &[u8]) -> serde_json::Value {
    serde_json::from_slice(bytes).expect("fake documents are JSON field maps")
}
