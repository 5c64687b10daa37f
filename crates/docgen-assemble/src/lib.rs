//! Document assembly: sheet filtering, row selection, the six generation
//! strategies, and the end-to-end request pipeline.

pub mod assemble;
pub mod collaborators;
pub mod error;
pub mod filter;
pub mod pipeline;
pub mod select;
pub mod session;

pub use assemble::{DocumentAssembler, sanitize_file_stem};
pub use collaborators::{
    DocumentConverter, DocumentDescriptor, OutputWriter, PersistenceRecord, PersistenceStore,
    Renderer, TemplateStore,
};
pub use error::{AssembleError, Result};
pub use filter::{MAX_MERGED_ROWS, check_row_limit, filter_catalog, merge_rows};
pub use pipeline::{GenerationRequest, GenerationSummary, run_generation};
pub use select::{apply_policy, compact_for_persistence, rows_to_persist};
pub use session::SessionId;
