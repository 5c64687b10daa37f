pub mod analyze;
pub mod classify;
pub mod error;
pub mod reader;

pub use analyze::{UploadedFile, analyze_files};
pub use classify::classify_columns;
pub use error::{IngestError, Result};
pub use reader::read_sheets;
