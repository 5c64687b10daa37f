pub mod catalog;
pub mod error;
pub mod role;
pub mod row;
pub mod template;

pub use catalog::{Catalog, CatalogEntry, ClassifiedSheet};
pub use error::{ModelError, Result};
pub use role::SheetRole;
pub use row::{CellValue, RawRow, SheetTable, TaggedRow};
pub use template::{GenerationStrategy, RowPolicy, TemplateId};
