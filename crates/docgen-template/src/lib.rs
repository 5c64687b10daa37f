pub mod fields;
pub mod registry;
pub mod synonyms;

pub use fields::{resolve, unit_title};
pub use registry::{TemplateSpec, map_row, spec_for};
pub use synonyms::{FieldSynonyms, field_synonyms};
