use thiserror::Error;

/// Errors raised by model-level constructors and parsers.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Template identifier is not in the registered taxonomy.
    #[error("unknown template identifier: {0}")]
    UnknownTemplate(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
