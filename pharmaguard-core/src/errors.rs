use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unrecognized drug name: {0}")]
    UnknownDrug(String),

    #[error("Unrecognized phenotype code: {0}")]
    UnknownPhenotype(String),
}

/// Result type alias for pharmaguard-core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
