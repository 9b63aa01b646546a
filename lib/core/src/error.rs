use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Signature ID {signature_id} does not match source key {key_id}")]
    IdentityMismatch { signature_id: String, key_id: String },

    #[error("Duplicate component id: {0}")]
    DuplicateId(String),

    #[error("Not enough components to choose {requested} pivots (dataset has {available})")]
    InsufficientDataset { requested: usize, available: usize },

    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Scan error: {0}")]
    Scan(String),

    #[error("Failed to extract features for {id}: {reason}")]
    Extraction { id: String, reason: String },
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
