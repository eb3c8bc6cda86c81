use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Corpus is empty: at least one vendor record is required")]
    EmptyCorpus,

    #[error("Invalid record '{record}': {reason}")]
    Data { record: String, reason: String },

    #[error("Invalid page size: {0} (must be positive)")]
    InvalidPageSize(i64),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn data(record: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Data { record: record.into(), reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
