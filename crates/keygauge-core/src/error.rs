use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeygaugeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Language Error: {0}")]
    Language(String),

    #[error("Corpus Error: {0}")]
    Corpus(String),

    #[error("Catalog Error: {0}")]
    Catalog(String),

    #[error("Layout Error: {0}")]
    Layout(String),
}

pub type KgResult<T> = Result<T, KeygaugeError>;
