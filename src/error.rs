use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlaceAiError {
    #[error("config error: {0}")]
    Config(String),

    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("invalid gazetteer file: {0}")]
    InvalidGazetteer(String),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] place_ai_common::Error),
}

pub type Result<T> = std::result::Result<T, PlaceAiError>;
