use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Color Parsing Error: unrecognized color '{0}'")]
    Color(String),

    #[error("Registry Error: {0}")]
    Registry(String),
}

pub type DfResult<T> = Result<T, DeckForgeError>;
