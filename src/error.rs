use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhraseForgeError {
    #[error("Corpus not found at '{}'", .0.display())]
    InputNotFound(PathBuf),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Serialization Error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PfResult<T> = Result<T, PhraseForgeError>;
