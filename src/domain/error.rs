// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Language mismatch: declared '{expected}' but detected '{detected}'")]
    LanguageMismatch { expected: String, detected: String },
    #[error("Translation failed: {0}")]
    Translation(String),
    #[error("Speech synthesis failed: {0}")]
    Speech(String),
    #[error("AnkiConnect transport error: {0}")]
    Transport(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
