// src/domain/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Term not found: {0}")]
    TermNotFound(String),
    #[error("Deck is empty")]
    EmptyDeck,
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Storage error: {0}")]
    StorageError(String),
}
