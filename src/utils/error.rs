// src/utils/error.rs
#![allow(dead_code)]
use std::path::PathBuf;
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error reading document: {0}")]
    Io(#[from] std::io::Error),

    #[error("no supported encoding could decode document: {}", .0.display())]
    UnreadableDocument(PathBuf),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Failed to load document: {0}")]
    Load(#[from] LoadError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
