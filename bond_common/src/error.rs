//! Error types shared between the engine and the frontends.
//!
//! The `PanelError` enum unifies the few failure cases the panel has: I/O,
//! serialization, template-file parsing, and configuration validation,
//! allowing crates to propagate a single error type.
use std::io;

use thiserror::Error;

/// Unified error type shared by the panel engine and frontends.
#[derive(Error, Debug)]
pub enum PanelError {
    /// I/O error originating from the standard library or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Error while parsing the template data file into a template pool.
    #[error("Parse template file error: {0}")]
    ParseTemplateFile(String),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
