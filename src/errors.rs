// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Malformed program descriptor: {0}")]
    MalformedDescriptor(String),

    #[error(
        "Invalid path '{path}': {requested} parent-directory step(s) requested but '{base}' only has {available}"
    )]
    InvalidPath {
        path: String,
        base: String,
        requested: usize,
        available: usize,
    },

    #[error("Language not supported for program '{path}'")]
    UnsupportedInterpreter { path: String },

    /// The manifest parsed, but an entry does not have the descriptor shape.
    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LaunchError {
    /// Process exit status reported by the binary for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::MalformedDescriptor(_) | LaunchError::Manifest(_) => 2,
            LaunchError::InvalidPath { .. } => 3,
            LaunchError::UnsupportedInterpreter { .. } => 4,
            _ => 1,
        }
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, LaunchError>;
