// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Why a template shell could not be loaded.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to read template file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse template manifest {}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Template '{id}' must contain the content placeholder exactly once, found {count}")]
    Placeholder { id: String, count: usize },
}

/// Errors surfaced by [`crate::ResumeCompiler::compile`].
///
/// Resume data never causes one; only a broken deployment does.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("Default template '{id}' is unavailable: {source}")]
    DefaultTemplateUnavailable {
        id: String,
        #[source]
        source: TemplateError,
    },
}
