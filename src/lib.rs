//! Resume-to-LaTeX compiler.
//!
//! Turns a structured [`ResumeRecord`] into a complete LaTeX source document
//! by rendering each resume section into keyed macro invocations and
//! substituting the result into a template shell.

/// Logging entry point used across the crate, forwards to `tracing`.
#[macro_export]
macro_rules! app_log {
    ($level:ident, $($arg:tt)+) => {
        ::tracing::$level!($($arg)+)
    };
}

pub mod core;
pub mod environment;
pub mod error;
pub mod latex;
pub mod sections;
pub mod types;
pub mod utils;

pub use crate::core::{Layout, ResumeCompiler, Template, TemplateCache, TemplateManifest};
pub use crate::environment::EnvironmentConfig;
pub use crate::error::{CompileError, TemplateError};
pub use crate::types::resume::ResumeRecord;

/// Token every template shell carries exactly once.
pub const CONTENT_PLACEHOLDER: &str = "{{content}}";

/// Template id used when the requested one cannot be loaded.
pub const DEFAULT_TEMPLATE_ID: &str = "default";
