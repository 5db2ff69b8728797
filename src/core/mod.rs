// src/core/mod.rs
//! Template loading and document assembly

pub mod compiler;
pub mod fs_ops;
pub mod template_engine;

pub use compiler::{assemble, ResumeCompiler};
pub use fs_ops::FsOps;
pub use template_engine::{Layout, Template, TemplateCache, TemplateManifest};
