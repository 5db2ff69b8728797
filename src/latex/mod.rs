// src/latex/mod.rs
//! LaTeX text utilities shared by every section renderer.

pub mod args;
pub mod dates;
pub mod escape;
pub mod normalize;

pub use args::{kv, MacroArgs};
pub use dates::{format_date_range, format_education_dates, IN_PROGRESS, PRESENT};
pub use escape::{escape_latex, escape_opt};
pub use normalize::{dedupe_fragments, normalize_fragments};
