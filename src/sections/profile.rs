// src/sections/profile.rs
//! Summary, hobbies and references.

use super::{entry_section, RenderedBlock};
use crate::latex::{escape_latex, MacroArgs};
use crate::types::resume::{Hobby, Reference, ResumeRecord};

/// The record-level summary wins over the one stored with personal info.
pub fn render_summary(record: &ResumeRecord) -> RenderedBlock {
    let summary = [
        record.summary.as_deref(),
        record.personal_info.summary.as_deref(),
    ]
    .into_iter()
    .flatten()
    .find(|s| !s.trim().is_empty());

    let mut block = RenderedBlock::new();
    if let Some(line) = MacroArgs::new()
        .arg_opt("text", summary)
        .invoke("resumesummary")
    {
        block.push(r"\section{Professional Summary}");
        block.push(line);
    }
    block
}

pub fn render_hobbies(hobbies: &[Hobby]) -> RenderedBlock {
    let items: Vec<String> = hobbies
        .iter()
        .filter_map(hobby_display)
        .collect();

    let mut block = RenderedBlock::new();
    if let Some(line) = MacroArgs::new()
        .raw("items", items.join(", "))
        .invoke("hobbylist")
    {
        block.push(r"\section{Hobbies \& Interests}");
        block.push(line);
    }
    block
}

fn hobby_display(hobby: &Hobby) -> Option<String> {
    let (name, description) = match hobby {
        Hobby::Name(name) => (escape_latex(name), String::new()),
        Hobby::Detailed { name, description } => (
            escape_latex(name.as_deref().unwrap_or_default()),
            escape_latex(description.as_deref().unwrap_or_default()),
        ),
    };

    match (name.is_empty(), description.is_empty()) {
        (false, false) => Some(format!("{} ({})", name, description)),
        (false, true) => Some(name),
        (true, false) => Some(description),
        (true, true) => None,
    }
}

pub fn render_references(references: &[Reference]) -> RenderedBlock {
    entry_section(
        "References",
        references.iter().filter_map(|reference| {
            MacroArgs::new()
                .arg_opt("name", reference.name.as_deref())
                .arg_opt("title", reference.title.as_deref())
                .arg_opt("company", reference.company.as_deref())
                .arg_opt("email", reference.email.as_deref())
                .arg_opt("phone", reference.phone.as_deref())
                .arg_opt("relationship", reference.relationship.as_deref())
                .invoke("referenceentry")
                .map(|line| vec![line])
        }),
    )
}
