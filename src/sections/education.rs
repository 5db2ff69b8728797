// src/sections/education.rs

use super::{entry_lines, entry_section, list_of, RenderContext, RenderedBlock};
use crate::latex::{format_education_dates, normalize_fragments, MacroArgs};
use crate::types::resume::Education;

pub fn render_education(entries: &[Education], ctx: &RenderContext) -> RenderedBlock {
    entry_section(
        "Education",
        entries.iter().filter_map(|edu| render_entry(edu, ctx)),
    )
}

fn render_entry(edu: &Education, ctx: &RenderContext) -> Option<Vec<String>> {
    let degree = normalize_fragments([edu.degree.as_deref(), edu.field_of_study.as_deref()]);
    // A blank graduation date must not shadow a filled end date.
    let graduation = edu
        .graduation_date
        .as_ref()
        .filter(|d| d.display().is_some())
        .or(edu.end_date.as_ref());
    let dates = format_education_dates(edu.start_date.as_ref(), graduation, ctx.today);

    let header = MacroArgs::new()
        .arg_opt("institution", edu.institution.as_deref())
        .arg("degree", degree)
        .arg("dates", dates)
        .arg_opt("location", edu.location.as_deref())
        .arg_opt("grade", edu.grade.as_deref())
        .invoke("educationentry");

    let mut bullets = Vec::new();
    if let Some(line) = labelled_list("Relevant Coursework", list_of(&edu.coursework)) {
        bullets.push(line);
    }
    if let Some(line) = labelled_list("Honors", list_of(&edu.honors)) {
        bullets.push(line);
    }

    entry_lines(header, bullets)
}

/// `Label: a, b, c` over the non-blank items, unescaped.
fn labelled_list(label: &str, items: &[String]) -> Option<String> {
    let items: Vec<&str> = items
        .iter()
        .map(|i| i.trim())
        .filter(|i| !i.is_empty())
        .collect();
    if items.is_empty() {
        None
    } else {
        Some(format!("{}: {}", label, items.join(", ")))
    }
}
