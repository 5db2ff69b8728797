// src/sections/projects.rs

use super::{entry_lines, entry_section, list_of, title_with_url, RenderedBlock};
use crate::latex::{format_date_range, MacroArgs};
use crate::types::resume::Project;
use crate::utils::join_non_empty;

pub fn render_projects(projects: &[Project]) -> RenderedBlock {
    entry_section("Projects", projects.iter().filter_map(render_project))
}

/// The first description line becomes the headline; the remaining lines and
/// a technologies line form the bullet block.
fn render_project(project: &Project) -> Option<Vec<String>> {
    let description = project
        .description
        .as_ref()
        .map(|d| d.lines())
        .unwrap_or_default();
    let (headline, details) = match description.split_first() {
        Some((first, rest)) => (Some(*first), rest.to_vec()),
        None => (None, Vec::new()),
    };

    let header = MacroArgs::new()
        .raw("name", title_with_url(project.name.as_deref(), project.url.as_deref()))
        .arg_opt("headline", headline)
        .arg(
            "dates",
            format_date_range(project.start_date.as_ref(), project.end_date.as_ref(), false),
        )
        .invoke("projectentry");

    let technologies = join_non_empty(
        list_of(&project.technologies).iter().map(|t| Some(t.as_str())),
        ", ",
    );
    let mut bullets: Vec<String> = details.into_iter().map(str::to_string).collect();
    if !technologies.is_empty() {
        bullets.push(format!("Technologies used: {}", technologies));
    }

    entry_lines(header, bullets)
}
