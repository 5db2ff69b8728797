// src/sections/experience.rs
//! Professional experience and volunteer work.

use super::{entry_lines, entry_section, list_of, RenderedBlock};
use crate::latex::{format_date_range, MacroArgs};
use crate::types::resume::{Volunteer, WorkExperience};

pub fn render_experience(entries: &[WorkExperience]) -> RenderedBlock {
    entry_section(
        "Professional Experience",
        entries.iter().filter_map(render_job),
    )
}

fn render_job(job: &WorkExperience) -> Option<Vec<String>> {
    let dates = format_date_range(job.start_date.as_ref(), job.end_date.as_ref(), job.current);

    let header = MacroArgs::new()
        .arg_opt("title", job.job_title.as_deref())
        .arg_opt("company", job.company.as_deref())
        .arg_opt("location", job.location.as_deref())
        .arg("dates", dates)
        .invoke("experienceentry");

    // Responsibilities first, then achievements, as one flat list.
    let bullets = list_of(&job.responsibilities)
        .iter()
        .chain(list_of(&job.achievements));

    entry_lines(header, bullets)
}

pub fn render_volunteer(entries: &[Volunteer]) -> RenderedBlock {
    entry_section(
        "Volunteer Experience",
        entries.iter().filter_map(render_volunteer_entry),
    )
}

fn render_volunteer_entry(entry: &Volunteer) -> Option<Vec<String>> {
    let dates = format_date_range(
        entry.start_date.as_ref(),
        entry.end_date.as_ref(),
        entry.current,
    );

    let header = MacroArgs::new()
        .arg_opt("role", entry.role.as_deref())
        .arg_opt("organization", entry.organization.as_deref())
        .arg_opt("location", entry.location.as_deref())
        .arg("dates", dates)
        .invoke("volunteerentry");

    let description = entry
        .description
        .as_ref()
        .map(|d| d.lines())
        .unwrap_or_default();
    let bullets = description
        .into_iter()
        .chain(list_of(&entry.achievements).iter().map(String::as_str));

    entry_lines(header, bullets)
}
