// src/sections/mod.rs
//! Section renderers.
//!
//! Each renderer maps one part of a [`ResumeRecord`] to a [`RenderedBlock`].
//! An empty block means the section is left out of the document entirely:
//! wrappers (`\section`, `entrylist`, `itemize`) are only emitted around at
//! least one rendered entry.

pub mod additional;
pub mod contact;
pub mod credentials;
pub mod education;
pub mod experience;
pub mod profile;
pub mod projects;
pub mod skills;

use chrono::NaiveDate;

use crate::latex::{escape_latex, escape_opt};
use crate::types::ResumeRecord;
use crate::utils::strip_url_scheme;

// ===== Rendered output =====

/// Ordered lines of LaTeX produced by one renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedBlock {
    lines: Vec<String>,
}

impl RenderedBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn append(&mut self, other: RenderedBlock) {
        self.lines.extend(other.lines);
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl From<Vec<String>> for RenderedBlock {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

/// Inputs shared by all renderers besides the record itself.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    /// Reference date for tense decisions ("Graduating" vs "Graduated").
    pub today: NaiveDate,
}

// ===== Section dispatch =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Contact,
    PersonalDetails,
    Summary,
    Education,
    Skills,
    Experience,
    Projects,
    Certifications,
    Publications,
    Languages,
    Volunteer,
    Awards,
    Hobbies,
    References,
    Additional,
    Tracking,
}

impl SectionKind {
    pub fn render(&self, record: &ResumeRecord, ctx: &RenderContext) -> RenderedBlock {
        match self {
            SectionKind::Contact => contact::render_contact(&record.personal_info),
            SectionKind::PersonalDetails => contact::render_personal_details(&record.personal_info),
            SectionKind::Summary => profile::render_summary(record),
            SectionKind::Education => {
                education::render_education(list_of(&record.education), ctx)
            }
            SectionKind::Skills => skills::render_skills(list_of(&record.skills)),
            SectionKind::Experience => {
                experience::render_experience(list_of(&record.work_experience))
            }
            SectionKind::Projects => projects::render_projects(list_of(&record.projects)),
            SectionKind::Certifications => {
                credentials::render_certifications(list_of(&record.certifications))
            }
            SectionKind::Publications => {
                credentials::render_publications(list_of(&record.publications))
            }
            SectionKind::Languages => skills::render_languages(list_of(&record.languages)),
            SectionKind::Volunteer => {
                experience::render_volunteer(list_of(&record.volunteer_experience))
            }
            SectionKind::Awards => credentials::render_awards(list_of(&record.awards)),
            SectionKind::Hobbies => profile::render_hobbies(list_of(&record.hobbies)),
            SectionKind::References => profile::render_references(list_of(&record.references)),
            SectionKind::Additional => {
                additional::render_additional_sections(list_of(&record.additional_sections))
            }
            SectionKind::Tracking => additional::render_tracking_footer(record.tracking_url.as_deref()),
        }
    }
}

// ===== Shared helpers =====

pub(crate) fn list_of<T>(items: &Option<Vec<T>>) -> &[T] {
    items.as_deref().unwrap_or_default()
}

/// Escape each item and wrap the survivors in one `itemize` environment.
/// No survivors, no environment.
pub(crate) fn itemize<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let escaped: Vec<String> = items
        .into_iter()
        .map(|item| escape_latex(item.as_ref()))
        .filter(|item| !item.is_empty())
        .collect();

    if escaped.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::with_capacity(escaped.len() + 2);
    lines.push(r"\begin{itemize}".to_string());
    lines.extend(escaped.into_iter().map(|item| format!("  \\item {}", item)));
    lines.push(r"\end{itemize}".to_string());
    lines
}

/// Header macro followed by its bullet block. A missing header drops the
/// whole entry, bullets included.
pub(crate) fn entry_lines<I, S>(header: Option<String>, bullets: I) -> Option<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let header = header?;
    let mut lines = vec![header];
    lines.extend(itemize(bullets));
    Some(lines)
}

/// `\section{title}` plus an `entrylist` around the rendered entries, or an
/// empty block when no entry rendered. `title` must already be escaped.
pub(crate) fn entry_section<I>(title: &str, entries: I) -> RenderedBlock
where
    I: IntoIterator<Item = Vec<String>>,
{
    let entries: Vec<Vec<String>> = entries.into_iter().collect();
    if entries.is_empty() {
        return RenderedBlock::new();
    }

    let mut block = RenderedBlock::new();
    block.push(format!("\\section{{{}}}", title));
    block.push(r"\begin{entrylist}");
    for lines in entries {
        for line in lines {
            block.push(line);
        }
    }
    block.push(r"\end{entrylist}");
    block
}

/// Escaped title with the scheme-less URL appended in parentheses.
pub(crate) fn title_with_url(title: Option<&str>, url: Option<&str>) -> String {
    let title = escape_opt(title);
    let url = escape_opt(url.map(strip_url_scheme));

    match (title.is_empty(), url.is_empty()) {
        (false, false) => format!("{} ({})", title, url),
        (false, true) => title,
        (true, false) => url,
        (true, true) => String::new(),
    }
}
