// src/core/compiler.rs
//! Document assembly: section plan, placeholder fallback, shell substitution.

use chrono::{Local, NaiveDate};

use crate::app_log;
use crate::core::template_engine::{Layout, TemplateCache};
use crate::environment::EnvironmentConfig;
use crate::error::CompileError;
use crate::latex::MacroArgs;
use crate::sections::{RenderContext, RenderedBlock, SectionKind};
use crate::types::ResumeRecord;

const EMPTY_RESUME_MESSAGE: &str =
    "This resume does not contain any information yet. Add your details to generate a document.";

const STANDARD_PLAN: &[SectionKind] = &[
    SectionKind::Contact,
    SectionKind::Summary,
    SectionKind::Education,
    SectionKind::Skills,
    SectionKind::Experience,
    SectionKind::Projects,
    SectionKind::Certifications,
    SectionKind::Publications,
    SectionKind::Languages,
    SectionKind::Volunteer,
    SectionKind::Awards,
    SectionKind::Hobbies,
    SectionKind::References,
    SectionKind::Additional,
    SectionKind::Tracking,
];

const REGIONAL_PLAN: &[SectionKind] = &[
    SectionKind::Contact,
    SectionKind::PersonalDetails,
    SectionKind::Summary,
    SectionKind::Experience,
    SectionKind::Education,
    SectionKind::Skills,
    SectionKind::Languages,
    SectionKind::Projects,
    SectionKind::Certifications,
    SectionKind::Publications,
    SectionKind::Volunteer,
    SectionKind::Awards,
    SectionKind::Hobbies,
    SectionKind::References,
    SectionKind::Additional,
    SectionKind::Tracking,
];

impl Layout {
    /// Sections in emission order.
    pub fn sections(&self) -> &'static [SectionKind] {
        match self {
            Layout::Standard => STANDARD_PLAN,
            Layout::Regional => REGIONAL_PLAN,
        }
    }
}

/// Compiles resume records into LaTeX documents.
pub struct ResumeCompiler {
    templates: TemplateCache,
}

impl ResumeCompiler {
    pub fn new(templates: TemplateCache) -> Self {
        Self { templates }
    }

    pub fn from_config(config: &EnvironmentConfig) -> Self {
        Self::new(TemplateCache::new(
            config.templates_path.clone(),
            &config.default_template,
        ))
    }

    pub fn templates(&self) -> &TemplateCache {
        &self.templates
    }

    /// Compile against today's date.
    pub async fn compile(
        &self,
        template_id: &str,
        record: &ResumeRecord,
    ) -> Result<String, CompileError> {
        self.compile_at(template_id, record, Local::now().date_naive())
            .await
    }

    /// Compile with an explicit reference date for tense decisions.
    ///
    /// Fails only when the default template cannot be loaded.
    pub async fn compile_at(
        &self,
        template_id: &str,
        record: &ResumeRecord,
        today: NaiveDate,
    ) -> Result<String, CompileError> {
        let template = self.templates.load(template_id).await?;
        let body = assemble(template.layout(), record, &RenderContext { today });

        app_log!(
            info,
            "Compiled resume with template '{}' (requested '{}'), {} body lines",
            template.id,
            template_id,
            body.len()
        );

        Ok(template.render(&body.into_lines().join("\n")))
    }
}

/// Run every section of the layout in order. A record that renders nothing
/// gets the placeholder block instead of an empty body.
pub fn assemble(layout: Layout, record: &ResumeRecord, ctx: &RenderContext) -> RenderedBlock {
    let mut body = RenderedBlock::new();
    for section in layout.sections() {
        let block = section.render(record, ctx);
        app_log!(trace, "Section {:?}: {} lines", section, block.len());
        body.append(block);
    }

    if body.is_empty() {
        app_log!(info, "Resume produced no content, emitting placeholder block");
        return placeholder_block();
    }
    body
}

fn placeholder_block() -> RenderedBlock {
    MacroArgs::new()
        .arg("message", EMPTY_RESUME_MESSAGE)
        .invoke("emptyresume")
        .map(|line| vec![line])
        .unwrap_or_default()
        .into()
}
