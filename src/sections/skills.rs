// src/sections/skills.rs
//! Skills grouped by category, and spoken languages.

use super::{entry_section, RenderedBlock};
use crate::latex::{escape_latex, MacroArgs};
use crate::types::resume::{Language, Skill, SkillCategory};

/// One line per category, categories in first-seen order and skills in
/// input order within their category.
pub fn render_skills(skills: &[Skill]) -> RenderedBlock {
    let mut groups: Vec<(SkillCategory, Vec<String>)> = Vec::new();

    for skill in skills {
        let Some(item) = skill_display(skill) else {
            continue;
        };
        let category = skill.category.unwrap_or(SkillCategory::Technical);
        match groups.iter_mut().find(|(c, _)| *c == category) {
            Some((_, items)) => items.push(item),
            None => groups.push((category, vec![item])),
        }
    }

    entry_section(
        "Skills",
        groups.into_iter().filter_map(|(category, items)| {
            MacroArgs::new()
                .arg("category", category.label())
                .raw("items", items.join(", "))
                .invoke("skillgroup")
                .map(|line| vec![line])
        }),
    )
}

/// Escaped `Name (Level)`, or `None` for a nameless skill.
fn skill_display(skill: &Skill) -> Option<String> {
    let name = escape_latex(skill.name.as_deref().unwrap_or_default());
    if name.is_empty() {
        return None;
    }
    let level = escape_latex(skill.proficiency.as_deref().unwrap_or_default());
    Some(if level.is_empty() {
        name
    } else {
        format!("{} ({})", name, level)
    })
}

pub fn render_languages(languages: &[Language]) -> RenderedBlock {
    entry_section(
        "Languages",
        languages.iter().filter_map(|lang| {
            MacroArgs::new()
                .arg_opt("language", lang.language.as_deref())
                .arg_opt("proficiency", lang.proficiency.as_deref())
                .invoke("languageentry")
                .map(|line| vec![line])
        }),
    )
}
