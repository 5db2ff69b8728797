// src/types/resume.rs
//! Resume record as stored by the resume service.
//!
//! Everything below `personalInfo` is optional; lists accept both a missing
//! key and an explicit `null`.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

// ===== Top-level record =====

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeRecord {
    pub personal_info: PersonalInfo,
    pub summary: Option<String>,
    pub work_experience: Option<Vec<WorkExperience>>,
    pub education: Option<Vec<Education>>,
    pub skills: Option<Vec<Skill>>,
    pub projects: Option<Vec<Project>>,
    pub certifications: Option<Vec<Certification>>,
    pub languages: Option<Vec<Language>>,
    #[serde(alias = "volunteer")]
    pub volunteer_experience: Option<Vec<Volunteer>>,
    pub awards: Option<Vec<Award>>,
    pub publications: Option<Vec<Publication>>,
    pub references: Option<Vec<Reference>>,
    pub hobbies: Option<Vec<Hobby>>,
    #[serde(alias = "customSections")]
    pub additional_sections: Option<Vec<AdditionalSection>>,
    pub tracking_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Professional headline shown under the name.
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(alias = "address")]
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
    pub portfolio: Option<String>,
    pub summary: Option<String>,
    // Personal data printed by the regional layout only
    pub date_of_birth: Option<DateInput>,
    pub place_of_birth: Option<String>,
    pub nationality: Option<String>,
    pub marital_status: Option<String>,
}

// ===== Shared value types =====

/// A date as it arrives from the store: a real date or whatever the user typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    Timestamp(DateTime<FixedOffset>),
    Date(NaiveDate),
    Text(String),
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

/// Free text given either as one string or as a list of lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextBlock {
    Lines(Vec<String>),
    Single(String),
}

impl TextBlock {
    /// Non-blank lines, in order.
    pub fn lines(&self) -> Vec<&str> {
        match self {
            TextBlock::Lines(lines) => lines
                .iter()
                .map(|l| l.trim())
                .filter(|l| !l.is_empty())
                .collect(),
            TextBlock::Single(text) => text
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .collect(),
        }
    }
}

/// Stores write `null` for unset flags.
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

// ===== Sections =====

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperience {
    #[serde(alias = "title", alias = "position")]
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<DateInput>,
    pub end_date: Option<DateInput>,
    #[serde(alias = "isCurrent", alias = "currentlyWorking", deserialize_with = "null_as_false")]
    pub current: bool,
    pub responsibilities: Option<Vec<String>>,
    pub achievements: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub institution: Option<String>,
    pub degree: Option<String>,
    #[serde(alias = "field")]
    pub field_of_study: Option<String>,
    pub graduation_date: Option<DateInput>,
    pub start_date: Option<DateInput>,
    pub end_date: Option<DateInput>,
    pub location: Option<String>,
    #[serde(alias = "gpa")]
    pub grade: Option<String>,
    pub coursework: Option<Vec<String>>,
    pub honors: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Technical,
    Soft,
    Language,
    Certification,
    #[serde(other)]
    Other,
}

impl SkillCategory {
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Technical => "Technical Skills",
            SkillCategory::Soft => "Soft Skills",
            SkillCategory::Language => "Languages",
            SkillCategory::Certification => "Certifications",
            SkillCategory::Other => "Other Skills",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub name: Option<String>,
    pub category: Option<SkillCategory>,
    #[serde(alias = "level")]
    pub proficiency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(alias = "title")]
    pub name: Option<String>,
    pub description: Option<TextBlock>,
    pub technologies: Option<Vec<String>>,
    #[serde(alias = "link")]
    pub url: Option<String>,
    pub start_date: Option<DateInput>,
    pub end_date: Option<DateInput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub name: Option<String>,
    #[serde(alias = "organization")]
    pub issuer: Option<String>,
    #[serde(alias = "date")]
    pub issue_date: Option<DateInput>,
    #[serde(alias = "expiry")]
    pub expiry_date: Option<DateInput>,
    pub credential_id: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Publication {
    pub title: Option<String>,
    pub publisher: Option<String>,
    pub authors: Option<Vec<String>>,
    pub date: Option<DateInput>,
    pub url: Option<String>,
    pub description: Option<TextBlock>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Language {
    #[serde(alias = "name")]
    pub language: Option<String>,
    #[serde(alias = "level")]
    pub proficiency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Volunteer {
    #[serde(alias = "position")]
    pub role: Option<String>,
    pub organization: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<DateInput>,
    pub end_date: Option<DateInput>,
    #[serde(alias = "isCurrent", deserialize_with = "null_as_false")]
    pub current: bool,
    pub description: Option<TextBlock>,
    pub achievements: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Award {
    #[serde(alias = "name")]
    pub title: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<DateInput>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Reference {
    pub name: Option<String>,
    #[serde(alias = "position")]
    pub title: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub relationship: Option<String>,
}

/// A hobby given as a bare name or with a short description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Hobby {
    Name(String),
    Detailed {
        name: Option<String>,
        description: Option<String>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdditionalSection {
    pub title: Option<String>,
    pub content: Option<String>,
    pub items: Option<Vec<String>>,
}
