use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use resume_compiler::{CompileError, ResumeCompiler, ResumeRecord, TemplateCache};

const SHELL: &str = "BEGIN\n{{content}}\nEND\n";

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

fn shipped_templates() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}

fn bare_templates(ids: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for id in ids {
        let template_dir = dir.path().join(id);
        std::fs::create_dir_all(&template_dir).unwrap();
        std::fs::write(template_dir.join("template.tex"), SHELL).unwrap();
    }
    dir
}

fn full_record() -> ResumeRecord {
    serde_json::from_str(
        r#"{
            "personalInfo": {
                "firstName": "Ada",
                "lastName": "Lovelace",
                "title": "Analytical Engine Programmer",
                "email": "ada@example.com",
                "linkedin": "https://linkedin.com/in/ada"
            },
            "summary": "Pioneer of computing with 10+ years of R&D.",
            "education": [
                {"institution": "University of London", "degree": "B.S.",
                 "fieldOfStudy": "B.S. Mathematics", "graduationDate": "05/2019"},
                {"institution": "Evening School", "startDate": "09/2024",
                 "graduationDate": "06/2026", "coursework": ["Number Theory"]}
            ],
            "skills": [
                {"name": "Rust", "category": "technical", "proficiency": "Expert"},
                {"name": "Writing", "category": "soft"}
            ],
            "workExperience": [
                {"jobTitle": "Engineer", "company": "Babbage & Co", "startDate": "06/2019",
                 "endDate": "08/2021", "responsibilities": ["Wrote programs"],
                 "achievements": ["First published algorithm"]},
                {"jobTitle": "Lead", "company": "Engine Works", "startDate": "01/2022",
                 "current": true}
            ],
            "projects": [
                {"name": "Note G", "url": "https://example.org/note-g",
                 "description": ["Bernoulli number algorithm", "Published 1843"],
                 "technologies": ["Punched cards"]}
            ],
            "certifications": [{"name": "Difference Engine Operator", "issuer": "Royal Society"}],
            "publications": [{"title": "Sketch of the Analytical Engine", "date": "1843"}],
            "languages": [{"language": "English", "proficiency": "Native"}],
            "volunteerExperience": [{"role": "Tutor", "organization": "Mechanics' Institute"}],
            "awards": [{"title": "Honorary Fellow"}],
            "hobbies": ["Poetry", {"name": "Horse riding"}],
            "references": [{"name": "Charles Babbage", "relationship": "Collaborator"}],
            "additionalSections": [{"title": "Interests", "items": ["Music theory"]}],
            "trackingUrl": "https://t.example.com/r/abc_123"
        }"#,
    )
    .unwrap()
}

#[tokio::test]
async fn full_record_compiles_with_shipped_template() {
    let compiler = ResumeCompiler::new(TemplateCache::new(shipped_templates(), "default"));
    let document = compiler
        .compile_at("default", &full_record(), today())
        .await
        .unwrap();

    assert!(document.starts_with("% Default resume shell."));
    assert!(!document.contains("{{content}}"));
    assert!(document.contains(
        r"\contactinfo{name={Ada Lovelace}, title={Analytical Engine Programmer}, email={ada@example.com}, linkedin={https://linkedin.com/in/ada}}"
    ));
    assert!(document.contains(r"\resumesummary{text={Pioneer of computing with 10+ years of R\&D.}}"));
    assert!(document.contains(
        r"\educationentry{institution={University of London}, degree={B.S. Mathematics}, dates={Graduated 05/2019}}"
    ));
    assert!(document.contains(r"dates={Graduating 06/2026}"));
    assert!(document.contains(
        r"\experienceentry{title={Engineer}, company={Babbage \& Co}, dates={06/2019 -- 08/2021}}"
    ));
    assert!(document.contains(r"dates={01/2022 -- Present}"));
    assert!(document.contains(
        r"\projectentry{name={Note G (example.org/note-g)}, headline={Bernoulli number algorithm}}"
    ));
    assert!(document.contains(r"\item Technologies used: Punched cards"));
    assert!(document.contains(r"\trackingfooter{url={https://t.example.com/r/abc\_123}}"));

    let order = [
        r"\contactinfo",
        r"\section{Professional Summary}",
        r"\section{Education}",
        r"\section{Skills}",
        r"\section{Professional Experience}",
        r"\section{Projects}",
        r"\section{Certifications}",
        r"\section{Publications}",
        r"\section{Languages}",
        r"\section{Volunteer Experience}",
        r"\section{Awards \& Activities}",
        r"\section{Hobbies \& Interests}",
        r"\section{References}",
        r"\section{Interests}",
        r"\trackingfooter{",
    ];
    let positions: Vec<usize> = order
        .iter()
        .map(|needle| {
            document
                .rfind(needle)
                .unwrap_or_else(|| panic!("missing {needle}"))
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
}

#[tokio::test]
async fn compile_is_deterministic() {
    let dir = bare_templates(&["default"]);
    let compiler = ResumeCompiler::new(TemplateCache::new(dir.path(), "default"));
    let record = full_record();

    let first = compiler.compile_at("default", &record, today()).await.unwrap();
    let second = compiler.compile_at("default", &record, today()).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn unknown_template_uses_default_shell() {
    let dir = bare_templates(&["default"]);
    let compiler = ResumeCompiler::new(TemplateCache::new(dir.path(), "default"));

    let document = compiler
        .compile_at("glossy-2030", &full_record(), today())
        .await
        .unwrap();
    assert!(document.starts_with("BEGIN\n"));
    assert!(document.ends_with("\nEND\n"));
}

#[tokio::test]
async fn name_only_record_renders_contact_block() {
    let dir = bare_templates(&["default"]);
    let compiler = ResumeCompiler::new(TemplateCache::new(dir.path(), "default"));
    let record: ResumeRecord =
        serde_json::from_str(r#"{"personalInfo": {"firstName": "Grace", "lastName": "Hopper"}}"#)
            .unwrap();

    let document = compiler.compile_at("default", &record, today()).await.unwrap();
    assert_eq!(document, "BEGIN\n\\contactinfo{name={Grace Hopper}}\nEND\n");
}

#[tokio::test]
async fn empty_record_renders_placeholder() {
    let dir = bare_templates(&["default"]);
    let compiler = ResumeCompiler::new(TemplateCache::new(dir.path(), "default"));

    let document = compiler
        .compile_at("default", &ResumeRecord::default(), today())
        .await
        .unwrap();
    assert!(document.contains(r"\emptyresume{message={"));
    assert!(!document.contains(r"\section"));
}

#[tokio::test]
async fn regional_template_adds_personal_details() {
    let compiler = ResumeCompiler::new(TemplateCache::new(shipped_templates(), "default"));
    let mut record = full_record();
    record.personal_info.nationality = Some("British".to_string());

    let document = compiler.compile_at("regional", &record, today()).await.unwrap();
    assert!(document.starts_with("% Regional CV shell"));
    let details = document.find(r"\personaldetail{label={Nationality}, value={British}}").unwrap();
    let experience = document.find(r"\section{Professional Experience}").unwrap();
    let education = document.find(r"\section{Education}").unwrap();
    assert!(details < experience);
    assert!(experience < education);

    let standard = compiler.compile_at("default", &record, today()).await.unwrap();
    assert!(!standard.contains(r"\personaldetail{"));
}

#[tokio::test]
async fn missing_default_template_is_the_only_failure() {
    let dir = tempfile::tempdir().unwrap();
    let compiler = ResumeCompiler::new(TemplateCache::new(dir.path(), "default"));

    let err = compiler
        .compile_at("default", &full_record(), today())
        .await
        .unwrap_err();
    let CompileError::DefaultTemplateUnavailable { id, .. } = err;
    assert_eq!(id, "default");
}
