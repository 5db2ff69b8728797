// src/sections/contact.rs
//! Header block: name, headline and contact channels.

use super::{entry_section, RenderedBlock};
use crate::latex::MacroArgs;
use crate::types::resume::{DateInput, PersonalInfo};
use crate::utils::join_non_empty;

pub fn render_contact(info: &PersonalInfo) -> RenderedBlock {
    let name = join_non_empty(
        [info.first_name.as_deref(), info.last_name.as_deref()],
        " ",
    );

    let header = MacroArgs::new()
        .arg("name", name)
        .arg_opt("title", info.title.as_deref())
        .arg_opt("email", info.email.as_deref())
        .arg_opt("phone", info.phone.as_deref())
        .arg_opt("location", info.location.as_deref())
        .arg_opt("linkedin", info.linkedin.as_deref())
        .arg_opt("github", info.github.as_deref())
        .arg_opt("website", info.website.as_deref())
        .arg_opt("portfolio", info.portfolio.as_deref())
        .invoke("contactinfo");

    header.map(|line| vec![line]).unwrap_or_default().into()
}

/// Personal data block of the regional layout.
pub fn render_personal_details(info: &PersonalInfo) -> RenderedBlock {
    let birth_date = info.date_of_birth.as_ref().and_then(birth_date_display);

    let details = [
        ("Date of Birth", birth_date.as_deref()),
        ("Place of Birth", info.place_of_birth.as_deref()),
        ("Nationality", info.nationality.as_deref()),
        ("Marital Status", info.marital_status.as_deref()),
    ];

    // The label is always present, so gate on the value before building.
    let lines = details.into_iter().filter_map(|(label, value)| {
        let value = value.map(str::trim).filter(|v| !v.is_empty())?;
        MacroArgs::new()
            .arg("label", label)
            .arg("value", value)
            .invoke("personaldetail")
            .map(|line| vec![line])
    });

    entry_section("Personal Details", lines)
}

fn birth_date_display(date: &DateInput) -> Option<String> {
    match date {
        DateInput::Date(d) => Some(d.format("%d.%m.%Y").to_string()),
        DateInput::Timestamp(ts) => Some(ts.format("%d.%m.%Y").to_string()),
        DateInput::Text(_) => date.display(),
    }
}
