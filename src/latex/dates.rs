// src/latex/dates.rs
//! Tense-aware date range phrasing.

use chrono::NaiveDate;

use crate::types::resume::DateInput;

/// End-side sentinel for ongoing roles.
pub const PRESENT: &str = "Present";
/// Education sentinel for programs without a graduation date.
pub const IN_PROGRESS: &str = "In Progress";

const RANGE_SEPARATOR: &str = " -- ";
const MONTH_YEAR_FORMAT: &str = "%m/%Y";

impl DateInput {
    /// Display form: text passes through trimmed, dates become `MM/YYYY`.
    /// `None` when the text is blank.
    pub fn display(&self) -> Option<String> {
        match self {
            DateInput::Timestamp(ts) => Some(ts.format(MONTH_YEAR_FORMAT).to_string()),
            DateInput::Date(date) => Some(date.format(MONTH_YEAR_FORMAT).to_string()),
            DateInput::Text(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
        }
    }

    /// Best-effort calendar date, used only for tense detection.
    pub fn resolve(&self) -> Option<NaiveDate> {
        match self {
            DateInput::Timestamp(ts) => Some(ts.date_naive()),
            DateInput::Date(date) => Some(*date),
            DateInput::Text(text) => parse_loose_date(text),
        }
    }
}

fn display_opt(input: Option<&DateInput>) -> Option<String> {
    input.and_then(DateInput::display)
}

/// Format a start/end pair as `start -- end`.
///
/// When `ongoing` is set the end side is always [`PRESENT`], whatever end
/// value was supplied. A missing side collapses the range to the other one;
/// with neither side the result is empty.
pub fn format_date_range(
    start: Option<&DateInput>,
    end: Option<&DateInput>,
    ongoing: bool,
) -> String {
    let start = display_opt(start);
    let end = if ongoing {
        Some(PRESENT.to_string())
    } else {
        display_opt(end)
    };

    match (start, end) {
        (Some(start), Some(end)) => format!("{}{}{}", start, RANGE_SEPARATOR, end),
        (Some(start), None) => start,
        (None, Some(end)) => end,
        (None, None) => String::new(),
    }
}

/// Education phrasing layered on [`format_date_range`].
///
/// - graduation after `today`: `Graduating {date}`
/// - graduation in the past without a start date: `Graduated {date}`
/// - graduation in the past with a start date: `{start} -- {date}`
/// - no graduation but a start date: `{start} -- In Progress`
///
/// A graduation date that cannot be parsed counts as past.
pub fn format_education_dates(
    start: Option<&DateInput>,
    graduation: Option<&DateInput>,
    today: NaiveDate,
) -> String {
    let has_start = display_opt(start).is_some();

    match graduation.filter(|g| g.display().is_some()) {
        Some(grad) => {
            if is_future(grad, today) {
                return format!("Graduating {}", grad.display().unwrap_or_default());
            }
            let base = format_date_range(start, Some(grad), false);
            if has_start {
                base
            } else {
                format!("Graduated {}", base)
            }
        }
        None if has_start => {
            let base = format_date_range(start, None, true);
            match base.strip_suffix(PRESENT) {
                Some(prefix) => format!("{}{}", prefix, IN_PROGRESS),
                None => base,
            }
        }
        None => String::new(),
    }
}

/// Parse the date shapes people actually type into resume forms.
///
/// Month-precision inputs resolve to the first of the month and a bare year
/// to January 1st.
pub fn parse_loose_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", text), "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("01/{}", text), "%d/%m/%Y") {
        return Some(date);
    }
    for format in ["%d %B %Y", "%d %b %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(&format!("1 {}", text), format) {
            return Some(date);
        }
    }

    if text.len() == 4 && text.chars().all(|c| c.is_ascii_digit()) {
        return text
            .parse::<i32>()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1));
    }

    None
}

/// True when the date lies strictly after `today`.
pub fn is_future(input: &DateInput, today: NaiveDate) -> bool {
    input.resolve().map_or(false, |date| date > today)
}
