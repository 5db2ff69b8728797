// src/sections/credentials.rs
//! Certifications, publications and awards.

use super::{entry_lines, entry_section, list_of, title_with_url, RenderedBlock};
use crate::latex::{format_date_range, MacroArgs};
use crate::types::resume::{Award, Certification, DateInput, Publication};
use crate::utils::{join_non_empty, strip_url_scheme};

pub fn render_certifications(certs: &[Certification]) -> RenderedBlock {
    entry_section(
        "Certifications",
        certs.iter().filter_map(|cert| {
            MacroArgs::new()
                .raw("name", title_with_url(cert.name.as_deref(), cert.url.as_deref()))
                .arg_opt("issuer", cert.issuer.as_deref())
                .arg(
                    "dates",
                    format_date_range(cert.issue_date.as_ref(), cert.expiry_date.as_ref(), false),
                )
                .arg_opt("credential", cert.credential_id.as_deref())
                .invoke("certificationentry")
                .map(|line| vec![line])
        }),
    )
}

pub fn render_publications(publications: &[Publication]) -> RenderedBlock {
    entry_section(
        "Publications",
        publications.iter().filter_map(|publication| {
            let authors = join_non_empty(
                list_of(&publication.authors).iter().map(|a| Some(a.as_str())),
                ", ",
            );
            let header = MacroArgs::new()
                .arg_opt("title", publication.title.as_deref())
                .arg_opt("publisher", publication.publisher.as_deref())
                .arg("authors", authors)
                .arg("date", single_date(publication.date.as_ref()))
                .arg_opt("url", publication.url.as_deref().map(strip_url_scheme))
                .invoke("publicationentry");

            let description = publication
                .description
                .as_ref()
                .map(|d| d.lines())
                .unwrap_or_default();
            entry_lines(header, description)
        }),
    )
}

pub fn render_awards(awards: &[Award]) -> RenderedBlock {
    entry_section(
        "Awards \\& Activities",
        awards.iter().filter_map(|award| {
            let header = MacroArgs::new()
                .arg_opt("title", award.title.as_deref())
                .arg_opt("issuer", award.issuer.as_deref())
                .arg("date", single_date(award.date.as_ref()))
                .invoke("awardentry");
            entry_lines(header, award.description.as_deref())
        }),
    )
}

fn single_date(date: Option<&DateInput>) -> String {
    date.and_then(DateInput::display).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TextBlock;

    #[test]
    fn test_certification_with_url_and_expiry() {
        let cert = Certification {
            name: Some("AWS Solutions Architect".into()),
            issuer: Some("Amazon Web Services".into()),
            issue_date: Some("03/2023".into()),
            expiry_date: Some("03/2026".into()),
            url: Some("https://www.credly.com/badges/abc".into()),
            credential_id: Some("".into()),
        };
        assert_eq!(
            render_certifications(&[cert]).lines()[2],
            r"\certificationentry{name={AWS Solutions Architect (credly.com/badges/abc)}, issuer={Amazon Web Services}, dates={03/2023 -- 03/2026}}"
        );
    }

    #[test]
    fn test_publication_with_description() {
        let publication = Publication {
            title: Some("Zero-copy parsing".into()),
            authors: Some(vec!["A. Lovelace".into(), "C. Babbage".into()]),
            date: Some("2022".into()),
            url: Some("https://doi.org/10.1000/xyz_1".into()),
            description: Some(TextBlock::Single("Best paper nominee".into())),
            ..Default::default()
        };
        let lines = render_publications(&[publication]).into_lines();
        assert_eq!(
            lines[2],
            r"\publicationentry{title={Zero-copy parsing}, authors={A. Lovelace, C. Babbage}, date={2022}, url={doi.org/10.1000/xyz\_1}}"
        );
        assert_eq!(lines[4], r"  \item Best paper nominee");
    }

    #[test]
    fn test_awards_section_title_escaped() {
        let award = Award {
            title: Some("Hackathon Winner".into()),
            description: Some("First of 120 teams".into()),
            ..Default::default()
        };
        let lines = render_awards(&[award]).into_lines();
        assert_eq!(lines[0], r"\section{Awards \& Activities}");
        assert_eq!(lines[2], r"\awardentry{title={Hackathon Winner}}");
        assert_eq!(lines[4], r"  \item First of 120 teams");
    }

    #[test]
    fn test_empty_lists() {
        assert!(render_certifications(&[Certification::default()]).is_empty());
        assert!(render_publications(&[]).is_empty());
        assert!(render_awards(&[Award::default()]).is_empty());
    }
}
