// src/sections/additional.rs
//! Free-form sections and the tracking footer.

use super::{itemize, list_of, RenderedBlock};
use crate::latex::{escape_latex, MacroArgs};
use crate::types::resume::AdditionalSection;

const FALLBACK_TITLE: &str = "Additional Information";

/// One `\section` per free-form section that has a paragraph or items.
pub fn render_additional_sections(sections: &[AdditionalSection]) -> RenderedBlock {
    let mut block = RenderedBlock::new();

    for section in sections {
        let paragraph = escape_latex(section.content.as_deref().unwrap_or_default());
        let items = itemize(list_of(&section.items));
        if paragraph.is_empty() && items.is_empty() {
            continue;
        }

        let title = escape_latex(section.title.as_deref().unwrap_or_default());
        let title = if title.is_empty() {
            FALLBACK_TITLE.to_string()
        } else {
            title
        };

        block.push(format!("\\section{{{}}}", title));
        if !paragraph.is_empty() {
            block.push(paragraph);
        }
        for line in items {
            block.push(line);
        }
    }

    block
}

pub fn render_tracking_footer(url: Option<&str>) -> RenderedBlock {
    MacroArgs::new()
        .arg_opt("url", url)
        .invoke("trackingfooter")
        .map(|line| vec![line])
        .unwrap_or_default()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_with_content_and_items() {
        let sections = vec![
            AdditionalSection {
                title: Some("Open Source".into()),
                content: Some("Maintainer of several crates.".into()),
                items: Some(vec!["serde_with contributor".into()]),
            },
            AdditionalSection {
                title: Some("Empty".into()),
                ..Default::default()
            },
            AdditionalSection {
                title: None,
                content: Some("Available for relocation.".into()),
                items: None,
            },
        ];
        assert_eq!(
            render_additional_sections(&sections).lines(),
            &[
                r"\section{Open Source}".to_string(),
                "Maintainer of several crates.".to_string(),
                r"\begin{itemize}".to_string(),
                r"  \item serde\_with contributor".to_string(),
                r"\end{itemize}".to_string(),
                r"\section{Additional Information}".to_string(),
                "Available for relocation.".to_string(),
            ]
        );
    }

    #[test]
    fn test_tracking_footer() {
        assert_eq!(
            render_tracking_footer(Some("https://t.example.com/r?id=1&s=a_b")).lines(),
            &[r"\trackingfooter{url={https://t.example.com/r?id=1\&s=a\_b}}".to_string()]
        );
        assert!(render_tracking_footer(Some("  ")).is_empty());
        assert!(render_tracking_footer(None).is_empty());
    }
}
