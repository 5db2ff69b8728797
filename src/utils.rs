// src/utils.rs

/// Normalize a template id for file system lookup.
///
/// Lowercases and keeps only `[a-z0-9_-]`; anything else is dropped so an id
/// can never step outside the templates directory.
pub fn normalize_template_id(id: &str) -> String {
    id.trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

/// Drop `http://`, `https://` and a leading `www.` for display.
pub fn strip_url_scheme(url: &str) -> &str {
    let url = url.trim();
    let without_scheme = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    without_scheme
        .strip_prefix("www.")
        .unwrap_or(without_scheme)
        .trim_end_matches('/')
}

/// Join the non-blank parts with `sep`, trimming each.
pub fn join_non_empty<'a, I>(parts: I, sep: &str) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    parts
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_template_id() {
        assert_eq!(normalize_template_id("Modern"), "modern");
        assert_eq!(normalize_template_id(" regional_cv "), "regional_cv");
        assert_eq!(normalize_template_id("../../etc/passwd"), "etcpasswd");
        assert_eq!(normalize_template_id("   "), "");
    }

    #[test]
    fn test_strip_url_scheme() {
        assert_eq!(strip_url_scheme("https://github.com/ada"), "github.com/ada");
        assert_eq!(strip_url_scheme("http://www.ada.dev/"), "ada.dev");
        assert_eq!(strip_url_scheme("ada.dev"), "ada.dev");
    }

    #[test]
    fn test_join_non_empty() {
        assert_eq!(join_non_empty([Some("Ada"), None, Some(" "), Some("Lovelace")], " "), "Ada Lovelace");
        assert_eq!(join_non_empty([None, Some("")], " "), "");
    }
}
