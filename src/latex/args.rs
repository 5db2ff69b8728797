// src/latex/args.rs
//! Keyed macro argument lists.
//!
//! The LaTeX macros used by the templates parse `key={value}` lists and abort
//! compilation when a key is given an empty value. [`MacroArgs`] is the only
//! place that turns maybe-absent data into macro arguments: empty values are
//! dropped before joining, and a macro whose list ends up empty is not emitted
//! at all.

use super::escape::escape_latex;

/// Build one `key={value}` entry, or `None` when the value is empty.
///
/// `value` must already be escaped.
pub fn kv(key: &str, value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(format!("{}={{{}}}", key, value))
    }
}

/// Ordered list of optional keyed arguments.
#[derive(Debug, Clone, Default)]
pub struct MacroArgs {
    entries: Vec<Option<String>>,
}

impl MacroArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value that is escaped here.
    pub fn arg(mut self, key: &str, value: impl AsRef<str>) -> Self {
        self.entries.push(kv(key, &escape_latex(value.as_ref())));
        self
    }

    /// Add an optional value that is escaped here.
    pub fn arg_opt(self, key: &str, value: Option<&str>) -> Self {
        self.arg(key, value.unwrap_or_default())
    }

    /// Add a value that already went through escaping.
    pub fn raw(mut self, key: &str, escaped: impl AsRef<str>) -> Self {
        self.entries.push(kv(key, escaped.as_ref()));
        self
    }

    /// Number of arguments that survive filtering.
    pub fn len(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Join the non-empty arguments, or return `""` when none qualify.
    pub fn build(&self) -> String {
        self.entries
            .iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Render `\name{args}`, or `None` when the argument list is empty.
    pub fn invoke(&self, macro_name: &str) -> Option<String> {
        let args = self.build();
        if args.is_empty() {
            None
        } else {
            Some(format!("\\{}{{{}}}", macro_name, args))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kv_rejects_empty() {
        assert_eq!(kv("name", ""), None);
        assert_eq!(kv("name", "   "), None);
        assert_eq!(kv("name", "Ada"), Some("name={Ada}".to_string()));
    }

    #[test]
    fn test_build_skips_empty_values() {
        let args = MacroArgs::new()
            .arg("title", "Engineer")
            .arg("company", "")
            .arg_opt("location", None)
            .arg("dates", " \t ")
            .arg("team", "R&D");
        assert_eq!(args.len(), 2);
        assert_eq!(args.build(), r"title={Engineer}, team={R\&D}");
    }

    #[test]
    fn test_invoke_omits_empty_macro() {
        let args = MacroArgs::new().arg("a", "").arg_opt("b", None);
        assert!(args.is_empty());
        assert_eq!(args.build(), "");
        assert_eq!(args.invoke("experienceentry"), None);
    }

    #[test]
    fn test_invoke_renders_macro() {
        let args = MacroArgs::new().arg("name", "Ada Lovelace").raw("note", r"\ldots{}");
        assert_eq!(
            args.invoke("contactinfo").as_deref(),
            Some(r"\contactinfo{name={Ada Lovelace}, note={\ldots{}}}")
        );
    }

    #[test]
    fn test_order_is_preserved() {
        let args = MacroArgs::new().arg("z", "1").arg("a", "2").arg("m", "3");
        assert_eq!(args.build(), "z={1}, a={2}, m={3}");
    }
}
