// src/environment.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::app_log;
use crate::core::FsOps;
use crate::DEFAULT_TEMPLATE_ID;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub templates_path: PathBuf,
    #[serde(default = "default_template")]
    pub default_template: String,
}

fn default_template() -> String {
    DEFAULT_TEMPLATE_ID.to_string()
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: EnvironmentConfig,
    production: EnvironmentConfig,
}

impl EnvironmentConfig {
    /// Load configuration for the current environment from `config_path`.
    pub fn load(config_path: &Path) -> Result<Self> {
        let environment = Self::get_environment();
        app_log!(info, "Loading configuration for environment: {}", environment);

        Self::load_from_file(config_path, &environment)
    }

    /// The requested template id, or the configured default when none was
    /// given or it is blank.
    pub fn template_id<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .unwrap_or(self.default_template.as_str())
    }

    fn get_environment() -> String {
        std::env::var("RESUMETEX_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    pub fn load_from_file(config_path: &Path, environment: &str) -> Result<Self> {
        if !config_path.exists() {
            anyhow::bail!(
                "{} not found. The compiler cannot start without configuration.",
                config_path.display()
            );
        }

        let config_content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config_file: ConfigFile = serde_yaml::from_str(&config_content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        let env_config = match environment {
            "production" => config_file.production,
            _ => config_file.local,
        };

        Ok(Self {
            templates_path: Self::resolve_path(&env_config.templates_path)?,
            default_template: env_config.default_template,
        })
    }

    /// Relative paths resolve from the current working directory
    fn resolve_path(path: &Path) -> Result<PathBuf> {
        let current_dir = std::env::current_dir().context("Failed to get current directory")?;
        Ok(FsOps::normalize_path(&current_dir, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
local:
  templates_path: templates
production:
  templates_path: /app/templates
  default_template: classic
"#;

    #[test]
    fn test_environment_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, CONFIG).unwrap();

        let local = EnvironmentConfig::load_from_file(&path, "local").unwrap();
        assert!(local.templates_path.is_absolute());
        assert!(local.templates_path.ends_with("templates"));
        assert_eq!(local.default_template, "default");

        let prod = EnvironmentConfig::load_from_file(&path, "production").unwrap();
        assert_eq!(prod.templates_path, PathBuf::from("/app/templates"));
        assert_eq!(prod.default_template, "classic");
    }

    #[test]
    fn test_template_id_uses_configured_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, CONFIG).unwrap();

        let prod = EnvironmentConfig::load_from_file(&path, "production").unwrap();
        assert_eq!(prod.template_id(None), "classic");
        assert_eq!(prod.template_id(Some("  ")), "classic");
        assert_eq!(prod.template_id(Some("regional")), "regional");
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(EnvironmentConfig::load_from_file(&dir.path().join("config.yaml"), "local").is_err());
    }
}
