// src/core/template_engine.rs
//! Template shells: discovery, loading and the process-wide cache.
//!
//! A template lives in `<templates_dir>/<id>/` and consists of a LaTeX shell
//! (`template.tex` unless the manifest says otherwise) plus an optional
//! `manifest.toml`. The shell carries [`CONTENT_PLACEHOLDER`] exactly once.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::app_log;
use crate::core::FsOps;
use crate::error::{CompileError, TemplateError};
use crate::utils::normalize_template_id;
use crate::CONTENT_PLACEHOLDER;

const DEFAULT_MAIN_FILE: &str = "template.tex";
const MANIFEST_FILE: &str = "manifest.toml";

// ===== Template Models =====

/// Section plan a template is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Standard,
    /// CV layout with a personal-data block and experience ahead of education.
    Regional,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateManifest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub main_file: Option<String>,
    #[serde(default)]
    pub layout: Layout,
}

impl TemplateManifest {
    pub fn main_file(&self) -> &str {
        self.main_file.as_deref().unwrap_or(DEFAULT_MAIN_FILE)
    }
}

/// An immutable, validated template shell.
#[derive(Debug, Clone)]
pub struct Template {
    pub id: String,
    pub manifest: TemplateManifest,
    shell: String,
}

impl Template {
    pub fn new(
        id: impl Into<String>,
        shell: impl Into<String>,
        manifest: TemplateManifest,
    ) -> Result<Self, TemplateError> {
        let id = id.into();
        let shell = shell.into();

        let count = shell.matches(CONTENT_PLACEHOLDER).count();
        if count != 1 {
            return Err(TemplateError::Placeholder { id, count });
        }

        Ok(Self {
            id,
            manifest,
            shell,
        })
    }

    pub fn layout(&self) -> Layout {
        self.manifest.layout
    }

    pub fn shell(&self) -> &str {
        &self.shell
    }

    /// Substitute the rendered body into the shell.
    pub fn render(&self, content: &str) -> String {
        self.shell.replacen(CONTENT_PLACEHOLDER, content, 1)
    }
}

// ===== Loader / Cache =====

/// Loads template shells from disk and keeps them for the process lifetime.
///
/// Entries are never invalidated. Two requests racing on the same uncached
/// id read the same file, so whichever insert lands first is kept.
pub struct TemplateCache {
    templates_dir: PathBuf,
    default_id: String,
    templates: RwLock<HashMap<String, Arc<Template>>>,
}

impl TemplateCache {
    pub fn new(templates_dir: impl Into<PathBuf>, default_id: &str) -> Self {
        Self {
            templates_dir: templates_dir.into(),
            default_id: normalize_template_id(default_id),
            templates: RwLock::new(HashMap::new()),
        }
    }

    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    pub fn default_id(&self) -> &str {
        &self.default_id
    }

    /// Resolve a template id, falling back to the default template.
    ///
    /// Only a failure of the default template itself is an error.
    pub async fn load(&self, template_id: &str) -> Result<Arc<Template>, CompileError> {
        let id = normalize_template_id(template_id);

        if !id.is_empty() && id != self.default_id {
            match self.load_exact(&id).await {
                Ok(template) => return Ok(template),
                Err(e) => {
                    app_log!(
                        warn,
                        "Template '{}' unavailable, falling back to '{}': {}",
                        template_id,
                        self.default_id,
                        e
                    );
                }
            }
        }

        self.load_exact(&self.default_id)
            .await
            .map_err(|source| {
                app_log!(
                    error,
                    "Default template '{}' could not be loaded from {}: {}",
                    self.default_id,
                    self.templates_dir.display(),
                    source
                );
                CompileError::DefaultTemplateUnavailable {
                    id: self.default_id.clone(),
                    source,
                }
            })
    }

    /// Load one id without fallback, serving repeats from the cache.
    pub async fn load_exact(&self, id: &str) -> Result<Arc<Template>, TemplateError> {
        if let Some(template) = self.templates.read().await.get(id) {
            app_log!(trace, "Template cache hit: {}", id);
            return Ok(Arc::clone(template));
        }

        let template = Arc::new(self.read_template(id).await?);
        app_log!(
            info,
            "Loaded template '{}' ({:?} layout) from {}",
            id,
            template.layout(),
            self.templates_dir.join(id).display()
        );

        let mut templates = self.templates.write().await;
        Ok(Arc::clone(
            templates.entry(id.to_string()).or_insert(template),
        ))
    }

    pub async fn is_cached(&self, id: &str) -> bool {
        self.templates.read().await.contains_key(id)
    }

    /// Ids of every template directory that holds a shell file.
    pub async fn list_templates(&self) -> Result<Vec<String>> {
        let mut ids = Vec::new();
        for dir in FsOps::list_subdirs(&self.templates_dir).await? {
            let manifest = match self.read_manifest(&dir).await {
                Ok(manifest) => manifest,
                Err(e) => {
                    app_log!(warn, "Skipping template at {}: {}", dir.display(), e);
                    continue;
                }
            };
            if dir.join(manifest.main_file()).is_file() {
                if let Some(name) = dir.file_name().and_then(|n| n.to_str()) {
                    ids.push(name.to_string());
                }
            }
        }
        ids.sort();
        Ok(ids)
    }

    async fn read_template(&self, id: &str) -> Result<Template, TemplateError> {
        let dir = self.templates_dir.join(id);
        let manifest = self.read_manifest(&dir).await?;

        let shell_path = dir.join(manifest.main_file());
        let shell = tokio::fs::read_to_string(&shell_path)
            .await
            .map_err(|source| TemplateError::Read {
                path: shell_path,
                source,
            })?;

        Template::new(id, shell, manifest)
    }

    /// A missing manifest means defaults; an unreadable or invalid one fails.
    async fn read_manifest(&self, dir: &Path) -> Result<TemplateManifest, TemplateError> {
        let path = dir.join(MANIFEST_FILE);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(TemplateManifest::default()),
            Err(source) => return Err(TemplateError::Read { path, source }),
        };

        toml::from_str(&content).map_err(|source| TemplateError::Manifest { path, source })
    }
}
