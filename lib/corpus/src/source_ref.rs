use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uisim_core::UiFramework;
use crate::ids::ComponentKey;

/// Where the source files of a component live
///
/// A component may have a template, several style files and a logic file.
/// Paths are relative to `repo_root`. Scanners that already hold the text
/// (e.g. an inline template in a decorator) pass it through the `inline_*`
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSourceRef {
    pub key: ComponentKey,
    #[serde(default)]
    pub framework: UiFramework,
    pub repo_root: PathBuf,
    pub template_path: PathBuf,
    #[serde(default)]
    pub style_paths: Vec<PathBuf>,
    pub logic_path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_template_code: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inline_style_codes: Vec<String>,
}

impl ComponentSourceRef {
    /// Reference where template and logic are the component file itself
    pub fn single_file(key: ComponentKey, framework: UiFramework, repo_root: impl Into<PathBuf>) -> Self {
        let path = PathBuf::from(&key.relative_path);
        Self {
            key,
            framework,
            repo_root: repo_root.into(),
            template_path: path.clone(),
            style_paths: Vec::new(),
            logic_path: path,
            inline_template_code: None,
            inline_style_codes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_style_paths(mut self, style_paths: Vec<PathBuf>) -> Self {
        self.style_paths = style_paths;
        self
    }

    /// Canonical component id of the key
    pub fn id(&self) -> String {
        self.key.id()
    }

    pub fn absolute_template(&self) -> PathBuf {
        self.resolve(&self.template_path)
    }

    pub fn absolute_styles(&self) -> Vec<PathBuf> {
        self.style_paths.iter().map(|p| self.resolve(p)).collect()
    }

    pub fn absolute_logic(&self) -> PathBuf {
        self.resolve(&self.logic_path)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.repo_root.join(path)
    }
}
