//! JSON contract for out-of-process scan engines
//!
//! An engine receives one [`ScanRequest`] on stdin and answers with one
//! [`ScanResponse`] on stdout. Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use uisim_core::{Error, Result, UiFramework};
use uisim_corpus::{ComponentKey, ComponentSourceRef, RepoId};

pub const STATUS_OK: &str = "ok";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
    pub repo_host: String,
    pub repo_owner: String,
    pub repo_name: String,
    pub repo_root: String,
}

impl ScanRequest {
    pub fn for_repo(repo: &RepoId, root: &Path) -> Self {
        Self {
            repo_host: repo.host.clone(),
            repo_owner: repo.owner.clone(),
            repo_name: repo.name.clone(),
            repo_root: root.to_string_lossy().into_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDescriptor {
    pub relative_path: String,
    pub export_name: String,
    #[serde(default)]
    pub template_path: Option<String>,
    #[serde(default)]
    pub logic_path: Option<String>,
    #[serde(default)]
    pub style_paths: Vec<String>,
    #[serde(default)]
    pub inline_template_code: Option<String>,
    #[serde(default)]
    pub inline_style_codes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResponse {
    pub status: String,
    #[serde(default)]
    pub components: Vec<ComponentDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn encode_request(request: &ScanRequest) -> Result<String> {
    Ok(serde_json::to_string(request)?)
}

pub fn decode_response(raw: &str) -> Result<ScanResponse> {
    Ok(serde_json::from_str(raw)?)
}

fn normalize(path: &str) -> String {
    path.replace('\\', "/")
}

impl ComponentDescriptor {
    fn into_source_ref(self, repo: &RepoId, root: &Path, framework: UiFramework) -> ComponentSourceRef {
        let relative_path = normalize(&self.relative_path);
        let template_path = self
            .template_path
            .as_deref()
            .map(normalize)
            .unwrap_or_else(|| relative_path.clone());
        let logic_path = self
            .logic_path
            .as_deref()
            .map(normalize)
            .unwrap_or_else(|| relative_path.clone());

        ComponentSourceRef {
            key: ComponentKey::new(repo.clone(), relative_path, self.export_name),
            framework,
            repo_root: root.to_path_buf(),
            template_path: PathBuf::from(template_path),
            style_paths: self
                .style_paths
                .iter()
                .map(|p| PathBuf::from(normalize(p)))
                .collect(),
            logic_path: PathBuf::from(logic_path),
            inline_template_code: self.inline_template_code,
            inline_style_codes: self.inline_style_codes,
        }
    }
}

impl ScanResponse {
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// `Err(Error::Scan)` carrying the engine's message when the status is
    /// not `ok`
    pub fn check_status(&self) -> Result<()> {
        if self.is_ok() {
            return Ok(());
        }
        let message = self
            .error
            .clone()
            .unwrap_or_else(|| format!("engine returned status '{}'", self.status));
        Err(Error::Scan(message))
    }

    /// Source references for every described component, or `None` when the
    /// engine did not report success
    pub fn into_source_refs(
        self,
        repo: &RepoId,
        root: &Path,
        framework: UiFramework,
    ) -> Option<Vec<ComponentSourceRef>> {
        if let Err(e) = self.check_status() {
            debug!(repo = %repo, error = %e, "Scan engine did not succeed");
            return None;
        }
        Some(
            self.components
                .into_iter()
                .map(|c| c.into_source_ref(repo, root, framework))
                .collect(),
        )
    }
}
