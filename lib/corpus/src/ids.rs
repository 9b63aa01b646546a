use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uisim_core::Error;

/// Identifies a remote repository, e.g. `github.com/mui/material-ui`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoId {
    pub host: String,
    pub owner: String,
    pub name: String,
}

impl RepoId {
    pub fn new(host: impl Into<String>, owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.host, self.owner, self.name)
    }
}

/// Parses `host/owner/name`; the name may itself contain `/`
impl FromStr for RepoId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, '/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(host), Some(owner), Some(name))
                if !host.is_empty() && !owner.is_empty() && !name.is_empty() =>
            {
                Ok(RepoId::new(host, owner, name))
            }
            _ => Err(Error::InvalidConfig(format!(
                "Repository id '{}' is not of the form host/owner/name",
                s
            ))),
        }
    }
}

/// Unique key of a component inside a repository
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentKey {
    pub repo_id: RepoId,
    pub relative_path: String,
    pub export_name: String,
}

impl ComponentKey {
    pub fn new(repo_id: RepoId, relative_path: impl Into<String>, export_name: impl Into<String>) -> Self {
        Self {
            repo_id,
            relative_path: relative_path.into(),
            export_name: export_name.into(),
        }
    }

    /// Canonical id: `{repo}:{relative_path}#{export_name}`
    pub fn id(&self) -> String {
        format!("{}:{}#{}", self.repo_id, self.relative_path, self.export_name)
    }
}
