use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// UI framework a component was written for.
///
/// Scanners detect the framework per repository and stamp it on every
/// extracted component. Anything unrecognised is [`UiFramework::Unknown`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum UiFramework {
    React,
    Angular,
    Vue,
    #[default]
    Unknown,
}

impl UiFramework {
    pub const ALL: [UiFramework; 4] = [
        UiFramework::React,
        UiFramework::Angular,
        UiFramework::Vue,
        UiFramework::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UiFramework::React => "react",
            UiFramework::Angular => "angular",
            UiFramework::Vue => "vue",
            UiFramework::Unknown => "unknown",
        }
    }

    /// Whether template and logic usually live in the same file
    pub fn single_file_components(&self) -> bool {
        match self {
            UiFramework::React | UiFramework::Vue => true,
            UiFramework::Angular | UiFramework::Unknown => false,
        }
    }
}

impl fmt::Display for UiFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UiFramework {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "react" => Ok(UiFramework::React),
            "angular" => Ok(UiFramework::Angular),
            "vue" => Ok(UiFramework::Vue),
            "unknown" => Ok(UiFramework::Unknown),
            other => Err(crate::Error::InvalidConfig(format!(
                "Unsupported framework '{}'. Expected one of: react, angular, vue, unknown",
                other
            ))),
        }
    }
}
