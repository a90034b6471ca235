//! Provenance of a version value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The project file a version or constraint was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VersionSource {
    #[serde(rename = "fvm_config_json")]
    FvmConfig,
    #[serde(rename = "tool_versions")]
    ToolVersions,
    #[serde(rename = "pubspec_lock")]
    PubspecLock,
    #[serde(rename = "pubspec_yaml")]
    PubspecYaml,
}

impl VersionSource {
    /// Serialized tag of this source.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FvmConfig => "fvm_config_json",
            Self::ToolVersions => "tool_versions",
            Self::PubspecLock => "pubspec_lock",
            Self::PubspecYaml => "pubspec_yaml",
        }
    }

    /// Location of the source file, relative to the project root.
    pub fn relative_path(self) -> &'static str {
        match self {
            Self::FvmConfig => ".fvm/fvm_config.json",
            Self::ToolVersions => ".tool-versions",
            Self::PubspecLock => "pubspec.lock",
            Self::PubspecYaml => "pubspec.yaml",
        }
    }
}

impl fmt::Display for VersionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
