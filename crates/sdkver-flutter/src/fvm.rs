//! `.fvm/fvm_config.json` reader.

use sdkver_core::{
    FileOpener, Result, SdkError, SdkVersionReader, SdkVersions, VersionSource,
    parse_optional_version,
};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct FvmConfig {
    #[serde(rename = "flutterSdkVersion", default)]
    flutter_sdk_version: Option<String>,
}

/// Reads the Flutter version pinned by FVM. Never yields a Dart version.
#[derive(Debug, Clone, Copy, Default)]
pub struct FvmConfigReader;

impl SdkVersionReader for FvmConfigReader {
    fn source(&self) -> VersionSource {
        VersionSource::FvmConfig
    }

    fn read_sdk_versions(
        &self,
        project_root: &Path,
        files: &dyn FileOpener,
    ) -> Result<SdkVersions> {
        let Some(content) = self.open_source_file(project_root, files)? else {
            return Ok(SdkVersions::default());
        };

        let flutter = parse_fvm_flutter_version(&content)?;
        Ok(SdkVersions {
            flutter: parse_optional_version(flutter.as_deref(), self.source())?,
            dart: None,
        })
    }
}

/// Extracts `flutterSdkVersion`, dropping an FVM `@channel` suffix.
pub fn parse_fvm_flutter_version(content: &str) -> Result<Option<String>> {
    let config: FvmConfig = serde_json::from_str(content).map_err(|e| SdkError::Decode {
        file: VersionSource::FvmConfig.relative_path().into(),
        source: Box::new(e),
    })?;

    Ok(config.flutter_sdk_version.map(|version| match version.split_once('@') {
        Some((version, _channel)) => version.to_string(),
        None => version,
    }))
}
