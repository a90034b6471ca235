//! pubspec.yaml reader.

use crate::yaml::{load_document, sdk_field};
use sdkver_core::{
    FileOpener, Result, SdkVersionReader, SdkVersions, VersionSource, parse_optional_version,
};
use std::path::Path;

/// Reads the `environment` constraints declared by the project manifest.
///
/// A missing manifest is treated like any other absent source; requiring it
/// is up to whoever validates the project root.
#[derive(Debug, Clone, Copy, Default)]
pub struct PubspecReader;

impl SdkVersionReader for PubspecReader {
    fn source(&self) -> VersionSource {
        VersionSource::PubspecYaml
    }

    fn read_sdk_versions(
        &self,
        project_root: &Path,
        files: &dyn FileOpener,
    ) -> Result<SdkVersions> {
        let Some(content) = self.open_source_file(project_root, files)? else {
            return Ok(SdkVersions::default());
        };

        let (flutter, dart) = parse_pubspec_sdks(&content)?;
        Ok(SdkVersions {
            flutter: parse_optional_version(flutter.as_deref(), self.source())?,
            dart: parse_optional_version(dart.as_deref(), self.source())?,
        })
    }
}

/// Returns the raw `(environment.flutter, environment.sdk)` strings.
pub fn parse_pubspec_sdks(content: &str) -> Result<(Option<String>, Option<String>)> {
    let file = VersionSource::PubspecYaml.relative_path();
    let doc = load_document(content, file)?;

    let flutter = sdk_field(&doc, "environment", "flutter", file)?;
    let dart = sdk_field(&doc, "environment", "sdk", file)?;
    Ok((flutter, dart))
}
