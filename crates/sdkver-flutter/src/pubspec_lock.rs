//! pubspec.lock reader.

use crate::yaml::{load_document, sdk_field};
use sdkver_core::{
    FileOpener, Result, SdkVersionReader, SdkVersions, VersionSource, parse_optional_version,
};
use std::path::Path;

/// Reads the `sdks` constraints recorded by `pub get`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PubspecLockReader;

impl SdkVersionReader for PubspecLockReader {
    fn source(&self) -> VersionSource {
        VersionSource::PubspecLock
    }

    fn read_sdk_versions(
        &self,
        project_root: &Path,
        files: &dyn FileOpener,
    ) -> Result<SdkVersions> {
        let Some(content) = self.open_source_file(project_root, files)? else {
            return Ok(SdkVersions::default());
        };

        let (flutter, dart) = parse_pubspec_lock_sdks(&content)?;
        Ok(SdkVersions {
            flutter: parse_optional_version(flutter.as_deref(), self.source())?,
            dart: parse_optional_version(dart.as_deref(), self.source())?,
        })
    }
}

/// Returns the raw `(sdks.flutter, sdks.dart)` strings.
pub fn parse_pubspec_lock_sdks(content: &str) -> Result<(Option<String>, Option<String>)> {
    let file = VersionSource::PubspecLock.relative_path();
    let doc = load_document(content, file)?;

    let flutter = sdk_field(&doc, "sdks", "flutter", file)?;
    let dart = sdk_field(&doc, "sdks", "dart", file)?;
    Ok((flutter, dart))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdkver_core::{InMemoryFileOpener, SdkError};

    const LOCK: &str = r#"
packages:
  http:
    dependency: "direct main"
    description:
      name: http
      url: "https://pub.dev"
    source: hosted
    version: "0.13.6"
sdks:
  dart: ">=2.19.6 <3.0.0"
  flutter: ">=3.7.0"
"#;

    fn read(content: &str) -> Result<SdkVersions> {
        let files = InMemoryFileOpener::new().with_file("pubspec.lock", content);
        PubspecLockReader.read_sdk_versions(Path::new(""), &files)
    }

    #[test]
    fn test_parse_sdks() {
        let (flutter, dart) = parse_pubspec_lock_sdks(LOCK).unwrap();
        assert_eq!(flutter.as_deref(), Some(">=3.7.0"));
        assert_eq!(dart.as_deref(), Some(">=2.19.6 <3.0.0"));
    }

    #[test]
    fn test_read_both_axes() {
        let versions = read(LOCK).unwrap();

        let dart = versions.dart.unwrap();
        assert_eq!(dart.version_constraint().unwrap().as_str(), ">=2.19.6 <3.0.0");
        assert_eq!(dart.source(), VersionSource::PubspecLock);

        let flutter = versions.flutter.unwrap();
        assert_eq!(flutter.version_constraint().unwrap().as_str(), ">=3.7.0");
    }

    #[test]
    fn test_dart_only() {
        let versions = read("sdks:\n  dart: \">=2.19.6 <3.0.0\"\n").unwrap();
        assert!(versions.flutter.is_none());
        assert!(versions.dart.is_some());
    }

    #[test]
    fn test_without_sdks_section() {
        assert!(read("packages: {}\n").unwrap().is_empty());
    }

    #[test]
    fn test_empty_lock_is_decode_error() {
        for content in ["", "# Generated by pub\n"] {
            assert!(matches!(read(content), Err(SdkError::Decode { .. })));
        }
    }

    #[test]
    fn test_missing_file() {
        let versions = PubspecLockReader
            .read_sdk_versions(Path::new(""), &InMemoryFileOpener::new())
            .unwrap();
        assert!(versions.is_empty());
    }

    #[test]
    fn test_malformed_yaml() {
        let err = read("sdks:\n  dart: \">=2.19.6\n  flutter: [\n").unwrap_err();
        assert!(matches!(err, SdkError::Decode { .. }));
    }

    #[test]
    fn test_invalid_constraint() {
        let err = read("sdks:\n  dart: \">=banana\"\n").unwrap_err();
        assert!(matches!(err, SdkError::InvalidVersion { .. }));
    }
}
