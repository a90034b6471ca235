//! asdf `.tool-versions` reader.

use sdkver_core::{
    FileOpener, Result, SdkVersionReader, SdkVersions, VersionSource, parse_optional_version,
};
use std::path::Path;

const FLUTTER_TOOL: &str = "flutter";

/// Release channels the asdf flutter plugin appends to versions.
const CHANNEL_SUFFIXES: &[&str] = &["-stable", "-beta", "-dev", "-master", "-main"];

/// Reads the Flutter version pinned by asdf. Never yields a Dart version.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolVersionsReader;

impl SdkVersionReader for ToolVersionsReader {
    fn source(&self) -> VersionSource {
        VersionSource::ToolVersions
    }

    fn read_sdk_versions(
        &self,
        project_root: &Path,
        files: &dyn FileOpener,
    ) -> Result<SdkVersions> {
        let Some(content) = self.open_source_file(project_root, files)? else {
            return Ok(SdkVersions::default());
        };

        Ok(SdkVersions {
            flutter: parse_optional_version(parse_tool_versions(&content), self.source())?,
            dart: None,
        })
    }
}

/// Finds the first usable `flutter <version>` entry.
pub fn parse_tool_versions(content: &str) -> Option<&str> {
    for line in content.lines() {
        let line = line.split('#').next().unwrap_or_default();
        let mut tokens = line.split_whitespace();

        if tokens.next() != Some(FLUTTER_TOOL) {
            continue;
        }

        let Some(version) = tokens.next() else {
            tracing::trace!("skipping .tool-versions line without a version: {line:?}");
            continue;
        };

        if is_special_value(version) {
            tracing::trace!("skipping non-version flutter entry: {version}");
            continue;
        }

        return Some(strip_channel(version));
    }

    None
}

fn is_special_value(version: &str) -> bool {
    matches!(version, "system" | "latest")
        || version.starts_with("ref:")
        || version.starts_with("path:")
}

fn strip_channel(version: &str) -> &str {
    CHANNEL_SUFFIXES
        .iter()
        .find_map(|suffix| version.strip_suffix(suffix))
        .unwrap_or(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdkver_core::{InMemoryFileOpener, Version};

    #[test]
    fn test_parse_flutter_line() {
        let content = "ruby 3.2.2\nflutter 3.7.12-stable\nnodejs 18.16.0\n";
        assert_eq!(parse_tool_versions(content), Some("3.7.12"));
    }

    #[test]
    fn test_plain_version() {
        assert_eq!(parse_tool_versions("flutter 3.7.12"), Some("3.7.12"));
    }

    #[test]
    fn test_keeps_prerelease_tag() {
        assert_eq!(
            parse_tool_versions("flutter 3.10.0-1.0.pre-beta"),
            Some("3.10.0-1.0.pre")
        );
    }

    #[test]
    fn test_first_flutter_line_and_first_version_win() {
        let content = "flutter 3.7.12-stable 3.3.0-stable\nflutter 2.10.5\n";
        assert_eq!(parse_tool_versions(content), Some("3.7.12"));
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let content = "# pinned tools\n\n   \nflutter 3.7.12 # keep in sync with CI\n";
        assert_eq!(parse_tool_versions(content), Some("3.7.12"));
        assert_eq!(parse_tool_versions("# flutter 3.7.12\n"), None);
    }

    #[test]
    fn test_malformed_and_special_lines_are_skipped() {
        let content = "flutter\nflutter system\nflutter ref:main\nflutter path:/opt/flutter\n";
        assert_eq!(parse_tool_versions(content), None);

        let content = "flutter\nflutter 3.7.12\n";
        assert_eq!(parse_tool_versions(content), Some("3.7.12"));
    }

    #[test]
    fn test_tool_name_must_match_exactly() {
        assert_eq!(parse_tool_versions("flutterfire 0.2.7\n"), None);
    }

    #[test]
    fn test_reader() {
        let files =
            InMemoryFileOpener::new().with_file(".tool-versions", "flutter 3.7.12-stable\n");
        let versions = ToolVersionsReader
            .read_sdk_versions(Path::new(""), &files)
            .unwrap();

        let flutter = versions.flutter.unwrap();
        assert_eq!(flutter.version(), Some(&Version::new(3, 7, 12)));
        assert_eq!(flutter.source(), VersionSource::ToolVersions);
        assert!(versions.dart.is_none());
    }

    #[test]
    fn test_reader_without_flutter_entry() {
        let files = InMemoryFileOpener::new().with_file(".tool-versions", "java 17\n");
        let versions = ToolVersionsReader
            .read_sdk_versions(Path::new(""), &files)
            .unwrap();
        assert!(versions.is_empty());
    }
}
