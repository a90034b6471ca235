//! Source reader abstraction.

use crate::error::Result;
use crate::file_opener::FileOpener;
use crate::source::VersionSource;
use crate::version::SdkVersion;
use std::path::Path;

/// Flutter and Dart SDK versions contributed by one source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SdkVersions {
    pub flutter: Option<SdkVersion>,
    pub dart: Option<SdkVersion>,
}

impl SdkVersions {
    pub fn is_empty(&self) -> bool {
        self.flutter.is_none() && self.dart.is_none()
    }
}

/// Extracts SDK versions from one project file format.
///
/// A missing file yields an empty [`SdkVersions`], never an error.
pub trait SdkVersionReader: Send + Sync {
    /// The source this reader tags its values with.
    fn source(&self) -> VersionSource;

    /// Reads the source file under `project_root` through `files`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The file exists but cannot be read
    /// - The file cannot be decoded in its format
    /// - A non-empty version string is neither a version nor a constraint
    fn read_sdk_versions(
        &self,
        project_root: &Path,
        files: &dyn FileOpener,
    ) -> Result<SdkVersions>;

    /// Opens this reader's file, logging when it is absent.
    fn open_source_file(
        &self,
        project_root: &Path,
        files: &dyn FileOpener,
    ) -> Result<Option<String>> {
        let path = project_root.join(self.source().relative_path());
        let content = files.open_file(&path)?;
        if content.is_none() {
            tracing::debug!("{} not found, skipping", path.display());
        }
        Ok(content)
    }
}

/// Parses `raw` into a version for `source`, treating empty strings as absent.
pub fn parse_optional_version(
    raw: Option<&str>,
    source: VersionSource,
) -> Result<Option<SdkVersion>> {
    match raw.map(str::trim) {
        Some("") => {
            tracing::debug!("empty SDK version in {}, skipping", source.relative_path());
            Ok(None)
        }
        Some(raw) => SdkVersion::parse(raw, source).map(Some),
        None => Ok(None),
    }
}
