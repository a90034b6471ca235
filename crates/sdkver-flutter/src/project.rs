//! Multi-source SDK version resolution for a Flutter project.

use crate::fvm::FvmConfigReader;
use crate::pubspec::PubspecReader;
use crate::pubspec_lock::PubspecLockReader;
use crate::tool_versions::ToolVersionsReader;
use crate::types::FlutterAndDartSdkVersions;
use sdkver_core::{FileOpener, FsFileOpener, Result, SdkVersionReader};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Readers in priority order. Output lists follow this order.
pub const READERS: [&dyn SdkVersionReader; 4] = [
    &FvmConfigReader,
    &ToolVersionsReader,
    &PubspecLockReader,
    &PubspecReader,
];

/// Runs every reader over `project_root` and merges their results.
///
/// Any reader error aborts resolution; no partial report is returned.
pub fn resolve_sdk_versions(
    project_root: &Path,
    files: &dyn FileOpener,
) -> Result<FlutterAndDartSdkVersions> {
    let mut report = FlutterAndDartSdkVersions::default();

    for reader in READERS {
        let versions = reader
            .read_sdk_versions(project_root, files)
            .map_err(|e| e.in_source(reader.source()))?;

        if let Some(flutter) = versions.flutter {
            report.flutter_sdk_versions.push(flutter);
        }
        if let Some(dart) = versions.dart {
            report.dart_sdk_versions.push(dart);
        }
    }

    tracing::info!(
        "Resolved SDK versions for {}: {} flutter, {} dart",
        project_root.display(),
        report.flutter_sdk_versions.len(),
        report.dart_sdk_versions.len()
    );

    Ok(report)
}

/// A Flutter project rooted at a directory.
///
/// The SDK version report is computed on first request and reused for the
/// lifetime of the handle; backing files are assumed not to change. The
/// cache lock is held while computing, so concurrent first callers share a
/// single computation. Failed resolutions are not cached.
pub struct FlutterProject<F = FsFileOpener> {
    root: PathBuf,
    files: F,
    sdk_versions: Mutex<Option<FlutterAndDartSdkVersions>>,
}

impl FlutterProject<FsFileOpener> {
    /// Creates a project that reads files from disk.
    pub fn from_dir(root: impl Into<PathBuf>) -> Self {
        Self::new(root, FsFileOpener)
    }
}

impl<F: FileOpener> FlutterProject<F> {
    pub fn new(root: impl Into<PathBuf>, files: F) -> Self {
        Self {
            root: root.into(),
            files,
            sdk_versions: Mutex::new(None),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Flutter and Dart SDK versions declared by the project's files.
    pub fn sdk_versions(&self) -> Result<FlutterAndDartSdkVersions> {
        let mut cached = self
            .sdk_versions
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(report) = cached.as_ref() {
            tracing::trace!("Using cached SDK versions for {}", self.root.display());
            return Ok(report.clone());
        }

        let report = resolve_sdk_versions(&self.root, &self.files)?;
        *cached = Some(report.clone());
        Ok(report)
    }
}

impl<F> std::fmt::Debug for FlutterProject<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlutterProject")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}
