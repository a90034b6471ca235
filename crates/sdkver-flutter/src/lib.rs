//! Flutter and Dart SDK version resolution.
//!
//! Reads the SDK versions a Flutter project targets from four project-local
//! sources, in priority order:
//!
//! 1. `.fvm/fvm_config.json` (FVM)
//! 2. `.tool-versions` (asdf)
//! 3. `pubspec.lock`
//! 4. `pubspec.yaml`
//!
//! and merges them into a [`FlutterAndDartSdkVersions`] report. Missing
//! files contribute nothing; any malformed file fails the whole resolution.

pub mod fvm;
pub mod project;
pub mod pubspec;
pub mod pubspec_lock;
pub mod tool_versions;
pub mod types;
mod yaml;

pub use fvm::FvmConfigReader;
pub use project::{FlutterProject, READERS, resolve_sdk_versions};
pub use pubspec::PubspecReader;
pub use pubspec_lock::PubspecLockReader;
pub use tool_versions::ToolVersionsReader;
pub use types::FlutterAndDartSdkVersions;
