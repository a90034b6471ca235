//! Core abstractions for sdkver.
//!
//! This crate provides the building blocks shared by the source readers:
//! exact-version-or-constraint values tagged with their provenance, the
//! constraint grammar, the file access capability and the reader trait.

pub mod constraint;
pub mod error;
pub mod file_opener;
pub mod reader;
pub mod source;
pub mod version;

pub use constraint::{Comparator, ConstraintError, Op, VersionConstraint};
pub use error::{Result, SdkError};
pub use file_opener::{FileOpener, FsFileOpener, InMemoryFileOpener};
pub use reader::{SdkVersionReader, SdkVersions, parse_optional_version};
pub use source::VersionSource;
pub use version::{SdkVersion, VersionSpec, parse_exact_version};

// Re-exported so callers can test membership without a direct dependency.
pub use semver::Version;
