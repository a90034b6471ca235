//! Exact-version-or-constraint values tagged with their source.

use crate::constraint::VersionConstraint;
use crate::error::{Result, SdkError};
use crate::source::VersionSource;
use semver::Version;
use serde::{Deserialize, Serialize};

/// Parses a semantic version, accepting a leading `v` and missing minor/patch parts.
///
/// # Examples
///
/// ```
/// # use sdkver_core::version::parse_exact_version;
/// assert_eq!(parse_exact_version("3.7.12").unwrap().to_string(), "3.7.12");
/// assert_eq!(parse_exact_version("v3.7").unwrap().to_string(), "3.7.0");
/// assert_eq!(parse_exact_version("3").unwrap().to_string(), "3.0.0");
/// assert!(parse_exact_version("^3.7.12").is_err());
/// ```
pub fn parse_exact_version(text: &str) -> std::result::Result<Version, semver::Error> {
    let trimmed = text.trim();
    let text = trimmed.strip_prefix('v').unwrap_or(trimmed);

    let err = match Version::parse(text) {
        Ok(version) => return Ok(version),
        Err(err) => err,
    };

    let core_end = text.find(['-', '+']).unwrap_or(text.len());
    let (core, suffix) = text.split_at(core_end);
    let padded = match core.split('.').count() {
        1 => format!("{core}.0.0{suffix}"),
        2 => format!("{core}.0{suffix}"),
        _ => return Err(err),
    };

    Version::parse(&padded).map_err(|_| err)
}

/// Either a concrete version or a range, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSpec {
    Exact(Version),
    Constraint(VersionConstraint),
}

/// A Flutter or Dart SDK version found in one project file.
///
/// Serializes as `{"Version": .., "Constraint": .., "Source": ..}` with
/// exactly one of `Version`/`Constraint` non-null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SdkVersionRepr", into = "SdkVersionRepr")]
pub struct SdkVersion {
    spec: VersionSpec,
    source: VersionSource,
}

impl SdkVersion {
    /// Parses `raw` as an exact version first, then as a constraint.
    pub fn parse(raw: &str, source: VersionSource) -> Result<Self> {
        let version_error = match parse_exact_version(raw) {
            Ok(version) => return Ok(Self::exact(version, source)),
            Err(e) => e,
        };

        match VersionConstraint::parse(raw) {
            Ok(constraint) => Ok(Self::constraint(constraint, source)),
            Err(constraint_error) => Err(SdkError::InvalidVersion {
                version: raw.to_string(),
                version_error: version_error.to_string(),
                constraint_error: constraint_error.to_string(),
            }),
        }
    }

    pub fn exact(version: Version, source: VersionSource) -> Self {
        Self {
            spec: VersionSpec::Exact(version),
            source,
        }
    }

    pub fn constraint(constraint: VersionConstraint, source: VersionSource) -> Self {
        Self {
            spec: VersionSpec::Constraint(constraint),
            source,
        }
    }

    pub fn spec(&self) -> &VersionSpec {
        &self.spec
    }

    pub fn source(&self) -> VersionSource {
        self.source
    }

    /// The exact version, if this value is not a constraint.
    pub fn version(&self) -> Option<&Version> {
        match &self.spec {
            VersionSpec::Exact(version) => Some(version),
            VersionSpec::Constraint(_) => None,
        }
    }

    /// The constraint, if this value is not an exact version.
    pub fn version_constraint(&self) -> Option<&VersionConstraint> {
        match &self.spec {
            VersionSpec::Exact(_) => None,
            VersionSpec::Constraint(constraint) => Some(constraint),
        }
    }

    /// Checks if `candidate` is acceptable; an exact version allows only itself.
    pub fn allows(&self, candidate: &Version) -> bool {
        match self.spec() {
            VersionSpec::Exact(version) => version.cmp_precedence(candidate).is_eq(),
            VersionSpec::Constraint(constraint) => constraint.matches(candidate),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SdkVersionRepr {
    version: Option<String>,
    constraint: Option<String>,
    source: VersionSource,
}

impl From<SdkVersion> for SdkVersionRepr {
    fn from(value: SdkVersion) -> Self {
        let (version, constraint) = match value.spec {
            VersionSpec::Exact(version) => (Some(version.to_string()), None),
            VersionSpec::Constraint(constraint) => (None, Some(constraint.to_string())),
        };
        Self {
            version,
            constraint,
            source: value.source,
        }
    }
}

impl TryFrom<SdkVersionRepr> for SdkVersion {
    type Error = String;

    fn try_from(repr: SdkVersionRepr) -> std::result::Result<Self, Self::Error> {
        match (repr.version, repr.constraint) {
            (Some(version), None) => parse_exact_version(&version)
                .map(|v| Self::exact(v, repr.source))
                .map_err(|e| format!("invalid Version '{version}': {e}")),
            (None, Some(constraint)) => VersionConstraint::parse(&constraint)
                .map(|c| Self::constraint(c, repr.source))
                .map_err(|e| format!("invalid Constraint '{constraint}': {e}")),
            (Some(_), Some(_)) => Err("Version and Constraint are mutually exclusive".into()),
            (None, None) => Err("one of Version or Constraint must be set".into()),
        }
    }
}
