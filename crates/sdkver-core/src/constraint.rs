//! Version constraint parsing and matching.
//!
//! Supports the caret syntax used by `pubspec.yaml` and the traditional
//! comparator syntax:
//!
//! - `^1.2.3` = `>=1.2.3 <2.0.0`
//! - `^0.1.2` = `>=0.1.2 <0.2.0` (before 1.0.0 the minor version is the stability level)
//! - `~1.2.3` = `>=1.2.3 <1.3.0`
//! - `any`, `*`, `1.2.3`, `=1.2.3`, `>=1.2.3`, `>1.2.3`, `<=1.2.3`, `<1.2.3`
//!
//! Comparators separated by whitespace or commas must all hold; `||`
//! separates alternatives of which at least one must hold.
//!
//! A pre-release version only satisfies a comparator set when one of the
//! set's bounds is itself a pre-release of the same `major.minor.patch`, so
//! `^1.2.3` does not admit `2.0.0-dev`.

use crate::version::parse_exact_version;
use semver::Version;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("empty constraint")]
    Empty,

    #[error("empty alternative in '{constraint}'")]
    EmptyAlternative { constraint: String },

    #[error("operator '{op}' is missing a version")]
    MissingVersion { op: &'static str },

    #[error("upper bound of '{text}' is out of range")]
    BoundOverflow { text: String },

    #[error("invalid version '{text}' in constraint: {message}")]
    InvalidVersion { text: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Eq,
    Gt,
    Ge,
    Lt,
    Le,
}

impl Op {
    fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Lt => "<",
            Self::Le => "<=",
        }
    }
}

/// A single bound such as `>=2.19.6`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparator {
    pub op: Op,
    pub version: Version,
}

impl Comparator {
    pub fn matches(&self, version: &Version) -> bool {
        let ord = version.cmp_precedence(&self.version);
        match self.op {
            Op::Eq => ord == Ordering::Equal,
            Op::Gt => ord == Ordering::Greater,
            Op::Ge => ord != Ordering::Less,
            Op::Lt => ord == Ordering::Less,
            Op::Le => ord != Ordering::Greater,
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op.as_str(), self.version)
    }
}

/// A parsed version range that keeps the expression it was written as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConstraint {
    raw: String,
    alternatives: Vec<Vec<Comparator>>,
}

impl VersionConstraint {
    pub fn parse(input: &str) -> Result<Self, ConstraintError> {
        let raw = input.trim();
        if raw.is_empty() {
            return Err(ConstraintError::Empty);
        }

        let alternatives = raw
            .split("||")
            .map(|alt| parse_alternative(alt, raw))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            raw: raw.to_string(),
            alternatives,
        })
    }

    /// The constraint expression as written, trimmed.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Expanded comparator sets; an empty set matches every version.
    pub fn alternatives(&self) -> &[Vec<Comparator>] {
        &self.alternatives
    }

    /// Checks if `version` satisfies this constraint.
    pub fn matches(&self, version: &Version) -> bool {
        self.alternatives.iter().any(|set| {
            set.iter().all(|c| c.matches(version)) && prerelease_allowed(set, version)
        })
    }
}

fn prerelease_allowed(set: &[Comparator], version: &Version) -> bool {
    if version.pre.is_empty() {
        return true;
    }

    set.iter().any(|c| {
        !c.version.pre.is_empty()
            && c.version.major == version.major
            && c.version.minor == version.minor
            && c.version.patch == version.patch
    })
}

fn parse_alternative(alt: &str, raw: &str) -> Result<Vec<Comparator>, ConstraintError> {
    let mut tokens = alt
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty());

    let mut comparators = Vec::new();
    let mut seen_any = false;

    while let Some(token) = tokens.next() {
        if matches!(token, "any" | "*" | "x" | "X") {
            seen_any = true;
            continue;
        }

        let (op, rest) = split_operator(token);
        let text = match (op, rest.is_empty()) {
            (Some(op), true) => tokens
                .next()
                .ok_or(ConstraintError::MissingVersion { op })?,
            _ => rest,
        };
        let version = parse_bound(text)?;

        match op {
            Some("^") => {
                let upper = if version.major == 0 {
                    version.minor.checked_add(1).map(|minor| Version::new(0, minor, 0))
                } else {
                    version.major.checked_add(1).map(|major| Version::new(major, 0, 0))
                };
                let upper = upper.ok_or_else(|| bound_overflow(text))?;
                comparators.push(Comparator { op: Op::Ge, version });
                comparators.push(Comparator { op: Op::Lt, version: upper });
            }
            Some("~") => {
                let upper = version
                    .minor
                    .checked_add(1)
                    .map(|minor| Version::new(version.major, minor, 0))
                    .ok_or_else(|| bound_overflow(text))?;
                comparators.push(Comparator { op: Op::Ge, version });
                comparators.push(Comparator { op: Op::Lt, version: upper });
            }
            Some(">=") => comparators.push(Comparator { op: Op::Ge, version }),
            Some("<=") => comparators.push(Comparator { op: Op::Le, version }),
            Some(">") => comparators.push(Comparator { op: Op::Gt, version }),
            Some("<") => comparators.push(Comparator { op: Op::Lt, version }),
            _ => comparators.push(Comparator { op: Op::Eq, version }),
        }
    }

    if comparators.is_empty() && !seen_any {
        return Err(ConstraintError::EmptyAlternative {
            constraint: raw.to_string(),
        });
    }

    Ok(comparators)
}

fn split_operator(token: &str) -> (Option<&'static str>, &str) {
    // Two-character operators first so ">=" is not read as ">".
    for op in [">=", "<=", ">", "<", "=", "^", "~"] {
        if let Some(rest) = token.strip_prefix(op) {
            return (Some(op), rest);
        }
    }
    (None, token)
}

fn bound_overflow(text: &str) -> ConstraintError {
    ConstraintError::BoundOverflow {
        text: text.to_string(),
    }
}

fn parse_bound(text: &str) -> Result<Version, ConstraintError> {
    parse_exact_version(text).map_err(|e| ConstraintError::InvalidVersion {
        text: text.to_string(),
        message: e.to_string(),
    })
}

impl FromStr for VersionConstraint {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for VersionConstraint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for VersionConstraint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
