use std::fmt;

use crate::error::{BuildVersionError, Result};

/// The declared, human-assigned version of the next release (e.g. "1.4.0").
///
/// Always non-empty and contains at least one '.'.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseVersion(String);

impl BaseVersion {
    /// Validate an extracted declaration value.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() || !value.contains('.') {
            return Err(BuildVersionError::config_parse(format!(
                "Bad version: \"{}\"",
                value
            )));
        }
        Ok(BaseVersion(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The version string printed for a build.
///
/// Snapshots use '~' separators so that dpkg-style comparators order
/// `1.3.0~2020-07-02~g4f336a2~snapshot` before `1.3.0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionString {
    /// HEAD carries exactly one tag; the tag is the version.
    Release(String),
    /// HEAD is untagged.
    Snapshot {
        base: BaseVersion,
        date: String,
        short_hash: String,
    },
}

impl VersionString {
    pub fn is_snapshot(&self) -> bool {
        matches!(self, VersionString::Snapshot { .. })
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionString::Release(tag) => f.write_str(tag),
            VersionString::Snapshot {
                base,
                date,
                short_hash,
            } => write!(f, "{}~{}~g{}~snapshot", base, date, short_hash),
        }
    }
}
