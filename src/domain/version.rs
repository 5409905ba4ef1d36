use crate::error::{ReleaseError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

// Leading MAJOR.MINOR.PATCH triple; anything after a non-digit is pre-release/build noise.
static VERSION_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^[vV]?(\d+)\.(\d+)\.(\d+)(?:\D.*)?$").expect("version tag pattern is valid")
});

/// Semantic version triple without pre-release or build metadata
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse the base triple from a tag string.
    ///
    /// Accepts `[v]MAJOR.MINOR.PATCH[...]`, e.g. `v1.2.3`, `1.2.3`, `V1.2.3-rc4+abc`.
    /// Whatever follows the triple is ignored.
    pub fn parse(tag: &str) -> Result<Self> {
        let trimmed = tag.trim();
        let captures = VERSION_TAG.captures(trimmed).ok_or_else(|| {
            ReleaseError::version_tag(format!(
                "Invalid version format: '{}' - expected [v]X.Y.Z",
                tag
            ))
        })?;

        let component = |index: usize, name: &str| -> Result<u32> {
            let raw = captures.get(index).map(|m| m.as_str()).unwrap_or_default();
            raw.parse::<u32>().map_err(|_| {
                ReleaseError::version_tag(format!("Invalid {} version: {}", name, raw))
            })
        };

        Ok(Version {
            major: component(1, "major")?,
            minor: component(2, "minor")?,
            patch: component(3, "patch")?,
        })
    }

    /// Bump version according to bump type.
    ///
    /// Lower components reset to zero. Fails instead of wrapping when the
    /// incremented component would overflow.
    pub fn bump(&self, bump_type: VersionBump) -> Result<Self> {
        let overflow =
            || ReleaseError::overflow(format!("cannot apply {} bump to {}", bump_type, self));

        let bumped = match bump_type {
            VersionBump::Major => Version {
                major: self.major.checked_add(1).ok_or_else(overflow)?,
                minor: 0,
                patch: 0,
            },
            VersionBump::Minor => Version {
                major: self.major,
                minor: self.minor.checked_add(1).ok_or_else(overflow)?,
                patch: 0,
            },
            VersionBump::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch.checked_add(1).ok_or_else(overflow)?,
            },
        };
        Ok(bumped)
    }
}

impl FromStr for Version {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VersionBump {
    Patch,
    Minor,
    Major,
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionBump::Major => write!(f, "major"),
            VersionBump::Minor => write!(f, "minor"),
            VersionBump::Patch => write!(f, "patch"),
        }
    }
}
