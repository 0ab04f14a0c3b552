//! Project member access levels.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::Error;

/// A GitLab role, encoded on the wire as its integer value.
///
/// Protected-tag rules use the access level to decide which roles may
/// create (and delete) matching tags.
///
/// ```rust
/// use gitlab_tags::AccessLevel;
///
/// assert_eq!(AccessLevel::Developer.value(), 30);
/// assert_eq!(AccessLevel::try_from(40).unwrap(), AccessLevel::Maintainer);
/// assert!(AccessLevel::Maintainer > AccessLevel::Developer);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u32")]
pub enum AccessLevel {
    /// No access.
    None,
    /// Minimal access (group-level only).
    MinimalAccess,
    /// Guest.
    Guest,
    /// Reporter.
    Reporter,
    /// Developer.
    Developer,
    /// Maintainer.
    Maintainer,
    /// Owner.
    Owner,
    /// Instance administrator.
    Admin,
}

impl AccessLevel {
    /// Maps a wire value to a known level.
    pub(crate) fn from_value(value: u32) -> Option<Self> {
        match value {
            0 => Some(AccessLevel::None),
            5 => Some(AccessLevel::MinimalAccess),
            10 => Some(AccessLevel::Guest),
            20 => Some(AccessLevel::Reporter),
            30 => Some(AccessLevel::Developer),
            40 => Some(AccessLevel::Maintainer),
            50 => Some(AccessLevel::Owner),
            60 => Some(AccessLevel::Admin),
            _ => None,
        }
    }

    /// Returns the integer value GitLab uses for this level.
    pub fn value(&self) -> u32 {
        match self {
            AccessLevel::None => 0,
            AccessLevel::MinimalAccess => 5,
            AccessLevel::Guest => 10,
            AccessLevel::Reporter => 20,
            AccessLevel::Developer => 30,
            AccessLevel::Maintainer => 40,
            AccessLevel::Owner => 50,
            AccessLevel::Admin => 60,
        }
    }
}

impl TryFrom<u32> for AccessLevel {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_value(value)
            .ok_or_else(|| Error::invalid_argument(format!("unknown access level: {}", value)))
    }
}

impl<'de> Deserialize<'de> for AccessLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u32::deserialize(deserializer)?;
        Self::from_value(value)
            .ok_or_else(|| D::Error::custom(format_args!("unknown access level: {}", value)))
    }
}

/// Decodes an optional access level, mapping levels this crate does not
/// know (roles added by newer GitLab releases) to `None`.
pub(crate) fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<AccessLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<u32>::deserialize(deserializer)?;
    Ok(value.and_then(AccessLevel::from_value))
}

impl From<AccessLevel> for u32 {
    fn from(level: AccessLevel) -> Self {
        level.value()
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessLevel::None => write!(f, "none"),
            AccessLevel::MinimalAccess => write!(f, "minimal_access"),
            AccessLevel::Guest => write!(f, "guest"),
            AccessLevel::Reporter => write!(f, "reporter"),
            AccessLevel::Developer => write!(f, "developer"),
            AccessLevel::Maintainer => write!(f, "maintainer"),
            AccessLevel::Owner => write!(f, "owner"),
            AccessLevel::Admin => write!(f, "admin"),
        }
    }
}
