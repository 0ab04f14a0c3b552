//! Protected-tag rules.

use serde::{Deserialize, Serialize};

use super::AccessLevel;
use super::access_level::deserialize_lenient;

/// A protected-tag rule.
///
/// The name may be an exact tag name or a wildcard pattern such as
/// `release-*`. A rule can exist whether or not a matching tag exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectedTag {
    /// Tag name or wildcard pattern.
    pub name: String,
    /// Roles (or users/groups) allowed to create matching tags.
    #[serde(default)]
    pub create_access_levels: Vec<ProtectedTagAccessLevel>,
}

impl ProtectedTag {
    /// Returns the lowest role-based access level allowed to create tags,
    /// if the rule has any role entries.
    pub fn min_create_access_level(&self) -> Option<AccessLevel> {
        self.create_access_levels
            .iter()
            .filter_map(|entry| entry.access_level)
            .min()
    }
}

/// One entry of a protected-tag rule's create permissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectedTagAccessLevel {
    /// Entry ID.
    #[serde(default)]
    pub id: Option<u64>,
    /// Role allowed by this entry; `None` for user/group entries and for
    /// roles newer than this crate.
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub access_level: Option<AccessLevel>,
    /// Human readable description, e.g. `"Maintainers"`.
    #[serde(default)]
    pub access_level_description: Option<String>,
    /// User allowed by this entry (Premium instances).
    #[serde(default)]
    pub user_id: Option<u64>,
    /// Group allowed by this entry (Premium instances).
    #[serde(default)]
    pub group_id: Option<u64>,
}

/// Body of the protect call.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ProtectTagRequest<'a> {
    pub name: &'a str,
    pub create_access_level: AccessLevel,
}
