//! Project identifiers and project metadata.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies the project an operation is scoped to.
///
/// GitLab accepts either the numeric project ID or the full
/// `namespace/project` path. Paths are percent-encoded into a single URL
/// segment (`group/sub/project` becomes `group%2Fsub%2Fproject`).
///
/// ```rust
/// use gitlab_tags::ProjectRef;
///
/// assert_eq!(ProjectRef::from(42u64).to_path_segment(), "42");
/// assert_eq!(
///     ProjectRef::from("group/project").to_path_segment(),
///     "group%2Fproject"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProjectRef {
    /// Numeric project ID.
    Id(u64),
    /// Full path including the namespace.
    Path(String),
}

impl ProjectRef {
    /// Returns the identifier encoded as one URL path segment.
    pub fn to_path_segment(&self) -> Cow<'_, str> {
        match self {
            ProjectRef::Id(id) => Cow::Owned(id.to_string()),
            ProjectRef::Path(path) => encode_segment(path),
        }
    }
}

impl fmt::Display for ProjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectRef::Id(id) => write!(f, "{}", id),
            ProjectRef::Path(path) => write!(f, "{}", path),
        }
    }
}

impl From<u64> for ProjectRef {
    fn from(id: u64) -> Self {
        ProjectRef::Id(id)
    }
}

impl From<u32> for ProjectRef {
    fn from(id: u32) -> Self {
        ProjectRef::Id(u64::from(id))
    }
}

impl From<i32> for ProjectRef {
    fn from(id: i32) -> Self {
        match u64::try_from(id) {
            Ok(id) => ProjectRef::Id(id),
            Err(_) => ProjectRef::Path(id.to_string()),
        }
    }
}

impl From<&str> for ProjectRef {
    fn from(path: &str) -> Self {
        ProjectRef::Path(path.to_string())
    }
}

impl From<String> for ProjectRef {
    fn from(path: String) -> Self {
        ProjectRef::Path(path)
    }
}

impl From<&ProjectRef> for ProjectRef {
    fn from(project: &ProjectRef) -> Self {
        project.clone()
    }
}

impl From<&Project> for ProjectRef {
    fn from(project: &Project) -> Self {
        ProjectRef::Id(project.id)
    }
}

impl From<Project> for ProjectRef {
    fn from(project: Project) -> Self {
        ProjectRef::Id(project.id)
    }
}

/// A GitLab project, as returned by `GET /projects/:id`.
///
/// Only the fields the tags client needs are mapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Numeric project ID.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// URL slug of the project.
    pub path: String,
    /// Full path, e.g. `group/project`.
    pub path_with_namespace: String,
    /// Default branch; `None` for empty repositories.
    #[serde(default)]
    pub default_branch: Option<String>,
    /// Web URL of the project page.
    #[serde(default)]
    pub web_url: Option<String>,
}

/// Percent-encodes a value so it occupies exactly one URL path segment.
///
/// Tag names and project paths may contain `/`, which must not be read as a
/// path separator by the server.
pub(crate) fn encode_segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}
