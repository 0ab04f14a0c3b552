//! Repository tags and the release notes attached to them.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A repository tag.
///
/// Tag names are unique within a project and may contain `/`
/// (for example `env/production`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// The tag name.
    pub name: String,
    /// Annotation message; `None` for lightweight tags.
    #[serde(default)]
    pub message: Option<String>,
    /// SHA the tag object points at.
    #[serde(default)]
    pub target: Option<String>,
    /// The tagged commit.
    #[serde(default)]
    pub commit: Option<Commit>,
    /// Release notes attached to the tag, if any.
    #[serde(default)]
    pub release: Option<Release>,
    /// Whether a protected-tag rule matches this tag.
    #[serde(default)]
    pub protected: bool,
    /// When the tag was created (annotated tags only).
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Tag {
    /// Returns the release description, if release notes are attached.
    pub fn release_description(&self) -> Option<&str> {
        self.release
            .as_ref()
            .and_then(|release| release.description.as_deref())
    }
}

/// The commit a tag points to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Full SHA.
    pub id: String,
    /// Abbreviated SHA.
    #[serde(default)]
    pub short_id: Option<String>,
    /// First line of the commit message.
    #[serde(default)]
    pub title: Option<String>,
    /// Full commit message.
    #[serde(default)]
    pub message: Option<String>,
    /// Author name.
    #[serde(default)]
    pub author_name: Option<String>,
    /// Author email.
    #[serde(default)]
    pub author_email: Option<String>,
    /// Authoring time.
    #[serde(default)]
    pub authored_date: Option<DateTime<Utc>>,
    /// Committer name.
    #[serde(default)]
    pub committer_name: Option<String>,
    /// Committer email.
    #[serde(default)]
    pub committer_email: Option<String>,
    /// Commit time.
    #[serde(default)]
    pub committed_date: Option<DateTime<Utc>>,
    /// Creation time as reported by GitLab.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Parent SHAs.
    #[serde(default)]
    pub parent_ids: Vec<String>,
    /// Web URL of the commit page.
    #[serde(default)]
    pub web_url: Option<String>,
}

/// Release notes attached to a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// The tag the release belongs to.
    #[serde(default)]
    pub tag_name: Option<String>,
    /// Free-text release notes (Markdown).
    #[serde(default)]
    pub description: Option<String>,
}

/// Request to create a tag.
///
/// ## Example
///
/// ```rust
/// use gitlab_tags::CreateTagRequest;
///
/// let request = CreateTagRequest::new("v1.2.0", "main").with_message("Release 1.2.0");
/// assert_eq!(request.tag_name, "v1.2.0");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTagRequest {
    /// Name of the new tag.
    pub tag_name: String,
    /// Branch, tag or commit SHA to tag.
    #[serde(rename = "ref")]
    pub git_ref: String,
    /// Annotation message; creates an annotated tag when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CreateTagRequest {
    /// Creates a request for a lightweight tag.
    pub fn new(tag_name: impl Into<String>, git_ref: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            git_ref: git_ref.into(),
            message: None,
        }
    }

    /// Sets the annotation message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Body of the create/update release calls.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ReleaseRequest<'a> {
    pub description: &'a str,
}

/// Ordering field for tag listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagOrderBy {
    /// Alphabetical by name.
    Name,
    /// By last update of the tagged commit (server default).
    #[default]
    Updated,
    /// By semantic version.
    Version,
}

impl TagOrderBy {
    /// Returns the string representation for API queries.
    pub fn as_str(&self) -> &'static str {
        match self {
            TagOrderBy::Name => "name",
            TagOrderBy::Updated => "updated",
            TagOrderBy::Version => "version",
        }
    }
}

impl fmt::Display for TagOrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort order for list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Ascending order.
    Ascending,
    /// Descending order (server default).
    #[default]
    Descending,
}

impl SortOrder {
    /// Returns the string representation for API queries.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}
