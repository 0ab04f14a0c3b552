//! Repository tags, tag release notes and protected tags.
//!
//! Access via [`Client::tags()`](crate::Client::tags).
//!
//! ## Example
//!
//! ```rust,ignore
//! use gitlab_tags::prelude::*;
//!
//! let tags = client.tags();
//!
//! let tag = tags.create("group/project", "v1.0.0", "main").await?;
//! tags.create_release("group/project", &tag.name, "First release").await?;
//!
//! tags.protect("group/project", "v*", AccessLevel::Maintainer).await?;
//!
//! if let Some(tag) = tags.get_optional("group/project", "v0.9.0").await? {
//!     tags.delete("group/project", &tag.name).await?;
//! }
//! ```

mod list;
mod protected;

pub use list::ListTagsRequest;

use crate::Result;
use crate::client::Client;
use crate::error::OptionalExt;
use crate::pager::Pager;
use crate::types::{CreateTagRequest, ProjectRef, Release, ReleaseRequest, Tag, encode_segment};

/// Client for tag operations.
///
/// Every operation is scoped to a project, given either as a numeric ID or
/// as a `namespace/project` path. Tag names may contain `/`; they are
/// encoded as a single path segment.
#[derive(Clone)]
pub struct TagsClient {
    client: Client,
}

impl TagsClient {
    /// Creates a new tags client.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns the underlying client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Creates a lightweight tag pointing at `git_ref`.
    ///
    /// `git_ref` may be a branch name, another tag or a commit SHA.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument)
    /// if the tag already exists or the ref cannot be resolved.
    pub async fn create(
        &self,
        project: impl Into<ProjectRef>,
        tag_name: impl Into<String>,
        git_ref: impl Into<String>,
    ) -> Result<Tag> {
        self.create_with(project, CreateTagRequest::new(tag_name, git_ref))
            .await
    }

    /// Creates a tag from a full request, including an optional annotation.
    pub async fn create_with(
        &self,
        project: impl Into<ProjectRef>,
        request: CreateTagRequest,
    ) -> Result<Tag> {
        let path = tags_path(&project.into());
        self.client.inner().post(&path, &request).await
    }

    /// Gets a tag by name.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::NotFound`](crate::ErrorKind::NotFound) if the
    /// project or the tag does not exist.
    pub async fn get(&self, project: impl Into<ProjectRef>, name: &str) -> Result<Tag> {
        let path = tag_path(&project.into(), name);
        self.client.inner().get(&path, &[]).await
    }

    /// Gets a tag by name, returning `None` if it does not exist.
    ///
    /// Errors other than not-found are returned as-is.
    pub async fn get_optional(
        &self,
        project: impl Into<ProjectRef>,
        name: &str,
    ) -> Result<Option<Tag>> {
        self.get(project, name).await.optional()
    }

    /// Lists the tags of a project.
    ///
    /// Awaiting the request loads every page:
    ///
    /// ```rust,ignore
    /// let tags = client.tags().list("group/project").await?;
    ///
    /// let releases = client
    ///     .tags()
    ///     .list("group/project")
    ///     .order_by(TagOrderBy::Version)
    ///     .search("^v")
    ///     .await?;
    /// ```
    pub fn list(&self, project: impl Into<ProjectRef>) -> ListTagsRequest {
        ListTagsRequest::new(self.client.clone(), project.into())
    }

    /// Returns a [`Pager`] over the tags of a project.
    ///
    /// The first page is fetched immediately.
    pub async fn pager(&self, project: impl Into<ProjectRef>, per_page: u32) -> Result<Pager<Tag>> {
        self.list(project).pager(per_page).await
    }

    /// Deletes a tag.
    ///
    /// Protection rules matching the tag are left in place.
    pub async fn delete(&self, project: impl Into<ProjectRef>, name: &str) -> Result<()> {
        let path = tag_path(&project.into(), name);
        self.client.inner().delete(&path).await
    }

    /// Attaches release notes to an existing tag.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Conflict`](crate::ErrorKind::Conflict) if the
    /// tag already has release notes.
    pub async fn create_release(
        &self,
        project: impl Into<ProjectRef>,
        tag_name: &str,
        description: &str,
    ) -> Result<Release> {
        let path = release_path(&project.into(), tag_name);
        self.client
            .inner()
            .post(&path, &ReleaseRequest { description })
            .await
    }

    /// Replaces the release notes of a tag.
    pub async fn update_release(
        &self,
        project: impl Into<ProjectRef>,
        tag_name: &str,
        description: &str,
    ) -> Result<Release> {
        let path = release_path(&project.into(), tag_name);
        self.client
            .inner()
            .put(&path, &ReleaseRequest { description })
            .await
    }
}

impl std::fmt::Debug for TagsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TagsClient")
            .field("url", &self.client.url())
            .finish()
    }
}

fn tags_path(project: &ProjectRef) -> String {
    format!("projects/{}/repository/tags", project.to_path_segment())
}

fn tag_path(project: &ProjectRef, name: &str) -> String {
    format!("{}/{}", tags_path(project), encode_segment(name))
}

fn release_path(project: &ProjectRef, name: &str) -> String {
    format!("{}/release", tag_path(project, name))
}
