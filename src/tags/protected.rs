//! Protected-tag rules.
//!
//! A rule is keyed by a tag name or wildcard (`v*`) and exists
//! independently of any tag it matches.

use crate::Result;
use crate::error::OptionalExt;
use crate::pager::{MAX_ITEMS_PER_PAGE, Pager};
use crate::types::{AccessLevel, ProjectRef, ProtectTagRequest, ProtectedTag, encode_segment};

use super::TagsClient;

impl TagsClient {
    /// Protects tags matching `name`, allowing creation only at
    /// `create_access_level` or above.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Conflict`](crate::ErrorKind::Conflict) if a rule
    /// for `name` already exists.
    pub async fn protect(
        &self,
        project: impl Into<ProjectRef>,
        name: &str,
        create_access_level: AccessLevel,
    ) -> Result<ProtectedTag> {
        let path = protected_tags_path(&project.into());
        let request = ProtectTagRequest {
            name,
            create_access_level,
        };
        self.client.inner().post(&path, &request).await
    }

    /// Removes the protection rule for `name`.
    ///
    /// Tags matching the rule are not deleted.
    pub async fn unprotect(&self, project: impl Into<ProjectRef>, name: &str) -> Result<()> {
        let path = protected_tag_path(&project.into(), name);
        self.client.inner().delete(&path).await
    }

    /// Gets the protection rule for `name`.
    pub async fn protected_tag(
        &self,
        project: impl Into<ProjectRef>,
        name: &str,
    ) -> Result<ProtectedTag> {
        let path = protected_tag_path(&project.into(), name);
        self.client.inner().get(&path, &[]).await
    }

    /// Gets the protection rule for `name`, returning `None` if there is none.
    pub async fn get_optional_protected_tag(
        &self,
        project: impl Into<ProjectRef>,
        name: &str,
    ) -> Result<Option<ProtectedTag>> {
        self.protected_tag(project, name).await.optional()
    }

    /// Lists every protection rule of a project.
    pub async fn protected_tags(&self, project: impl Into<ProjectRef>) -> Result<Vec<ProtectedTag>> {
        self.protected_tags_pager(project, MAX_ITEMS_PER_PAGE)
            .await?
            .all()
            .await
    }

    /// Returns a [`Pager`] over the protection rules of a project.
    pub async fn protected_tags_pager(
        &self,
        project: impl Into<ProjectRef>,
        per_page: u32,
    ) -> Result<Pager<ProtectedTag>> {
        let path = protected_tags_path(&project.into());
        Pager::new(self.client.clone(), path, Vec::new(), per_page).await
    }
}

fn protected_tags_path(project: &ProjectRef) -> String {
    format!("projects/{}/protected_tags", project.to_path_segment())
}

fn protected_tag_path(project: &ProjectRef, name: &str) -> String {
    format!("{}/{}", protected_tags_path(project), encode_segment(name))
}
