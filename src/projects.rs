//! Project lookup.

use crate::Result;
use crate::client::Client;
use crate::error::OptionalExt;
use crate::types::{Project, ProjectRef};

/// Client for project lookups.
///
/// Access via `client.projects()`.
#[derive(Clone)]
pub struct ProjectsClient {
    client: Client,
}

impl ProjectsClient {
    /// Creates a new projects client.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns the underlying client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Gets a project by ID or `namespace/project` path.
    pub async fn get(&self, project: impl Into<ProjectRef>) -> Result<Project> {
        let path = format!("projects/{}", project.into().to_path_segment());
        self.client.inner().get(&path, &[]).await
    }

    /// Gets a project, returning `None` if it does not exist or is not
    /// visible to the token.
    pub async fn get_optional(&self, project: impl Into<ProjectRef>) -> Result<Option<Project>> {
        self.get(project).await.optional()
    }
}

impl std::fmt::Debug for ProjectsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectsClient")
            .field("url", &self.client.url())
            .finish()
    }
}
