//! Live test setup.

use anyhow::{Context, Result};
use gitlab_tags::{Client, EnvConfig};

use crate::support::{TagsTestContext, init_tracing};

/// Builds a context for the configured project, or `None` when the
/// environment does not name one.
pub async fn live_context() -> Result<Option<TagsTestContext>> {
    init_tracing();

    let Ok(config) = EnvConfig::from_env() else {
        println!("GITLAB_URL is not set; skipping live test");
        return Ok(None);
    };
    let Some(project) = config.test_project_path() else {
        println!("GITLAB_TEST_NAMESPACE/GITLAB_TEST_PROJECT not set; skipping live test");
        return Ok(None);
    };

    let client = Client::from_config(&config).context("failed to build client")?;
    let ctx = TagsTestContext::setup(client, project).await?;
    Ok(Some(ctx))
}
