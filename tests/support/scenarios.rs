//! Tag scenarios, run against both the in-process fake and a live GitLab.
//!
//! Checks use `ensure!` so a failed scenario still returns to its caller,
//! which tears the project down before reporting.

use anyhow::{Result, ensure};
use futures::TryStreamExt;
use gitlab_tags::AccessLevel;

use super::{
    TEST_PROTECTED_TAG, TEST_REF, TEST_TAG_NAME_0, TEST_TAG_NAME_1, TEST_TAG_WITH_SLASH,
    TagsTestContext,
};

/// Create, get, delete, then confirm the tag is gone from both lookups.
pub async fn create_and_delete_tag(ctx: &TagsTestContext) -> Result<()> {
    let tags = ctx.tags();
    let project = ctx.project_ref();

    let tag = tags.create(&project, TEST_TAG_NAME_1, TEST_REF).await?;
    ensure!(tag.name == TEST_TAG_NAME_1, "created tag is named {:?}", tag.name);

    let tag = tags.get(&project, TEST_TAG_NAME_1).await?;
    ensure!(tag.name == TEST_TAG_NAME_1, "fetched tag is named {:?}", tag.name);

    tags.delete(&project, TEST_TAG_NAME_1).await?;
    ensure!(
        tags.get_optional(&project, TEST_TAG_NAME_1).await?.is_none(),
        "{} still exists after delete",
        TEST_TAG_NAME_1
    );

    let listed = tags.list(&project).await?;
    ensure!(
        !listed.iter().any(|t| t.name == TEST_TAG_NAME_1),
        "{} still listed after delete",
        TEST_TAG_NAME_1
    );
    Ok(())
}

/// Release notes can be attached and then replaced.
pub async fn create_and_update_release(ctx: &TagsTestContext) -> Result<()> {
    let tags = ctx.tags();
    let project = ctx.project_ref();

    let tag = tags.create(&project, TEST_TAG_NAME_1, TEST_REF).await?;
    ensure!(tag.name == TEST_TAG_NAME_1, "created tag is named {:?}", tag.name);

    tags.create_release(&project, TEST_TAG_NAME_1, "RELEASE NOTES")
        .await?;
    let tag = tags.get(&project, TEST_TAG_NAME_1).await?;
    ensure!(
        tag.release_description() == Some("RELEASE NOTES"),
        "unexpected release notes {:?}",
        tag.release_description()
    );

    tags.update_release(&project, TEST_TAG_NAME_1, "UPDATED RELEASE NOTES")
        .await?;
    let tag = tags.get(&project, TEST_TAG_NAME_1).await?;
    ensure!(tag.name == TEST_TAG_NAME_1, "fetched tag is named {:?}", tag.name);
    ensure!(
        tag.release_description() == Some("UPDATED RELEASE NOTES"),
        "unexpected release notes {:?}",
        tag.release_description()
    );

    tags.delete(&project, TEST_TAG_NAME_1).await?;
    Ok(())
}

/// The unpaginated listing contains the seeded tag.
pub async fn list_tags(ctx: &TagsTestContext) -> Result<()> {
    let listed = ctx.tags().list(ctx.project_ref()).await?;
    ensure!(!listed.is_empty(), "tag listing is empty");
    ensure!(
        listed.iter().any(|t| t.name == TEST_TAG_NAME_0),
        "{} missing from listing",
        TEST_TAG_NAME_0
    );
    Ok(())
}

/// Pager totals agree with the full listing and the stream sees every tag.
pub async fn tags_pager(ctx: &TagsTestContext) -> Result<()> {
    let tags = ctx.tags();
    let project = ctx.project_ref();

    let pager = tags.pager(&project, 100).await?;
    let total = pager.total_items().unwrap_or_default();
    ensure!(total > 0, "pager reported no tags");

    let names: Vec<String> = pager.stream().map_ok(|t| t.name).try_collect().await?;
    ensure!(
        names.iter().any(|name| name == TEST_TAG_NAME_0),
        "{} missing from pager stream",
        TEST_TAG_NAME_0
    );

    let listed = tags.list(&project).await?;
    ensure!(
        total == listed.len() as u64,
        "pager total {} but listing has {}",
        total,
        listed.len()
    );
    ensure!(
        names.len() == listed.len(),
        "stream yielded {} tags but listing has {}",
        names.len(),
        listed.len()
    );
    Ok(())
}

/// A name containing `/` round-trips through create and get.
pub async fn tag_with_slash(ctx: &TagsTestContext) -> Result<()> {
    let tags = ctx.tags();
    let project = ctx.project_ref();

    let tag = tags.create(&project, TEST_TAG_WITH_SLASH, TEST_REF).await?;
    ensure!(tag.name == TEST_TAG_WITH_SLASH, "created tag is named {:?}", tag.name);

    let tag = tags.get(&project, TEST_TAG_WITH_SLASH).await?;
    ensure!(tag.name == TEST_TAG_WITH_SLASH, "fetched tag is named {:?}", tag.name);
    Ok(())
}

/// Protect, observe, unprotect, observe again.
pub async fn protected_tags(ctx: &TagsTestContext) -> Result<()> {
    let tags = ctx.tags();
    let project = ctx.project_ref();

    let tag = tags.create(&project, TEST_PROTECTED_TAG, TEST_REF).await?;
    ensure!(tag.name == TEST_PROTECTED_TAG, "created tag is named {:?}", tag.name);

    let rule = tags
        .protect(&project, TEST_PROTECTED_TAG, AccessLevel::Developer)
        .await?;
    ensure!(rule.name == TEST_PROTECTED_TAG, "created rule is named {:?}", rule.name);

    let rules = tags.protected_tags(&project).await?;
    ensure!(
        rules.iter().any(|r| r.name == TEST_PROTECTED_TAG),
        "rule {} missing from listing",
        TEST_PROTECTED_TAG
    );

    let rule = tags
        .get_optional_protected_tag(&project, TEST_PROTECTED_TAG)
        .await?
        .map(|r| r.name);
    ensure!(
        rule.as_deref() == Some(TEST_PROTECTED_TAG),
        "fetched rule is {:?}",
        rule
    );

    tags.unprotect(&project, TEST_PROTECTED_TAG).await?;

    let rules = tags.protected_tags(&project).await?;
    ensure!(
        !rules.iter().any(|r| r.name == TEST_PROTECTED_TAG),
        "rule {} still listed after unprotect",
        TEST_PROTECTED_TAG
    );
    ensure!(
        tags.get_optional_protected_tag(&project, TEST_PROTECTED_TAG)
            .await?
            .is_none(),
        "rule {} still exists after unprotect",
        TEST_PROTECTED_TAG
    );
    Ok(())
}
