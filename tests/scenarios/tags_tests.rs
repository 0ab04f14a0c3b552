//! Tag operations end to end.

use futures::TryStreamExt;
use gitlab_tags::{AccessLevel, Client, ErrorKind, ProjectRef};
use wiremock::MockServer;

use crate::fake_gitlab::{FakeGitLab, PRIVATE_TOKEN, PROJECT_ID, PROJECT_PATH};
use crate::support::{
    TEST_PROTECTED_TAG, TEST_REF, TEST_TAG_NAME_0, TEST_TAG_NAME_1, TEST_TAG_WITH_SLASH,
    TagsTestContext, init_tracing, scenarios,
};

fn client_for(server: &MockServer, token: &str) -> Client {
    Client::builder()
        .url(server.uri())
        .private_token(token)
        .insecure()
        .build()
        .expect("client should build")
}

async fn fake_context() -> (MockServer, FakeGitLab, TagsTestContext) {
    init_tracing();
    let (server, fake) = FakeGitLab::start().await;
    let ctx = TagsTestContext::setup(client_for(&server, PRIVATE_TOKEN), PROJECT_PATH)
        .await
        .expect("setup should succeed");
    (server, fake, ctx)
}

#[tokio::test]
async fn test_setup_seeds_tag_and_teardown_cleans_up() {
    let (_server, fake, ctx) = fake_context().await;
    assert_eq!(ctx.project.id, PROJECT_ID);
    assert_eq!(fake.tag_names(), vec![TEST_TAG_NAME_0]);

    ctx.tags()
        .create(ctx.project_ref(), TEST_TAG_WITH_SLASH, TEST_REF)
        .await
        .unwrap();
    ctx.tags()
        .protect(ctx.project_ref(), TEST_PROTECTED_TAG, AccessLevel::Developer)
        .await
        .unwrap();

    ctx.teardown().await;
    assert!(fake.tag_names().is_empty());
    assert!(fake.protected_names().is_empty());
}

#[tokio::test]
async fn test_setup_removes_leftovers() {
    init_tracing();
    let (server, fake) = FakeGitLab::start().await;
    fake.seed_tags([TEST_TAG_NAME_0, TEST_TAG_NAME_1, "unrelated"]);

    let ctx = TagsTestContext::setup(client_for(&server, PRIVATE_TOKEN), PROJECT_ID)
        .await
        .unwrap();
    assert_eq!(fake.tag_names(), vec![TEST_TAG_NAME_0, "unrelated"]);
    ctx.teardown().await;
}

#[tokio::test]
async fn test_create_and_delete_tag() {
    let (_server, _fake, ctx) = fake_context().await;
    let result = scenarios::create_and_delete_tag(&ctx).await;
    ctx.teardown().await;
    result.unwrap();
}

#[tokio::test]
async fn test_create_and_update_release() {
    let (_server, _fake, ctx) = fake_context().await;
    let result = scenarios::create_and_update_release(&ctx).await;
    ctx.teardown().await;
    result.unwrap();
}

#[tokio::test]
async fn test_list_tags() {
    let (_server, _fake, ctx) = fake_context().await;
    let result = scenarios::list_tags(&ctx).await;
    ctx.teardown().await;
    result.unwrap();
}

#[tokio::test]
async fn test_tags_pager() {
    let (_server, _fake, ctx) = fake_context().await;
    let result = scenarios::tags_pager(&ctx).await;
    ctx.teardown().await;
    result.unwrap();
}

#[tokio::test]
async fn test_tag_with_slash() {
    let (_server, _fake, ctx) = fake_context().await;
    let result = scenarios::tag_with_slash(&ctx).await;
    ctx.teardown().await;
    result.unwrap();
}

#[tokio::test]
async fn test_protected_tags() {
    let (_server, _fake, ctx) = fake_context().await;
    let result = scenarios::protected_tags(&ctx).await;
    ctx.teardown().await;
    result.unwrap();
}

#[tokio::test]
async fn test_pager_across_pages() {
    let (_server, fake, ctx) = fake_context().await;
    fake.seed_tags((1..=24).map(|i| format!("bulk-{:02}", i)));

    let mut pager = ctx.tags().pager(ctx.project_ref(), 10).await.unwrap();
    assert_eq!(pager.total_items(), Some(25));
    assert_eq!(pager.total_pages(), Some(3));
    assert_eq!(pager.items_per_page(), 10);

    let mut pages = vec![pager.current().len()];
    while let Some(page) = pager.next_page().await.unwrap() {
        pages.push(page.len());
    }
    assert_eq!(pages, vec![10, 10, 5]);

    // Streaming restarts at page 1 regardless of the cursor
    let names: Vec<String> = pager
        .stream()
        .map_ok(|t| t.name)
        .try_collect()
        .await
        .unwrap();
    assert_eq!(names, fake.tag_names());

    let listed = ctx.tags().list(ctx.project_ref()).await.unwrap();
    assert_eq!(listed.len(), 25);

    ctx.teardown().await;
}

#[tokio::test]
async fn test_search_filters_listing() {
    let (_server, fake, ctx) = fake_context().await;
    fake.seed_tags(["v1.0.0", "v1.1.0", "nightly"]);

    let found = ctx
        .tags()
        .list(ctx.project_ref())
        .search("^v1")
        .await
        .unwrap();
    let names: Vec<_> = found.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["v1.0.0", "v1.1.0"]);

    ctx.teardown().await;
}

#[tokio::test]
async fn test_delete_and_unprotect_are_independent() {
    let (_server, fake, ctx) = fake_context().await;
    let tags = ctx.tags();
    let project = ctx.project_ref();

    tags.create(&project, TEST_PROTECTED_TAG, TEST_REF)
        .await
        .unwrap();
    tags.protect(&project, TEST_PROTECTED_TAG, AccessLevel::Maintainer)
        .await
        .unwrap();
    assert!(tags.get(&project, TEST_PROTECTED_TAG).await.unwrap().protected);

    tags.delete(&project, TEST_PROTECTED_TAG).await.unwrap();
    let rule = tags
        .get_optional_protected_tag(&project, TEST_PROTECTED_TAG)
        .await
        .unwrap()
        .expect("rule should outlive the tag");
    assert_eq!(rule.min_create_access_level(), Some(AccessLevel::Maintainer));

    // A rule can exist before any matching tag
    tags.create(&project, TEST_PROTECTED_TAG, TEST_REF)
        .await
        .unwrap();
    tags.unprotect(&project, TEST_PROTECTED_TAG).await.unwrap();
    assert!(!tags.get(&project, TEST_PROTECTED_TAG).await.unwrap().protected);
    assert_eq!(fake.protected_names(), Vec::<String>::new());

    ctx.teardown().await;
}

#[tokio::test]
async fn test_duplicate_operations_fail() {
    let (_server, _fake, ctx) = fake_context().await;
    let tags = ctx.tags();
    let project = ctx.project_ref();

    let err = tags
        .create(&project, TEST_TAG_NAME_0, TEST_REF)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(err.message().contains("already exists"));

    tags.create_release(&project, TEST_TAG_NAME_0, "notes")
        .await
        .unwrap();
    let err = tags
        .create_release(&project, TEST_TAG_NAME_0, "notes")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);

    tags.protect(&project, TEST_PROTECTED_TAG, AccessLevel::Developer)
        .await
        .unwrap();
    let err = tags
        .protect(&project, TEST_PROTECTED_TAG, AccessLevel::Developer)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);

    ctx.teardown().await;
}

#[tokio::test]
async fn test_optional_getters_only_hide_not_found() {
    init_tracing();
    let (server, _fake) = FakeGitLab::start().await;

    let anonymous = client_for(&server, "glpat-wrong").tags();
    let err = anonymous
        .get_optional(PROJECT_ID, TEST_TAG_NAME_0)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
    assert_eq!(err.request_id(), Some("01FAKEREQUEST"));

    let tags = client_for(&server, PRIVATE_TOKEN).tags();
    assert!(
        tags.get_optional(PROJECT_ID, "missing")
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        tags.get_optional_protected_tag(ProjectRef::from(PROJECT_PATH), "missing")
            .await
            .unwrap()
            .is_none()
    );

    let projects = client_for(&server, PRIVATE_TOKEN).projects();
    assert!(projects.get_optional(9999u64).await.unwrap().is_none());
}

#[tokio::test]
async fn test_failed_scenario_returns_error_and_tears_down() {
    let (_server, fake, ctx) = fake_context().await;
    ctx.tags()
        .create(ctx.project_ref(), TEST_TAG_NAME_1, TEST_REF)
        .await
        .unwrap();
    ctx.tags()
        .delete(ctx.project_ref(), TEST_TAG_NAME_0)
        .await
        .unwrap();

    let result = scenarios::list_tags(&ctx).await;
    ctx.teardown().await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains(TEST_TAG_NAME_0), "{}", err);
    assert!(fake.tag_names().is_empty());
}
