//! Tag listing.

use crate::Result;
use crate::client::Client;
use crate::pager::{MAX_ITEMS_PER_PAGE, Pager};
use crate::types::{ProjectRef, SortOrder, Tag, TagOrderBy};

use super::tags_path;

/// Request to list the tags of a project.
///
/// Awaiting the request loads every page; [`pager`](Self::pager) returns
/// a lazy [`Pager`] instead.
pub struct ListTagsRequest {
    client: Client,
    project: ProjectRef,
    order_by: Option<TagOrderBy>,
    sort: Option<SortOrder>,
    search: Option<String>,
}

impl ListTagsRequest {
    pub(crate) fn new(client: Client, project: ProjectRef) -> Self {
        Self {
            client,
            project,
            order_by: None,
            sort: None,
            search: None,
        }
    }

    /// Sets the ordering field.
    #[must_use]
    pub fn order_by(mut self, order_by: TagOrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }

    /// Sets the sort order.
    #[must_use]
    pub fn sort(mut self, order: SortOrder) -> Self {
        self.sort = Some(order);
        self
    }

    /// Filters tags by name.
    ///
    /// `^term` matches names starting with `term`, `term$` names ending
    /// with it; anything else is a substring match.
    #[must_use]
    pub fn search(mut self, pattern: impl Into<String>) -> Self {
        self.search = Some(pattern.into());
        self
    }

    /// Turns the request into a [`Pager`], fetching the first page.
    pub async fn pager(self, per_page: u32) -> Result<Pager<Tag>> {
        let path = tags_path(&self.project);
        let query = self.query();
        Pager::new(self.client, path, query, per_page).await
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(order_by) = self.order_by {
            query.push(("order_by", order_by.as_str().to_string()));
        }
        if let Some(sort) = self.sort {
            query.push(("sort", sort.as_str().to_string()));
        }
        if let Some(ref search) = self.search {
            query.push(("search", search.clone()));
        }
        query
    }

    async fn execute(self) -> Result<Vec<Tag>> {
        self.pager(MAX_ITEMS_PER_PAGE).await?.all().await
    }
}

impl std::future::IntoFuture for ListTagsRequest {
    type Output = Result<Vec<Tag>>;
    type IntoFuture = std::pin::Pin<Box<dyn std::future::Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.execute())
    }
}
