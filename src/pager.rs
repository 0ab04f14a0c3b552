//! Lazy, restartable access to paginated list endpoints.
//!
//! GitLab list endpoints are paginated with `page` / `per_page` query
//! parameters and report the pagination state in response headers. A
//! [`Pager`] fetches the first page when it is created, so the totals are
//! known without loading the whole listing.
//!
//! ```rust,ignore
//! use futures::TryStreamExt;
//!
//! let pager = client.tags().pager("group/project", 20).await?;
//! println!("{:?} tags in {:?} pages", pager.total_items(), pager.total_pages());
//!
//! // Element-wise, always starting from the first page
//! let names: Vec<String> = pager.stream().map_ok(|tag| tag.name).try_collect().await?;
//! ```

use futures::{Stream, StreamExt, TryStreamExt};
use serde::de::DeserializeOwned;

use crate::client::Client;
use crate::client::inner::PageHeaders;
use crate::{Error, Result};

/// Largest page size GitLab honors.
pub const MAX_ITEMS_PER_PAGE: u32 = 100;

/// Where the pages of one listing come from.
#[derive(Clone)]
struct PageSource {
    client: Client,
    path: String,
    query: Vec<(&'static str, String)>,
    per_page: u32,
}

/// One fetched page and the page that follows it.
struct FetchedPage<T> {
    items: Vec<T>,
    headers: PageHeaders,
    next: Option<u32>,
}

impl PageSource {
    async fn fetch<T: DeserializeOwned>(&self, page: u32) -> Result<FetchedPage<T>> {
        let mut query = self.query.clone();
        query.push(("page", page.to_string()));
        query.push(("per_page", self.per_page.to_string()));

        let (items, headers): (Vec<T>, _) =
            self.client.inner().get_page(&self.path, &query).await?;
        let next = next_page(page, items.len(), self.per_page, &headers);

        tracing::debug!(
            path = %self.path,
            page,
            items = items.len(),
            next = ?next,
            "fetched page"
        );

        Ok(FetchedPage {
            items,
            headers,
            next,
        })
    }
}

/// Decides which page follows `page`.
///
/// `X-Next-Page` wins when present. Without it, `X-Total-Pages` is used,
/// and as a last resort a full page is taken to mean more may follow.
fn next_page(page: u32, len: usize, per_page: u32, headers: &PageHeaders) -> Option<u32> {
    if let Some(next) = headers.next_page {
        return next;
    }
    if let Some(total_pages) = headers.total_pages {
        return (page < total_pages).then_some(page + 1);
    }
    let full = u32::try_from(len).is_ok_and(|len| len >= per_page);
    (len > 0 && full).then_some(page + 1)
}

/// A paginated view over a list endpoint.
///
/// - Totals ([`total_items`](Pager::total_items),
///   [`total_pages`](Pager::total_pages)) come from the first response and
///   never require loading the whole listing. They are `None` when the
///   server omits them (GitLab does so for very large collections).
/// - Page navigation ([`next_page`](Pager::next_page),
///   [`page`](Pager::page), [`first`](Pager::first)) moves a cursor.
/// - [`stream`](Pager::stream) and [`all`](Pager::all) always start from
///   page 1 and leave the cursor untouched, so a pager can be iterated any
///   number of times.
pub struct Pager<T> {
    source: PageSource,
    total_items: Option<u64>,
    total_pages: Option<u32>,
    first_items: Vec<T>,
    first_next: Option<u32>,
    current_page: u32,
    current_items: Vec<T>,
    next: Option<u32>,
}

impl<T> Pager<T>
where
    T: DeserializeOwned + Clone + Send + 'static,
{
    /// Creates a pager and fetches the first page.
    pub(crate) async fn new(
        client: Client,
        path: String,
        query: Vec<(&'static str, String)>,
        per_page: u32,
    ) -> Result<Self> {
        if per_page == 0 {
            return Err(Error::invalid_argument("items per page must be at least 1"));
        }

        let mut source = PageSource {
            client,
            path,
            query,
            per_page: per_page.min(MAX_ITEMS_PER_PAGE),
        };

        let first: FetchedPage<T> = source.fetch(1).await?;
        if let Some(per_page) = first.headers.per_page.filter(|n| *n > 0) {
            source.per_page = per_page;
        }

        Ok(Self {
            source,
            total_items: first.headers.total,
            total_pages: first.headers.total_pages,
            first_items: first.items.clone(),
            first_next: first.next,
            current_page: 1,
            current_items: first.items,
            next: first.next,
        })
    }

    /// Returns the total number of items, if the server reported it.
    pub fn total_items(&self) -> Option<u64> {
        self.total_items
    }

    /// Returns the total number of pages, if the server reported it.
    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    /// Returns the page size in effect.
    pub fn items_per_page(&self) -> u32 {
        self.source.per_page
    }

    /// Returns the 1-based number of the page under the cursor.
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Returns the items of the page under the cursor.
    pub fn current(&self) -> &[T] {
        &self.current_items
    }

    /// Returns `true` if a page follows the current one.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Advances the cursor and returns the next page, or `None` after the
    /// last page.
    pub async fn next_page(&mut self) -> Result<Option<&[T]>> {
        let Some(next) = self.next else {
            return Ok(None);
        };
        self.load(next).await?;
        Ok(Some(&self.current_items))
    }

    /// Moves the cursor to page `number` (1-based) and returns its items.
    ///
    /// Pages past the end are empty.
    pub async fn page(&mut self, number: u32) -> Result<&[T]> {
        if number == 0 {
            return Err(Error::invalid_argument("page numbers start at 1"));
        }
        if number == 1 {
            return Ok(self.first());
        }
        self.load(number).await?;
        Ok(&self.current_items)
    }

    /// Moves the cursor back to the first page without a request.
    pub fn first(&mut self) -> &[T] {
        self.current_page = 1;
        self.current_items = self.first_items.clone();
        self.next = self.first_next;
        &self.current_items
    }

    /// Loads every page into one list.
    pub async fn all(&self) -> Result<Vec<T>> {
        self.stream().try_collect().await
    }

    /// Streams every item, starting from the first page.
    ///
    /// The first page is served from cache; later pages are fetched as the
    /// stream is polled. A failed fetch yields one `Err` and ends the stream.
    pub fn stream(&self) -> impl Stream<Item = Result<T>> + Send + 'static {
        enum Cursor<T> {
            Cached(Vec<T>, Option<u32>),
            Fetch(u32),
            Done,
        }

        let source = self.source.clone();
        let start = Cursor::Cached(self.first_items.clone(), self.first_next);

        futures::stream::unfold((source, start), |(source, cursor)| async move {
            let (items, after): (Vec<Result<T>>, Option<u32>) = match cursor {
                Cursor::Done => return None,
                Cursor::Cached(items, next) => (items.into_iter().map(Ok).collect(), next),
                Cursor::Fetch(page) => match source.fetch::<T>(page).await {
                    Ok(fetched) => (fetched.items.into_iter().map(Ok).collect(), fetched.next),
                    Err(e) => (vec![Err(e)], None),
                },
            };
            let cursor = after.map_or(Cursor::Done, Cursor::Fetch);
            Some((futures::stream::iter(items), (source, cursor)))
        })
        .flatten()
    }

    async fn load(&mut self, page: u32) -> Result<()> {
        let fetched: FetchedPage<T> = self.source.fetch(page).await?;
        if fetched.headers.total.is_some() {
            self.total_items = fetched.headers.total;
        }
        if fetched.headers.total_pages.is_some() {
            self.total_pages = fetched.headers.total_pages;
        }
        self.current_page = fetched.headers.page.unwrap_or(page);
        self.current_items = fetched.items;
        self.next = fetched.next;
        Ok(())
    }
}

impl<T> std::fmt::Debug for Pager<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("path", &self.source.path)
            .field("items_per_page", &self.source.per_page)
            .field("total_items", &self.total_items)
            .field("total_pages", &self.total_pages)
            .field("current_page", &self.current_page)
            .finish_non_exhaustive()
    }
}
