//! The root API client.
//!
//! [`Client`] owns the HTTP connection pool and configuration and hands out
//! cheap, cloneable sub-clients:
//! - [`TagsClient`]: tags, tag releases and protected tags
//! - [`ProjectsClient`]: project lookup
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gitlab_tags::prelude::*;
//!
//! let client = Client::builder()
//!     .url("https://gitlab.example.com")
//!     .private_token("glpat-...")
//!     .build()?;
//!
//! let tag = client.tags().create("group/project", "v1.0.0", "main").await?;
//! ```

mod builder;
pub(crate) mod inner;

pub use builder::{ClientBuilder, HasUrl, NoUrl};

use std::sync::Arc;

use crate::projects::ProjectsClient;
use crate::tags::TagsClient;

/// The GitLab API client.
///
/// This is the main entry point. Create a client using
/// [`Client::builder()`] or [`Client::from_env()`], then use
/// [`tags()`](Client::tags) for tag operations.
///
/// ## Thread Safety
///
/// `Client` is `Clone` and thread-safe. Clones share one connection pool.
#[derive(Clone)]
pub struct Client {
    inner: Arc<inner::ClientInner>,
}

impl Client {
    /// Creates a new client builder.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gitlab_tags::Client;
    ///
    /// let client = Client::builder()
    ///     .url("https://gitlab.example.com")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(client.url(), "https://gitlab.example.com");
    /// ```
    pub fn builder() -> ClientBuilder<NoUrl> {
        ClientBuilder::new()
    }

    /// Returns the tags API.
    pub fn tags(&self) -> TagsClient {
        TagsClient::new(self.clone())
    }

    /// Returns the projects API.
    pub fn projects(&self) -> ProjectsClient {
        ProjectsClient::new(self.clone())
    }

    /// Returns the instance URL the client was built with.
    pub fn url(&self) -> &str {
        &self.inner.url
    }

    /// Creates a client from the inner implementation.
    pub(crate) fn from_inner(inner: inner::ClientInner) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Returns a reference to the inner client.
    pub(crate) fn inner(&self) -> &inner::ClientInner {
        &self.inner
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("url", &self.inner.url)
            .finish_non_exhaustive()
    }
}
