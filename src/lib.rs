//! # gitlab-tags
//!
//! Async Rust client for the tag API of GitLab: repository tags, the
//! release notes attached to them, and protected-tag rules.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gitlab_tags::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), gitlab_tags::Error> {
//!     let client = Client::builder()
//!         .url("https://gitlab.example.com")
//!         .private_token("glpat-...")
//!         .build()?;
//!
//!     let tags = client.tags();
//!     let tag = tags.create("group/project", "v1.0.0", "main").await?;
//!     tags.create_release("group/project", &tag.name, "First release").await?;
//!
//!     let pager = tags.pager("group/project", 20).await?;
//!     println!("{:?} tags", pager.total_items());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Key Concepts
//!
//! - **Client Hierarchy**: `Client` → `TagsClient` / `ProjectsClient`
//! - **Project Scope**: every tag operation takes a [`ProjectRef`], either a
//!   numeric ID or a `namespace/project` path
//! - **Absence**: `get()` fails with [`ErrorKind::NotFound`];
//!   `get_optional()` returns `Ok(None)` for that case only
//! - **Pagination**: [`Pager`] reads totals from the first page and streams
//!   items lazily
//!
//! ## Features
//!
//! - `rustls` (default): Use rustls for TLS
//! - `native-tls`: Use native TLS (OpenSSL on Linux, Secure Transport on macOS)
//! - `integration-tests`: Build the tests that run against a live instance

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod client;
pub mod config;
pub mod error;
pub mod pager;
pub mod projects;
pub mod tags;
pub mod types;

mod user_agent;

// Prelude for convenient imports
pub mod prelude;

// Re-export main types at crate root for convenience
pub use client::{Client, ClientBuilder};
pub use config::{EnvConfig, TlsConfig};
pub use error::{Error, ErrorKind, OptionalExt, Result};
pub use pager::Pager;
pub use projects::ProjectsClient;
pub use tags::{ListTagsRequest, TagsClient};
pub use types::{
    AccessLevel, Commit, CreateTagRequest, Project, ProjectRef, ProtectedTag,
    ProtectedTagAccessLevel, Release, SortOrder, Tag, TagOrderBy,
};
