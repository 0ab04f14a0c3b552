//! Prelude module for convenient imports.
//!
//! ```rust
//! use gitlab_tags::prelude::*;
//! ```
//!
//! This provides access to:
//! - Client types
//! - Error types and [`OptionalExt`]
//! - Tag, release and protected-tag types

pub use crate::{
    client::{Client, ClientBuilder},
    config::{EnvConfig, TlsConfig},
    error::{Error, ErrorKind, OptionalExt, Result},
    pager::Pager,
    projects::ProjectsClient,
    tags::{ListTagsRequest, TagsClient},
    types::{
        AccessLevel, Commit, CreateTagRequest, Project, ProjectRef, ProtectedTag, Release,
        SortOrder, Tag, TagOrderBy,
    },
};
