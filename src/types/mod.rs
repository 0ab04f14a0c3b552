//! Data types exchanged with the GitLab API.
//!
//! - [`Tag`], [`Commit`], [`Release`]: repository tags and their release notes
//! - [`ProtectedTag`], [`AccessLevel`]: protected-tag rules
//! - [`ProjectRef`], [`Project`]: the project every operation is scoped to

mod access_level;
mod project;
mod protected_tag;
mod tag;

pub use access_level::AccessLevel;
pub use project::{Project, ProjectRef};
pub use protected_tag::{ProtectedTag, ProtectedTagAccessLevel};
pub use tag::{Commit, CreateTagRequest, Release, SortOrder, Tag, TagOrderBy};

pub(crate) use project::encode_segment;
pub(crate) use protected_tag::ProtectTagRequest;
pub(crate) use tag::ReleaseRequest;
