//! Error types for the client.
//!
//! - [`Error`]: every failure, categorized by [`ErrorKind`]
//! - [`OptionalExt`]: turns a not-found failure into `Ok(None)`
//!
//! ## Absence vs Failure
//!
//! `get()` fails with [`ErrorKind::NotFound`] when the tag does not exist.
//! `get_optional()` returns `Ok(None)` for that case only; any other failure
//! (authentication, transport, server error) is still an `Err`.
//!
//! ```rust,ignore
//! // get() - absence is Err(NotFound)
//! let tag = client.tags().get(42, "v1.0.0").await?;
//!
//! // get_optional() - absence is Ok(None)
//! let tag = client.tags().get_optional(42, "v1.0.0").await?;
//! ```

mod core;
mod kind;

pub use core::Error;
pub use kind::ErrorKind;

/// A specialized `Result` type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Converts a not-found failure into an absent value.
///
/// Only [`ErrorKind::NotFound`] is recovered; every other error kind is
/// returned unchanged.
///
/// ## Example
///
/// ```rust
/// use gitlab_tags::{Error, OptionalExt};
///
/// let missing: Result<u32, Error> = Err(Error::not_found("404 Tag Not Found"));
/// assert_eq!(missing.optional().unwrap(), None);
///
/// let denied: Result<u32, Error> = Err(Error::unauthorized("401"));
/// assert!(denied.optional().is_err());
/// ```
pub trait OptionalExt<T> {
    /// Maps `Err(NotFound)` to `Ok(None)` and `Ok(v)` to `Ok(Some(v))`.
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for Result<T> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}
