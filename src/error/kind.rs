//! Error kind enumeration for categorizing client errors.

/// Categorization of client errors.
///
/// This enum provides a stable interface for matching on error types. The
/// only kind the crate itself treats specially is [`ErrorKind::NotFound`]:
/// the `*_optional` getters turn it into `Ok(None)`.
///
/// | ErrorKind         | HTTP status | Typical cause                          |
/// |-------------------|-------------|----------------------------------------|
/// | `InvalidArgument` | 400, 422    | Invalid tag name, unknown ref          |
/// | `Unauthorized`    | 401         | Missing or invalid private token       |
/// | `Forbidden`       | 403         | Token lacks the required access level  |
/// | `NotFound`        | 404         | Project, tag or rule does not exist    |
/// | `Conflict`        | 409         | Tag or protection rule already exists  |
/// | `RateLimited`     | 429         | Instance rate limit hit                |
/// | `Unavailable`     | 503         | Instance in maintenance or overloaded  |
/// | `Internal`        | other 5xx   | Server side failure                    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Authentication failed (missing, invalid or expired token).
    ///
    /// HTTP: 401 Unauthorized
    #[error("unauthorized")]
    Unauthorized,

    /// The token is valid but lacks permission for the operation.
    ///
    /// HTTP: 403 Forbidden
    #[error("forbidden")]
    Forbidden,

    /// Requested resource was not found.
    ///
    /// HTTP: 404 Not Found
    #[error("not found")]
    NotFound,

    /// Invalid request argument or payload.
    ///
    /// HTTP: 400 Bad Request, 422 Unprocessable Entity
    #[error("invalid argument")]
    InvalidArgument,

    /// Conflict with existing resource state.
    ///
    /// HTTP: 409 Conflict
    #[error("conflict")]
    Conflict,

    /// Rate limit exceeded.
    ///
    /// HTTP: 429 Too Many Requests
    #[error("rate limited")]
    RateLimited,

    /// Service temporarily unavailable.
    ///
    /// HTTP: 503 Service Unavailable
    #[error("service unavailable")]
    Unavailable,

    /// Request timed out on the client side.
    #[error("timeout")]
    Timeout,

    /// Internal server error.
    ///
    /// HTTP: 500 and any other 5xx besides 503
    #[error("internal error")]
    Internal,

    /// Connection error (DNS, TLS handshake, network unreachable).
    #[error("connection error")]
    Connection,

    /// The response body could not be decoded.
    #[error("invalid response")]
    InvalidResponse,

    /// Configuration error (invalid URL, missing environment variable).
    #[error("configuration error")]
    Configuration,

    /// Unknown or unexpected error.
    ///
    /// Used as a catch-all for unrecognized status codes.
    #[error("unknown error")]
    Unknown,
}

impl ErrorKind {
    /// Maps an HTTP status code to an error kind.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gitlab_tags::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::from_status(404), ErrorKind::NotFound);
    /// assert_eq!(ErrorKind::from_status(502), ErrorKind::Internal);
    /// ```
    pub fn from_status(status: u16) -> Self {
        match status {
            400 | 422 => ErrorKind::InvalidArgument,
            401 => ErrorKind::Unauthorized,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            409 => ErrorKind::Conflict,
            429 => ErrorKind::RateLimited,
            503 => ErrorKind::Unavailable,
            500..=599 => ErrorKind::Internal,
            _ => ErrorKind::Unknown,
        }
    }

    /// Returns `true` if the error was reported by the server for a bad
    /// request (4xx kinds).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ErrorKind::Unauthorized
                | ErrorKind::Forbidden
                | ErrorKind::NotFound
                | ErrorKind::InvalidArgument
                | ErrorKind::Conflict
                | ErrorKind::RateLimited
        )
    }

    /// Returns `true` if this kind means the resource does not exist.
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, ErrorKind::NotFound)
    }
}
