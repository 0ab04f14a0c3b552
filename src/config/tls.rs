//! TLS configuration for connections to self-hosted instances.

use std::path::PathBuf;

/// Configuration for TLS connections.
///
/// By default the client uses the system root certificates and validates
/// the server certificate. Self-hosted GitLab instances often sit behind a
/// private CA; add it here.
///
/// ## Example: Custom CA
///
/// ```rust
/// use gitlab_tags::TlsConfig;
///
/// let config = TlsConfig::builder()
///     .ca_cert_file("/etc/ssl/gitlab-ca.crt")
///     .build();
/// assert!(config.has_custom_ca());
/// ```
#[derive(Debug, Clone, Default, bon::Builder)]
pub struct TlsConfig {
    /// Custom CA certificate file path.
    #[builder(into)]
    pub ca_cert_file: Option<PathBuf>,

    /// Custom CA certificate PEM data.
    #[builder(into)]
    pub ca_cert_pem: Option<String>,

    /// Whether to skip certificate verification.
    ///
    /// **WARNING**: This is insecure and should only be used for local test instances.
    #[builder(default = false)]
    pub skip_verification: bool,
}

impl TlsConfig {
    /// Creates an insecure TLS config that skips verification.
    ///
    /// **WARNING**: Only use this against disposable test instances with
    /// self-signed certificates.
    pub fn insecure() -> Self {
        Self::builder().skip_verification(true).build()
    }

    /// Returns `true` if a custom CA is configured.
    pub fn has_custom_ca(&self) -> bool {
        self.ca_cert_file.is_some() || self.ca_cert_pem.is_some()
    }
}
