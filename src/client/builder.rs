//! Client builder with typestate pattern.

use std::{marker::PhantomData, time::Duration};

use super::inner::ClientInner;
use crate::{Client, Error, config::EnvConfig, config::TlsConfig, user_agent};

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connect timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Marker type: URL not yet provided.
pub struct NoUrl;

/// Marker type: URL has been provided.
pub struct HasUrl;

/// Builder for creating [`Client`] instances.
///
/// Uses the typestate pattern so `build()` is only available once the
/// instance URL has been set.
///
/// ## Required Configuration
///
/// - `url()`: The GitLab instance base URL
///
/// ## Optional Configuration
///
/// - `private_token()`: Access token sent as `PRIVATE-TOKEN`
/// - `tls_config()`: Custom TLS settings
/// - `timeout()`: Request timeout (default 30s)
/// - `connect_timeout()`: Connect timeout (default 10s)
///
/// ## Example
///
/// ```rust,ignore
/// use gitlab_tags::Client;
/// use std::time::Duration;
///
/// let client = Client::builder()
///     .url("https://gitlab.example.com")
///     .private_token("glpat-...")
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
pub struct ClientBuilder<UrlState> {
    url: Option<String>,
    private_token: Option<String>,
    tls_config: TlsConfig,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    _url_state: PhantomData<UrlState>,
}

impl ClientBuilder<NoUrl> {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self {
            url: None,
            private_token: None,
            tls_config: TlsConfig::default(),
            timeout: None,
            connect_timeout: None,
            _url_state: PhantomData,
        }
    }

    /// Sets the GitLab instance URL.
    ///
    /// # Arguments
    ///
    /// * `url` - The instance base URL (e.g., `https://gitlab.example.com`).
    ///   The `api/v4` prefix is added by the client.
    pub fn url(self, url: impl Into<String>) -> ClientBuilder<HasUrl> {
        ClientBuilder {
            url: Some(url.into()),
            private_token: self.private_token,
            tls_config: self.tls_config,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            _url_state: PhantomData,
        }
    }
}

impl Default for ClientBuilder<NoUrl> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> ClientBuilder<U> {
    /// Sets the access token sent as the `PRIVATE-TOKEN` header.
    #[must_use]
    pub fn private_token(mut self, token: impl Into<String>) -> Self {
        self.private_token = Some(token.into());
        self
    }

    /// Sets the TLS configuration.
    #[must_use]
    pub fn tls_config(mut self, config: TlsConfig) -> Self {
        self.tls_config = config;
        self
    }

    /// Disables TLS certificate verification and allows HTTP connections.
    ///
    /// **WARNING**: This is insecure and should only be used against local
    /// test instances.
    #[must_use]
    pub fn insecure(mut self) -> Self {
        self.tls_config.skip_verification = true;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connect timeout.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }
}

impl ClientBuilder<HasUrl> {
    /// Builds the client.
    ///
    /// No request is made; the first API call opens the connection.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if:
    /// - The URL is invalid
    /// - The URL is not HTTPS and `insecure()` was not called
    /// - A custom CA certificate cannot be read or parsed
    pub fn build(self) -> Result<Client, Error> {
        let url = self
            .url
            .ok_or_else(|| Error::configuration("URL is required"))?;

        let api_base = ClientInner::api_base_for(&url)?;

        // Ensure HTTPS unless insecure mode is enabled
        if api_base.scheme() != "https" && !self.tls_config.skip_verification {
            return Err(Error::configuration(
                "HTTPS is required. Use .insecure() for development with HTTP.",
            ));
        }

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        let http_client = build_http_client(
            &self.tls_config,
            timeout,
            self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT),
        )?;

        tracing::debug!(url = %url, "created GitLab client");

        Ok(Client::from_inner(ClientInner {
            url,
            api_base,
            private_token: self.private_token,
            timeout,
            http_client,
        }))
    }
}

impl Client {
    /// Creates a client from `GITLAB_URL` and `GITLAB_PRIVATE_TOKEN`.
    ///
    /// Plain `http://` URLs are accepted here so local test instances work
    /// without extra configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `GITLAB_URL` is unset or invalid.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_config(&EnvConfig::from_env()?)
    }

    /// Creates a client from an [`EnvConfig`].
    pub fn from_config(config: &EnvConfig) -> Result<Self, Error> {
        let mut builder = Client::builder().url(config.url.clone());
        if let Some(ref token) = config.private_token {
            builder = builder.private_token(token.clone());
        }
        if config.url.starts_with("http://") {
            builder = builder.insecure();
        }
        builder.build()
    }
}

fn build_http_client(
    tls_config: &TlsConfig,
    timeout: Duration,
    connect_timeout: Duration,
) -> Result<reqwest::Client, Error> {
    let mut client_builder = reqwest::Client::builder()
        .timeout(timeout)
        .connect_timeout(connect_timeout)
        .user_agent(user_agent::user_agent());

    if tls_config.skip_verification {
        client_builder = client_builder.danger_accept_invalid_certs(true);
    }

    if let Some(ref ca_cert_file) = tls_config.ca_cert_file {
        let cert_pem = std::fs::read(ca_cert_file).map_err(|e| {
            Error::configuration(format!(
                "Failed to read certificate {:?}: {}",
                ca_cert_file, e
            ))
        })?;
        let cert = reqwest::Certificate::from_pem(&cert_pem).map_err(|e| {
            Error::configuration(format!("Invalid certificate {:?}: {}", ca_cert_file, e))
        })?;
        client_builder = client_builder.add_root_certificate(cert);
    }

    if let Some(ref ca_cert_pem) = tls_config.ca_cert_pem {
        let cert = reqwest::Certificate::from_pem(ca_cert_pem.as_bytes())
            .map_err(|e| Error::configuration(format!("Invalid CA certificate PEM: {}", e)))?;
        client_builder = client_builder.add_root_certificate(cert);
    }

    client_builder
        .build()
        .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))
}
