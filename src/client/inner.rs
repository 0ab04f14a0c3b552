//! Internal client implementation.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use url::Url;

use crate::error::{Error, ErrorKind};

/// Header carrying the access token.
const PRIVATE_TOKEN: HeaderName = HeaderName::from_static("private-token");

/// Header GitLab uses to correlate a response with its logs.
const REQUEST_ID: &str = "x-request-id";

/// Query parameters appended to a request path.
pub(crate) type Query = [(&'static str, String)];

pub(crate) struct ClientInner {
    /// The instance base URL as configured.
    pub url: String,

    /// `<url>/api/v4/`, the base every API path is joined onto.
    pub api_base: Url,

    /// Access token sent as `PRIVATE-TOKEN`.
    pub private_token: Option<String>,

    /// Request timeout.
    pub timeout: Duration,

    /// HTTP client.
    pub http_client: reqwest::Client,
}

/// Pagination headers of a list response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct PageHeaders {
    pub total: Option<u64>,
    pub total_pages: Option<u32>,
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    /// `Some(None)` when the header is present but empty (last page).
    pub next_page: Option<Option<u32>>,
}

impl PageHeaders {
    fn from_headers(headers: &HeaderMap) -> Self {
        fn parse<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.trim().parse().ok())
        }

        let next_page = headers.get("x-next-page").map(|v| {
            v.to_str()
                .ok()
                .and_then(|s| s.trim().parse::<u32>().ok())
        });

        Self {
            total: parse(headers, "x-total"),
            total_pages: parse(headers, "x-total-pages"),
            per_page: parse(headers, "x-per-page"),
            page: parse(headers, "x-page"),
            next_page,
        }
    }
}

impl ClientInner {
    /// Derives the API base URL from the instance URL.
    ///
    /// A path prefix on the instance URL (`https://host/gitlab`) is kept.
    pub(crate) fn api_base_for(url: &str) -> Result<Url, Error> {
        let mut base = Url::parse(url)
            .map_err(|e| Error::configuration(format!("Invalid base URL: {}", e)).with_source(e))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.set_query(None);
        base.set_fragment(None);
        Ok(base.join("api/v4/")?)
    }

    /// Builds the URL for an API path (relative to `api/v4/`).
    fn build_url(&self, path: &str, query: &Query) -> Result<Url, Error> {
        let mut url = self
            .api_base
            .join(path.trim_start_matches('/'))
            .map_err(|e| Error::configuration(format!("Invalid URL path: {}", e)))?;

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Builds headers for API requests.
    fn build_headers(&self) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(ref token) = self.private_token {
            let mut value = HeaderValue::from_str(token)
                .map_err(|_| Error::configuration("Invalid private token format"))?;
            value.set_sensitive(true);
            headers.insert(PRIVATE_TOKEN, value);
        }

        Ok(headers)
    }

    /// Sends a request and turns non-success statuses into errors.
    async fn send<T>(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&T>,
    ) -> Result<reqwest::Response, Error>
    where
        T: Serialize + ?Sized,
    {
        let url = self.build_url(path, query)?;
        let headers = self.build_headers()?;

        tracing::debug!(method = %method, url = %url, "sending request");

        let mut request = self
            .http_client
            .request(method.clone(), url)
            .headers(headers)
            .timeout(self.timeout);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(Error::from)?;
        let status = response.status();
        tracing::debug!(method = %method, path, status = status.as_u16(), "received response");

        if status.is_success() {
            return Ok(response);
        }

        let request_id = response
            .headers()
            .get(REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response.text().await.unwrap_or_default();
        let mut err = map_status_error(status, &body);
        if let Some(request_id) = request_id {
            err = err.with_request_id(request_id);
        }

        tracing::warn!(method = %method, path, error = %err, "request failed");
        Err(err)
    }

    /// Makes a GET request.
    pub(crate) async fn get<R>(&self, path: &str, query: &Query) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let response = self.send::<()>(Method::GET, path, query, None).await?;
        decode(response).await
    }

    /// Makes a GET request for one page of a list endpoint.
    pub(crate) async fn get_page<R>(
        &self,
        path: &str,
        query: &Query,
    ) -> Result<(Vec<R>, PageHeaders), Error>
    where
        R: DeserializeOwned,
    {
        let response = self.send::<()>(Method::GET, path, query, None).await?;
        let headers = PageHeaders::from_headers(response.headers());
        let items = decode(response).await?;
        Ok((items, headers))
    }

    /// Makes a POST request with a JSON body.
    pub(crate) async fn post<T, R>(&self, path: &str, body: &T) -> Result<R, Error>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.send(Method::POST, path, &[], Some(body)).await?;
        decode(response).await
    }

    /// Makes a PUT request with a JSON body.
    pub(crate) async fn put<T, R>(&self, path: &str, body: &T) -> Result<R, Error>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.send(Method::PUT, path, &[], Some(body)).await?;
        decode(response).await
    }

    /// Makes a DELETE request; any response body is discarded.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), Error> {
        self.send::<()>(Method::DELETE, path, &[], None).await?;
        Ok(())
    }
}

/// Decodes a successful JSON response body.
async fn decode<R>(response: reqwest::Response) -> Result<R, Error>
where
    R: DeserializeOwned,
{
    let bytes = response.bytes().await.map_err(Error::from)?;
    serde_json::from_slice(&bytes).map_err(|e| {
        Error::new(
            ErrorKind::InvalidResponse,
            format!("Failed to parse response: {}", e),
        )
        .with_source(e)
    })
}

/// Maps an error response to an [`Error`], keeping GitLab's message.
pub(crate) fn map_status_error(status: StatusCode, body: &str) -> Error {
    let message = error_message(body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .map(str::to_owned)
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
    });
    Error::from_status(status.as_u16(), message)
}

/// Extracts the message from a GitLab error body.
///
/// GitLab reports errors as `{"message": ...}` or `{"error": ...}` where the
/// message is a string, a list of strings, or a map of field to messages.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => {
            let trimmed = body.trim();
            return (!trimmed.is_empty()).then(|| trimmed.to_string());
        }
    };

    let message = value.get("message").or_else(|| value.get("error"))?;
    Some(flatten_message(message))
}

fn flatten_message(value: &serde_json::Value) -> String {
    use serde_json::Value;

    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(flatten_message)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(fields) => fields
            .iter()
            .map(|(field, messages)| format!("{} {}", field, flatten_message(messages)))
            .collect::<Vec<_>>()
            .join("; "),
        other => other.to_string(),
    }
}
