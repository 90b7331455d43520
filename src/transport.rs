//! HTTP transport behind a trait seam.
//!
//! The catalog builder only needs "GET this URL and give me status, content
//! type and raw bytes". [`HttpTransport`] does that with a blocking `reqwest`
//! client configured from [`Options`]; tests swap in an in-memory transport.

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::options::Options;

/// Errors that can occur while fetching a URL.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },
    #[error("Invalid header {0}")]
    InvalidHeader(String),
    #[error("Failed to resolve URL: {0}")]
    InvalidUrl(String),
    #[error("Connection failed: {0}")]
    Connection(String),
}

/// A fetched response, fully buffered.
#[derive(Debug, Clone, Default)]
pub struct Response {
    /// URL the response was fetched from
    pub url: String,
    /// HTTP status code
    pub status: u16,
    /// Raw `Content-Type` header value
    pub content_type: Option<String>,
    /// Response body
    pub body: Vec<u8>,
}

impl Response {
    /// Build a 200 response with the given content type and body.
    #[must_use]
    pub fn ok(url: impl Into<String>, content_type: &str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            url: url.into(),
            status: 200,
            content_type: Some(content_type.to_string()),
            body: body.into(),
        }
    }

    /// Whether the status code is 2xx.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx response into [`FetchError::Status`].
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(FetchError::Status {
                url: self.url,
                status: self.status,
            })
        }
    }

    /// Whether the content type announces JSON.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"))
    }
}

/// Something that can GET a URL.
///
/// Implementations must be shareable across the description worker threads.
pub trait Transport: Send + Sync {
    /// Fetch `url`, returning the response whatever its status.
    fn get(&self, url: &Url) -> Result<Response, FetchError>;
}

/// Blocking `reqwest` transport sending the configured header set.
///
/// TLS certificates are always verified.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport from the headers and timeout in `options`.
    pub fn new(options: &Options) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &options.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| FetchError::InvalidHeader(name.clone()))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| FetchError::InvalidHeader(format!("{}: {value}", name.as_str())))?;
            headers.insert(name, value);
        }

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<Response, FetchError> {
        debug!(url = %url, "GET");
        let response = self.client.get(url.clone()).send()?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let final_url = response.url().to_string();
        let body = response.bytes()?.to_vec();

        Ok(Response {
            url: final_url,
            status,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range() {
        let mut response = Response::ok("https://example.com/", "text/html", "x");
        assert!(response.is_success());
        response.status = 204;
        assert!(response.is_success());
        response.status = 301;
        assert!(!response.is_success());
        response.status = 503;
        assert!(!response.is_success());
    }

    #[test]
    fn error_for_status_carries_url() {
        let response = Response {
            url: "https://example.com/ghdb/1".to_string(),
            status: 404,
            ..Response::default()
        };
        match response.error_for_status() {
            Err(FetchError::Status { url, status }) => {
                assert_eq!(url, "https://example.com/ghdb/1");
                assert_eq!(status, 404);
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[test]
    fn json_detection_ignores_case_and_params() {
        let response = Response::ok("u", "Application/JSON; charset=utf-8", "{}");
        assert!(response.is_json());
        let html = Response::ok("u", "text/html; charset=UTF-8", "<html>");
        assert!(!html.is_json());
        assert!(!Response::default().is_json());
    }

    #[test]
    fn http_transport_builds_with_default_headers() {
        assert!(HttpTransport::new(&Options::default()).is_ok());
    }

    #[test]
    fn http_transport_rejects_bad_header() {
        let options = Options {
            headers: vec![("Bad Header".to_string(), "x".to_string())],
            ..Options::default()
        };
        assert!(matches!(
            HttpTransport::new(&options),
            Err(FetchError::InvalidHeader(_))
        ));
    }
}
