//! HTTP client for the blog REST API
//!
//! [`ApiClient`] is the single choke point for the wire: every endpoint goes
//! through [`ApiClient::request`], which sets the JSON content type, maps
//! transport failures and non-2xx statuses to [`Error::Fetch`], and parses
//! the body as JSON.

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use url::Url;

use postdeck_core::prelude::*;
use postdeck_core::types::PostId;

/// Client for the blog REST API
///
/// Cheap to clone; the underlying `reqwest::Client` shares its connection
/// pool across clones.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the API at `base_url`
    ///
    /// A trailing slash on the base is optional; one is appended so that
    /// relative endpoint paths join underneath it.
    ///
    /// # Errors
    ///
    /// [`Error::Url`] if `base_url` cannot be parsed as an absolute URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url =
            Url::parse(&normalized).map_err(|e| Error::url(format!("{base_url}: {e}")))?;

        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    /// Base URL of the API, always with a trailing slash
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The uniform request helper: send `method path` with an optional JSON
    /// body and parse the response body as JSON.
    ///
    /// # Errors
    ///
    /// - [`Error::Fetch`] on transport failure or any non-2xx status.
    /// - [`Error::DataFormat`] if the response body is not valid JSON.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<serde_json::Value> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| Error::url(format!("{path}: {e}")))?;

        let mut req = self
            .http
            .request(method.clone(), url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req
            .send()
            .await
            .map_err(|e| Error::fetch(format!("{method} {path}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} {} returned HTTP {}", method, path, status);
            return Err(Error::fetch(format!("{method} {path}: HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| Error::data_format(format!("{method} {path}: {e}")))
    }

    /// Derive the image URL for a post
    ///
    /// The API does not return usable image URLs; clients address images by
    /// a fixed path pattern keyed by post id.
    pub fn image_url(&self, id: PostId) -> String {
        format!("{}posts/images/{id}", self.base_url)
    }
}
