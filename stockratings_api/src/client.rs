//! HTTP client for the stock ratings API.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{config::Config, query::Query, types::Rating, Error, RatingsQuery};

/// Route of the ratings collection.
pub const RATINGS_PATH: &str = "/v1/stock_ratings";

/// Per-request customisation for [`Client::request`].
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    /// HTTP method. Defaults to GET.
    pub method: Method,
    /// Extra headers, applied over the default `Content-Type`.
    pub headers: HeaderMap,
    /// Raw request body.
    pub body: Option<String>,
    /// Pre-encoded query string, without the leading `?`.
    pub query: Option<String>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_query(mut self, query: &str) -> Self {
        self.query = Some(query.to_string());
        self
    }
}

/// HTTP client for the stock ratings API.
///
/// Every call is a single attempt: no retries and no timeout. The base URL
/// comes from [`Config`] and never changes for the life of the client.
pub struct Client {
    config: Config,
    http: reqwest::Client,
}

impl Client {
    pub fn new(config: Config) -> Result<Self, Error> {
        let http = reqwest::Client::builder().build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::Transport(e)
        })?;
        Ok(Self { config, http })
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(Config::new(base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn get_url(&self, path: &str, query: Option<&str>) -> Result<Url, Error> {
        let mut url = Url::parse(format!("{}{}", &self.config.base_url, path).as_str())
            .map_err(|e| {
                tracing::error!("Invalid URL constructed: {}", e);
                Error::InvalidUrl(e)
            })?;
        if let Some(query) = query {
            url.set_query(Some(query));
        }
        Ok(url)
    }

    /// Performs one request and decodes the JSON body as `T`.
    ///
    /// A non-2xx status fails with [`Error::HttpStatus`] before the body is
    /// touched. `T` is checked only as far as serde checks it.
    pub async fn request<T>(&self, path: &str, options: RequestOptions) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(path, options.query.as_deref())?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(options.headers);

        tracing::debug!("{} {}", options.method, url);
        let mut builder = self.http.request(options.method, url).headers(headers);
        if let Some(body) = options.body {
            builder = builder.body(body);
        }

        let resp = builder.send().await.map_err(|e| {
            tracing::error!("Failed to get resource: {}", e);
            Error::Transport(e)
        })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::error!("Request failed with status {}", status);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!(
                "Failed to parse resource: {} | body: {}",
                e,
                truncate_body(&body)
            );
            Error::Decode(e)
        })
    }

    /// Fetches the ratings page matching the given selection state.
    pub async fn get_ratings(&self, query: &RatingsQuery) -> Result<Vec<Rating>, Error> {
        self.request::<Vec<Rating>>(
            RATINGS_PATH,
            RequestOptions::get().with_query(&query.to_query_string()),
        )
        .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_url_joins_base_and_path() {
        let client = Client::with_base_url("http://localhost:8080").unwrap();
        let url = client
            .get_url(RATINGS_PATH, Some("sort_order=desc&limit=10"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/v1/stock_ratings?sort_order=desc&limit=10"
        );
    }

    #[test]
    fn get_url_rejects_relative_base() {
        let client = Client::with_base_url("not a url").unwrap();
        let err = client.get_url(RATINGS_PATH, None).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn request_options_default_to_get() {
        let options = RequestOptions::get();
        assert_eq!(options.method, Method::GET);
        assert!(options.headers.is_empty());
        assert!(options.body.is_none());
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("...[truncated]"));
        assert!(truncated.len() < body.len());
    }
}
