//! HTTP transport for the Arpio API
//!
//! The transport owns everything about talking HTTP: URL building,
//! authentication headers, TLS settings and turning error statuses into
//! [`ApiError`]s. Resource operations only see [`ApiRequest`] in and a raw
//! body out.

use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client as HttpClient, Method};
use serde::Deserialize;

use crate::error::{ApiError, ConfigError, Result};

/// Production Arpio API
pub const ARPIO_API_URL: &str = "https://api.arpio.io/api";

/// Set (to any value) to skip TLS certificate verification
pub const TLS_INSECURE_SKIP_VERIFY_ENV: &str = "ARPIO_TLS_INSECURE_SKIP_VERIFY";

const USER_AGENT_PREFIX: &str = "arpio-client-rs";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// A single API call relative to the base API URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn with_query(mut self, params: Vec<(String, String)>) -> Self {
        self.query.extend(params);
        self
    }

    /// Attach a JSON body.
    pub fn with_json<T: serde::Serialize>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self)
    }
}

/// Executes API requests. Returns the response body on success; statuses
/// >= 400 come back as [`ApiError`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<Vec<u8>>;
}

/// Client version details reported in the User-Agent header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: String,
    pub commit: String,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            commit: "unknown".to_string(),
        }
    }
}

impl BuildInfo {
    pub fn user_agent(&self) -> String {
        format!("{}/{}/{}", USER_AGENT_PREFIX, self.version, self.commit)
    }
}

/// Body the API returns with most error statuses
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse {
    message: String,
    #[serde(default)]
    authenticate_url: Option<String>,
}

/// reqwest-backed [`Transport`]
pub struct HttpTransport {
    http: HttpClient,
    api_url: String,
    api_key: String,
}

impl HttpTransport {
    pub fn new(
        api_url: &str,
        api_key_id: &str,
        api_key_secret: &str,
        build: &BuildInfo,
    ) -> Result<Self> {
        if api_url.is_empty() {
            return Err(ConfigError::Missing("api_url").into());
        }
        if api_key_id.is_empty() {
            return Err(ConfigError::Missing("api_key_id").into());
        }
        if api_key_secret.is_empty() {
            return Err(ConfigError::Missing("api_key_secret").into());
        }

        let skip_verify = std::env::var_os(TLS_INSECURE_SKIP_VERIFY_ENV).is_some();
        if skip_verify {
            log::warn!("TLS certificate verification is disabled");
        }

        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(build.user_agent())
            .danger_accept_invalid_certs(skip_verify)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key_header(api_key_id, api_key_secret),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<Vec<u8>> {
        let url = self.url(&request.path);
        log::debug!("{} {}", request.method, url);

        let mut builder = self
            .http
            .request(request.method, &url)
            .header(ACCEPT, "*/*")
            .header("X-Api-Key", &self.api_key);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(body) = request.body {
            log::trace!("{}", String::from_utf8_lossy(&body));
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = builder.send().await.map_err(ApiError::from)?;
        let status = response.status();
        let body = response.bytes().await.map_err(ApiError::from)?;

        if status.as_u16() >= 400 {
            return Err(error_from_body(status.as_u16(), &body).into());
        }

        Ok(body.to_vec())
    }
}

/// Prefer the service's `message`; fall back to the raw body.
fn error_from_body(status: u16, body: &[u8]) -> ApiError {
    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(error) => ApiError::from_status(status, error.message, error.authenticate_url),
        Err(e) => {
            log::warn!("Error decoding response body as an API error: {}", e);
            let message = format!("Arpio API error: {}", String::from_utf8_lossy(body));
            ApiError::from_status(status, message, None)
        }
    }
}

/// Value of the `X-Api-Key` header: base64 of `id:secret`, like HTTP basic
/// auth. The key id must not contain a colon.
pub fn api_key_header(api_key_id: &str, api_key_secret: &str) -> String {
    general_purpose::STANDARD.encode(format!("{}:{}", api_key_id, api_key_secret))
}
