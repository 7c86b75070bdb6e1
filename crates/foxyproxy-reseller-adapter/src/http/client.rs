/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials)
[OUTPUT]: Authenticated requests and classified API responses
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::http::{ResellerError, Result};
use crate::types::CountResponse;

/// Content type the reseller API speaks, sent as both `Accept` and
/// `Content-Type` on every request.
const JSON_CONTENT_TYPE: &str = "application/json";

/// Header that routes the request to the reseller's domain/tenant.
const DOMAIN_HEADER: &str = "X-DOMAIN";

/// Largest page the API serves; bigger requests are rejected locally.
pub const MAX_PAGE_SIZE: i32 = 100;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Credentials for one reseller account.
///
/// `domain` is the tenant identifier the API requires on every call; there
/// is no default, it must come from configuration.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub domain: String,
}

/// Main HTTP client for the reseller API.
///
/// The client is immutable after construction and safe to share between
/// tasks; every call is an independent request/response exchange. There is
/// no retry or backoff built in - wrap calls externally if you need them.
#[derive(Debug, Clone)]
pub struct ResellerClient {
    http_client: Client,
    base_url: Url,
    credentials: Credentials,
}

/// Outcome of one executed request: the classified status plus the raw body.
///
/// Only statuses that are non-error outcomes reach this type; everything
/// else is already mapped to [`ResellerError`]. 404 is kept because
/// existence checks and single fetches treat it as absence, not failure.
pub(crate) struct ApiResponse {
    pub(crate) status: StatusCode,
    pub(crate) body: Vec<u8>,
}

impl ApiResponse {
    pub(crate) fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND
    }

    /// A success that carries nothing to decode: 404 (absence) or 204
    /// (explicitly bodiless).
    fn is_bodiless(&self) -> bool {
        self.is_not_found() || self.status == StatusCode::NO_CONTENT
    }

    /// Decode the body into a typed value. A decode failure on a successful
    /// response is reported, never defaulted.
    pub(crate) fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body)
            .map_err(|err| ResellerError::InvalidResponse(err.to_string()))
    }

    /// Decode a JSON array, treating 404 and 204 as an empty result.
    pub(crate) fn decode_list<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        if self.is_bodiless() {
            return Ok(Vec::new());
        }
        self.decode()
    }

    /// Decode a single JSON object, treating 404 and 204 as absence.
    pub(crate) fn decode_optional<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        if self.is_bodiless() {
            return Ok(None);
        }
        self.decode().map(Some)
    }

    /// Decode a `{count}` envelope, treating 404 and 204 as zero.
    pub(crate) fn decode_count(&self) -> Result<u64> {
        if self.is_bodiless() {
            return Ok(0);
        }
        self.decode::<CountResponse>().map(|response| response.count)
    }
}

impl ResellerClient {
    /// Create a new client with default configuration
    pub fn new(credentials: Credentials, base_url: &str) -> Result<Self> {
        Self::with_config(ClientConfig::default(), credentials, base_url)
    }

    /// Create a new client with custom configuration
    pub fn with_config(
        config: ClientConfig,
        credentials: Credentials,
        base_url: &str,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            credentials,
        })
    }

    /// Credentials the client authenticates with
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Base URL all endpoint paths are joined onto
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Execute one authenticated request and classify the response.
    ///
    /// Attaches basic auth, the JSON content headers and the domain routing
    /// header. 200, 204 and 404 pass through with their body; every other
    /// status is mapped to a structured [`ResellerError::Api`].
    pub(crate) async fn execute(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<ApiResponse> {
        let url = self.base_url.join(endpoint)?;
        let mut builder = self
            .http_client
            .request(method.clone(), url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .header(ACCEPT, JSON_CONTENT_TYPE)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(DOMAIN_HEADER, &self.credentials.domain);
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        debug!(%method, endpoint, status = status.as_u16(), "reseller api response");

        match status {
            StatusCode::OK | StatusCode::NO_CONTENT | StatusCode::NOT_FOUND => Ok(ApiResponse {
                status,
                body: response.bytes().await?.to_vec(),
            }),
            _ => {
                let body = response.bytes().await?;
                Err(ResellerError::from_response(status, &body))
            }
        }
    }
}

/// Guard shared by every paginated accessor; runs before any request.
pub(crate) fn validate_page(index: i32, size: i32) -> Result<()> {
    if index < 0 {
        return Err(ResellerError::validation("index cannot be less than 0"));
    }
    if size > MAX_PAGE_SIZE {
        return Err(ResellerError::validation("size cannot be larger than 100"));
    }
    Ok(())
}
