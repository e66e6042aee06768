//! Shared HTTP client

use std::sync::Arc;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{ApiError, ApiResult};
use crate::config::AppConfig;

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Response envelope: `{ success, message?, <payload-key>: ... }`
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub payload: T,
}

/// Payload of endpoints that only answer with the envelope
#[derive(Debug, Default, Deserialize)]
pub struct Ack {}

#[derive(Deserialize)]
struct EnvelopeHead {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    message: Option<String>,
}

/// Client for the inventory backend, shared by every page
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: Arc<AppConfig>,
}

impl ApiClient {
    pub fn new(config: AppConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let http = Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Join a relative path onto the configured base
    pub(crate) fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Escape a value for use as one path segment
    pub(crate) fn segment(raw: &str) -> String {
        utf8_percent_encode(raw, PATH_SEGMENT).to_string()
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Envelope<T>> {
        self.send(self.http.get(self.url(path))).await
    }

    pub(crate) async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<Envelope<T>> {
        let response = request.send().await?;
        read_envelope(response).await
    }
}

async fn read_envelope<T: DeserializeOwned>(response: Response) -> ApiResult<Envelope<T>> {
    let status = response.status();
    let url = response.url().path().to_string();
    let body = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<EnvelopeHead>(&body)
            .ok()
            .and_then(|head| head.message);
        tracing::debug!(path = %url, status = status.as_u16(), "request failed");
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }

    decode_envelope(&body)
}

/// Decode a 2xx body, turning `success: false` into [`ApiError::Rejected`]
pub(crate) fn decode_envelope<T: DeserializeOwned>(body: &str) -> ApiResult<Envelope<T>> {
    let head: EnvelopeHead = serde_json::from_str(body)?;
    if head.success == Some(false) {
        return Err(ApiError::Rejected(head.message.unwrap_or_default()));
    }
    Ok(serde_json::from_str(body)?)
}
