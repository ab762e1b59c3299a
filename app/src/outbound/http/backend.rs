//! Shared request plumbing for [`HttpBackend`].

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::Serialize;
use tracing::debug;

use super::dto::error_message;
use crate::domain::ports::ApiError;

const ERROR_BODY_PREVIEW_LIMIT: usize = 160;

/// Backend adapter bound to one API base URL.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// ```rust,ignore
    /// let base = Url::parse("http://localhost:8000/api/v1")?;
    /// let backend = HttpBackend::new(base, Duration::from_secs(30))?;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// Base URL every endpoint path is appended to.
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append `segments` to the base path, percent-encoding each one.
    pub(super) fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                ApiError::transport(format!("base URL {} cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(super) async fn get(&self, segments: &[&str]) -> Result<Vec<u8>, ApiError> {
        let url = self.endpoint(segments)?;
        self.send(self.client.get(url)).await
    }

    pub(super) async fn post<B>(&self, segments: &[&str], body: &B) -> Result<Vec<u8>, ApiError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let url = self.endpoint(segments)?;
        self.send(self.client.post(url).json(body)).await
    }

    pub(super) async fn put<B>(&self, segments: &[&str], body: &B) -> Result<Vec<u8>, ApiError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let url = self.endpoint(segments)?;
        self.send(self.client.put(url).json(body)).await
    }

    pub(super) async fn delete<B>(
        &self,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<Vec<u8>, ApiError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let url = self.endpoint(segments)?;
        let request = self.client.delete(url);
        let request = match body {
            Some(body) => request.json(body),
            None => request,
        };
        self.send(request).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<Vec<u8>, ApiError> {
        let response = request
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        Ok(body.to_vec())
    }
}

fn map_transport_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        return ApiError::timeout(error.to_string());
    }
    ApiError::transport(error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ApiError {
    debug!(
        status = status.as_u16(),
        body = %body_preview(body),
        "backend rejected request"
    );
    if matches!(
        status,
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT
    ) {
        return ApiError::timeout(format!("backend returned status {status}"));
    }
    ApiError::rejected(status.as_u16(), error_message(body))
}

fn body_preview(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let mut preview = String::new();
    for (index, character) in text.chars().enumerate() {
        if index >= ERROR_BODY_PREVIEW_LIMIT {
            preview.push_str("...");
            return preview;
        }
        preview.push(character);
    }
    preview
}
