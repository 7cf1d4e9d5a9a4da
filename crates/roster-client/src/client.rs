//! Typed HTTP client for the record API.

use reqwest::StatusCode;
use thiserror::Error;

use roster::{DeleteAck, InsertAck, Record, RecordFields, UpdateAck};

/// Endpoint used when none is configured.
pub const DEFAULT_API_ENDPOINT: &str = "http://localhost:5000";

/// Errors a client call can produce.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connection, body, deserialization).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("unexpected status {status}: {body}")]
    Status {
        /// The HTTP status received.
        status: StatusCode,
        /// The plain-text body, if any.
        body: String,
    },
}

/// A specialized Result type for client calls.
pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// HTTP client for the record endpoints.
///
/// Each call is one request: no timeout, no cancellation, no retry.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// The base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn check(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::Status { status, body })
        }
    }

    /// `GET /record`: fetch all records.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn list_records(&self) -> ClientResult<Vec<Record>> {
        let response = self.http.get(self.url("/record")).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// `GET /record/{id}`: fetch one record, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn get_record(&self, id: &str) -> ClientResult<Option<Record>> {
        let response = self
            .http
            .get(self.url(&format!("/record/{id}")))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// `POST /record/add`: insert a new record.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn create_record(&self, fields: &RecordFields) -> ClientResult<InsertAck> {
        let response = self
            .http
            .post(self.url("/record/add"))
            .json(fields)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// `POST /update/{id}`: overwrite a record's fields.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn update_record(&self, id: &str, fields: &RecordFields) -> ClientResult<UpdateAck> {
        let response = self
            .http
            .post(self.url(&format!("/update/{id}")))
            .json(fields)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// `DELETE /{id}`: remove a record.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn delete_record(&self, id: &str) -> ClientResult<DeleteAck> {
        let response = self.http.delete(self.url(&format!("/{id}"))).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.url("/record"), "http://localhost:5000/record");
    }

    #[test]
    fn test_default_endpoint() {
        let client = ApiClient::new(DEFAULT_API_ENDPOINT);
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        // Nothing listens on port 1; the connection is refused immediately.
        let client = ApiClient::new("http://127.0.0.1:1");
        let err = client.list_records().await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
    }
}
