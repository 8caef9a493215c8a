//! HTTP client for network-based API calls
//!
//! Thin wrapper over reqwest with the backend's conventions baked in:
//! JSON bodies, cookie-credentialed requests, and non-2xx bodies parsed for
//! a `message`/`error` field. Nothing escapes this module as a raw error:
//! every failure becomes a [`ClientError`].

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

/// HTTP client for making network requests to the Vento backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .cookie_store(true)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request without a body, discarding the response body
    pub async fn post_unit(&self, path: &str) -> ClientResult<()> {
        let response = self.client.post(self.url(path)).send().await?;
        Self::handle_unit(response).await
    }

    /// Make a PATCH request with JSON body
    pub async fn patch<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.patch(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request, discarding the response body
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::handle_unit(response).await
    }

    /// Handle an HTTP response expected to carry a JSON body
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from(status, response).await);
        }
        response.json().await.map_err(Into::into)
    }

    /// Handle an HTTP response whose body is irrelevant on success
    async fn handle_unit(response: reqwest::Response) -> ClientResult<()> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from(status, response).await);
        }
        Ok(())
    }

    async fn error_from(status: StatusCode, response: reqwest::Response) -> ClientError {
        if status == StatusCode::UNAUTHORIZED {
            return ClientError::Unauthorized;
        }
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&text)
            .ok()
            .and_then(|body| {
                body.get("message")
                    .or_else(|| body.get("error"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            });
        ClientError::Api {
            status: status.as_u16(),
            message,
        }
    }
}
