//! HTTP client abstraction for catalog providers and cover fetching

use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {message}")]
    RequestFailed { message: String },
    #[error("Invalid URL: {url}")]
    InvalidUrl { url: String },
    #[error("HTTP status {status}")]
    Status { status: u16 },
    #[error("Parse error: {message}")]
    ParseError { message: String },
}

pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    pub fn new(user_agent: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            user_agent: user_agent.to_string(),
        }
    }

    /// GET a URL and return the body as text. Non-2xx statuses are errors.
    pub async fn get_text(&self, url: &str) -> Result<String, HttpError> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| HttpError::RequestFailed {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return Err(HttpError::Status { status });
        }

        response.text().await.map_err(|e| HttpError::ParseError {
            message: e.to_string(),
        })
    }

    /// GET a URL with query parameters appended.
    pub async fn get_text_with_params(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<String, HttpError> {
        let url =
            reqwest::Url::parse_with_params(url, params).map_err(|_| HttpError::InvalidUrl {
                url: url.to_string(),
            })?;

        self.get_text(url.as_str()).await
    }

    /// GET a URL and return the raw body bytes. Used for cover images.
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| HttpError::RequestFailed {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return Err(HttpError::Status { status });
        }

        let bytes = response.bytes().await.map_err(|e| HttpError::ParseError {
            message: e.to_string(),
        })?;

        Ok(bytes.to_vec())
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new("shelfmark/0.1")
    }
}
