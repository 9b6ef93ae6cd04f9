//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Configurable timeout and User-Agent
//! - `Accept: application/json` sent on every request
//! - Status classification into registry errors (404 vs. everything else)
//!
//! Requests are issued exactly once; there is no retry.

use crate::error::RegistryError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
pub const DEFAULT_USER_AGENT: &str = concat!("clojars-deps-server/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, RegistryError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .default_headers(headers)
            .build()
            .map_err(|e| {
                RegistryError::network(
                    String::new(),
                    format!("failed to create HTTP client: {}", e),
                )
            })?;

        Ok(Self { client })
    }

    /// Perform a GET request, mapping failures to registry errors
    pub async fn get(
        &self,
        url: &str,
        dependency: &str,
        registry: &str,
    ) -> Result<reqwest::Response, RegistryError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                RegistryError::timeout(dependency, e.to_string())
            } else {
                RegistryError::network(dependency, e.to_string())
            }
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(RegistryError::not_found(dependency, registry));
        }
        if !status.is_success() {
            return Err(RegistryError::HttpStatus {
                dependency: dependency.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    /// Perform a GET request and return the body as text
    pub async fn get_text(
        &self,
        url: &str,
        dependency: &str,
        registry: &str,
    ) -> Result<String, RegistryError> {
        let response = self.get(url, dependency, registry).await?;

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                RegistryError::timeout(dependency, e.to_string())
            } else {
                RegistryError::InvalidResponse {
                    dependency: dependency.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }
}
