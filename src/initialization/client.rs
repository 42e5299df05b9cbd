//! HTTP client initialization.
//!
//! This module provides functions to initialize the HTTP client used to reach
//! the analysis service and to validate the configured endpoint.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::ClientBuilder;
use url::Url;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client with settings from the configuration.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - `Accept: application/json` on every request
/// - Overall and connect timeouts, so a hung service cannot leave the form
///   pending forever
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .user_agent(config.user_agent.clone())
        .default_headers(headers)
        .build()?;
    Ok(client)
}

/// Parses and validates the analysis endpoint.
///
/// The endpoint must be an absolute `http` or `https` URL.
///
/// # Errors
///
/// Returns `InitializationError::EndpointError` if the endpoint does not parse
/// or uses another scheme.
pub fn parse_endpoint(endpoint: &str) -> Result<Url, InitializationError> {
    let parsed = Url::parse(endpoint.trim()).map_err(|e| InitializationError::EndpointError {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(InitializationError::EndpointError {
            endpoint: endpoint.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}
