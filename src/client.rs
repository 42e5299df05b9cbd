//! Outbound call to the analysis service.
//!
//! One `POST` with a JSON body per analysis, no retries. The response body is
//! decoded here, once, into an `AnalysisOutcome`; nothing downstream sees raw
//! JSON.

use log::debug;
use url::Url;

use crate::config::Config;
use crate::error_handling::{AnalyzeError, InitializationError};
use crate::initialization::{init_client, parse_endpoint};
use crate::models::{AnalysisOutcome, AnalysisRequest};

/// Client for the analysis endpoint.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl AnalysisClient {
    /// Wraps an existing HTTP client.
    pub fn new(http: reqwest::Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    /// Builds the HTTP client and validates the endpoint from the configuration.
    ///
    /// # Errors
    ///
    /// Returns an `InitializationError` if the endpoint is invalid or the HTTP
    /// client cannot be created.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let endpoint = parse_endpoint(&config.endpoint)?;
        let http = init_client(config)?;
        Ok(Self::new(http, endpoint))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Submits `url` for analysis.
    ///
    /// The HTTP status of the response is not interpreted: the service reports
    /// failures in the body, often together with a 4xx status.
    ///
    /// # Errors
    ///
    /// Returns an `AnalyzeError` if the request fails, the body can't be read,
    /// or the body doesn't decode into an `AnalysisOutcome`.
    pub async fn analyze(&self, url: &str) -> Result<AnalysisOutcome, AnalyzeError> {
        debug!("Submitting {} to {}", url, self.endpoint);

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&AnalysisRequest { url })
            .send()
            .await
            .map_err(AnalyzeError::Request)?;

        let status = response.status();
        let body = response.bytes().await.map_err(AnalyzeError::Body)?;
        debug!(
            "Analysis service answered {} with {} bytes",
            status,
            body.len()
        );

        AnalysisOutcome::from_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_uses_configured_endpoint() {
        let config = Config {
            endpoint: "http://127.0.0.1:9/api/links/analyze".to_string(),
            ..Default::default()
        };
        let client = AnalysisClient::from_config(&config).expect("valid config");
        assert_eq!(
            client.endpoint().as_str(),
            "http://127.0.0.1:9/api/links/analyze"
        );
    }

    #[test]
    fn test_from_config_rejects_bad_endpoint() {
        let config = Config {
            endpoint: "not an endpoint".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            AnalysisClient::from_config(&config),
            Err(InitializationError::EndpointError { .. })
        ));
    }
}
