//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use super::categorization::categorize_reqwest_error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configured analysis endpoint is not a usable http(s) URL.
    #[error("Invalid analysis endpoint '{endpoint}': {reason}")]
    EndpointError {
        /// The endpoint as configured
        endpoint: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Transport-level failures of one analysis request.
///
/// Anything that prevents obtaining a decodable response ends up here. The
/// form never shows these to the user verbatim; they are logged and replaced
/// by a fixed fallback message.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    /// The request could not be sent or no response arrived (connect, timeout, ...).
    #[error("Request to analysis service failed: {0}")]
    Request(#[source] ReqwestError),

    /// The response body could not be read.
    #[error("Failed to read analysis response body: {0}")]
    Body(#[source] ReqwestError),

    /// The response body is not the expected JSON document.
    #[error("Failed to decode analysis response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service reported success but sent no result.
    #[error("Analysis response reported success without data")]
    MissingData,
}

impl AnalyzeError {
    /// Categorizes the error for diagnostics.
    pub fn error_type(&self) -> ErrorType {
        match self {
            AnalyzeError::Request(e) | AnalyzeError::Body(e) => categorize_reqwest_error(e),
            AnalyzeError::Decode(_) => ErrorType::ResponseJsonError,
            AnalyzeError::MissingData => ErrorType::ResponseMissingData,
        }
    }
}

/// Types of transport errors that can occur while talking to the analysis service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestTimeoutError,
    HttpRequestRequestError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    // Response contract errors
    ResponseJsonError,
    ResponseMissingData,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::ResponseJsonError => "Response is not valid JSON",
            ErrorType::ResponseMissingData => "Response missing data",
        }
    }
}
