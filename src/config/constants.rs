//! Configuration constants.
//!
//! This module defines the defaults used throughout the application, including
//! the analysis endpoint, timeouts, and the user-facing fallback messages.

/// Default analysis endpoint.
///
/// Users can override this via the `--endpoint` CLI flag or the
/// `LINK_ANALYZER_ENDPOINT` environment variable.
pub const DEFAULT_ENDPOINT: &str = "https://link-z084.onrender.com/api/links/analyze";

/// Environment variable consulted for the endpoint when `--endpoint` is not given.
pub const ENDPOINT_ENV_VAR: &str = "LINK_ANALYZER_ENDPOINT";

// Network operation timeouts
/// Overall request timeout in seconds.
/// The remote service fetches and parses the target page before answering, so
/// this is deliberately generous.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// TCP connection timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for requests to the analysis service.
pub const DEFAULT_USER_AGENT: &str = concat!("link_analyzer/", env!("CARGO_PKG_VERSION"));

// User-facing messages
/// Shown when the service reports a failure without a usable message.
pub const FALLBACK_APPLICATION_ERROR: &str = "An error occurred";
/// Shown for every transport failure; the cause is only logged.
pub const FALLBACK_TRANSPORT_ERROR: &str = "Failed to fetch data";

// Form labels
pub const SUBMIT_LABEL: &str = "Analyze";
pub const SUBMIT_BUSY_LABEL: &str = "Analyzing...";
pub const INPUT_PLACEHOLDER: &str = "Enter URL to analyze";
pub const EMPTY_URL_NOTICE: &str = "Please enter a URL";
