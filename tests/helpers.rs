// Shared test helpers for the mock analysis service.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use serde_json::{json, Value};
use wiremock::MockServer;

use link_analyzer::{AnalysisClient, Config, LogFormat, LogLevel, OutputFormat};

/// Path the client posts to.
#[allow(dead_code)] // Used by other test files
pub const ANALYZE_PATH: &str = "/api/links/analyze";

/// Builds a config pointing at the mock server.
#[allow(dead_code)] // Used by other test files
pub fn create_test_config(server: &MockServer, timeout_seconds: u64) -> Config {
    Config {
        url: None,
        endpoint: format!("{}{}", server.uri(), ANALYZE_PATH),
        timeout_seconds,
        connect_timeout_seconds: 2,
        user_agent: "link_analyzer_test/1.0".to_string(),
        log_level: LogLevel::Error, // Reduce noise in tests
        log_format: LogFormat::Plain,
        output: OutputFormat::Text,
        no_color: true,
    }
}

/// Builds a client pointing at the mock server.
#[allow(dead_code)] // Used by other test files
pub fn create_test_client(server: &MockServer) -> AnalysisClient {
    AnalysisClient::from_config(&create_test_config(server, 5)).expect("Failed to build client")
}

/// The `data` payload for `https://example.com`: valid, SSL, score 85 and only
/// HSTS set among the security headers.
#[allow(dead_code)] // Used by other test files
pub fn example_com_data() -> Value {
    json!({
        "url": "https://example.com",
        "isValid": true,
        "metadata": {
            "title": "Example Domain",
            "description": "This domain is for use in illustrative examples in documents.",
            "keywords": "",
            "favicon": "https://example.com/favicon.ico",
            "ogImage": "",
            "lastModified": "Tue, 15 Oct 2024 12:00:00 GMT",
            "language": "en",
            "author": "",
            "siteName": "",
            "type": "website",
            "url": "https://example.com/",
            "canonicalUrl": "https://example.com/",
            "robots": "index, follow",
            "themeColor": "",
            "viewport": "width=device-width, initial-scale=1",
            "generator": "",
            "copyright": "",
            "publisher": "",
            "category": "",
            "pageLoadTime": 182.4,
            "contentLength": 1256,
            "headingsCount": {"h1": 1, "h2": 0, "h3": 0, "h4": 0, "h5": 0, "h6": 0},
            "linksCount": 1,
            "imagesCount": 0,
            "hasNewsletter": false,
            "hasSocialLinks": {"facebook": false, "twitter": false, "instagram": false, "linkedin": false},
            "security": {
                "isSecure": true,
                "headers": {
                    "Strict-Transport-Security": "max-age=63072000",
                    "Content-Security-Policy": "",
                    "X-Content-Type-Options": "",
                    "X-Frame-Options": "",
                    "X-XSS-Protection": "",
                    "Referrer-Policy": ""
                },
                "hasSSL": true,
                "securityScore": 85
            }
        }
    })
}

/// A successful envelope around `data`.
#[allow(dead_code)] // Used by other test files
pub fn success_body(data: Value) -> Value {
    json!({"success": true, "data": data})
}
