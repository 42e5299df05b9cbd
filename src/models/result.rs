//! The analysis record returned by the service.
//!
//! Field names follow the service's JSON exactly. Descriptive fields are
//! optional: the service leaves them out (or sends `null`/`""`) when the page
//! doesn't provide them. The nested count, social and security records are
//! fixed-shape and required.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::config::{
    HEADER_CONTENT_SECURITY_POLICY, HEADER_REFERRER_POLICY, HEADER_STRICT_TRANSPORT_SECURITY,
    HEADER_X_CONTENT_TYPE_OPTIONS, HEADER_X_FRAME_OPTIONS, HEADER_X_XSS_PROTECTION,
};

/// Metadata for one analyzed URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// The submitted target
    pub url: String,
    /// Whether the service judged the URL well-formed and reachable
    pub is_valid: bool,
    pub metadata: PageMetadata,
}

/// Page-level metadata extracted by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default)]
    pub favicon: Option<String>,
    #[serde(default)]
    pub og_image: Option<String>,
    /// Raw timestamp as sent by the service (HTTP date or RFC 3339)
    #[serde(default)]
    pub last_modified: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub site_name: Option<String>,
    /// `og:type` of the page
    #[serde(default, rename = "type")]
    pub content_type: Option<String>,
    /// The page's own URL as declared in its metadata
    #[serde(default, rename = "url")]
    pub page_url: Option<String>,
    #[serde(default)]
    pub canonical_url: Option<String>,
    #[serde(default)]
    pub robots: Option<String>,
    #[serde(default)]
    pub theme_color: Option<String>,
    #[serde(default)]
    pub viewport: Option<String>,
    #[serde(default)]
    pub generator: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub category: Option<String>,

    /// Milliseconds the service needed to load the page
    #[serde(default)]
    pub page_load_time: Option<f64>,
    /// Body size in bytes
    #[serde(default)]
    pub content_length: Option<u64>,
    #[serde(default)]
    pub links_count: Option<u64>,
    #[serde(default)]
    pub images_count: Option<u64>,
    #[serde(default)]
    pub has_newsletter: Option<bool>,

    pub headings_count: HeadingsCount,
    pub has_social_links: SocialLinks,
    pub security: SecurityInfo,
}

/// Number of headings per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeadingsCount {
    pub h1: u32,
    pub h2: u32,
    pub h3: u32,
    pub h4: u32,
    pub h5: u32,
    pub h6: u32,
}

impl HeadingsCount {
    /// Counts labeled by level, H1 first.
    pub fn levels(&self) -> [(&'static str, u32); 6] {
        [
            ("H1", self.h1),
            ("H2", self.h2),
            ("H3", self.h3),
            ("H4", self.h4),
            ("H5", self.h5),
            ("H6", self.h6),
        ]
    }
}

/// Presence of links to the tracked social platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    pub facebook: bool,
    pub twitter: bool,
    pub instagram: bool,
    pub linkedin: bool,
}

impl SocialLinks {
    /// Presence flags labeled by platform, in display order.
    pub fn platforms(&self) -> [(&'static str, bool); 4] {
        [
            ("Facebook", self.facebook),
            ("Twitter", self.twitter),
            ("Instagram", self.instagram),
            ("Linkedin", self.linkedin),
        ]
    }
}

/// Security findings for the analyzed page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityInfo {
    #[serde(default)]
    pub is_secure: bool,
    pub headers: SecurityHeaders,
    #[serde(rename = "hasSSL")]
    pub has_ssl: bool,
    /// Score computed by the service, nominally 0-100. Kept as sent, so a
    /// fractional or out-of-range score still decodes.
    pub security_score: Number,
}

/// Values of the fixed set of security headers.
///
/// `None` and `Some("")` both mean the header was not sent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SecurityHeaders {
    #[serde(default, rename = "Strict-Transport-Security")]
    pub strict_transport_security: Option<String>,
    #[serde(default, rename = "Content-Security-Policy")]
    pub content_security_policy: Option<String>,
    #[serde(default, rename = "X-Content-Type-Options")]
    pub x_content_type_options: Option<String>,
    #[serde(default, rename = "X-Frame-Options")]
    pub x_frame_options: Option<String>,
    #[serde(default, rename = "X-XSS-Protection")]
    pub x_xss_protection: Option<String>,
    #[serde(default, rename = "Referrer-Policy")]
    pub referrer_policy: Option<String>,
}

impl SecurityHeaders {
    /// All headers with their raw values, in `config::SECURITY_HEADERS` order.
    pub fn entries(&self) -> [(&'static str, Option<&str>); 6] {
        [
            (
                HEADER_STRICT_TRANSPORT_SECURITY,
                self.strict_transport_security.as_deref(),
            ),
            (
                HEADER_CONTENT_SECURITY_POLICY,
                self.content_security_policy.as_deref(),
            ),
            (
                HEADER_X_CONTENT_TYPE_OPTIONS,
                self.x_content_type_options.as_deref(),
            ),
            (HEADER_X_FRAME_OPTIONS, self.x_frame_options.as_deref()),
            (HEADER_X_XSS_PROTECTION, self.x_xss_protection.as_deref()),
            (HEADER_REFERRER_POLICY, self.referrer_policy.as_deref()),
        ]
    }

    /// Headers that were actually sent (non-empty value).
    pub fn present(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries()
            .into_iter()
            .filter_map(|(name, value)| value.filter(|v| !v.is_empty()).map(|v| (name, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SECURITY_HEADERS;

    fn sample_json() -> serde_json::Value {
        serde_json::json!({
            "url": "https://example.com",
            "isValid": true,
            "metadata": {
                "title": "Example Domain",
                "description": "",
                "type": "website",
                "url": "https://example.com/",
                "lastModified": "Tue, 15 Oct 2024 12:00:00 GMT",
                "pageLoadTime": 231.5,
                "contentLength": 1256,
                "linksCount": 1,
                "imagesCount": 0,
                "hasNewsletter": false,
                "headingsCount": {"h1": 1, "h2": 0, "h3": 0, "h4": 0, "h5": 0, "h6": 0},
                "hasSocialLinks": {"facebook": false, "twitter": true, "instagram": false, "linkedin": false},
                "security": {
                    "isSecure": true,
                    "hasSSL": true,
                    "securityScore": 85,
                    "headers": {
                        "Strict-Transport-Security": "max-age=63072000",
                        "Content-Security-Policy": "",
                        "X-Content-Type-Options": null
                    }
                }
            }
        })
    }

    #[test]
    fn test_decode_wire_names() {
        let result: AnalysisResult = serde_json::from_value(sample_json()).expect("decodes");
        assert!(result.is_valid);
        assert_eq!(result.metadata.title.as_deref(), Some("Example Domain"));
        assert_eq!(result.metadata.content_type.as_deref(), Some("website"));
        assert_eq!(
            result.metadata.page_url.as_deref(),
            Some("https://example.com/")
        );
        assert_eq!(result.metadata.content_length, Some(1256));
        assert!(result.metadata.security.has_ssl);
        assert_eq!(result.metadata.security.security_score.as_u64(), Some(85));
        assert!(result.metadata.has_social_links.twitter);
        assert_eq!(result.metadata.headings_count.h1, 1);
        // Absent optional fields decode as None
        assert!(result.metadata.keywords.is_none());
        assert!(result.metadata.security.headers.referrer_policy.is_none());
    }

    #[test]
    fn test_decode_rejects_missing_security_record() {
        let mut json = sample_json();
        json["metadata"]
            .as_object_mut()
            .expect("metadata is an object")
            .remove("security");
        assert!(serde_json::from_value::<AnalysisResult>(json).is_err());
    }

    #[test]
    fn test_present_headers_skip_empty_and_absent() {
        let result: AnalysisResult = serde_json::from_value(sample_json()).expect("decodes");
        let present: Vec<_> = result.metadata.security.headers.present().collect();
        assert_eq!(
            present,
            vec![("Strict-Transport-Security", "max-age=63072000")]
        );
    }

    #[test]
    fn test_header_entries_follow_configured_order() {
        let names: Vec<&str> = SecurityHeaders::default()
            .entries()
            .iter()
            .map(|(name, _)| *name)
            .collect();
        assert_eq!(names, SECURITY_HEADERS);
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let result: AnalysisResult = serde_json::from_value(sample_json()).expect("decodes");
        let json = serde_json::to_value(&result).expect("serializes");
        assert_eq!(json["isValid"], true);
        assert_eq!(json["metadata"]["security"]["hasSSL"], true);
        assert_eq!(json["metadata"]["type"], "website");
        assert_eq!(
            json["metadata"]["security"]["headers"]["Strict-Transport-Security"],
            "max-age=63072000"
        );
    }

    #[test]
    fn test_headings_levels_in_order() {
        let counts = HeadingsCount {
            h1: 1,
            h2: 4,
            h3: 2,
            ..Default::default()
        };
        assert_eq!(counts.levels()[0], ("H1", 1));
        assert_eq!(counts.levels()[1], ("H2", 4));
        assert_eq!(counts.levels()[5], ("H6", 0));
    }

    #[test]
    fn test_social_platform_order() {
        let labels: Vec<&str> = SocialLinks::default()
            .platforms()
            .iter()
            .map(|(label, _)| *label)
            .collect();
        assert_eq!(labels, ["Facebook", "Twitter", "Instagram", "Linkedin"]);
    }
}
