//! The result card and error banner.

use colored::{Color, Colorize};
use serde_json::Number;

use crate::config::SUBMIT_BUSY_LABEL;
use crate::form::FormPhase;
use crate::models::{AnalysisResult, PageMetadata};

use super::format::{format_bytes, format_last_modified, format_load_time, yes_no};

const CHECK_MARK: &str = "✔";
const CROSS_MARK: &str = "✘";
const INDENT: &str = "  ";

/// Renders analysis results for the terminal.
///
/// With `color` disabled the output is plain text with the same content.
#[derive(Debug, Clone, Copy)]
pub struct ResultView {
    color: bool,
}

impl Default for ResultView {
    fn default() -> Self {
        Self { color: true }
    }
}

impl ResultView {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Renders whatever the form currently shows.
    pub fn render_phase(&self, phase: &FormPhase) -> String {
        match phase {
            FormPhase::Idle => String::new(),
            FormPhase::Pending => format!("{SUBMIT_BUSY_LABEL}\n"),
            FormPhase::Succeeded(result) => self.render(Some(&**result)),
            FormPhase::Failed(message) => self.render_error(message),
        }
    }

    /// The error banner.
    pub fn render_error(&self, message: &str) -> String {
        format!("{}\n", self.paint(&format!("{CROSS_MARK} {message}"), Color::Red))
    }

    /// Renders the result card. `None` renders nothing.
    pub fn render(&self, result: Option<&AnalysisResult>) -> String {
        let Some(result) = result else {
            return String::new();
        };
        let meta = &result.metadata;
        let security = &meta.security;
        let mut lines = Vec::new();

        lines.push(self.heading("Analysis Results"));
        lines.push(result.url.clone());
        lines.push(String::new());

        lines.push(self.indicator(result.is_valid, "Valid URL", "Invalid URL"));
        lines.push(self.indicator(security.has_ssl, "Has SSL", "No SSL"));

        for (label, value) in metadata_fields(meta) {
            lines.push(self.field(label, &value));
        }

        lines.push(String::new());
        lines.push(self.heading("Headings Count"));
        for (level, count) in meta.headings_count.levels() {
            lines.push(format!("{INDENT}{}", self.field(level, &count.to_string())));
        }

        lines.push(String::new());
        lines.push(self.heading("Social Links"));
        for (platform, present) in meta.has_social_links.platforms() {
            lines.push(format!("{INDENT}{}", self.field(platform, yes_no(present))));
        }

        lines.push(String::new());
        lines.push(self.heading("Security Headers"));
        for (name, value) in security.headers.present() {
            lines.push(format!("{INDENT}{}", self.field(name, value)));
        }

        lines.push(String::new());
        let score = format!("Security Score: {}", security.security_score);
        lines.push(self.paint(&score, score_color(&security.security_score)));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    fn indicator(&self, ok: bool, yes: &str, no: &str) -> String {
        if ok {
            self.paint(&format!("{CHECK_MARK} {yes}"), Color::Green)
        } else {
            self.paint(&format!("{CROSS_MARK} {no}"), Color::Red)
        }
    }

    fn field(&self, label: &str, value: &str) -> String {
        let label = format!("{label}:");
        if self.color {
            format!("{} {}", label.bold(), value)
        } else {
            format!("{label} {value}")
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().underline().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }
}

fn score_color(score: &Number) -> Color {
    match score.as_f64() {
        Some(s) if s >= 80.0 => Color::Green,
        Some(s) if s >= 50.0 => Color::Yellow,
        _ => Color::Red,
    }
}

/// Populated metadata fields as label/value pairs, in display order.
fn metadata_fields(meta: &PageMetadata) -> Vec<(&'static str, String)> {
    let text = [
        ("Title", &meta.title),
        ("Description", &meta.description),
        ("Keywords", &meta.keywords),
        ("Language", &meta.language),
        ("Author", &meta.author),
        ("Site Name", &meta.site_name),
        ("Content Type", &meta.content_type),
        ("Canonical URL", &meta.canonical_url),
        ("Page URL", &meta.page_url),
        ("Favicon", &meta.favicon),
        ("OG Image", &meta.og_image),
        ("Robots", &meta.robots),
        ("Theme Color", &meta.theme_color),
        ("Viewport", &meta.viewport),
        ("Generator", &meta.generator),
        ("Copyright", &meta.copyright),
        ("Publisher", &meta.publisher),
        ("Category", &meta.category),
    ];

    let mut fields: Vec<(&'static str, String)> = text
        .into_iter()
        .filter_map(|(label, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (label, v.to_string()))
        })
        .collect();

    if let Some(raw) = meta.last_modified.as_deref().filter(|v| !v.is_empty()) {
        fields.push(("Last Modified", format_last_modified(raw)));
    }
    if let Some(ms) = meta.page_load_time {
        fields.push(("Page Load Time", format_load_time(ms)));
    }
    if let Some(bytes) = meta.content_length {
        fields.push(("Content Length", format_bytes(bytes)));
    }
    if let Some(links) = meta.links_count {
        fields.push(("Links Count", links.to_string()));
    }
    if let Some(images) = meta.images_count {
        fields.push(("Images Count", images.to_string()));
    }
    if let Some(newsletter) = meta.has_newsletter {
        fields.push(("Has Newsletter", yes_no(newsletter).to_string()));
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_result() -> AnalysisResult {
        serde_json::from_value(serde_json::json!({
            "url": "https://example.com",
            "isValid": true,
            "metadata": {
                "title": "Example Domain",
                "description": "",
                "language": "en",
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
                        "X-Content-Type-Options": "",
                        "X-Frame-Options": "",
                        "X-XSS-Protection": "",
                        "Referrer-Policy": ""
                    }
                }
            }
        }))
        .expect("valid result")
    }

    #[test]
    fn test_render_none_is_empty() {
        assert_eq!(ResultView::plain().render(None), "");
    }

    #[test]
    fn test_render_indicators_and_score() {
        let out = ResultView::plain().render(Some(&example_result()));
        assert!(out.starts_with("Analysis Results\nhttps://example.com\n"));
        assert!(out.contains("✔ Valid URL"));
        assert!(out.contains("✔ Has SSL"));
        assert!(out.trim_end().ends_with("Security Score: 85"));
    }

    #[test]
    fn test_render_invalid_without_ssl() {
        let mut result = example_result();
        result.is_valid = false;
        result.metadata.security.has_ssl = false;
        let out = ResultView::plain().render(Some(&result));
        assert!(out.contains("✘ Invalid URL"));
        assert!(out.contains("✘ No SSL"));
    }

    #[test]
    fn test_render_only_populated_fields() {
        let out = ResultView::plain().render(Some(&example_result()));
        assert!(out.contains("Title: Example Domain"));
        assert!(out.contains("Language: en"));
        assert!(out.contains("Content Length: 1256 bytes"));
        assert!(out.contains("Images Count: 0"));
        assert!(out.contains("Has Newsletter: No"));
        // Empty or absent fields are not rendered
        assert!(!out.contains("Description:"));
        assert!(!out.contains("Keywords:"));
        assert!(!out.contains("Last Modified:"));
        assert!(!out.contains("Page Load Time:"));
    }

    #[test]
    fn test_render_headings_in_level_order() {
        let out = ResultView::plain().render(Some(&example_result()));
        let headings: Vec<&str> = out
            .lines()
            .filter(|l| l.starts_with("  H"))
            .map(str::trim)
            .collect();
        assert_eq!(
            headings,
            ["H1: 1", "H2: 0", "H3: 0", "H4: 0", "H5: 0", "H6: 0"]
        );
    }

    #[test]
    fn test_render_social_links_yes_no() {
        let out = ResultView::plain().render(Some(&example_result()));
        assert!(out.contains("  Facebook: No\n"));
        assert!(out.contains("  Twitter: Yes\n"));
        assert!(out.contains("  Instagram: No\n"));
        assert!(out.contains("  Linkedin: No\n"));
    }

    #[test]
    fn test_render_omits_empty_security_headers() {
        let out = ResultView::plain().render(Some(&example_result()));
        let section: Vec<&str> = out
            .split("Security Headers\n")
            .nth(1)
            .expect("section present")
            .lines()
            .take_while(|l| !l.is_empty())
            .collect();
        assert_eq!(
            section,
            ["  Strict-Transport-Security: max-age=63072000"]
        );
        assert!(!out.contains("Content-Security-Policy"));
    }

    #[test]
    fn test_render_error_banner() {
        assert_eq!(
            ResultView::plain().render_error("Invalid URL format"),
            "✘ Invalid URL format\n"
        );
    }

    #[test]
    fn test_render_phase() {
        let view = ResultView::plain();
        assert_eq!(view.render_phase(&FormPhase::Idle), "");
        assert_eq!(view.render_phase(&FormPhase::Pending), "Analyzing...\n");
        assert_eq!(
            view.render_phase(&FormPhase::Failed("boom".to_string())),
            "✘ boom\n"
        );
        let result = example_result();
        assert_eq!(
            view.render_phase(&FormPhase::Succeeded(Box::new(result.clone()))),
            view.render(Some(&result))
        );
    }

    #[test]
    fn test_score_color_bands() {
        let band = |json: &str| score_color(&serde_json::from_str(json).expect("number"));
        assert_eq!(band("100"), Color::Green);
        assert_eq!(band("80"), Color::Green);
        assert_eq!(band("79.9"), Color::Yellow);
        assert_eq!(band("50"), Color::Yellow);
        assert_eq!(band("49.5"), Color::Red);
        assert_eq!(band("-3"), Color::Red);
    }

    #[test]
    fn test_render_fractional_score_as_sent() {
        let mut json = serde_json::to_value(example_result()).expect("serializes");
        json["metadata"]["security"]["securityScore"] = serde_json::json!(72.5);
        let result: AnalysisResult = serde_json::from_value(json).expect("decodes");
        let out = ResultView::plain().render(Some(&result));
        assert!(out.trim_end().ends_with("Security Score: 72.5"));
    }

    #[test]
    fn test_render_omits_absent_newsletter_flag() {
        let mut json = serde_json::to_value(example_result()).expect("serializes");
        json["metadata"]
            .as_object_mut()
            .expect("metadata object")
            .remove("hasNewsletter");
        let result: AnalysisResult = serde_json::from_value(json).expect("decodes");
        assert!(result.metadata.has_newsletter.is_none());
        let out = ResultView::plain().render(Some(&result));
        assert!(!out.contains("Has Newsletter"));
    }
}
