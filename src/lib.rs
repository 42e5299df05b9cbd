//! link_analyzer library: client for a remote link analysis service
//!
//! This library submits a URL to an analysis service over HTTPS and renders the
//! returned metadata: validity, SSL, page metadata, heading counts, social-link
//! presence, security headers and the security score. All analysis happens on
//! the remote service; this crate owns the request/response cycle and the
//! rendering of its result.
//!
//! # Example
//!
//! ```no_run
//! use link_analyzer::{AnalysisClient, AnalysisForm, Config, ResultView};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AnalysisClient::from_config(&Config::default())?;
//! let mut form = AnalysisForm::new();
//! form.set_url("https://example.com");
//! let phase = form.submit(&client).await?;
//! print!("{}", ResultView::default().render_phase(phase));
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod client;
pub mod config;
mod error_handling;
mod form;
pub mod initialization;
pub mod models;
pub mod render;
mod run;

// Re-export public API
pub use client::AnalysisClient;
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{categorize_reqwest_error, AnalyzeError, ErrorType, InitializationError};
pub use form::{AnalysisForm, FormPhase, SubmitRejected, SubmitTicket};
pub use models::{AnalysisOutcome, AnalysisResult};
pub use render::ResultView;
pub use run::{run, RunReport, Session};
