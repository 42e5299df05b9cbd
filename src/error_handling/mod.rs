//! Error handling.
//!
//! This module provides:
//! - Error type definitions (initialization and transport failures)
//! - Error type extraction from `reqwest` errors for diagnostics
//!
//! Application-level failures (the service answering `success: false`) are not
//! errors here; they are a regular `AnalysisOutcome`.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{AnalyzeError, ErrorType, InitializationError};
