//! The analysis request form.
//!
//! `AnalysisForm` owns the state of one request/response cycle: the URL being
//! edited and the current phase. The phase carries the result or the error
//! message, so a result and an error can never be shown at the same time.
//!
//! ```text
//! Idle --begin_submit--> Pending --finish--> Succeeded | Failed
//!   ^                                              |
//!   +------------------- set_url ------------------+
//! ```

use log::{debug, info, warn};
use thiserror::Error;

use crate::client::AnalysisClient;
use crate::config::{FALLBACK_TRANSPORT_ERROR, SUBMIT_BUSY_LABEL, SUBMIT_LABEL};
use crate::error_handling::AnalyzeError;
use crate::models::{AnalysisOutcome, AnalysisResult};

/// Phase of the current submit cycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    /// A request is in flight; the submit control is disabled.
    Pending,
    Succeeded(Box<AnalysisResult>),
    /// Holds the message shown in the error banner.
    Failed(String),
}

/// Why a submit was not accepted. No request is issued in either case.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("a URL is required")]
    EmptyUrl,
    #[error("an analysis is already in progress")]
    AlreadyPending,
}

/// An accepted submit, carrying the URL to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    url: String,
}

impl SubmitTicket {
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// State of one analysis form.
#[derive(Debug, Clone, Default)]
pub struct AnalysisForm {
    url: String,
    phase: FormPhase,
}

impl AnalysisForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the URL text.
    ///
    /// Outside of Pending this drops the previous result or error and returns
    /// the form to Idle. While Pending only the text changes.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
        if !self.is_pending() {
            self.phase = FormPhase::Idle;
        }
    }

    /// Starts a submit cycle.
    ///
    /// On success the form is Pending, any previous result or error is cleared,
    /// and exactly one request must follow, ended by [`AnalysisForm::finish`].
    ///
    /// # Errors
    ///
    /// - `SubmitRejected::AlreadyPending` while a request is in flight
    /// - `SubmitRejected::EmptyUrl` if the URL is empty or only whitespace
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, SubmitRejected> {
        if self.is_pending() {
            return Err(SubmitRejected::AlreadyPending);
        }
        let url = self.url.trim();
        if url.is_empty() {
            return Err(SubmitRejected::EmptyUrl);
        }
        let ticket = SubmitTicket {
            url: url.to_string(),
        };
        self.phase = FormPhase::Pending;
        debug!("Form pending for {}", ticket.url);
        Ok(ticket)
    }

    /// Ends the submit cycle with the outcome of the request.
    ///
    /// Always leaves Pending. Transport errors are logged and shown as the
    /// fixed fallback message.
    pub fn finish(&mut self, outcome: Result<AnalysisOutcome, AnalyzeError>) -> &FormPhase {
        if !self.is_pending() {
            warn!("Finishing a submit cycle that was not pending");
        }
        self.phase = match outcome {
            Ok(AnalysisOutcome::Success(result)) => {
                info!(
                    "Analysis of {} succeeded (valid: {}, score: {})",
                    result.url, result.is_valid, result.metadata.security.security_score
                );
                FormPhase::Succeeded(result)
            }
            Ok(AnalysisOutcome::Failure(message)) => {
                info!("Analysis service declined: {}", message);
                FormPhase::Failed(message)
            }
            Err(e) => {
                debug!("Analysis request failed ({}): {}", e.error_type(), e);
                FormPhase::Failed(FALLBACK_TRANSPORT_ERROR.to_string())
            }
        };
        &self.phase
    }

    /// Runs one full submit cycle against `client`.
    ///
    /// # Errors
    ///
    /// Returns `SubmitRejected` if the submit was not accepted; the phase is
    /// unchanged in that case.
    pub async fn submit(&mut self, client: &AnalysisClient) -> Result<&FormPhase, SubmitRejected> {
        let ticket = self.begin_submit()?;
        let outcome = client.analyze(ticket.url()).await;
        Ok(self.finish(outcome))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, FormPhase::Pending)
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.phase {
            FormPhase::Succeeded(result) => Some(&**result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            FormPhase::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn submit_enabled(&self) -> bool {
        !self.is_pending()
    }

    /// Label of the submit control for the current phase.
    pub fn submit_label(&self) -> &'static str {
        if self.is_pending() {
            SUBMIT_BUSY_LABEL
        } else {
            SUBMIT_LABEL
        }
    }
}
