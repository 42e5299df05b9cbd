//! Request body and response envelope of the analysis endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::FALLBACK_APPLICATION_ERROR;
use crate::error_handling::AnalyzeError;

use super::result::AnalysisResult;

/// JSON body of the outbound request: `{"url": "..."}`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnalysisRequest<'a> {
    pub url: &'a str,
}

/// Raw envelope as sent by the service. Only used for decoding.
#[derive(Debug, Deserialize)]
struct ResponseEnvelope {
    #[serde(default)]
    success: Value,
    #[serde(default)]
    message: Value,
    #[serde(default)]
    data: Value,
}

/// Decoded answer of the analysis service.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    /// The service analyzed the URL.
    Success(Box<AnalysisResult>),
    /// The service declined; carries the message to show.
    Failure(String),
}

impl AnalysisOutcome {
    /// Decodes a response body.
    ///
    /// The `success` flag is interpreted by truthiness, so `1` or `"yes"`
    /// count as success and `null`, `0`, `""` or a missing flag as failure.
    /// A failure without a non-empty string `message` gets the fixed fallback
    /// message.
    ///
    /// # Errors
    ///
    /// - `AnalyzeError::Decode` if the body is not a JSON object or `data` does
    ///   not have the `AnalysisResult` shape
    /// - `AnalyzeError::MissingData` if success is reported without `data`
    pub fn from_body(body: &[u8]) -> Result<Self, AnalyzeError> {
        let envelope: ResponseEnvelope = serde_json::from_slice(body)?;

        if !is_truthy(&envelope.success) {
            let message = envelope
                .message
                .as_str()
                .filter(|m| !m.is_empty())
                .unwrap_or(FALLBACK_APPLICATION_ERROR);
            return Ok(AnalysisOutcome::Failure(message.to_string()));
        }

        if envelope.data.is_null() {
            return Err(AnalyzeError::MissingData);
        }
        let result: AnalysisResult = serde_json::from_value(envelope.data)?;
        Ok(AnalysisOutcome::Success(Box::new(result)))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisOutcome::Success(_))
    }

    /// JSON form of the outcome, mirroring the service's envelope.
    pub fn to_json(&self) -> Value {
        match self {
            AnalysisOutcome::Success(result) => serde_json::json!({
                "success": true,
                "data": result,
            }),
            AnalysisOutcome::Failure(message) => serde_json::json!({
                "success": false,
                "message": message,
            }),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
