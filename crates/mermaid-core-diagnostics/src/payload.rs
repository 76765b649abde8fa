//! Renderer error payload decoding.
//!
//! The renderer reports errors as JSON text of the shape
//! `{ "errors": [ { "message": "...", "line": 3, "column": 5 } ] }`. Older or failing renderer
//! paths send a single error object, or plain text. [`parse_payload`] accepts all three and
//! never fails; [`parse_batch_strict`] accepts only the batch shape.

use mermaid_core::{DiagnosticBatch, DiagnosticError, UNKNOWN_POSITION};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Errors from strict payload decoding.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The payload is not valid JSON of the expected shape.
    #[error("malformed diagnostic payload: {0}")]
    Json(#[from] serde_json::Error),
    /// A single-error payload without a `message`.
    #[error("diagnostic payload has no message")]
    MissingMessage,
}

#[derive(Debug, Deserialize)]
struct WireBatch {
    errors: Vec<WireError>,
}

#[derive(Debug, Deserialize)]
struct WireError {
    #[serde(default)]
    message: Option<String>,
    #[serde(default = "unknown_position", deserialize_with = "position")]
    line: i32,
    #[serde(default = "unknown_position", deserialize_with = "position")]
    column: i32,
}

impl WireError {
    fn into_error(self) -> DiagnosticError {
        DiagnosticError::at(self.message.unwrap_or_default(), self.line, self.column)
    }
}

fn unknown_position() -> i32 {
    UNKNOWN_POSITION
}

// Renderers emit `null` for positions they could not determine, and occasionally floats.
fn position<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Option::<serde_json::Number>::deserialize(deserializer)?;
    Ok(number.map_or(UNKNOWN_POSITION, |n| {
        match n.as_i64() {
            Some(value) => value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
            // `as` saturates out-of-range floats.
            None => n.as_f64().map_or(UNKNOWN_POSITION, |value| value.trunc() as i32),
        }
    }))
}

/// Decode a `{ "errors": [...] }` payload.
pub fn parse_batch_strict(raw: &str) -> Result<DiagnosticBatch, PayloadError> {
    let wire: WireBatch = serde_json::from_str(raw)?;
    Ok(wire.errors.into_iter().map(WireError::into_error).collect())
}

/// Decode a single `{ "message": ..., "line": ..., "column": ... }` object.
pub fn parse_error_strict(raw: &str) -> Result<DiagnosticError, PayloadError> {
    let wire: WireError = serde_json::from_str(raw)?;
    if wire.message.is_none() {
        return Err(PayloadError::MissingMessage);
    }
    Ok(wire.into_error())
}

/// Decode a renderer payload, degrading instead of failing.
///
/// Tries the batch shape, then a single error object, and finally wraps the raw text as the
/// message of one error with an unknown position.
pub fn parse_payload(raw: &str) -> DiagnosticBatch {
    let batch_err = match parse_batch_strict(raw) {
        Ok(batch) => {
            log::debug!("renderer reported {} error(s)", batch.len());
            return batch;
        }
        Err(err) => err,
    };

    match parse_error_strict(raw) {
        Ok(error) => {
            log::warn!("renderer payload is a single error object ({batch_err})");
            DiagnosticBatch::new(vec![error])
        }
        Err(single_err) => {
            log::warn!("unrecognized renderer payload ({batch_err}; {single_err}): {raw}");
            DiagnosticBatch::new(vec![DiagnosticError::new(raw)])
        }
    }
}
