// src/domain/relay_response.rs
//
// Structured reply from the form relay.
//
// The shape is validated before any branching happens: a body that is not a
// JSON object with a boolean-like `success` is rejected as a whole, never
// partially read.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    pub message: Option<String>,
}

impl RelayResponse {
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }

    /// Parse and validate a raw response body
    pub fn from_json(body: &str) -> DomainResult<Self> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| DomainError::MalformedPayload(format!("body is not JSON: {}", e)))?;

        let object = value.as_object().ok_or_else(|| {
            DomainError::MalformedPayload("expected a JSON object".to_string())
        })?;

        let success = object
            .get("success")
            .ok_or_else(|| DomainError::MalformedPayload("missing `success` field".to_string()))
            .and_then(truthiness)?;

        let message = match object.get("message") {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            Some(other) => {
                return Err(DomainError::MalformedPayload(format!(
                    "`message` must be a string, got {}",
                    other
                )))
            }
        };

        Ok(Self { success, message })
    }

    /// Message to show for a rejection, or `fallback` when the relay sent none
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.message.as_deref().unwrap_or(fallback)
    }
}

/// Boolean-like interpretation of the `success` indicator
fn truthiness(value: &Value) -> DomainResult<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => Ok(n.as_f64().map_or(false, |f| f != 0.0)),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(DomainError::MalformedPayload(format!(
                "`success` is not boolean-like: {:?}",
                other
            ))),
        },
        other => Err(DomainError::MalformedPayload(format!(
            "`success` is not boolean-like: {}",
            other
        ))),
    }
}
