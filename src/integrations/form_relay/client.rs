// src/integrations/form_relay/client.rs
//
// Form relay HTTP client
//
// ARCHITECTURE:
// - Multipart POST of a form snapshot to the relay endpoint
// - Returns the raw status + body; the domain decides what it means
// - Used by SubmissionController through the FormTransport port
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Exactly one attempt per call
// - Network failures surface as AppError::Transport

use async_trait::async_trait;
use log::debug;
use reqwest::{header, multipart, Client};

use super::transport::{FormTransport, RelayReply};
use crate::config::FormConfig;
use crate::domain::FormFields;
use crate::error::{AppError, AppResult};

pub struct FormRelayClient {
    endpoint: String,
    http_client: Client,
}

impl FormRelayClient {
    /// Create a client for the configured endpoint
    pub fn new(config: &FormConfig) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| AppError::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            http_client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One text part per field, in snapshot order
    fn build_form(fields: &FormFields) -> multipart::Form {
        fields.iter().fold(multipart::Form::new(), |form, field| {
            form.text(field.name.clone(), field.value.clone())
        })
    }
}

#[async_trait]
impl FormTransport for FormRelayClient {
    async fn send(&self, fields: &FormFields) -> AppResult<RelayReply> {
        debug!("posting {} form fields to {}", fields.len(), self.endpoint);

        let response = self
            .http_client
            .post(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .multipart(Self::build_form(fields))
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("Form relay request failed: {}", e)))?;

        let status = response.status().as_u16();

        let body = response
            .text()
            .await
            .map_err(|e| {
                AppError::Transport(format!("Failed to read form relay response: {}", e))
            })?;

        debug!("form relay answered with status {}", status);

        Ok(RelayReply { status, body })
    }
}
