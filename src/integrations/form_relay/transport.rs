// src/integrations/form_relay/transport.rs
use async_trait::async_trait;

use crate::domain::FormFields;
use crate::error::AppResult;

/// Raw reply from the relay. Interpretation happens in the domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayReply {
    pub status: u16,
    pub body: String,
}

impl RelayReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success_status(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One POST of a form snapshot to the relay.
///
/// Implementations make exactly one attempt: no retries, no backoff.
/// `Err` means no reply was obtained at all.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormTransport: Send + Sync {
    async fn send(&self, fields: &FormFields) -> AppResult<RelayReply>;
}
