// src/integrations/mod.rs
//
// External Integrations Module

pub mod form_relay;

pub use form_relay::client::FormRelayClient;
pub use form_relay::transport::{FormTransport, RelayReply};

#[cfg(test)]
pub use form_relay::transport::MockFormTransport;
