//! The email-delivery collaborator boundary.
//!
//! The wizard only sees [`DeliveryService`]; the production implementation
//! is [`emailjs::EmailJsDelivery`]. Payload field names are a fixed template
//! contract; renaming any key breaks delivery silently on the collaborator
//! side, so they are spelled out as struct fields rather than a map.

pub mod emailjs;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::config::ConfigError;
use crate::form::FormRecord;

/// Sentinel substituted for an empty optional company field.
pub const COMPANY_NOT_SPECIFIED: &str = "not specified";

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Delivery credentials unavailable: {0}")]
    Configuration(String),
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Delivery rejected ({status}): {body}")]
    Rejected { status: u16, body: String },
}

impl From<ConfigError> for DeliveryError {
    fn from(err: ConfigError) -> Self {
        DeliveryError::Configuration(err.to_string())
    }
}

/// Template parameters the delivery service expects, keyed exactly as the
/// email template references them.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MessagePayload {
    pub name: String,
    pub surname: String,
    pub company: String,
    pub subject: String,
    pub message: String,
    pub email: String,
}

/// Proof of a completed delivery attempt, for operator logs.
#[derive(Debug, Clone)]
pub struct DeliveryReceipt {
    pub request_id: Uuid,
    pub completed_at: DateTime<Utc>,
}

impl DeliveryReceipt {
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4(),
            completed_at: Utc::now(),
        }
    }
}

impl Default for DeliveryReceipt {
    fn default() -> Self {
        Self::new()
    }
}

/// Abstraction over the external email-delivery service.
pub trait DeliveryService: Send + Sync {
    fn send(&self, payload: &MessagePayload) -> Result<DeliveryReceipt, DeliveryError>;
}

/// Builds the outbound payload from the accumulated record: every field is
/// trimmed, and an empty company is replaced by [`COMPANY_NOT_SPECIFIED`].
pub fn build_payload(record: &FormRecord) -> MessagePayload {
    let field = |key: &str| record.get(key).trim().to_string();
    let company = {
        let trimmed = field("company");
        if trimmed.is_empty() {
            COMPANY_NOT_SPECIFIED.to_string()
        } else {
            trimmed
        }
    };
    MessagePayload {
        name: field("name"),
        surname: field("surname"),
        company,
        subject: field("subject"),
        message: field("message"),
        email: field("email"),
    }
}

/// Stand-in used when delivery credentials could not be resolved at startup.
///
/// Keeps the wizard functional: every submission fails with a configuration
/// error, which the wizard surfaces as a generic retry prompt while the logs
/// retain the real cause.
pub struct UnconfiguredDelivery {
    reason: String,
}

impl UnconfiguredDelivery {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl DeliveryService for UnconfiguredDelivery {
    fn send(&self, _payload: &MessagePayload) -> Result<DeliveryReceipt, DeliveryError> {
        Err(DeliveryError::Configuration(self.reason.clone()))
    }
}
