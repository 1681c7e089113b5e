//! EmailJS REST client.
//!
//! Speaks the public send endpoint: a single JSON `POST` carrying the
//! service id, template id, public key (`user_id`), and the template
//! parameters. Any non-success status is a rejection; the body is kept for
//! the logs.

use std::time::Duration;

use serde::Serialize;

use crate::config::DeliveryConfig;

use super::{DeliveryError, DeliveryReceipt, DeliveryService, MessagePayload};

/// Canonical EmailJS send endpoint.
pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a MessagePayload,
}

pub struct EmailJsDelivery {
    client: reqwest::blocking::Client,
    config: DeliveryConfig,
    endpoint: String,
}

impl EmailJsDelivery {
    /// Builds a client from validated credentials. Fails up front when a
    /// credential is missing so misconfiguration is visible before the
    /// first submit attempt.
    pub fn new(config: DeliveryConfig) -> Result<Self, DeliveryError> {
        config.validate()?;
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| DeliveryError::Transport(err.to_string()))?;
        Ok(Self {
            client,
            config,
            endpoint: EMAILJS_SEND_URL.to_string(),
        })
    }

    /// Points the client at a different endpoint. Test servers and
    /// self-hosted EmailJS-compatible deployments use this.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl DeliveryService for EmailJsDelivery {
    fn send(&self, payload: &MessagePayload) -> Result<DeliveryReceipt, DeliveryError> {
        let request = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: payload,
        };
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .map_err(|err| DeliveryError::Transport(err.to_string()))?;
        let status = response.status();
        if status.is_success() {
            Ok(DeliveryReceipt::new())
        } else {
            let body = response.text().unwrap_or_default();
            Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}
