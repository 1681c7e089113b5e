#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use contact_core::delivery::{DeliveryError, DeliveryReceipt, DeliveryService, MessagePayload};

/// Test double for the email-delivery collaborator: records every payload
/// and resolves or rejects according to its configured outcome.
pub struct RecordingDelivery {
    calls: Mutex<Vec<MessagePayload>>,
    fail: bool,
}

impl RecordingDelivery {
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            fail: false,
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn payloads(&self) -> Vec<MessagePayload> {
        self.calls.lock().unwrap().clone()
    }
}

impl DeliveryService for RecordingDelivery {
    fn send(&self, payload: &MessagePayload) -> Result<DeliveryReceipt, DeliveryError> {
        self.calls.lock().unwrap().push(payload.clone());
        if self.fail {
            Err(DeliveryError::Transport("connection reset".into()))
        } else {
            Ok(DeliveryReceipt::new())
        }
    }
}
