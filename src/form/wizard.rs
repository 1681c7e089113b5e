//! The contact form wizard state machine.
//!
//! The wizard walks a [`FieldStep`] sequence one field at a time, validates
//! required fields on step advance and again as a final gate, and performs a
//! single terminal submission through a [`DeliveryService`]. Every failure
//! path resolves into a [`SubmissionStatus`] value; no error escapes the
//! wizard boundary.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::delivery::{build_payload, DeliveryError, DeliveryService};
use crate::form::{FieldStep, FormRecord};

/// How long a success or failure message stays on screen before reverting
/// to idle.
pub const STATUS_DISPLAY_DELAY: Duration = Duration::from_secs(5);

/// How long the success state stays visible before the wizard resets.
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_millis(1500);

pub const MSG_FIELD_REQUIRED: &str = "This field is required";
pub const MSG_SENDING: &str = "Sending message...";
pub const MSG_SENT: &str = "Message sent successfully!";
pub const MSG_SEND_FAILED: &str = "Could not send the message. Please try again.";

/// Submission lifecycle, independent of which step is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Sending,
    Succeeded(String),
    Failed(String),
}

impl SubmissionStatus {
    pub fn is_idle(&self) -> bool {
        matches!(self, SubmissionStatus::Idle)
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, SubmissionStatus::Sending)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Succeeded(text) | SubmissionStatus::Failed(text) => Some(text),
            SubmissionStatus::Sending => Some(MSG_SENDING),
            SubmissionStatus::Idle => None,
        }
    }
}

/// Result of a [`ContactWizard::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved forward one step.
    Moved,
    /// The active step is required and blank; the index did not change.
    Rejected,
    /// The last step was active, so advance ran the submission.
    Submitted(SubmitOutcome),
}

/// Result of a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The collaborator accepted the message.
    Delivered,
    /// The collaborator rejected or the transport failed; record preserved.
    Failed,
    /// The final gate rejected the attempt (missing required field or a
    /// submission already in flight). The collaborator was not invoked.
    Blocked,
}

/// Result of a [`ContactWizard::retreat`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetreatOutcome {
    MovedBack,
    /// Already at the first step; the caller should leave the wizard.
    Exit,
}

/// Timer transitions applied by [`ContactWizard::tick`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub status_cleared: bool,
    pub reset: bool,
}

/// Linear multi-step form wizard with a tri-state submission lifecycle.
///
/// The step index only ever changes by one through `advance`/`retreat`, and
/// entered values survive backward navigation. Timer-driven reversion is
/// modeled as explicit deadlines applied by [`tick`](Self::tick), so an
/// abandoned wizard never mutates state after teardown.
pub struct ContactWizard {
    steps: Vec<FieldStep>,
    record: FormRecord,
    current: usize,
    status: SubmissionStatus,
    delivery: Arc<dyn DeliveryService>,
    status_expiry: Option<Instant>,
    reset_at: Option<Instant>,
}

impl ContactWizard {
    /// Builds a wizard over `steps`. At least one step is required.
    pub fn new(steps: Vec<FieldStep>, delivery: Arc<dyn DeliveryService>) -> Self {
        assert!(!steps.is_empty(), "a wizard needs at least one step");
        Self {
            steps,
            record: FormRecord::new(),
            current: 0,
            status: SubmissionStatus::Idle,
            delivery,
            status_expiry: None,
            reset_at: None,
        }
    }

    pub fn current_step(&self) -> &FieldStep {
        &self.steps[self.current]
    }

    pub fn step_index(&self) -> usize {
        self.current
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn is_last_step(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Overwrites exactly one field. Validation is deferred to
    /// `advance`/`submit`.
    pub fn set_field(&mut self, field: &'static str, value: impl Into<String>) {
        self.record.set(field, value);
    }

    /// Overwrites the active step's field.
    pub fn set_current(&mut self, value: impl Into<String>) {
        let field = self.steps[self.current].field;
        self.record.set(field, value);
    }

    /// Current value of the active step's field.
    pub fn current_value(&self) -> &str {
        self.record.get(self.steps[self.current].field)
    }

    /// Moves to the next step, or submits when the last step is active.
    ///
    /// A required step with a blank value blocks the move and raises a
    /// transient failure status instead.
    pub fn advance(&mut self, now: Instant) -> AdvanceOutcome {
        if self.status.is_sending() {
            return AdvanceOutcome::Rejected;
        }
        let step = &self.steps[self.current];
        if step.required && self.record.is_blank(step.field) {
            self.fail(MSG_FIELD_REQUIRED.to_string(), now);
            return AdvanceOutcome::Rejected;
        }
        if self.is_last_step() {
            return AdvanceOutcome::Submitted(self.submit(now));
        }
        if matches!(self.status, SubmissionStatus::Failed(_)) {
            self.clear_status();
        }
        self.current += 1;
        AdvanceOutcome::Moved
    }

    /// Moves back one step; at step zero signals the caller to exit the
    /// wizard. Entered values are never discarded here.
    pub fn retreat(&mut self) -> RetreatOutcome {
        if self.current == 0 {
            RetreatOutcome::Exit
        } else {
            self.current -= 1;
            RetreatOutcome::MovedBack
        }
    }

    /// Runs the final gate and, on pass, hands the payload to the delivery
    /// collaborator exactly once. No automatic retries.
    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        if self.status.is_sending() {
            return SubmitOutcome::Blocked;
        }
        if let Some(step) = self.first_missing_required() {
            let message = format!("The {} field is required", step.label);
            self.fail(message, now);
            return SubmitOutcome::Blocked;
        }

        self.status = SubmissionStatus::Sending;
        self.status_expiry = None;
        self.reset_at = None;

        let payload = build_payload(&self.record);
        match self.delivery.send(&payload) {
            Ok(receipt) => {
                tracing::info!(
                    request_id = %receipt.request_id,
                    completed_at = %receipt.completed_at,
                    "contact message delivered"
                );
                self.status = SubmissionStatus::Succeeded(MSG_SENT.to_string());
                self.status_expiry = Some(now + STATUS_DISPLAY_DELAY);
                self.reset_at = Some(now + SUCCESS_RESET_DELAY);
                SubmitOutcome::Delivered
            }
            Err(err) => {
                match &err {
                    DeliveryError::Configuration(_) => {
                        tracing::error!(error = %err, "delivery credentials missing or invalid")
                    }
                    _ => tracing::error!(error = %err, "contact message delivery failed"),
                }
                self.fail(MSG_SEND_FAILED.to_string(), now);
                SubmitOutcome::Failed
            }
        }
    }

    /// Applies any scheduled reversion whose deadline has passed.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if let Some(at) = self.reset_at {
            if now >= at {
                self.reset_at = None;
                self.record.clear();
                self.current = 0;
                outcome.reset = true;
            }
        }
        if let Some(at) = self.status_expiry {
            if now >= at {
                self.clear_status();
                outcome.status_cleared = true;
            }
        }
        outcome
    }

    /// Drops pending deadlines so a torn-down wizard never fires them.
    pub fn cancel_timers(&mut self) {
        self.status_expiry = None;
        self.reset_at = None;
    }

    fn first_missing_required(&self) -> Option<&FieldStep> {
        self.steps
            .iter()
            .find(|step| step.required && self.record.is_blank(step.field))
    }

    fn fail(&mut self, message: String, now: Instant) {
        self.status = SubmissionStatus::Failed(message);
        self.status_expiry = Some(now + STATUS_DISPLAY_DELAY);
    }

    fn clear_status(&mut self) {
        self.status = SubmissionStatus::Idle;
        self.status_expiry = None;
    }
}
