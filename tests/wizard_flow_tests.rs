mod common;

use std::time::Instant;

use common::RecordingDelivery;
use contact_core::form::wizard::{
    AdvanceOutcome, ContactWizard, RetreatOutcome, SubmissionStatus, SubmitOutcome,
    MSG_FIELD_REQUIRED, STATUS_DISPLAY_DELAY, SUCCESS_RESET_DELAY,
};
use contact_core::form::{contact_steps, FieldStep, InputKind};

fn populated_wizard() -> ContactWizard {
    let mut wizard = ContactWizard::new(contact_steps(), RecordingDelivery::succeeding());
    wizard.set_field("name", "Ann");
    wizard.set_field("email", "ann@example.com");
    wizard.set_field("subject", "Project");
    wizard.set_field("message", "Let's talk.");
    wizard
}

#[test]
fn k_advances_reach_step_k() {
    let n = contact_steps().len();
    for k in 0..n {
        let mut wizard = populated_wizard();
        let now = Instant::now();
        for _ in 0..k {
            assert_eq!(wizard.advance(now), AdvanceOutcome::Moved);
        }
        assert_eq!(wizard.step_index(), k);
    }
}

#[test]
fn retreat_from_step_zero_signals_exit_not_negative_index() {
    let mut wizard = populated_wizard();
    assert_eq!(wizard.retreat(), RetreatOutcome::Exit);
    assert_eq!(wizard.step_index(), 0);
}

#[test]
fn backward_then_forward_navigation_preserves_values() {
    let mut wizard = ContactWizard::new(contact_steps(), RecordingDelivery::succeeding());
    let now = Instant::now();
    wizard.set_current("Ann");
    wizard.advance(now);
    wizard.set_current("Smith");
    wizard.retreat();
    assert_eq!(wizard.current_value(), "Ann");
    wizard.advance(now);
    assert_eq!(wizard.current_value(), "Smith");
}

#[test]
fn blank_required_field_blocks_and_flags_failure() {
    let mut wizard = ContactWizard::new(contact_steps(), RecordingDelivery::succeeding());
    let now = Instant::now();
    wizard.set_current("   ");
    assert_eq!(wizard.advance(now), AdvanceOutcome::Rejected);
    assert_eq!(wizard.step_index(), 0);
    assert_eq!(
        wizard.status(),
        &SubmissionStatus::Failed(MSG_FIELD_REQUIRED.to_string())
    );
    // The failure is transient: it clears after the display delay.
    let outcome = wizard.tick(now + STATUS_DISPLAY_DELAY);
    assert!(outcome.status_cleared);
    assert!(wizard.status().is_idle());
}

#[test]
fn optional_empty_step_advances_while_required_empty_blocks() {
    let steps = vec![
        FieldStep::new("name", "Name", InputKind::Text, ""),
        FieldStep::new("company", "Company", InputKind::Text, "").optional(),
        FieldStep::new("email", "Email", InputKind::Email, ""),
    ];
    let mut wizard = ContactWizard::new(steps, RecordingDelivery::succeeding());
    let now = Instant::now();
    assert_eq!(wizard.advance(now), AdvanceOutcome::Rejected);
    wizard.set_current("Ann");
    assert_eq!(wizard.advance(now), AdvanceOutcome::Moved);
    // Company left empty on purpose.
    assert_eq!(wizard.advance(now), AdvanceOutcome::Moved);
    assert_eq!(wizard.step_index(), 2);
}

#[test]
fn successful_submission_resets_after_display_delay() {
    let delivery = RecordingDelivery::succeeding();
    let mut wizard = ContactWizard::new(contact_steps(), delivery.clone());
    let now = Instant::now();
    wizard.set_field("name", "Ann");
    wizard.set_field("email", "ann@example.com");
    wizard.set_field("subject", "Project");
    wizard.set_field("message", "Let's talk.");

    assert_eq!(wizard.submit(now), SubmitOutcome::Delivered);
    assert!(matches!(wizard.status(), SubmissionStatus::Succeeded(_)));
    assert_eq!(delivery.call_count(), 1);

    let outcome = wizard.tick(now + SUCCESS_RESET_DELAY);
    assert!(outcome.reset);
    assert_eq!(wizard.step_index(), 0);
    assert!(wizard.record().is_empty());
}

#[test]
fn rejected_delivery_keeps_record_intact() {
    let delivery = RecordingDelivery::failing();
    let mut wizard = ContactWizard::new(contact_steps(), delivery.clone());
    let now = Instant::now();
    wizard.set_field("name", "Ann");
    wizard.set_field("email", "ann@example.com");
    wizard.set_field("subject", "Project");
    wizard.set_field("message", "Let's talk.");

    assert_eq!(wizard.submit(now), SubmitOutcome::Failed);
    assert!(matches!(wizard.status(), SubmissionStatus::Failed(_)));
    assert_eq!(wizard.record().get("name"), "Ann");
    assert_eq!(wizard.record().get("message"), "Let's talk.");
    assert_eq!(delivery.call_count(), 1);

    // A retry after correction reuses the preserved record.
    let retry_at = now + STATUS_DISPLAY_DELAY;
    wizard.tick(retry_at);
    assert_eq!(wizard.submit(retry_at), SubmitOutcome::Failed);
    assert_eq!(delivery.call_count(), 2);
}

#[test]
fn submit_without_required_fields_names_the_first_missing_one() {
    let delivery = RecordingDelivery::succeeding();
    let mut wizard = ContactWizard::new(contact_steps(), delivery.clone());
    let now = Instant::now();
    wizard.set_field("name", "Ann");
    // email, subject, message still blank; email comes first in step order.
    assert_eq!(wizard.submit(now), SubmitOutcome::Blocked);
    assert_eq!(
        wizard.status(),
        &SubmissionStatus::Failed("The Email field is required".to_string())
    );
    assert_eq!(delivery.call_count(), 0);
}

#[test]
fn wizard_is_reusable_after_reset() {
    let delivery = RecordingDelivery::succeeding();
    let mut wizard = ContactWizard::new(contact_steps(), delivery.clone());
    let now = Instant::now();
    for round in 0..2 {
        wizard.set_field("name", "Ann");
        wizard.set_field("email", "ann@example.com");
        wizard.set_field("subject", "Project");
        wizard.set_field("message", "Let's talk.");
        assert_eq!(wizard.submit(now), SubmitOutcome::Delivered);
        wizard.tick(now + SUCCESS_RESET_DELAY + STATUS_DISPLAY_DELAY);
        assert_eq!(wizard.step_index(), 0);
        assert!(wizard.record().is_empty());
        assert!(wizard.status().is_idle());
        assert_eq!(delivery.call_count(), round + 1);
    }
}
