//! Interactive driver for one wizard session.
//!
//! Renders the step counter, progress bar, and placeholder hint, feeds
//! entered text into the wizard, and reflects the submission status inline.
//! `:back` retreats one step; retreating from the first step leaves the
//! wizard and returns to the welcome screen with entered values retained.

use std::thread;
use std::time::Instant;

use dialoguer::theme::ColorfulTheme;

use crate::cli::{io, output, screen};
use crate::errors::CliError;
use crate::form::wizard::{
    AdvanceOutcome, ContactWizard, RetreatOutcome, SubmissionStatus, SubmitOutcome, MSG_SENDING,
    SUCCESS_RESET_DELAY,
};
use crate::form::InputKind;

const BACK_COMMAND: &str = ":back";
const QUIT_COMMAND: &str = ":quit";

pub const TOAST_MESSAGE: &str = "Message sent! Thanks for getting in touch.";

const PROGRESS_WIDTH: usize = 24;

/// How a wizard session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The message was delivered and the wizard reset.
    Submitted,
    /// The user left the form; entered values stay in the wizard.
    Exited,
}

pub fn run_wizard(
    wizard: &mut ContactWizard,
    theme: &ColorfulTheme,
) -> Result<SessionEnd, CliError> {
    loop {
        wizard.tick(Instant::now());
        screen::clear()?;
        render_step(wizard);

        let label = prompt_label(wizard);
        let entered = io::prompt_text(theme, &label, Some(wizard.current_value()))?;
        match entered.trim() {
            QUIT_COMMAND => {
                wizard.cancel_timers();
                return Ok(SessionEnd::Exited);
            }
            BACK_COMMAND => {
                if wizard.retreat() == RetreatOutcome::Exit {
                    return Ok(SessionEnd::Exited);
                }
                continue;
            }
            _ => {}
        }
        wizard.set_current(entered);

        // Announce the blocking delivery call, unless the step gate is
        // about to reject the attempt anyway.
        let step = wizard.current_step();
        if wizard.is_last_step() && !(step.required && wizard.record().is_blank(step.field)) {
            io::print_info(MSG_SENDING);
        }
        match wizard.advance(Instant::now()) {
            AdvanceOutcome::Moved | AdvanceOutcome::Rejected => continue,
            AdvanceOutcome::Submitted(SubmitOutcome::Delivered) => {
                if let Some(message) = wizard.status().message() {
                    io::print_success(message);
                }
                output::toast(TOAST_MESSAGE);
                thread::sleep(SUCCESS_RESET_DELAY);
                wizard.tick(Instant::now());
                return Ok(SessionEnd::Submitted);
            }
            AdvanceOutcome::Submitted(SubmitOutcome::Failed | SubmitOutcome::Blocked) => {
                // Status stays on screen until the display delay passes or
                // the user moves on; the next render shows it.
                continue;
            }
        }
    }
}

fn render_step(wizard: &ContactWizard) {
    let step = wizard.current_step();
    let position = wizard.step_index() + 1;
    let total = wizard.step_count();

    output::section("Contact");
    println!(
        "{} Step {} of {}",
        output::progress_bar(position, total, PROGRESS_WIDTH),
        position,
        total
    );
    println!();
    io::print_info(step.placeholder);
    match wizard.status() {
        SubmissionStatus::Idle => {}
        SubmissionStatus::Sending => io::print_info(MSG_SENDING),
        SubmissionStatus::Succeeded(text) => io::print_success(text),
        SubmissionStatus::Failed(text) => io::print_error(text),
    }
    let mut hints = vec!["Enter submits the field".to_string()];
    if wizard.step_index() > 0 {
        hints.push(format!("{BACK_COMMAND} returns to the previous field"));
    } else {
        hints.push(format!("{BACK_COMMAND} leaves the form"));
    }
    hints.push(format!("{QUIT_COMMAND} exits"));
    println!("{}", hints.join(" · "));
    if step.kind == InputKind::Multiline {
        println!("Write your message on one line; it is sent as-is.");
    }
    println!();
}

fn prompt_label(wizard: &ContactWizard) -> String {
    let step = wizard.current_step();
    if step.required {
        format!("{} *", step.label)
    } else {
        step.label.to_string()
    }
}
