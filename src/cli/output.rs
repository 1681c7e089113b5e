use colored::Colorize;
use std::fmt;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
    Toast,
}

fn apply_style(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()).bold().to_string(),
        MessageKind::Info => format!("[i] {text}").cyan().to_string(),
        MessageKind::Success => format!("[✓] {text}").green().to_string(),
        MessageKind::Warning => format!("[!] {text}").yellow().to_string(),
        MessageKind::Error => format!("[x] {text}").red().to_string(),
        MessageKind::Toast => format!("  ✉ {text}").green().bold().to_string(),
    }
}

pub fn emit(kind: MessageKind, message: impl fmt::Display) {
    println!("{}", apply_style(kind, message));
}

pub fn info(message: impl fmt::Display) {
    emit(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    emit(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    emit(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    emit(MessageKind::Error, message);
}

pub fn section(message: impl fmt::Display) {
    emit(MessageKind::Section, message);
}

/// Transient banner shown after a delivered message.
pub fn toast(message: impl fmt::Display) {
    emit(MessageKind::Toast, message);
}

/// Simple text progress bar for the step counter.
pub fn progress_bar(position: usize, total: usize, width: usize) -> String {
    let total = total.max(1);
    let filled = (position * width).div_ceil(total).min(width);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}
