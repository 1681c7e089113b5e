#![doc(test(attr(deny(warnings))))]

//! Contact Core drives a step-by-step contact form wizard and delivers the
//! collected message through an EmailJS-compatible service.

pub mod cli;
pub mod config;
pub mod delivery;
pub mod errors;
pub mod form;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Contact Core tracing initialized.");
    });
}
