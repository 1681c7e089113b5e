pub mod io;
pub mod output;
pub mod screen;
pub mod session;

use std::sync::Arc;

use dialoguer::theme::ColorfulTheme;

use crate::config::DeliveryConfig;
use crate::delivery::{emailjs::EmailJsDelivery, DeliveryService, UnconfiguredDelivery};
use crate::errors::CliError;
use crate::form::{contact_steps, wizard::ContactWizard};
use crate::utils::build_info;

const WELCOME_TITLE: &str = "Got something in mind?";
const WELCOME_TAGLINE: &str = "I'd love to hear about your ideas and projects.";
const MENU_START: &str = "Let's create something";
const MENU_EXIT: &str = "Exit";

/// CLI entry point: argument dispatch, then the interactive welcome loop.
pub fn run_cli() -> Result<(), CliError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("--version" | "-V") => {
            println!("{}", build_info::current().summary());
            Ok(())
        }
        Some("--check-config") => check_config(),
        Some("--help" | "-h") => {
            print_help();
            Ok(())
        }
        Some(other) => Err(CliError::Command(format!("unknown argument: {other}"))),
        None => run_interactive(),
    }
}

fn print_help() {
    println!("contact_core_cli: step-by-step contact form");
    println!();
    println!("USAGE:");
    println!("  contact_core_cli               start the interactive form");
    println!("  contact_core_cli --check-config  verify delivery credentials");
    println!("  contact_core_cli --version       print version and build info");
    println!();
    println!("Delivery credentials are read from EMAILJS_SERVICE_ID,");
    println!("EMAILJS_TEMPLATE_ID and EMAILJS_PUBLIC_KEY, with a JSON config");
    println!("file fallback under the platform config directory.");
}

fn check_config() -> Result<(), CliError> {
    let config = DeliveryConfig::resolve();
    config.validate()?;
    output::success("Delivery credentials are complete.");
    Ok(())
}

fn run_interactive() -> Result<(), CliError> {
    let delivery = build_delivery();
    let theme = ColorfulTheme::default();
    let mut wizard: Option<ContactWizard> = None;

    loop {
        screen::clear()?;
        output::section(WELCOME_TITLE);
        io::print_info(WELCOME_TAGLINE);
        println!();

        let choice =
            io::select_option(&theme, "What would you like to do?", &[MENU_START, MENU_EXIT])?;
        if choice == 1 {
            break;
        }

        // Entered values survive leaving the form; only a delivered
        // submission discards the wizard.
        let active = wizard
            .get_or_insert_with(|| ContactWizard::new(contact_steps(), delivery.clone()));
        match session::run_wizard(active, &theme)? {
            session::SessionEnd::Submitted => {
                wizard = None;
            }
            session::SessionEnd::Exited => {}
        }
    }
    Ok(())
}

fn build_delivery() -> Arc<dyn DeliveryService> {
    let config = DeliveryConfig::resolve();
    if let Err(err) = config.validate() {
        tracing::error!(error = %err, "delivery credentials incomplete; submissions will fail");
        output::warning("Delivery credentials are not configured; messages cannot be sent yet.");
        return Arc::new(UnconfiguredDelivery::new(err.to_string()));
    }
    match EmailJsDelivery::new(config) {
        Ok(client) => Arc::new(client),
        Err(err) => {
            tracing::error!(error = %err, "failed to build delivery client");
            Arc::new(UnconfiguredDelivery::new(err.to_string()))
        }
    }
}
