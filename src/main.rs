//! emergency-banner CLI
//!
//! Usage: emergency-banner <COMMAND>
//!
//! Commands:
//!   deploy-emergency-banner  Render and publish a banner to static and frontend
//!   remove-emergency-banner  Clear every banner and purge derived layouts

use clap::Parser;

mod cli;
mod commands;
mod logging;
mod ui;

use cli::Cli;
use ui::UiContext;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = logging::init_logging(cli.verbose) {
        eprintln!("warning: {}", err);
    }

    if let Err(err) = commands::dispatch(&cli) {
        let ui = UiContext::new(cli.json, cli.color);
        // Errors go to stderr; JSON mode reports them as a final event on stdout
        ui::error::print_error(&err, ui.json, ui.style);
        std::process::exit(1);
    }
}
