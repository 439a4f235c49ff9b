//! shipa-action - apply Shipa manifests from CI

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use shipa_action::cli::Cli;
use shipa_action::output::json;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json_mode = cli.json;
    init_tracing(cli.debug);

    match cli.run() {
        Ok(code) => code,
        Err(e) => {
            let message = format!("{e:#}");
            match json::format_error(&message, json::error_code(&e)) {
                Ok(doc) if json_mode => println!("{doc}"),
                _ => eprintln!("Error: {message}"),
            }
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout stays clean for `--json`.
fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
