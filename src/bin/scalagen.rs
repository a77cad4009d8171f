//! Scalagen CLI Binary
//!
//! Stands in for the host build tool: parses the command line, then runs one
//! module command against the application.

use clap::Parser;
use scalagen::cli::{command_listing, map_error, Cli, RunContext};
use scalagen::config::ConfigLoader;
use scalagen::error::ScalagenError;
use scalagen::logging::{init_logging, LoggingConfig};
use scalagen::process::{capture_env, Environment};
use std::io::Write;
use std::process;
use tracing::{info, warn};

fn main() {
    let cli = Cli::parse();
    let env = capture_env();

    let logging_config = build_logging_config(&cli, &env);
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    if cli.list_commands {
        print!("{}", command_listing());
        return;
    }

    let context = match RunContext::new(cli.app.clone(), cli.config.clone(), env) {
        Ok(ctx) => ctx,
        Err(e) => exit_with(&e),
    };

    let result = {
        let mut out = std::io::stdout().lock();
        let result = context.execute(cli.command(), cli.args(), &mut out);
        if let Err(e) = out.flush() {
            warn!(error = %e, "Failed to flush stdout");
        }
        result
    };

    match result {
        Ok(outcome) => info!(?outcome, "Command completed"),
        Err(e) => exit_with(&e),
    }
}

/// Report `e` and terminate with its exit status.
fn exit_with(e: &ScalagenError) -> ! {
    match e {
        // Printed the way the host prints its own guidance.
        ScalagenError::JavaNotFound { .. } => println!("{}", map_error(e)),
        _ => eprintln!("{}", map_error(e)),
    }
    process::exit(e.exit_code());
}

/// Build logging configuration from CLI args and config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, env: &Environment) -> LoggingConfig {
    let loaded = match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(&cli.app, env),
    };
    let mut config = loaded.map(|c| c.logging).unwrap_or_default();

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = file.clone();
    }

    config
}
