//! capigen - generate a C header and Markdown reference from one API definition
//!
//! This is the entry point of the CLI: it checks the single positional
//! argument, loads configuration, sets up logging and runs the generation
//! pipeline.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, ParsedArgs};
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Argument errors are settled before any file is read
    let cli = match Cli::parse_args() {
        ParsedArgs::Run(cli) => cli,
        ParsedArgs::Info(e) => e.exit(),
        ParsedArgs::Usage => {
            println!("{}", cli::USAGE);
            process::exit(1);
        }
    };

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => exit_with(&e, output::should_color(true)),
    };

    let use_color = output::should_color(config.output.color);
    control::set_override(use_color);

    if let Err(e) = init_logging(&config) {
        eprintln!("{}", e);
    }

    match run(&cli, &config) {
        Ok(()) => process::exit(0),
        Err(e) => exit_with(&e, use_color),
    }
}

/// Main application logic
#[instrument(skip_all, fields(definition = %cli.definition.display()))]
fn run(cli: &Cli, config: &Config) -> Result<()> {
    let timer = Timer::new("cli_execution");
    let mut output = OutputWriter::new(control::SHOULD_COLORIZE.should_colorize(), config.output.quiet);

    let generated = handlers::handle_generate(&cli.definition, config, &mut output)?;
    tracing::info!(
        artifacts = 1 + usize::from(generated.doc.is_some()),
        elapsed_ms = timer.elapsed().as_millis() as u64,
        "Generation finished"
    );
    Ok(())
}

/// Initialize the logging system from config and environment
fn init_logging(config: &Config) -> Result<()> {
    let mut logging_config = LoggingConfig::from_settings(&config.logging);
    logging_config.merge_with_env();
    logging::init_logging(logging_config)
}

fn exit_with(error: &error::Error, use_color: bool) -> ! {
    eprintln!("{}", error::format_error(error, use_color));
    process::exit(error.exit_code());
}
