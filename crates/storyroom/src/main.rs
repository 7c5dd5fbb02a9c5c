//! Storyroom CLI binary.
//!
//! - Run a roundtable on a brief and print the result
//! - Run the advanced variant with edits, shots, and guidance
//! - Inspect the persona registry and the assembled context

use clap::Parser;
use std::process::ExitCode;
use storyroom::{LogFormat, init_console_telemetry};

mod cli;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error + Send + Sync>> {
    use cli::{Cli, Commands, print_context, print_personas, run_advanced, run_roundtable};

    // Parse command-line arguments
    let cli = Cli::parse();

    // Provider keys may live in .env
    let _ = dotenvy::dotenv();

    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    init_console_telemetry(format, cli.verbose)?;

    // Execute the requested command
    let result = match cli.command {
        Commands::Run(args) => {
            let config = cli::load_config(cli.config.as_deref())?;
            run_roundtable(&args, &config).await?
        }

        Commands::Advanced {
            run,
            edits,
            shots,
            guidance,
        } => {
            let config = cli::load_config(cli.config.as_deref())?;
            run_advanced(&run, edits, shots.as_deref(), guidance, &config).await?
        }

        Commands::Personas => {
            print_personas();
            return Ok(ExitCode::SUCCESS);
        }

        Commands::Context(args) => {
            print_context(&args)?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    // An empty prompt is printed, but the run still counts as failed.
    Ok(if result.is_usable() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
