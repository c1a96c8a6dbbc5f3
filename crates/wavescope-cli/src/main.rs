//! Wavescope CLI - render and inspect signal modulation scenes.

use std::process::ExitCode;

use clap::Parser;

use wavescope_cli::cli_args::{Cli, Commands};
use wavescope_cli::commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { scene, json } => commands::validate::run(&scene, json),
        Commands::Render {
            scene,
            output,
            format,
        } => commands::render::run(&scene, output.as_deref(), &format),
        Commands::Scope {
            scene,
            output,
            format,
        } => commands::scope::run(&scene, &output, &format),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
