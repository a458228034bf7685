//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;
use crate::output::OutputContext;

/// Structural and content validation for the example gallery
#[derive(Parser)]
#[command(
    name = "gallery",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate every example unit under a gallery root
    Validate(commands::validate::ValidateArgs),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error on fatal failures (discovery, report I/O); check
    /// failures surface through the returned exit code instead.
    pub fn run(self) -> Result<ExitCode> {
        let Cli { quiet, no_color, command } = self;
        match command {
            Command::Version => {
                commands::version::run();
                Ok(ExitCode::SUCCESS)
            }
            Command::Validate(args) => {
                let ctx = OutputContext::new(no_color, quiet);
                commands::validate::run(&ctx, &args)
            }
        }
    }
}
