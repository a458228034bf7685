//! Gallery CLI - Structural and content validation for the example gallery

use std::process::ExitCode;

use clap::Parser;

use gallery_cli::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
