//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod plan;
mod render;
mod validate;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

pub use render::RenderArgs;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Richline - compile `{n[:spec]}` templates into ordered text/image elements
#[derive(Parser)]
#[command(name = "rln")]
#[command(about = "Richline - compile {n[:spec]} line templates into ordered text/image elements")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a template with arguments and print the composed line
    Render(RenderArgs),
    /// Show the literal/image segment breakdown of a template
    Plan {
        /// Template text to analyze
        template: String,
    },
    /// Check a catalog file for malformed or duplicate templates
    Validate {
        /// Catalog file (.jsonl or .json5) with template definitions
        input: PathBuf,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Render(args) => render::run(args),
        Commands::Plan { template } => plan::run(&template),
        Commands::Validate { input } => validate::run(&input),
    };
    ExitCode::from(code)
}
