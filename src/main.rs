//! Richline - command-line tool for compiling line templates into ordered elements

use std::process::ExitCode;

use richline::cli;

fn main() -> ExitCode {
    cli::run()
}
