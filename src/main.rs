//! SimpleChat build tool
//!
//! Drives CMake for the SimpleChat repository: one configure and one compile
//! per requested build type, each into its own directory under `build/`.
//!
//! ## Architecture
//!
//! ```text
//! cli → commands (token dispatch) → build/lifecycle → build/cmake → cmake
//! ```

mod build;
mod cli;
mod commands;
mod config;
mod error;
mod exec;
mod utils;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use error::BuildError;
use utils::terminal;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<BuildError>() {
            Some(build_err) => {
                build_err.display_with_hints();
                ExitCode::from(build_err.exit_code())
            }
            None => {
                terminal::print_error(&format!("{:#}", err));
                ExitCode::FAILURE
            }
        },
    }
}
