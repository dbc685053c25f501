use std::process::ExitCode;

use crate::cli::run;

pub mod cli;
mod config;
pub mod domain;
pub mod pipeline;
pub mod snapshot;
pub mod spotify;

fn main() -> ExitCode {
    run()
}
