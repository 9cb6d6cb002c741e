//! mkenv - Python environment bootstrapper
//!
//! Recreates a project's virtualenv, bootstrapping pip and setuptools from a
//! local wheels directory, and installs the project's requirement files into it.

use clap::Parser;

mod activate;
mod artifact;
mod builder;
mod cache;
mod cli;
mod config;
mod error;
mod hash;
mod installer;
mod logging;
mod pipeline;
mod preflight;
mod process;
mod progress;
mod ui;

#[cfg(test)]
mod test_fixtures;

use cache::HttpFetcher;
use cli::Cli;
use config::RunConfig;
use process::{ChildEnv, SystemRunner};
use ui::{ConsoleReporter, report_error};

fn main() {
    let cli = Cli::parse();
    let debug = cli.debug;
    logging::init(debug);

    let result = RunConfig::from_cli(cli).and_then(|config| {
        pipeline::run(
            &config,
            &ChildEnv::from_process(),
            &mut SystemRunner,
            &mut HttpFetcher::new(),
            &ConsoleReporter::new(),
        )
    });

    if let Err(e) = result {
        let code = e.exit_code();
        report_error(e, debug);
        std::process::exit(code);
    }
}
