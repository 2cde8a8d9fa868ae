//! appman CLI entry point
//!
//! Parses the flag surface, builds the logger and the subprocess runner
//! and hands off to the orchestrator. Every fatal condition exits with
//! code 1 after the error has been reported.

use std::process;

use anyhow::Result;
use clap::Parser;

use appman::cli::Cli;
use appman::logger::Logger;
use appman::orchestrator;
use appman::tool::SubprocessRunner;

fn main() {
    let cli = Cli::parse();
    let log = Logger::new(cli.quiet, cli.verbose > 0);

    if let Err(err) = try_main(&cli, &log) {
        log.error(format!("{err:#}"));
        process::exit(1);
    }
}

fn try_main(cli: &Cli, log: &Logger) -> Result<()> {
    let runner = SubprocessRunner;
    orchestrator::run(cli, &runner, log)?;
    Ok(())
}
