//! appman-serve - run the project under uwsgi
//!
//! Thin wrapper: change to the project root, launch `uwsgi --ini` and pass
//! the child's exit code through.

use std::path::PathBuf;
use std::process::{self, Command};

use anyhow::{bail, Context, Result};
use clap::Parser;

use appman::logger::Logger;

/// Run the project under uwsgi
#[derive(Parser, Debug)]
#[command(name = "appman-serve")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// uwsgi ini file, relative to the project root
    #[arg(long, value_name = "FILE", default_value = "uwsgi.conf")]
    ini: PathBuf,

    /// Project root to run from (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    workdir: Option<PathBuf>,

    /// Remove output (errors will be reported)
    #[arg(short, long)]
    quiet: bool,

    /// Increase verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    let log = Logger::new(cli.quiet, cli.verbose > 0);

    match run(&cli, &log) {
        Ok(code) => process::exit(code),
        Err(err) => {
            log.error(format!("{err:#}"));
            process::exit(1);
        }
    }
}

fn run(cli: &Cli, log: &Logger) -> Result<i32> {
    if let Some(dir) = &cli.workdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to chdir to: {}", dir.display()))?;
    }

    if !cli.ini.exists() {
        bail!("{} not located, cannot run", cli.ini.display());
    }

    log.info(format!("Running command: uwsgi --ini {}", cli.ini.display()));
    let status = Command::new("uwsgi")
        .arg("--ini")
        .arg(&cli.ini)
        .status()
        .context("failed to launch uwsgi")?;

    // pass the server's own exit code through
    Ok(status.code().unwrap_or(1))
}
