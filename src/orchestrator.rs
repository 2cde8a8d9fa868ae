//! Run orchestration
//!
//! Sequences the stages of a run: path resolution, output staging,
//! per-app paketization with asset synchronization, bundle generation and
//! the optional webpack export. Everything is sequential; the first fatal
//! error aborts the run.

use crate::apps;
use crate::bundle::{self, BundleOptions};
use crate::cli::Cli;
use crate::error::AppmanResult;
use crate::export::{self, IgnoreSpec};
use crate::logger::Logger;
use crate::packager::AppPackager;
use crate::paths;
use crate::staging;
use crate::tool::ToolRunner;

/// Execute a full appman run as described by the parsed CLI.
pub fn run<R: ToolRunner + ?Sized>(cli: &Cli, runner: &R, log: &Logger) -> AppmanResult<()> {
    let paths = paths::resolve(
        cli.workdir.as_deref(),
        &cli.devdir,
        &cli.appsdir,
        &cli.outdir,
        log,
    )?;

    staging::ensure_dir(&paths.output, log)?;
    staging::reset_apps_output(
        &paths.apps_output,
        &paths.output.join(&cli.bundle_name),
        cli.clean_output,
        log,
    )?;

    let mut manifest = Vec::new();
    let mut bundle_dir = paths.output.clone();

    if cli.init {
        log.info("Initializing. Skipping package paketization");
        log.info("Initializing dev dir. Optimize: false, Debug: true");
        staging::make_dir(&paths.dev, log)?;
        staging::make_dir(&paths.apps, log)?;
        log.info("Setting outdir for bundle to devdir");
        bundle_dir = paths.dev.clone();
    } else if cli.no_paketize {
        log.info("Skipping paketization");
    } else {
        let discovered = apps::discover(&paths.apps, log)?;
        let packager = AppPackager::new(&paths, runner, log);
        manifest = packager.package_all(&discovered)?;
    }

    if !cli.init && cli.no_bundle {
        log.info("Skipping generation of bundle");
    } else {
        // webpack exports default to a non-debug bundle; --init always
        // bundles for development
        let debug = if cli.webpack.is_some() {
            cli.web_debug
        } else if cli.init {
            true
        } else {
            !cli.no_debug
        };
        let optimize = !cli.init && !cli.no_optimize;

        let options = BundleOptions {
            debug,
            optimize,
            output: bundle_dir.join(&cli.bundle_name),
        };
        bundle::build(runner, &manifest, &options, log)?;
    }

    if cli.init {
        return Ok(()); // nothing else to do
    }

    if let Some(name) = &cli.webpack {
        log.info("Webpacking");
        let dest = paths.root.join(name);
        let patterns = IgnoreSpec::load_patterns(cli.web_ignore.as_deref(), &paths.root, log)?;
        let spec = IgnoreSpec::new(paths.dev.clone(), cli.keep_dev, &patterns)?;
        log.info(format!("Skipping {} pattern(s)", spec.pattern_count()));
        export::export_tree(&paths.root, &dest, &spec, log)?;
    }

    Ok(())
}
