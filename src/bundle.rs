//! Aggregate bundle generation
//!
//! One `anpylar-bundle` invocation aggregates all per-app artifacts plus
//! the framework runtime into a single deliverable script. Argument order
//! is fixed so builds are reproducible.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::AppmanResult;
use crate::logger::Logger;
use crate::packager::{PackageManifestItem, AUTO_VFS_FLAG};
use crate::tool::{self, ToolRunner};

/// External bundling tool
pub const BUNDLE_TOOL: &str = "anpylar-bundle";
const SKIP_PACKAGES_FLAG: &str = "--skip-packages";
const DEBUG_FLAG: &str = "--debug";
const OPTIMIZE_FLAG: &str = "--optimize";

/// Resolved bundler switches plus the bundle output path
#[derive(Debug, Clone)]
pub struct BundleOptions {
    pub debug: bool,
    pub optimize: bool,
    pub output: PathBuf,
}

/// Invoke the bundler over the collected manifest.
///
/// Argument order: skip-packages, debug, optimize, the artifact flag list
/// in manifest order, and finally the output path.
pub fn build<R: ToolRunner + ?Sized>(
    runner: &R,
    manifest: &[PackageManifestItem],
    options: &BundleOptions,
    log: &Logger,
) -> AppmanResult<()> {
    log.info("Preparing command for bundle generation");

    let mut args: Vec<OsString> = vec![SKIP_PACKAGES_FLAG.into()];
    if options.debug {
        args.push(DEBUG_FLAG.into());
    }
    if options.optimize {
        args.push(OPTIMIZE_FLAG.into());
    }
    for item in manifest {
        args.push(AUTO_VFS_FLAG.into());
        args.push(item.artifact.clone().into_os_string());
    }
    args.push(options.output.clone().into_os_string());

    log.info(format!(
        "Creating bundle with command: {}",
        tool::render_command(BUNDLE_TOOL, &args)
    ));
    runner.run(BUNDLE_TOOL, &args)
}
