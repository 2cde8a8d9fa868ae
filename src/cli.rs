use std::path::PathBuf;

use clap::Parser;

use crate::paths;

/// appman - build and deployment orchestrator for multi-app web front ends
#[derive(Parser, Debug)]
#[command(name = "appman")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Create the dev/apps directories and deploy a debug bundle there
    #[arg(long)]
    pub init: bool,

    /// Create a deployment copy of the project tree which packs everything
    /// except the contents of the development directory. Deploys to
    /// "__webpack__" if no name is given
    #[arg(long, value_name = "NAME", num_args = 0..=1, default_missing_value = paths::WEBPACK_DIR)]
    pub webpack: Option<String>,

    /// Keep dev directory contents in the webpack export
    #[arg(long)]
    pub keep_dev: bool,

    /// Read patterns (unix-shell style) to ignore from the specified file.
    /// If not specified, a file named "webignore" in the project root is
    /// used if available
    #[arg(long, value_name = "FILE")]
    pub web_ignore: Option<PathBuf>,

    /// The default for webpacking is to generate a bundle with no
    /// debugging. Use this option to enable it. Has precedence over the
    /// --no-debug flag
    #[arg(long)]
    pub web_debug: bool,

    /// Override auto working directory detection
    #[arg(long, value_name = "DIR")]
    pub workdir: Option<PathBuf>,

    /// Development directory where to find sources
    #[arg(long, value_name = "NAME", default_value = paths::DEV_DIR)]
    pub devdir: String,

    /// Apps directory under dev/output dir
    #[arg(long, value_name = "NAME", default_value = paths::APPS_DIR)]
    pub appsdir: String,

    /// Base output directory under workdir
    #[arg(long, value_name = "NAME", default_value = paths::OUT_DIR)]
    pub outdir: String,

    /// Remove apps dir under output before starting
    #[arg(long)]
    pub clean_output: bool,

    /// File name for the bundle output
    #[arg(long, value_name = "NAME", default_value = paths::BUNDLE_NAME)]
    pub bundle_name: String,

    /// Generate a no-debug version of the bundle
    #[arg(long)]
    pub no_debug: bool,

    /// Skip bundle optimization against used packages
    #[arg(long)]
    pub no_optimize: bool,

    /// Skip generation of the bundle
    #[arg(long)]
    pub no_bundle: bool,

    /// Skip paketization of apps
    #[arg(long)]
    pub no_paketize: bool,

    /// Remove output (errors will be reported)
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,
}
