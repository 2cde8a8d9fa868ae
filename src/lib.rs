//! appman - build and deployment orchestrator for multi-app web front ends
//!
//! appman discovers per-app source directories, paketizes each one with
//! the external `anpylar-paketize` tool, mirrors per-app static/template
//! subtrees into the deployment tree, aggregates all artifacts into a
//! single bundle via `anpylar-bundle`, and can export a filtered copy of
//! the whole project tree for web deployment.

pub mod apps;
pub mod assets;
pub mod bundle;
pub mod cli;
pub mod error;
pub mod export;
pub mod fsutil;
pub mod logger;
pub mod orchestrator;
pub mod packager;
pub mod paths;
pub mod staging;
pub mod tool;

// Re-exports for convenience
pub use apps::AppEntry;
pub use cli::Cli;
pub use error::{AppmanError, AppmanResult};
pub use export::IgnoreSpec;
pub use logger::Logger;
pub use packager::{AppPackager, PackageManifestItem};
pub use paths::DeploymentPaths;
pub use tool::{SubprocessRunner, ToolRunner};
