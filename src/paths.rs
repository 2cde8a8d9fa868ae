//! Deployment path resolution
//!
//! Derives every working directory of a run from the work directory plus
//! user overrides. The result is computed once and passed to the other
//! components as an immutable value.

use std::path::{Path, PathBuf};

use crate::error::{AppmanError, AppmanResult};
use crate::fsutil;
use crate::logger::Logger;

/// Default work directory name probed next to the invocation directory
pub const WORK_DIR: &str = "app";
/// Default development directory name under the work directory
pub const DEV_DIR: &str = "dev";
/// Default apps directory name under the dev/output directories
pub const APPS_DIR: &str = "apps";
/// Default output directory name under the work directory
pub const OUT_DIR: &str = "static";
/// Default aggregate bundle filename
pub const BUNDLE_NAME: &str = "anpylar.js";
/// Conventional ignore-pattern file name in the project root
pub const WEBIGNORE: &str = "webignore";
/// Marker subdirectory that flags an app as a sub-package repo
pub const APP_PKG: &str = "app";
/// Default webpack export directory name
pub const WEBPACK_DIR: &str = "__webpack__";

/// All working directories of a run.
///
/// Invariants: `apps_output` descends from `output`; `dev` and `apps`
/// descend from `work`.
#[derive(Debug, Clone)]
pub struct DeploymentPaths {
    pub root: PathBuf,
    pub work: PathBuf,
    pub templates: PathBuf,
    pub static_dir: PathBuf,
    pub dev: PathBuf,
    pub apps: PathBuf,
    pub output: PathBuf,
    pub apps_output: PathBuf,
    pub apps_name: String,
}

impl DeploymentPaths {
    /// Base directory for mirrored per-app static subtrees
    pub fn static_apps_dir(&self) -> PathBuf {
        self.static_dir.join(&self.apps_name)
    }

    /// Base directory for mirrored per-app template subtrees
    pub fn templates_apps_dir(&self) -> PathBuf {
        self.templates.join(&self.apps_name)
    }
}

/// Resolve all deployment paths from the current directory.
pub fn resolve(
    workdir: Option<&Path>,
    devdir: &str,
    appsdir: &str,
    outdir: &str,
    log: &Logger,
) -> AppmanResult<DeploymentPaths> {
    let base = std::env::current_dir()?;
    resolve_in(&base, workdir, devdir, appsdir, outdir, log)
}

/// Resolve all deployment paths, anchored at `base`.
///
/// If no `workdir` override is given, `<base>/app` is probed; a missing
/// candidate is fatal. The work and root directories are re-expressed
/// relative to `base` when the relative spelling is strictly shorter,
/// to keep external-tool command lines short. Purely cosmetic: the same
/// filesystem entities are addressed either way.
pub fn resolve_in(
    base: &Path,
    workdir: Option<&Path>,
    devdir: &str,
    appsdir: &str,
    outdir: &str,
    log: &Logger,
) -> AppmanResult<DeploymentPaths> {
    let work = match workdir {
        Some(dir) => {
            log.info("Taking specified workdir in arguments");
            dir.to_path_buf()
        }
        None => {
            let candidate = fsutil::normalize(&base.join(WORK_DIR));
            log.info(format!("Trying workdir: {}", candidate.display()));
            if !candidate.exists() {
                return Err(AppmanError::WorkdirNotFound { candidate });
            }
            candidate
        }
    };

    let work_abs = if work.is_absolute() {
        fsutil::normalize(&work)
    } else {
        fsutil::normalize(&base.join(&work))
    };
    let root_abs = fsutil::normalize(&work_abs.join(".."));

    log.info(format!("rootdir: {}", root_abs.display()));
    log.info(format!("workdir: {}", work_abs.display()));

    // relative will usually be shorter (better for command line arguments)
    let (work, root) = match fsutil::relative_to(&work_abs, base) {
        Some(rel) if rel.as_os_str().len() < work_abs.as_os_str().len() => {
            let rel_root = fsutil::relative_to(&root_abs, base).unwrap_or_else(|| root_abs.clone());
            log.info(format!("Using relative workdir: {}", rel.display()));
            log.info(format!("Using relative rootdir: {}", rel_root.display()));
            (rel, rel_root)
        }
        _ => (work_abs, root_abs),
    };

    let templates = work.join("templates");
    log.info(format!("templates dir: {}", templates.display()));

    let static_dir = work.join("static");
    log.info(format!("static dir: {}", static_dir.display()));

    let dev = work.join(devdir);
    log.info(format!("devdir: {}", dev.display()));

    let apps = dev.join(appsdir);
    log.info(format!("appsdir: {}", apps.display()));

    // outdir is relative to workdir
    let output = fsutil::normalize(&work.join(outdir));
    log.info(format!("outdir: {}", output.display()));

    let apps_output = output.join(appsdir);
    log.info(format!("appsoutdir: {}", apps_output.display()));

    Ok(DeploymentPaths {
        root,
        work,
        templates,
        static_dir,
        dev,
        apps,
        output,
        apps_output,
        apps_name: appsdir.to_string(),
    })
}
