//! App discovery
//!
//! An app is an immediate subdirectory of the apps source directory. The
//! entry records everything later stages need so the decision booleans are
//! fixed at discovery time.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppmanError, AppmanResult};
use crate::logger::Logger;
use crate::paths;

/// One discovered per-app source directory
#[derive(Debug, Clone)]
pub struct AppEntry {
    pub name: String,
    pub source_dir: PathBuf,
    /// The app directory contains an `app` sub-package marker
    pub has_sub_package: bool,
    pub has_static: bool,
    pub has_templates: bool,
}

/// List the immediate subdirectories of `apps_dir` as app entries, sorted
/// by name so the packaging manifest is reproducible.
///
/// A missing apps directory yields an empty sequence with a warning; it is
/// not fatal.
pub fn discover(apps_dir: &Path, log: &Logger) -> AppmanResult<Vec<AppEntry>> {
    if !apps_dir.exists() {
        log.error(format!(
            "appsdir {} does not exist. No pakets",
            apps_dir.display()
        ));
        return Ok(Vec::new());
    }

    let read_err = |source: std::io::Error| AppmanError::ReadFile {
        path: apps_dir.to_path_buf(),
        source,
    };

    let mut apps = Vec::new();
    for entry in fs::read_dir(apps_dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        if !entry.file_type().map_err(read_err)?.is_dir() {
            continue;
        }
        let source_dir = apps_dir.join(entry.file_name());
        apps.push(AppEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            has_sub_package: source_dir.join(paths::APP_PKG).exists(),
            has_static: source_dir.join("static").exists(),
            has_templates: source_dir.join("templates").exists(),
            source_dir,
        });
    }
    apps.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(apps)
}
