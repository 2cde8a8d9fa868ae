//! Per-app asset synchronization
//!
//! Mirrors an app's `static` and `templates` subtrees into the deployment
//! tree, replacing any pre-existing target subtree. The two mirrors are
//! independent; a missing source subtree is a normal skip, not an error.

use std::fs;
use std::path::Path;

use crate::apps::AppEntry;
use crate::error::{AppmanError, AppmanResult};
use crate::fsutil;
use crate::logger::Logger;
use crate::paths::DeploymentPaths;

/// Mirror the static and template subtrees of one app.
pub fn sync_app(paths: &DeploymentPaths, app: &AppEntry, log: &Logger) -> AppmanResult<()> {
    log.info(format!(
        "Managing static files for: {}",
        app.source_dir.display()
    ));
    sync_subtree(app, "static", app.has_static, &paths.static_apps_dir(), log)?;

    log.info(format!(
        "Looking for templates for: {}",
        app.source_dir.display()
    ));
    sync_subtree(
        app,
        "templates",
        app.has_templates,
        &paths.templates_apps_dir(),
        log,
    )
}

fn sync_subtree(
    app: &AppEntry,
    kind: &str,
    present: bool,
    dst_base: &Path,
    log: &Logger,
) -> AppmanResult<()> {
    if !present {
        log.info(format!("No {} found for: {}", kind, app.name));
        return Ok(());
    }

    let source = app.source_dir.join(kind);
    let target = dst_base.join(&app.name);
    if target.exists() {
        log.info(format!(
            "Deleting {} target for {} at {}",
            kind,
            app.name,
            target.display()
        ));
        fs::remove_dir_all(&target).map_err(|source| AppmanError::RemoveDir {
            path: target.clone(),
            source,
        })?;
    }

    log.info(format!(
        "copytree {} -> {}",
        source.display(),
        target.display()
    ));
    fsutil::copy_tree(&source, &target)
}
