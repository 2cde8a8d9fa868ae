//! Per-app paketization
//!
//! Invokes `anpylar-paketize` once per discovered app, collecting a
//! manifest of produced artifacts in discovery order. A failed invocation
//! aborts the whole run; the partial manifest is discarded.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::apps::AppEntry;
use crate::assets;
use crate::error::AppmanResult;
use crate::logger::Logger;
use crate::paths::{self, DeploymentPaths};
use crate::tool::{self, ToolRunner};

/// External packaging tool
pub const PAKETIZE_TOOL: &str = "anpylar-paketize";
/// Artifact flag shared with the bundler command line
pub const AUTO_VFS_FLAG: &str = "--auto-vfs";
/// Virtual-path flag used when paketizing a sub-package
const VFS_PATH_FLAG: &str = "--vfspath";
/// Suffix of every per-app artifact filename
pub const ARTIFACT_SUFFIX: &str = ".auto_vfs.js";

/// One successfully paketized app
#[derive(Debug, Clone)]
pub struct PackageManifestItem {
    pub app_name: String,
    pub artifact: PathBuf,
}

/// Packages discovered apps and mirrors their assets
pub struct AppPackager<'a, R: ToolRunner + ?Sized> {
    paths: &'a DeploymentPaths,
    runner: &'a R,
    log: &'a Logger,
}

impl<'a, R: ToolRunner + ?Sized> AppPackager<'a, R> {
    pub fn new(paths: &'a DeploymentPaths, runner: &'a R, log: &'a Logger) -> Self {
        Self { paths, runner, log }
    }

    /// Package every app in order, synchronizing its static/template
    /// subtrees right after each successful packaging step.
    pub fn package_all(&self, apps: &[AppEntry]) -> AppmanResult<Vec<PackageManifestItem>> {
        let mut manifest = Vec::with_capacity(apps.len());
        for app in apps {
            let item = self.package(app)?;
            assets::sync_app(self.paths, app, self.log)?;
            manifest.push(item);
        }
        Ok(manifest)
    }

    /// Package a single app.
    ///
    /// An app carrying the `app` sub-package marker is paketized as that
    /// sub-package with a fixed virtual path; otherwise the whole app
    /// directory is paketized.
    pub fn package(&self, app: &AppEntry) -> AppmanResult<PackageManifestItem> {
        self.log
            .info(format!("Paketizing: {}", app.source_dir.display()));

        let mut args: Vec<OsString> = vec![AUTO_VFS_FLAG.into()];
        if app.has_sub_package {
            self.log
                .info(format!("{} has \"app\", paketizing the sub-package", app.name));
            args.push(VFS_PATH_FLAG.into());
            args.push(paths::APP_PKG.into());
            args.push(app.source_dir.join(paths::APP_PKG).into_os_string());
        } else {
            self.log.info(format!(
                "{} has no \"app\", paketizing the complete directory",
                app.name
            ));
            args.push(app.source_dir.clone().into_os_string());
        }

        let artifact = self
            .paths
            .apps_output
            .join(format!("{}{}", app.name, ARTIFACT_SUFFIX));
        self.log
            .debug(format!("output file for paket is: {}", artifact.display()));
        args.push(artifact.clone().into_os_string());

        self.log.info(format!(
            "Executing command \"{}\"",
            tool::render_command(PAKETIZE_TOOL, &args)
        ));
        self.runner.run(PAKETIZE_TOOL, &args)?;

        Ok(PackageManifestItem {
            app_name: app.name.clone(),
            artifact,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppmanError;
    use crate::paths::{APPS_DIR, DEV_DIR};
    use crate::tool::RecordingRunner;
    use std::path::Path;
    use tempfile::tempdir;

    fn quiet() -> Logger {
        Logger::new(true, false)
    }

    // packaging only builds command lines, so no tree needs to exist
    fn setup(base: &Path) -> DeploymentPaths {
        let work = base.join("app");
        let dev = work.join(DEV_DIR);
        let output = work.join("static");
        DeploymentPaths {
            root: base.to_path_buf(),
            templates: work.join("templates"),
            static_dir: work.join("static"),
            apps: dev.join(APPS_DIR),
            dev,
            apps_output: output.join(APPS_DIR),
            output,
            work,
            apps_name: APPS_DIR.to_string(),
        }
    }

    fn entry(apps_dir: &Path, name: &str, sub_package: bool) -> AppEntry {
        AppEntry {
            name: name.to_string(),
            has_sub_package: sub_package,
            has_static: false,
            has_templates: false,
            source_dir: apps_dir.join(name),
        }
    }

    #[test]
    fn whole_directory_mode_arguments() {
        let dir = tempdir().unwrap();
        let paths = setup(dir.path());
        let app = entry(&paths.apps, "users", false);

        let runner = RecordingRunner::new();
        let log = quiet();
        let item = AppPackager::new(&paths, &runner, &log).package(&app).unwrap();

        let calls = runner.calls.borrow();
        let (tool, args) = &calls[0];
        assert_eq!(tool, PAKETIZE_TOOL);
        assert_eq!(args[0], OsString::from("--auto-vfs"));
        assert_eq!(args[1], app.source_dir.clone().into_os_string());
        assert_eq!(args[2], item.artifact.clone().into_os_string());
        assert!(item.artifact.ends_with("users.auto_vfs.js"));
    }

    #[test]
    fn sub_package_mode_arguments() {
        let dir = tempdir().unwrap();
        let paths = setup(dir.path());
        let app = entry(&paths.apps, "pyroes", true);

        let runner = RecordingRunner::new();
        let log = quiet();
        AppPackager::new(&paths, &runner, &log).package(&app).unwrap();

        let calls = runner.calls.borrow();
        let (_, args) = &calls[0];
        assert_eq!(args[0], OsString::from("--auto-vfs"));
        assert_eq!(args[1], OsString::from("--vfspath"));
        assert_eq!(args[2], OsString::from("app"));
        assert_eq!(args[3], app.source_dir.join("app").into_os_string());
    }

    #[test]
    fn manifest_preserves_discovery_order() {
        let dir = tempdir().unwrap();
        let paths = setup(dir.path());
        let apps = vec![
            entry(&paths.apps, "users", false),
            entry(&paths.apps, "pyroes", false),
        ];

        let runner = RecordingRunner::new();
        let log = quiet();
        let manifest = AppPackager::new(&paths, &runner, &log)
            .package_all(&apps)
            .unwrap();

        let names: Vec<_> = manifest.iter().map(|m| m.app_name.as_str()).collect();
        assert_eq!(names, ["users", "pyroes"]);
    }

    #[test]
    fn tool_failure_aborts_before_second_app() {
        let dir = tempdir().unwrap();
        let paths = setup(dir.path());
        let apps = vec![
            entry(&paths.apps, "users", false),
            entry(&paths.apps, "pyroes", false),
        ];

        let runner = RecordingRunner::failing(0, 2);
        let log = quiet();
        let err = AppPackager::new(&paths, &runner, &log)
            .package_all(&apps)
            .unwrap_err();

        assert!(matches!(err, AppmanError::ToolFailed { code: 2, .. }));
        assert_eq!(runner.call_count(), 1);
    }
}
