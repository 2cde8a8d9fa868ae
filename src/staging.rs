//! Output directory staging
//!
//! Owns the create/clean/recreate lifecycle of the deployment directories.
//! No other component assumes a directory exists before these run.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{AppmanError, AppmanResult};
use crate::logger::Logger;

/// Create `path` (and parents) if absent. Idempotent.
pub fn ensure_dir(path: &Path, log: &Logger) -> AppmanResult<()> {
    if path.exists() {
        return Ok(());
    }
    log.info(format!("Dir does not exist, creating: {}", path.display()));
    fs::create_dir_all(path).map_err(|source| AppmanError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Create `path` strictly; an already existing directory is an error.
///
/// Used by `--init`, which must not silently adopt a pre-existing dev tree.
pub fn make_dir(path: &Path, log: &Logger) -> AppmanResult<()> {
    log.info(format!("Making directory: {}", path.display()));
    fs::create_dir(path).map_err(|source| AppmanError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Reset the apps output directory.
///
/// When it exists and a clean was requested, the directory is removed
/// recursively along with the previously generated bundle at
/// `bundle_path` (a bundle that is already gone is not an error).
/// Afterwards the directory is recreated if needed; without
/// `clean_requested` existing contents are left untouched.
pub fn reset_apps_output(
    apps_output: &Path,
    bundle_path: &Path,
    clean_requested: bool,
    log: &Logger,
) -> AppmanResult<()> {
    if apps_output.exists() {
        log.debug("Output dir for apps does exist");
        if clean_requested {
            log.info(format!(
                "Clean-up of output dir for apps: {}",
                apps_output.display()
            ));
            fs::remove_dir_all(apps_output).map_err(|source| AppmanError::RemoveDir {
                path: apps_output.to_path_buf(),
                source,
            })?;

            log.info(format!(
                "Removing bundle from out dir: {}",
                bundle_path.display()
            ));
            match fs::remove_file(bundle_path) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    log.debug("No previous bundle to remove");
                }
                Err(source) => {
                    return Err(AppmanError::RemoveFile {
                        path: bundle_path.to_path_buf(),
                        source,
                    });
                }
            }
        }
    }

    if !apps_output.exists() {
        log.info("Output dir for apps does not exist, creating");
        fs::create_dir_all(apps_output).map_err(|source| AppmanError::CreateDir {
            path: apps_output.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
