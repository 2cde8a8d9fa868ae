//! Web deployment export
//!
//! Copies the whole project tree to an export directory, excluding the
//! development directory by filesystem identity (it may be reachable under
//! a differently spelled path) plus any entry matching the loaded
//! shell-style glob patterns.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use same_file::is_same_file;

use crate::error::{AppmanError, AppmanResult};
use crate::fsutil;
use crate::logger::Logger;
use crate::paths;

/// Exclusion rules consulted at every directory visited during an export
#[derive(Debug)]
pub struct IgnoreSpec {
    reference_dir: PathBuf,
    keep_dev: bool,
    matcher: GlobSet,
    pattern_count: usize,
}

impl IgnoreSpec {
    /// Build the spec from the dev directory to exclude by identity and a
    /// list of glob patterns matched against bare entry names.
    pub fn new(reference_dir: PathBuf, keep_dev: bool, patterns: &[String]) -> AppmanResult<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| AppmanError::InvalidPattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
            builder.add(glob);
        }
        let matcher = builder.build().map_err(|e| AppmanError::InvalidPattern {
            pattern: patterns.join(", "),
            message: e.to_string(),
        })?;
        Ok(Self {
            reference_dir,
            keep_dev,
            matcher,
            pattern_count: patterns.len(),
        })
    }

    /// Load glob patterns for an export.
    ///
    /// An explicitly named file must exist; otherwise the conventional
    /// `webignore` in the project root is used when present, and an absent
    /// file simply yields no patterns.
    pub fn load_patterns(
        explicit: Option<&Path>,
        root: &Path,
        log: &Logger,
    ) -> AppmanResult<Vec<String>> {
        let file = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(AppmanError::IgnoreFileNotFound {
                        path: path.to_path_buf(),
                    });
                }
                Some(path.to_path_buf())
            }
            None => {
                let conventional = root.join(paths::WEBIGNORE);
                if conventional.exists() {
                    log.info(format!(
                        "Using standard webignore at: {}",
                        conventional.display()
                    ));
                    Some(conventional)
                } else {
                    None
                }
            }
        };

        match file {
            Some(path) => {
                log.info(format!("Reading skip patterns from: {}", path.display()));
                let content =
                    fs::read_to_string(&path).map_err(|source| AppmanError::ReadFile {
                        path: path.clone(),
                        source,
                    })?;
                Ok(content
                    .lines()
                    .map(|line| line.trim_end().to_string())
                    .filter(|line| !line.is_empty())
                    .collect())
            }
            None => {
                log.info("No skip patterns read from any file");
                Ok(Vec::new())
            }
        }
    }

    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// Names among `names` to skip when copying the children of `dir`.
    ///
    /// The dev directory is matched by filesystem identity, never by name;
    /// entries whose identity cannot be resolved are passed over. At most
    /// one identity match is expected, so scanning stops at the first.
    pub fn exclusions(
        &self,
        root: &Path,
        dir: &Path,
        names: &[OsString],
        log: &Logger,
    ) -> Vec<OsString> {
        let mut to_ignore: Vec<OsString> = Vec::new();

        if !self.keep_dev {
            for name in names {
                let child = dir.join(name);
                if is_same_file(&self.reference_dir, &child).unwrap_or(false) {
                    log.info(format!("Skipping devdir: {}", child.display()));
                    to_ignore.push(name.clone());
                    break;
                }
            }
        }

        for name in names {
            if self.matcher.is_match(Path::new(name)) && !to_ignore.contains(name) {
                to_ignore.push(name.clone());
            }
        }

        let rel = fsutil::relative_to(dir, root).unwrap_or_else(|| dir.to_path_buf());
        log.debug(format!(
            "Directory: {} -> ignoring {:?}",
            rel.display(),
            to_ignore
        ));
        to_ignore
    }
}

/// Copy the project tree at `root` to `dest`, applying `spec` at every
/// directory. A pre-existing destination is removed first.
pub fn export_tree(
    root: &Path,
    dest: &Path,
    spec: &IgnoreSpec,
    log: &Logger,
) -> AppmanResult<()> {
    if dest.exists() {
        log.info(format!("Webpack dir {} exists. Removing", dest.display()));
        fs::remove_dir_all(dest).map_err(|source| AppmanError::RemoveDir {
            path: dest.to_path_buf(),
            source,
        })?;
    }

    fsutil::copy_tree_filtered(root, dest, &mut |dir, names| {
        spec.exclusions(root, dir, names, log)
    })
}
