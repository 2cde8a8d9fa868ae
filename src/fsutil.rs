//! Filesystem helpers
//!
//! Lexical path normalization, relative-path computation and the recursive
//! tree copy shared by the asset synchronizer and the tree exporter.

use std::ffi::OsString;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{AppmanError, AppmanResult};

/// Normalize a path lexically: drop `.` components and resolve `..`
/// against preceding normal components. No filesystem access.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component> = Vec::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(comp),
            },
            c => out.push(c),
        }
    }
    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// Express `path` relative to `base`, possibly via `..` components.
///
/// Both paths must be absolute or both relative; otherwise `None` is
/// returned (except an absolute `path`, which is returned as-is). Equal
/// paths yield `.`.
pub fn relative_to(path: &Path, base: &Path) -> Option<PathBuf> {
    if path.is_absolute() != base.is_absolute() {
        if path.is_absolute() {
            return Some(path.to_path_buf());
        }
        return None;
    }

    let path = normalize(path);
    let base = normalize(base);
    let mut ita = path.components();
    let mut itb = base.components();
    let mut comps: Vec<Component> = Vec::new();

    loop {
        match (ita.next(), itb.next()) {
            (None, None) => break,
            (Some(a), None) => {
                comps.push(a);
                comps.extend(ita.by_ref());
                break;
            }
            (None, _) => comps.push(Component::ParentDir),
            (Some(a), Some(b)) if comps.is_empty() && a == b => {}
            (Some(a), Some(Component::CurDir)) => comps.push(a),
            (_, Some(Component::ParentDir)) => return None,
            (Some(a), Some(_)) => {
                comps.push(Component::ParentDir);
                for _ in itb.by_ref() {
                    comps.push(Component::ParentDir);
                }
                comps.push(a);
                comps.extend(ita.by_ref());
                break;
            }
        }
    }

    if comps.is_empty() {
        return Some(PathBuf::from("."));
    }
    Some(comps.iter().collect())
}

/// Recursively copy `src` to `dst`, preserving structure and contents.
pub fn copy_tree(src: &Path, dst: &Path) -> AppmanResult<()> {
    copy_tree_filtered(src, dst, &mut |_, _| Vec::new())
}

/// Recursively copy `src` to `dst`, consulting `exclude` at every
/// directory visited.
///
/// `exclude` receives the source directory and its child names (sorted)
/// and returns the names to skip. The child listing is taken before the
/// destination directory is created, so a destination nested under `src`
/// is never copied into itself.
pub fn copy_tree_filtered<F>(src: &Path, dst: &Path, exclude: &mut F) -> AppmanResult<()>
where
    F: FnMut(&Path, &[OsString]) -> Vec<OsString>,
{
    let copy_err = |from: &Path, to: &Path, source: std::io::Error| AppmanError::CopyTree {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    let mut names: Vec<OsString> = Vec::new();
    let entries = fs::read_dir(src).map_err(|e| copy_err(src, dst, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| copy_err(src, dst, e))?;
        names.push(entry.file_name());
    }
    names.sort();

    let skip = exclude(src, &names);

    fs::create_dir_all(dst).map_err(|source| AppmanError::CreateDir {
        path: dst.to_path_buf(),
        source,
    })?;

    for name in &names {
        if skip.contains(name) {
            continue;
        }
        let from = src.join(name);
        let to = dst.join(name);
        if from.is_dir() {
            copy_tree_filtered(&from, &to, exclude)?;
        } else {
            fs::copy(&from, &to).map_err(|e| copy_err(&from, &to, e))?;
        }
    }
    Ok(())
}
