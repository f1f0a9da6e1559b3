//! Discovery of HCL files to format

use std::fs;
use std::path::{Path, PathBuf};

const EXTENSIONS: &[&str] = &["hcl", "tf"];

/// Directory names never descended into
const SKIPPED_DIRS: &[&str] = &["target", "node_modules"];

pub fn is_hcl_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| EXTENSIONS.iter().any(|e| ext == *e))
}

fn is_skipped_dir(path: &Path) -> bool {
    path.file_name().is_none_or(|name| {
        let name = name.to_string_lossy();
        name.starts_with('.') || SKIPPED_DIRS.iter().any(|d| *d == name)
    })
}

/// Files to format for `path`, sorted.
///
/// An explicit file is returned as is, whatever its extension. A directory
/// yields its HCL files, and those of its subdirectories when `recursive`.
pub fn collect(path: &Path, recursive: bool) -> Result<Vec<PathBuf>, String> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut found = Vec::new();
    let mut pending = vec![path.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let entries = fs::read_dir(&dir)
            .map_err(|e| format!("cannot list {}: {}", dir.display(), e))?;

        for entry in entries {
            let entry_path = entry
                .map_err(|e| format!("cannot list {}: {}", dir.display(), e))?
                .path();
            if entry_path.is_dir() {
                if recursive && !is_skipped_dir(&entry_path) {
                    pending.push(entry_path);
                }
            } else if is_hcl_file(&entry_path) {
                found.push(entry_path);
            }
        }
    }

    found.sort();
    Ok(found)
}
