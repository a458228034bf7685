//! Unit locator — filesystem discovery of example units.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::domain::error::DiscoveryError;
use crate::domain::unit::ExampleUnit;

/// Walk `root` and return every example unit, sorted by category name then
/// unit name. Deterministic across runs.
///
/// Category directories are the top-level children of `root`; names starting
/// with `.` or `_` are skipped at the category level only. Every directory
/// one level below a category is a unit — units are never filtered by name.
///
/// # Errors
///
/// Returns a fatal [`DiscoveryError`] when `root` is missing, is not a
/// directory, cannot be read, or contains no units at all.
pub fn discover(root: &Path) -> Result<Vec<ExampleUnit>, DiscoveryError> {
    if !root.exists() {
        return Err(DiscoveryError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(DiscoveryError::NotADirectory(root.to_path_buf()));
    }

    let mut categories = subdirectories(root)?;
    categories.retain(|name| !name.starts_with('.') && !name.starts_with('_'));
    categories.sort();

    let mut units = Vec::new();
    for category in &categories {
        let category_path = root.join(category);
        let mut names = subdirectories(&category_path)?;
        names.sort();
        for name in names {
            let path = category_path.join(&name);
            let files = file_names(&path)?;
            units.push(ExampleUnit {
                category: category.clone(),
                name,
                path,
                files,
            });
        }
    }

    if units.is_empty() {
        return Err(DiscoveryError::NoUnits(root.to_path_buf()));
    }
    Ok(units)
}

fn subdirectories(dir: &Path) -> Result<Vec<String>, DiscoveryError> {
    let mut names = Vec::new();
    for entry in read_dir(dir)? {
        let entry = entry.map_err(|source| DiscoveryError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        if entry.path().is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(names)
}

fn file_names(dir: &Path) -> Result<BTreeSet<String>, DiscoveryError> {
    let mut files = BTreeSet::new();
    for entry in read_dir(dir)? {
        let entry = entry.map_err(|source| DiscoveryError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        if entry.path().is_file() {
            files.insert(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(files)
}

fn read_dir(dir: &Path) -> Result<fs::ReadDir, DiscoveryError> {
    fs::read_dir(dir).map_err(|source| DiscoveryError::Io {
        path: dir.to_path_buf(),
        source,
    })
}
