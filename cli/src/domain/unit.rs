//! Example unit descriptor.

use std::collections::BTreeSet;
use std::path::PathBuf;

/// One self-contained example directory, as discovered by the locator.
///
/// Identity is `(category, name)`. Read-only snapshot for the rest of the
/// pipeline: the file set is captured once at discovery time.
#[derive(Debug, Clone)]
pub struct ExampleUnit {
    /// Top-level category directory name (e.g. `01-getting-started`).
    pub category: String,
    /// Unit directory name (e.g. `first-agent`).
    pub name: String,
    /// Absolute path to the unit directory.
    pub path: PathBuf,
    /// Known filenames present directly in the unit directory.
    pub files: BTreeSet<String>,
}

impl ExampleUnit {
    /// True when `file` is present in the unit directory.
    #[must_use]
    pub fn has(&self, file: &str) -> bool {
        self.files.contains(file)
    }
}
