use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// An immediate child of the repositories root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootEntry {
    /// File name of the entry
    pub name: String,
    pub path: PathBuf,
}

impl RootEntry {
    /// Whether the entry is (or links to) a directory right now.
    ///
    /// Checked against the filesystem on every call, not at listing time.
    pub fn is_dir(&self) -> bool {
        self.path.is_dir()
    }
}

/// List the immediate children of `root`, sorted by file name.
pub fn list_root_entries(root: &Path) -> std::io::Result<Vec<RootEntry>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        entries.push(RootEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path().to_path_buf(),
        });
    }

    Ok(entries)
}

/// Recursively remove `root` and everything below it.
pub async fn remove_root(root: &Path) -> std::io::Result<()> {
    tokio::fs::remove_dir_all(root).await
}
