use derive_new::new;
use std::path::{Path, PathBuf};

/// One immediate entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DirEntryInfo {
    pub name: String,
    pub is_dir: bool,
}

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Immediate entries of the workspace root.
    pub fn list_dir(&self) -> anyhow::Result<Vec<DirEntryInfo>> {
        Self::list_entries(&self.path)
    }

    /// Immediate entries of an arbitrary directory, sorted by name.
    ///
    /// Directory-ness follows symlinks, matching what a person sees when
    /// they look inside the tree.
    pub fn list_entries(dir_path: &Path) -> anyhow::Result<Vec<DirEntryInfo>> {
        if !dir_path.exists() {
            anyhow::bail!("Directory {:?} not found", dir_path);
        }

        if !dir_path.is_dir() {
            anyhow::bail!("The specified path is not a directory: {:?}", dir_path);
        }

        let mut entries = std::fs::read_dir(dir_path)?
            .filter_map(|entry| entry.ok())
            .map(|entry| {
                DirEntryInfo::new(
                    entry.file_name().to_string_lossy().into_owned(),
                    entry.path().is_dir(),
                )
            })
            .collect::<Vec<_>>();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(entries)
    }

    /// Names of the immediate subdirectories of the workspace root.
    pub fn subdirectory_names(&self) -> anyhow::Result<Vec<String>> {
        Ok(self
            .list_dir()?
            .into_iter()
            .filter(|entry| entry.is_dir)
            .map(|entry| entry.name)
            .collect::<Vec<_>>())
    }

    pub fn subdirectory_path(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}
