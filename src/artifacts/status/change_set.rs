use colored::Colorize;
use std::collections::BTreeSet;

pub type PathSet = BTreeSet<String>;

/// Structured view of one porcelain status listing: how many paths are
/// conflicted and which distinct paths are changed or added.
///
/// Built fresh per status query and discarded once the directory's report
/// is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub(crate) conflict_count: usize,
    pub(crate) changed_paths: PathSet,
}

impl ChangeSet {
    pub fn conflict_count(&self) -> usize {
        self.conflict_count
    }

    pub fn changed_paths(&self) -> &PathSet {
        &self.changed_paths
    }

    pub fn is_clean(&self) -> bool {
        self.conflict_count == 0 && self.changed_paths.is_empty()
    }
}

impl std::fmt::Display for ChangeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_clean() {
            return write!(f, "{}", "clean".green());
        }

        let mut parts = Vec::new();
        if !self.changed_paths.is_empty() {
            let count = self.changed_paths.len();
            let suffix = if count == 1 { "" } else { "s" };
            parts.push(
                format!("{count} file{suffix} changed or added")
                    .yellow()
                    .to_string(),
            );
        }
        if self.conflict_count > 0 {
            let suffix = if self.conflict_count == 1 { "" } else { "s" };
            parts.push(
                format!("{} conflict{suffix}", self.conflict_count)
                    .red()
                    .to_string(),
            );
        }

        write!(f, "{}", parts.join(", "))
    }
}
