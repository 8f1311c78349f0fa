use crate::areas::workspace::DirEntryInfo;
use colored::Colorize;

/// Marker directory of a git working copy.
pub const GIT_MARKER: &str = ".git";

/// Marker directories of recognized systems the scanner does not analyze.
pub const UNSUPPORTED_MARKERS: [&str; 1] = [".hg"];

/// Which version-control system, if any, manages a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VcsKind {
    None,
    Git,
    Unsupported,
}

impl VcsKind {
    /// Classify a directory by its immediate entries.
    ///
    /// Only directory entries count as markers: a regular file named
    /// `.git` does not make a working copy. Git takes precedence over
    /// unsupported markers; there is no recursion into parents or
    /// children.
    pub fn probe(entries: &[DirEntryInfo]) -> Self {
        let marker_dir = |name: &str| {
            entries
                .iter()
                .any(|entry| entry.is_dir && entry.name == name)
        };

        if marker_dir(GIT_MARKER) {
            VcsKind::Git
        } else if UNSUPPORTED_MARKERS.iter().any(|marker| marker_dir(marker)) {
            VcsKind::Unsupported
        } else {
            VcsKind::None
        }
    }

    pub fn is_analyzable(&self) -> bool {
        matches!(self, VcsKind::Git)
    }
}

impl From<&VcsKind> for &str {
    fn from(kind: &VcsKind) -> Self {
        match kind {
            VcsKind::None => "unversioned",
            VcsKind::Git => "git repository",
            VcsKind::Unsupported => "unsupported repository type",
        }
    }
}

impl std::fmt::Display for VcsKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = self.into();
        let label = match self {
            VcsKind::Git => label.normal(),
            VcsKind::None | VcsKind::Unsupported => label.red(),
        };
        write!(f, "{}", label)
    }
}
