use crate::artifacts::probe::VcsKind;
use crate::artifacts::refs::divergence::BranchVerdict;
use crate::artifacts::status::change_set::ChangeSet;
use colored::Colorize;

/// Outcome of analyzing one directory.
///
/// Produced and consumed within a single directory's analysis pass; no
/// report outlives the fleet scan.
#[derive(Debug)]
pub struct DirectoryReport {
    dir_name: String,
    vcs: VcsKind,
    change_set: Option<ChangeSet>,
    verdicts: Vec<BranchVerdict>,
    error: Option<String>,
    is_dirty: bool,
}

impl DirectoryReport {
    /// Fold the analysis signals into one verdict. Pure composition; the
    /// collaborators that supplied the inputs did all the I/O.
    ///
    /// A directory is dirty iff it is not a git working copy, or its
    /// change set holds conflicts or changed paths, or any branch is out
    /// of sync with its upstream.
    pub fn aggregate(
        dir_name: String,
        vcs: VcsKind,
        change_set: Option<ChangeSet>,
        verdicts: Vec<BranchVerdict>,
    ) -> Self {
        let is_dirty = vcs != VcsKind::Git
            || change_set
                .as_ref()
                .is_some_and(|change_set| !change_set.is_clean())
            || verdicts.iter().any(|verdict| !verdict.is_synchronized());

        DirectoryReport {
            dir_name,
            vcs,
            change_set,
            verdicts,
            error: None,
            is_dirty,
        }
    }

    /// A git working copy whose queries failed. The failure is confined
    /// to this directory: the report carries the error, counts as dirty,
    /// and the scan moves on.
    pub fn failed(dir_name: String, error: &anyhow::Error) -> Self {
        DirectoryReport {
            dir_name,
            vcs: VcsKind::Git,
            change_set: None,
            verdicts: Vec::new(),
            error: Some(format!("{error:#}")),
            is_dirty: true,
        }
    }

    pub fn dir_name(&self) -> &str {
        &self.dir_name
    }

    pub fn vcs(&self) -> VcsKind {
        self.vcs
    }

    pub fn change_set(&self) -> Option<&ChangeSet> {
        self.change_set.as_ref()
    }

    pub fn verdicts(&self) -> &[BranchVerdict] {
        &self.verdicts
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }
}

/// Running tally across the whole scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FleetSummary {
    total_directories: usize,
    dirty_count: usize,
}

impl FleetSummary {
    pub fn record(&mut self, report: &DirectoryReport) {
        self.total_directories += 1;
        if report.is_dirty() {
            self.dirty_count += 1;
        }
    }

    pub fn total_directories(&self) -> usize {
        self.total_directories
    }

    pub fn dirty_count(&self) -> usize {
        self.dirty_count
    }

    pub fn all_clean(&self) -> bool {
        self.dirty_count == 0
    }
}

impl std::fmt::Display for FleetSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let suffix = if self.total_directories == 1 { "y" } else { "ies" };
        let verdict = if self.all_clean() {
            "all clean".green()
        } else {
            format!("{} dirty", self.dirty_count).red()
        };
        write!(
            f,
            "{} director{suffix} scanned, {}",
            self.total_directories, verdict
        )
    }
}
