use crate::artifacts::status::change_set::ChangeSet;
use anyhow::Context;
use regex::Regex;

/// Both sides unmerged.
const CONFLICT_PATTERN: &str = r"^UU ";

/// Workspace-modified, untracked, or index-changed.
const CHANGE_PATTERN: &str = r"^(.[MD]|\?\?|[AMDR].) ";

/// The two status-code columns and their separator.
const PATH_OFFSET: usize = 3;

/// Lenient line classifier for porcelain status output.
///
/// Lines matching neither pattern are skipped, never rejected, so
/// unrecognized status codes from newer git versions degrade to no-ops
/// instead of failing the scan. Callers wanting stricter behavior get a
/// single place to add it.
#[derive(Debug)]
pub struct StatusParser {
    conflict: Regex,
    change: Regex,
}

impl StatusParser {
    pub fn new() -> anyhow::Result<Self> {
        Ok(StatusParser {
            conflict: Regex::new(CONFLICT_PATTERN)
                .with_context(|| format!("invalid conflict pattern: {CONFLICT_PATTERN}"))?,
            change: Regex::new(CHANGE_PATTERN)
                .with_context(|| format!("invalid change pattern: {CHANGE_PATTERN}"))?,
        })
    }

    /// Fold a raw status listing into a change set.
    ///
    /// The same path reported on several lines counts once.
    pub fn parse(&self, raw: &str) -> ChangeSet {
        let mut change_set = ChangeSet::default();

        for line in raw.lines().filter(|line| !line.is_empty()) {
            if self.conflict.is_match(line) {
                change_set.conflict_count += 1;
            } else if self.change.is_match(line) {
                change_set
                    .changed_paths
                    .insert(line[PATH_OFFSET..].to_string());
            }
        }

        change_set
    }
}
