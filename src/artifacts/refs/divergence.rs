use crate::artifacts::refs::ref_graph::{LOCAL_BRANCH_NAMESPACE, RefGraph};
use colored::Colorize;

/// How a local branch relates to its configured upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncRelation {
    /// Branch tip equals the upstream tip.
    Synchronized,
    /// Upstream exists but points at a different commit.
    MustPush,
    /// No upstream resolves for this branch.
    LocalOnly,
}

impl From<&SyncRelation> for &str {
    fn from(relation: &SyncRelation) -> Self {
        match relation {
            SyncRelation::Synchronized => "nothing to push",
            SyncRelation::MustPush => "must push",
            SyncRelation::LocalOnly => "local only",
        }
    }
}

impl std::fmt::Display for SyncRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = self.into();
        let label = match self {
            SyncRelation::Synchronized => label.green(),
            SyncRelation::MustPush | SyncRelation::LocalOnly => label.red(),
        };
        write!(f, "{}", label)
    }
}

/// The verdict for one local branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchVerdict {
    pub branch: String,
    pub relation: SyncRelation,
}

impl BranchVerdict {
    pub fn is_synchronized(&self) -> bool {
        self.relation == SyncRelation::Synchronized
    }
}

/// Compare every local branch tip against its upstream tip.
///
/// Verdicts come out in the order the branches appeared in the listing,
/// which governs display order.
pub fn analyze(graph: &RefGraph) -> Vec<BranchVerdict> {
    graph
        .iter()
        .filter_map(|(ref_name, entry)| {
            let branch = ref_name.strip_prefix(LOCAL_BRANCH_NAMESPACE)?;

            let relation = match entry
                .upstream
                .as_deref()
                .and_then(|upstream| graph.get(upstream))
            {
                None => SyncRelation::LocalOnly,
                Some(upstream) if upstream.commit_id == entry.commit_id => {
                    SyncRelation::Synchronized
                }
                Some(_) => SyncRelation::MustPush,
            };

            Some(BranchVerdict {
                branch: branch.to_string(),
                relation,
            })
        })
        .collect::<Vec<_>>()
}
