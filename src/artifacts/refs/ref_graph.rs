use std::collections::HashMap;

/// Object kind retained for divergence comparison. Tag objects carry no
/// upstream relationship and are skipped.
const COMMIT_KIND: &str = "commit";

/// Namespace holding local branch refs.
pub const LOCAL_BRANCH_NAMESPACE: &str = "refs/heads/";

/// Where one ref points: its commit and, if configured, the upstream ref
/// it synchronizes against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefEntry {
    pub commit_id: String,
    pub upstream: Option<String>,
}

/// Ref name -> entry lookup preserving the order refs were listed in.
///
/// Built once per directory from one ref listing and read-only afterward.
#[derive(Debug, Default)]
pub struct RefGraph {
    entries: HashMap<String, RefEntry>,
    order: Vec<String>,
}

impl RefGraph {
    /// Parse a listing of `<kind> <refname> <objectid> <upstream>` records.
    ///
    /// Non-commit kinds and lines with fewer than three fields are
    /// skipped; a repeated ref name overwrites the earlier entry while
    /// keeping its original position.
    pub fn parse(raw: &str) -> Self {
        let mut graph = RefGraph::default();

        for line in raw.lines() {
            let mut fields = line.split_whitespace();
            let (Some(kind), Some(ref_name), Some(commit_id)) =
                (fields.next(), fields.next(), fields.next())
            else {
                continue;
            };

            if kind != COMMIT_KIND {
                continue;
            }

            graph.insert(
                ref_name.to_string(),
                RefEntry {
                    commit_id: commit_id.to_string(),
                    upstream: fields.next().map(str::to_string),
                },
            );
        }

        graph
    }

    fn insert(&mut self, ref_name: String, entry: RefEntry) {
        if self.entries.insert(ref_name.clone(), entry).is_none() {
            self.order.push(ref_name);
        }
    }

    pub fn get(&self, ref_name: &str) -> Option<&RefEntry> {
        self.entries.get(ref_name)
    }

    /// Entries in the order their refs first appeared in the listing.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RefEntry)> {
        self.order
            .iter()
            .filter_map(|ref_name| Some((ref_name.as_str(), self.entries.get(ref_name)?)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
