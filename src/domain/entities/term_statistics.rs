use std::collections::{BTreeMap, BTreeSet};

pub const UNRESOLVED_DEPTH: i64 = -1;

/// Accumulated membership for one ontology term.
///
/// `strict_ids` is always a subset of `total_ids`: the only way into
/// `strict_ids` is [`TermStatistics::record_direct`], which inserts into both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermStatistics {
    name: String,
    depth: i64,
    resolved: bool,
    strict_ids: BTreeSet<String>,
    total_ids: BTreeSet<String>,
}

impl Default for TermStatistics {
    fn default() -> Self {
        Self {
            name: String::new(),
            depth: UNRESOLVED_DEPTH,
            resolved: false,
            strict_ids: BTreeSet::new(),
            total_ids: BTreeSet::new(),
        }
    }
}

impl TermStatistics {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn depth(&self) -> i64 {
        self.depth
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    pub fn strict_ids(&self) -> &BTreeSet<String> {
        &self.strict_ids
    }

    pub fn total_ids(&self) -> &BTreeSet<String> {
        &self.total_ids
    }

    /// The entry is tagged with exactly this term.
    pub fn record_direct(&mut self, entry_id: &str) {
        self.strict_ids.insert(entry_id.to_string());
        self.total_ids.insert(entry_id.to_string());
    }

    /// The entry is tagged with a descendant of this term.
    pub fn record_descendant(&mut self, entry_id: &str) {
        self.total_ids.insert(entry_id.to_string());
    }

    /// First writer wins; later calls are no-ops.
    pub fn resolve(&mut self, name: &str, depth: i64) {
        if self.resolved {
            return;
        }
        self.name = name.to_string();
        self.depth = depth;
        self.resolved = true;
    }

    /// Union another partition's contribution into this one.
    pub fn merge(&mut self, other: TermStatistics) {
        if !self.resolved && other.resolved {
            self.resolve(&other.name, other.depth);
        }
        self.strict_ids.extend(other.strict_ids);
        self.total_ids.extend(other.total_ids);
    }
}

/// Term id to its statistics. Every access to a possibly missing id goes
/// through [`TermTally::get_or_insert`], which materializes the default shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermTally {
    terms: BTreeMap<String, TermStatistics>,
}

impl TermTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_insert(&mut self, term_id: &str) -> &mut TermStatistics {
        self.terms.entry(term_id.to_string()).or_default()
    }

    pub fn get(&self, term_id: &str) -> Option<&TermStatistics> {
        self.terms.get(term_id)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &TermStatistics)> {
        self.terms.iter()
    }

    pub fn merge(&mut self, other: TermTally) {
        for (term_id, stats) in other.terms {
            match self.terms.get_mut(&term_id) {
                Some(existing) => existing.merge(stats),
                None => {
                    self.terms.insert(term_id, stats);
                }
            }
        }
    }
}

impl IntoIterator for TermTally {
    type Item = (String, TermStatistics);
    type IntoIter = std::collections::btree_map::IntoIter<String, TermStatistics>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}
