//! Ontology term aggregation.
//!
//! Each `(entry, term)` pair adds the entry to the term's strict and total
//! sets, then to the total set of every term on the term's index paths.
//! Contributions combine by set union, so entries can be aggregated in any
//! order or in independent partitions and merged afterwards.

use rayon::prelude::*;

use crate::application::extract_terms::EntryTerms;
use crate::domain::entities::ontology::OntologyIndex;
use crate::domain::entities::term_reference::TermReference;
use crate::domain::entities::term_statistics::{TermStatistics, TermTally};

pub struct TermAggregator<'a> {
    index: &'a OntologyIndex,
    namespace: &'a str,
}

impl<'a> TermAggregator<'a> {
    pub fn new(index: &'a OntologyIndex, namespace: &'a str) -> Self {
        Self { index, namespace }
    }

    pub fn aggregate(&self, entry_terms: &EntryTerms) -> TermTally {
        let mut tally = TermTally::new();
        for (entry_id, references) in entry_terms {
            for reference in references {
                self.add_term(&mut tally, entry_id, reference);
            }
        }
        tracing::debug!(
            entries = entry_terms.len(),
            terms = tally.len(),
            "aggregated term statistics"
        );
        tally
    }

    /// Split the entries into `partitions` chunks, aggregate each on the rayon
    /// pool with its own tally, and union the tallies. Equivalent to [`aggregate`](Self::aggregate).
    pub fn aggregate_partitioned(&self, entry_terms: &EntryTerms, partitions: usize) -> TermTally {
        let pairs: Vec<(&String, &Vec<TermReference>)> = entry_terms.iter().collect();
        let chunk_size = pairs.len().div_ceil(partitions.max(1)).max(1);

        pairs
            .par_chunks(chunk_size)
            .map(|chunk| {
                let mut tally = TermTally::new();
                for (entry_id, references) in chunk {
                    for reference in references.iter() {
                        self.add_term(&mut tally, entry_id, reference);
                    }
                }
                tally
            })
            .reduce(TermTally::new, |mut acc, part| {
                acc.merge(part);
                acc
            })
    }

    fn add_term(&self, tally: &mut TermTally, entry_id: &str, reference: &TermReference) {
        let term_id = reference.canonical_id(self.namespace);

        let stats = tally.get_or_insert(term_id);
        stats.record_direct(entry_id);
        self.resolve_info(stats, term_id);

        // Terms missing from the index stay strict-only.
        let Some(term) = self.index.get(term_id) else {
            return;
        };
        for branch_term in term.branch_terms() {
            let ancestor = tally.get_or_insert(branch_term);
            self.resolve_info(ancestor, branch_term);
            ancestor.record_descendant(entry_id);
        }
    }

    fn resolve_info(&self, stats: &mut TermStatistics, term_id: &str) {
        if stats.is_resolved() {
            return;
        }
        if let Some(term) = self.index.get(term_id) {
            stats.resolve(&term.name, term.depth());
        }
    }
}
