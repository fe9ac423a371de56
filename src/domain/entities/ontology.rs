//! Read-only ontology index: term id to display name and ancestor paths.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Separator between term ids inside a path key.
pub const PATH_SEPARATOR: &str = "||";

/// One path-to-root, as delivered by the index service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathKey {
    pub key: String,
}

impl PathKey {
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.key.split(PATH_SEPARATOR).filter(|c| !c.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologyTerm {
    pub name: String,
    #[serde(default)]
    pub path: Vec<PathKey>,
}

impl OntologyTerm {
    /// Every path flattened into a single ordered list of term ids.
    pub fn branch_terms(&self) -> impl Iterator<Item = &str> {
        self.path.iter().flat_map(PathKey::components)
    }

    /// Shortest path length minus one, so a root (path of one component) is depth 0.
    /// A term with no usable path is treated as a root.
    pub fn depth(&self) -> i64 {
        self.path
            .iter()
            .map(|p| p.components().count())
            .filter(|&n| n > 0)
            .min()
            .map(|n| n as i64 - 1)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OntologyIndex {
    terms: HashMap<String, OntologyTerm>,
}

impl OntologyIndex {
    pub fn new(terms: HashMap<String, OntologyTerm>) -> Self {
        Self { terms }
    }

    pub fn get(&self, term_id: &str) -> Option<&OntologyTerm> {
        self.terms.get(term_id)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl FromIterator<(String, OntologyTerm)> for OntologyIndex {
    fn from_iter<I: IntoIterator<Item = (String, OntologyTerm)>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}
