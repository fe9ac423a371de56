//! Per-category lookup of the term references an entry carries.

use crate::domain::entities::registry_entry::RegistryEntry;
use crate::domain::entities::term_reference::TermReference;
use crate::domain::values::term_category::TermCategory;
use serde_json::Value;
use std::collections::BTreeMap;

/// Entry id to the raw term references found for one category.
pub type EntryTerms = BTreeMap<String, Vec<TermReference>>;

type Extractor = fn(&RegistryEntry) -> Vec<TermReference>;

fn extractor_for(category: TermCategory) -> Extractor {
    match category {
        TermCategory::Topic => topics,
        TermCategory::Operation => operations,
        TermCategory::Format => formats,
        TermCategory::Data => data,
    }
}

/// Every entry gets a key, even when it carries no references for `category`.
pub fn extract_terms(entries: &[RegistryEntry], category: TermCategory) -> EntryTerms {
    let extract = extractor_for(category);
    let mut terms = EntryTerms::new();
    for entry in entries {
        terms
            .entry(entry.id.clone())
            .or_default()
            .extend(extract(entry));
    }
    terms
}

fn topics(entry: &RegistryEntry) -> Vec<TermReference> {
    let mut out = Vec::new();
    if let Some(topic) = entry.field("topic") {
        TermReference::collect_into(topic, &mut out);
    }
    out
}

fn operations(entry: &RegistryEntry) -> Vec<TermReference> {
    let mut out = Vec::new();
    for function in entry.functions() {
        if let Some(ops) = function.get("operation") {
            TermReference::collect_into(ops, &mut out);
        }
    }
    out
}

fn formats(entry: &RegistryEntry) -> Vec<TermReference> {
    io_terms(entry, "format")
}

fn data(entry: &RegistryEntry) -> Vec<TermReference> {
    io_terms(entry, "data")
}

/// Terms under `field` of every input and output of every function.
fn io_terms(entry: &RegistryEntry, field: &str) -> Vec<TermReference> {
    let mut out = Vec::new();
    for function in entry.functions() {
        for side in ["input", "output"] {
            let items = function.get(side).and_then(Value::as_array);
            for item in items.into_iter().flatten() {
                if let Some(terms) = item.get(field) {
                    TermReference::collect_into(terms, &mut out);
                }
            }
        }
    }
    out
}
