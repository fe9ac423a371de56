use crate::domain::entities::registry_entry::RegistryEntry;
use crate::domain::error::DomainError;
use crate::domain::values::prune::prune;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Strip falsy fields from every raw record and keep the entries added
/// strictly before `upper_time_limit`.
///
/// Records that prune away entirely are dropped, as are entries with no
/// addition date. A present but malformed addition date fails the whole call.
pub fn clean_and_filter(
    raw_entries: &[Value],
    upper_time_limit: DateTime<Utc>,
) -> Result<Vec<RegistryEntry>, DomainError> {
    let mut kept = Vec::with_capacity(raw_entries.len());
    let mut undated = 0usize;

    for record in raw_entries.iter().cloned().filter_map(prune) {
        let entry = RegistryEntry::from_record(record)?;
        match entry.added_before(upper_time_limit) {
            Some(true) => kept.push(entry),
            Some(false) => {}
            None => {
                tracing::warn!(entry = %entry.id, "entry has no addition date, skipping");
                undated += 1;
            }
        }
    }

    tracing::debug!(
        raw = raw_entries.len(),
        kept = kept.len(),
        undated,
        until = %upper_time_limit,
        "cleaned and filtered entries"
    );
    Ok(kept)
}
