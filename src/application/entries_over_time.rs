use crate::application::clean::clean_and_filter;
use crate::domain::error::DomainError;
use crate::domain::ports::corpus_source::CorpusSource;
use crate::domain::values::timestamp::format_report_date;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntriesOverTime {
    pub date: String,
    /// Calendar date to the number of distinct entries added on or before it.
    /// An entry's date is the one written in its own offset.
    pub counts: BTreeMap<NaiveDate, usize>,
}

/// Cumulative entry count for every day from the first to the last addition date.
pub fn calculate_entries_over_time(
    entries: &[Value],
    upper_time_limit: Option<DateTime<Utc>>,
) -> Result<EntriesOverTime, DomainError> {
    let upper_time_limit = upper_time_limit.unwrap_or_else(Utc::now);
    let entries = clean_and_filter(entries, upper_time_limit)?;

    // Repeated records of one entry count once; the last record's date wins.
    let mut added_on: HashMap<&str, NaiveDate> = HashMap::new();
    for entry in &entries {
        if let Some(added) = entry.added_at {
            added_on.insert(entry.id.as_str(), added.date_naive());
        }
    }

    let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for day in added_on.into_values() {
        *per_day.entry(day).or_default() += 1;
    }

    let mut counts = BTreeMap::new();
    if let (Some(&first), Some(&last)) = (per_day.keys().next(), per_day.keys().next_back()) {
        let mut running = 0usize;
        for day in first.iter_days().take_while(|d| *d <= last) {
            running += per_day.get(&day).copied().unwrap_or(0);
            counts.insert(day, running);
        }
    }

    Ok(EntriesOverTime {
        date: format_report_date(&upper_time_limit),
        counts,
    })
}

pub struct EntriesOverTimeUseCase {
    corpus: Arc<dyn CorpusSource>,
}

impl EntriesOverTimeUseCase {
    pub fn new(corpus: Arc<dyn CorpusSource>) -> Self {
        Self { corpus }
    }

    pub async fn execute(
        &self,
        upper_time_limit: Option<DateTime<Utc>>,
    ) -> Result<EntriesOverTime, DomainError> {
        let entries = self.corpus.load().await?;
        calculate_entries_over_time(&entries, upper_time_limit)
    }
}
