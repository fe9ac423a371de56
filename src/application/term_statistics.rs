use crate::application::aggregate::TermAggregator;
use crate::application::clean::clean_and_filter;
use crate::application::extract_terms::extract_terms;
use crate::application::report::{format_report, TermReport};
use crate::domain::entities::ontology::OntologyIndex;
use crate::domain::entities::term_reference::DEFAULT_NAMESPACE;
use crate::domain::error::DomainError;
use crate::domain::ports::corpus_source::CorpusSource;
use crate::domain::ports::ontology_source::OntologySource;
use crate::domain::values::term_category::TermCategory;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct StatsOptions {
    /// Only entries added strictly before this instant count. `None` means now.
    pub upper_time_limit: Option<DateTime<Utc>>,
    /// Keep the sorted id lists in the report, not just the counts.
    pub output_ids: bool,
    /// Prefix stripped from term URIs.
    pub namespace: String,
    /// Above 1, entries are aggregated in this many partitions in parallel.
    pub partitions: usize,
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self {
            upper_time_limit: None,
            output_ids: false,
            namespace: DEFAULT_NAMESPACE.to_string(),
            partitions: 1,
        }
    }
}

/// Clean, filter, extract and aggregate in one call.
pub fn calculate_term_statistics(
    entries: &[Value],
    category: &str,
    index: &OntologyIndex,
    options: &StatsOptions,
) -> Result<TermReport, DomainError> {
    let category: TermCategory = category.parse()?;
    let upper_time_limit = options.upper_time_limit.unwrap_or_else(Utc::now);

    let entries = clean_and_filter(entries, upper_time_limit)?;
    let entry_terms = extract_terms(&entries, category);

    let aggregator = TermAggregator::new(index, &options.namespace);
    let tally = if options.partitions > 1 {
        aggregator.aggregate_partitioned(&entry_terms, options.partitions)
    } else {
        aggregator.aggregate(&entry_terms)
    };

    tracing::info!(
        %category,
        entries = entries.len(),
        terms = tally.len(),
        "calculated term statistics"
    );
    Ok(format_report(tally, category, upper_time_limit, options.output_ids))
}

pub struct TermStatisticsUseCase {
    corpus: Arc<dyn CorpusSource>,
    ontology: Arc<dyn OntologySource>,
}

impl TermStatisticsUseCase {
    pub fn new(corpus: Arc<dyn CorpusSource>, ontology: Arc<dyn OntologySource>) -> Self {
        Self { corpus, ontology }
    }

    pub async fn execute(
        &self,
        category: TermCategory,
        options: &StatsOptions,
    ) -> Result<TermReport, DomainError> {
        let index = self.ontology.fetch(category).await?;
        let entries = self.corpus.load().await?;
        calculate_term_statistics(&entries, &category.to_string(), &index, options)
    }
}
