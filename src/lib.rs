pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::entries_over_time::{EntriesOverTime, EntriesOverTimeUseCase};
use crate::application::general_statistics::{GeneralStatistics, GeneralStatisticsUseCase};
use crate::application::report::TermReport;
use crate::application::term_statistics::{StatsOptions, TermStatisticsUseCase};
use crate::config::Config;
use crate::domain::error::DomainError;
use crate::domain::ports::corpus_source::CorpusSource;
use crate::domain::ports::license_source::LicenseSource;
use crate::domain::ports::ontology_source::OntologySource;
use crate::domain::values::term_category::TermCategory;
use crate::infrastructure::corpus::json_file::JsonFileCorpus;
use crate::infrastructure::licenses::spdx_file::SpdxFileLicenseSource;
use crate::infrastructure::ontology::file::FileOntologySource;
use crate::infrastructure::ontology::http::HttpOntologySource;
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub use crate::application::general_statistics::calculate_general_statistics;
pub use crate::application::term_statistics::calculate_term_statistics;

pub struct RegistryStats {
    namespace: String,
    partitions: usize,
    term_stats_uc: TermStatisticsUseCase,
    general_stats_uc: GeneralStatisticsUseCase,
    over_time_uc: EntriesOverTimeUseCase,
}

impl RegistryStats {
    pub fn new(config: &Config) -> Result<Self, DomainError> {
        let corpus: Arc<dyn CorpusSource> = Arc::new(JsonFileCorpus::new(&config.entries_path));
        let ontology: Arc<dyn OntologySource> = match &config.index_dir {
            Some(dir) => Arc::new(FileOntologySource::from_dir(dir)),
            None => Arc::new(HttpOntologySource::new(
                Some(config.index_url.clone()),
                config.http_timeout,
            )?),
        };
        Ok(Self::with_sources(config, corpus, ontology))
    }

    pub fn with_sources(
        config: &Config,
        corpus: Arc<dyn CorpusSource>,
        ontology: Arc<dyn OntologySource>,
    ) -> Self {
        let licenses = config
            .licenses_path
            .as_ref()
            .map(|path| Arc::new(SpdxFileLicenseSource::new(path)) as Arc<dyn LicenseSource>);
        Self {
            namespace: config.namespace.clone(),
            partitions: config.partitions,
            term_stats_uc: TermStatisticsUseCase::new(corpus.clone(), ontology),
            general_stats_uc: GeneralStatisticsUseCase::new(corpus.clone(), licenses),
            over_time_uc: EntriesOverTimeUseCase::new(corpus),
        }
    }

    pub async fn term_statistics(
        &self,
        category: TermCategory,
        upper_time_limit: Option<DateTime<Utc>>,
        output_ids: bool,
    ) -> Result<TermReport, DomainError> {
        let options = StatsOptions {
            upper_time_limit,
            output_ids,
            namespace: self.namespace.clone(),
            partitions: self.partitions,
        };
        self.term_stats_uc.execute(category, &options).await
    }

    pub async fn general_statistics(
        &self,
        upper_time_limit: Option<DateTime<Utc>>,
    ) -> Result<GeneralStatistics, DomainError> {
        self.general_stats_uc.execute(upper_time_limit).await
    }

    pub async fn entries_over_time(
        &self,
        upper_time_limit: Option<DateTime<Utc>>,
    ) -> Result<EntriesOverTime, DomainError> {
        self.over_time_uc.execute(upper_time_limit).await
    }
}
