use clap::Parser;
use registry_stats::cli::commands::{Cli, Commands};
use registry_stats::config::Config;
use registry_stats::domain::error::DomainError;
use registry_stats::domain::ports::corpus_source::CorpusSource;
use registry_stats::domain::ports::ontology_source::OntologySource;
use registry_stats::domain::values::term_category::TermCategory;
use registry_stats::domain::values::timestamp::parse_timestamp;
use registry_stats::infrastructure::corpus::json_file::JsonFileCorpus;
use registry_stats::infrastructure::ontology::file::FileOntologySource;
use registry_stats::RegistryStats;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "registry_stats=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error reading configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(config, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(mut config: Config, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Terms {
            category,
            entries,
            index,
            until,
            ids,
            partitions,
        } => {
            let cat: TermCategory = category.parse()?;
            if let Some(path) = entries {
                config.entries_path = path.into();
            }
            if let Some(n) = partitions {
                config.partitions = usize::try_from(n)?;
            }
            let until = until.as_deref().map(parse_timestamp).transpose()?;

            let stats = build(&config, index)?;
            let report = stats.term_statistics(cat, until, ids).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Timeline { entries, until } => {
            if let Some(path) = entries {
                config.entries_path = path.into();
            }
            let until = until.as_deref().map(parse_timestamp).transpose()?;

            let stats = build(&config, None)?;
            let series = stats.entries_over_time(until).await?;
            println!("{}", serde_json::to_string_pretty(&series)?);
        }
        Commands::General {
            entries,
            licenses,
            until,
        } => {
            if let Some(path) = entries {
                config.entries_path = path.into();
            }
            if let Some(path) = licenses {
                config.licenses_path = Some(path.into());
            }
            let until = until.as_deref().map(parse_timestamp).transpose()?;

            let stats = build(&config, None)?;
            let general = stats.general_statistics(until).await?;
            println!("{}", serde_json::to_string_pretty(&general)?);
        }
    }
    Ok(())
}

fn build(config: &Config, index_file: Option<String>) -> Result<RegistryStats, DomainError> {
    match index_file {
        Some(file) => {
            let corpus: Arc<dyn CorpusSource> = Arc::new(JsonFileCorpus::new(&config.entries_path));
            let ontology: Arc<dyn OntologySource> = Arc::new(FileOntologySource::from_file(file));
            Ok(RegistryStats::with_sources(config, corpus, ontology))
        }
        None => RegistryStats::new(config),
    }
}
