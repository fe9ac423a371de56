use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "registry-stats", about = "Ontology term statistics over registry entries")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Strict and total entry counts per ontology term
    Terms {
        /// Term category (topic, operation, format, data)
        category: String,
        /// Entry corpus JSON file (overrides REGISTRY_STATS_ENTRIES)
        #[arg(long)]
        entries: Option<String>,
        /// Local ontology index JSON file instead of the index service
        #[arg(long)]
        index: Option<String>,
        /// Count only entries added before this date (ISO-8601, default: now)
        #[arg(long)]
        until: Option<String>,
        /// Include the entry ids behind each count
        #[arg(long)]
        ids: bool,
        /// Aggregate in this many parallel partitions (overrides REGISTRY_STATS_PARTITIONS)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        partitions: Option<u64>,
    },
    /// Presence, counts and value breakdowns of the descriptive entry fields
    General {
        /// Entry corpus JSON file (overrides REGISTRY_STATS_ENTRIES)
        #[arg(long)]
        entries: Option<String>,
        /// SPDX licenses.json used to group licenses (overrides REGISTRY_STATS_LICENSES)
        #[arg(long)]
        licenses: Option<String>,
        /// Count only entries added before this date (ISO-8601, default: now)
        #[arg(long)]
        until: Option<String>,
    },
    /// Cumulative number of entries per day
    Timeline {
        /// Entry corpus JSON file (overrides REGISTRY_STATS_ENTRIES)
        #[arg(long)]
        entries: Option<String>,
        /// Count only entries added before this date (ISO-8601, default: now)
        #[arg(long)]
        until: Option<String>,
    },
}
