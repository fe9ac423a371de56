//! Runtime configuration read from the environment.

use crate::domain::entities::term_reference::DEFAULT_NAMESPACE;
use crate::domain::error::DomainError;
use crate::infrastructure::ontology::http::DEFAULT_INDEX_URL;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// Entry corpus file (`REGISTRY_STATS_ENTRIES`).
    pub entries_path: PathBuf,
    /// Ontology index service base URL (`REGISTRY_STATS_INDEX_URL`).
    pub index_url: String,
    /// Local index directory; takes precedence over the service when set (`REGISTRY_STATS_INDEX_DIR`).
    pub index_dir: Option<PathBuf>,
    /// Prefix stripped from term URIs (`REGISTRY_STATS_NAMESPACE`).
    pub namespace: String,
    /// Index request timeout (`REGISTRY_STATS_HTTP_TIMEOUT_SECS`).
    pub http_timeout: Duration,
    /// SPDX `licenses.json` used to group licenses (`REGISTRY_STATS_LICENSES`).
    pub licenses_path: Option<PathBuf>,
    /// Parallel aggregation partitions; 1 aggregates sequentially (`REGISTRY_STATS_PARTITIONS`).
    pub partitions: usize,
}

fn default_entries_path() -> PathBuf {
    PathBuf::from("./tools.json")
}

fn default_http_timeout() -> Duration {
    Duration::from_secs(30)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            entries_path: default_entries_path(),
            index_url: DEFAULT_INDEX_URL.to_string(),
            index_dir: None,
            namespace: DEFAULT_NAMESPACE.to_string(),
            http_timeout: default_http_timeout(),
            licenses_path: None,
            partitions: 1,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or empty keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let http_timeout = match get("REGISTRY_STATS_HTTP_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map(Duration::from_secs).map_err(|_| {
                DomainError::Config(format!(
                    "REGISTRY_STATS_HTTP_TIMEOUT_SECS must be a whole number of seconds, got '{raw}'"
                ))
            })?,
            None => defaults.http_timeout,
        };

        let partitions = match get("REGISTRY_STATS_PARTITIONS") {
            Some(raw) => raw.trim().parse::<usize>().ok().filter(|n| *n > 0).ok_or_else(|| {
                DomainError::Config(format!(
                    "REGISTRY_STATS_PARTITIONS must be a positive whole number, got '{raw}'"
                ))
            })?,
            None => defaults.partitions,
        };

        Ok(Self {
            entries_path: get("REGISTRY_STATS_ENTRIES")
                .map(PathBuf::from)
                .unwrap_or(defaults.entries_path),
            index_url: get("REGISTRY_STATS_INDEX_URL").unwrap_or(defaults.index_url),
            index_dir: get("REGISTRY_STATS_INDEX_DIR").map(PathBuf::from),
            namespace: get("REGISTRY_STATS_NAMESPACE").unwrap_or(defaults.namespace),
            http_timeout,
            licenses_path: get("REGISTRY_STATS_LICENSES").map(PathBuf::from),
            partitions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.entries_path, PathBuf::from("./tools.json"));
        assert_eq!(cfg.index_url, DEFAULT_INDEX_URL);
        assert_eq!(cfg.namespace, DEFAULT_NAMESPACE);
        assert!(cfg.index_dir.is_none());
        assert_eq!(cfg.http_timeout, Duration::from_secs(30));
        assert!(cfg.licenses_path.is_none());
        assert_eq!(cfg.partitions, 1);
    }

    #[test]
    fn test_overrides() {
        let cfg = Config::from_lookup(lookup(&[
            ("REGISTRY_STATS_ENTRIES", "/data/tools.json"),
            ("REGISTRY_STATS_INDEX_DIR", "/data/index"),
            ("REGISTRY_STATS_NAMESPACE", "urn:x:"),
            ("REGISTRY_STATS_HTTP_TIMEOUT_SECS", "5"),
            ("REGISTRY_STATS_LICENSES", "/data/licenses.json"),
            ("REGISTRY_STATS_PARTITIONS", "4"),
        ]))
        .unwrap();
        assert_eq!(cfg.entries_path, PathBuf::from("/data/tools.json"));
        assert_eq!(cfg.index_dir, Some(PathBuf::from("/data/index")));
        assert_eq!(cfg.namespace, "urn:x:");
        assert_eq!(cfg.http_timeout, Duration::from_secs(5));
        assert_eq!(cfg.licenses_path, Some(PathBuf::from("/data/licenses.json")));
        assert_eq!(cfg.partitions, 4);
    }

    #[test]
    fn test_bad_timeout_rejected() {
        let err = Config::from_lookup(lookup(&[("REGISTRY_STATS_HTTP_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(matches!(err, DomainError::Config(_)));
    }

    #[test]
    fn test_bad_partitions_rejected() {
        for raw in ["0", "-2", "many"] {
            let err = Config::from_lookup(lookup(&[("REGISTRY_STATS_PARTITIONS", raw)])).unwrap_err();
            assert!(matches!(err, DomainError::Config(_)), "{raw}");
        }
    }
}
