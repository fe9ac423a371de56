use crate::application::clean::clean_and_filter;
use crate::domain::entities::license_catalog::LicenseCatalog;
use crate::domain::entities::registry_entry::RegistryEntry;
use crate::domain::error::DomainError;
use crate::domain::ports::corpus_source::CorpusSource;
use crate::domain::ports::license_source::LicenseSource;
use crate::domain::values::timestamp::format_report_date;
use crate::domain::values::vocabulary::*;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Where the values broken down for a field come from.
#[derive(Debug, Clone, Copy)]
enum Values {
    /// Presence and item count only.
    Untyped,
    /// The field itself: a string or a list of strings.
    Flat(&'static [&'static str]),
    /// A key of each item in the field's list: a string or a list of strings.
    Nested(&'static str, &'static [&'static str]),
    /// License ids, grouped through the license catalog.
    License,
}

#[derive(Debug, Clone, Copy)]
struct FieldRule {
    field: &'static str,
    /// Report the total number of items across entries.
    count: bool,
    values: Values,
}

const fn rule(field: &'static str, count: bool, values: Values) -> FieldRule {
    FieldRule { field, count, values }
}

const FIELD_RULES: &[FieldRule] = &[
    rule("agentType", true, Values::Flat(AGENT_TYPES)),
    rule("topic", true, Values::Untyped),
    rule("operatingSystem", true, Values::Flat(OPERATING_SYSTEMS)),
    rule("language", true, Values::Flat(LANGUAGES)),
    rule("license", false, Values::License),
    rule("maturity", false, Values::Flat(MATURITY)),
    rule("cost", false, Values::Flat(COSTS)),
    rule("collectionID", true, Values::Untyped),
    rule("accessibility", false, Values::Flat(ACCESSIBILITY)),
    rule("iechorPlatform", true, Values::Flat(PLATFORMS)),
    rule("iechorNode", true, Values::Flat(NODES)),
    rule("iechorCommunity", true, Values::Flat(COMMUNITIES)),
    rule("link", true, Values::Nested("type", LINK_TYPES)),
    rule("download", true, Values::Nested("type", DOWNLOAD_TYPES)),
    rule("documentation", true, Values::Nested("type", DOCUMENTATION_TYPES)),
    rule("publication", true, Values::Nested("type", PUBLICATION_TYPES)),
    rule("credit", true, Values::Nested("typeRole", CREDIT_ROLES)),
    rule("relation", true, Values::Nested("type", RELATION_TYPES)),
    rule("community", true, Values::Untyped),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldStatistics {
    /// Entries carrying the field.
    pub has: usize,
    /// Items across all entries carrying the field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Entries with at least one item carrying a value (list-of-records fields).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typed: Option<usize>,
    /// Occurrences per value. Every vocabulary value is present, zero when unused.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<BTreeMap<String, usize>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralStatistics {
    pub date: String,
    pub entry_count: usize,
    #[serde(flatten)]
    pub fields: BTreeMap<String, FieldStatistics>,
}

fn strings(value: &Value) -> Vec<&str> {
    match value {
        Value::String(s) => vec![s.as_str()],
        Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}

fn item_count(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.len(),
        _ => 1,
    }
}

fn zeroed<'a>(keys: impl IntoIterator<Item = &'a str>) -> BTreeMap<String, usize> {
    keys.into_iter().map(|k| (k.to_string(), 0)).collect()
}

fn bump(breakdown: &mut BTreeMap<String, usize>, key: &str) {
    *breakdown.entry(key.to_string()).or_default() += 1;
}

fn count_license(breakdown: &mut BTreeMap<String, usize>, license: &str, catalog: &LicenseCatalog) {
    if license == NOT_LICENSED {
        bump(breakdown, "NoLicense");
    } else {
        bump(breakdown, license);
    }
    if catalog.osi_approved.contains(license) {
        bump(breakdown, "OSIApproved");
    }
    if catalog.fsf_approved.contains(license) {
        bump(breakdown, "FSFApproved");
    }
    if catalog.deprecated.contains(license) {
        bump(breakdown, "DeprecatedIdentifier");
    }
}

fn field_statistics(rule: &FieldRule, entries: &[RegistryEntry], catalog: &LicenseCatalog) -> FieldStatistics {
    let mut stats = FieldStatistics {
        count: rule.count.then_some(0),
        ..FieldStatistics::default()
    };
    let mut breakdown = match rule.values {
        Values::Untyped => None,
        Values::Flat(vocabulary) | Values::Nested(_, vocabulary) => Some(zeroed(vocabulary.iter().copied())),
        Values::License => Some(zeroed(
            LICENSE_GROUPS.iter().copied().chain(catalog.licenses.iter().map(String::as_str)),
        )),
    };
    let mut typed = matches!(rule.values, Values::Nested(..)).then_some(0);

    for value in entries.iter().filter_map(|e| e.field(rule.field)) {
        stats.has += 1;
        if let Some(count) = stats.count.as_mut() {
            *count += item_count(value);
        }
        let Some(breakdown) = breakdown.as_mut() else {
            continue;
        };
        match rule.values {
            Values::Untyped => {}
            Values::Flat(_) => strings(value).into_iter().for_each(|v| bump(breakdown, v)),
            Values::License => {
                for license in strings(value) {
                    count_license(breakdown, license, catalog);
                }
            }
            Values::Nested(key, _) => {
                let mut any = false;
                for item in value.as_array().into_iter().flatten() {
                    for v in item.get(key).map(strings).unwrap_or_default() {
                        bump(breakdown, v);
                        any = true;
                    }
                }
                if any {
                    if let Some(typed) = typed.as_mut() {
                        *typed += 1;
                    }
                }
            }
        }
    }

    stats.typed = typed;
    stats.breakdown = breakdown;
    stats
}

/// Presence, item counts and value breakdowns of the registry's descriptive
/// fields over the entries added before `upper_time_limit`.
///
/// Values outside a field's vocabulary are counted under their own name.
pub fn calculate_general_statistics(
    entries: &[Value],
    catalog: &LicenseCatalog,
    upper_time_limit: Option<DateTime<Utc>>,
) -> Result<GeneralStatistics, DomainError> {
    let upper_time_limit = upper_time_limit.unwrap_or_else(Utc::now);
    let entries = clean_and_filter(entries, upper_time_limit)?;

    let fields = FIELD_RULES
        .iter()
        .map(|rule| (rule.field.to_string(), field_statistics(rule, &entries, catalog)))
        .collect();

    tracing::info!(entries = entries.len(), "calculated general statistics");
    Ok(GeneralStatistics {
        date: format_report_date(&upper_time_limit),
        entry_count: entries.len(),
        fields,
    })
}

pub struct GeneralStatisticsUseCase {
    corpus: Arc<dyn CorpusSource>,
    licenses: Option<Arc<dyn LicenseSource>>,
}

impl GeneralStatisticsUseCase {
    pub fn new(corpus: Arc<dyn CorpusSource>, licenses: Option<Arc<dyn LicenseSource>>) -> Self {
        Self { corpus, licenses }
    }

    pub async fn execute(
        &self,
        upper_time_limit: Option<DateTime<Utc>>,
    ) -> Result<GeneralStatistics, DomainError> {
        let catalog = match &self.licenses {
            Some(source) => source.fetch().await?,
            None => {
                tracing::debug!("no license list configured, license groups stay at zero");
                LicenseCatalog::default()
            }
        };
        let entries = self.corpus.load().await?;
        calculate_general_statistics(&entries, &catalog, upper_time_limit)
    }
}
