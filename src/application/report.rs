use crate::domain::entities::term_statistics::TermTally;
use crate::domain::values::term_category::TermCategory;
use crate::domain::values::timestamp::format_report_date;
use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TermSummary {
    pub name: String,
    pub depth: i64,
    pub strict_count: usize,
    pub total_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_ids: Option<Vec<String>>,
}

/// Serializes as `{ "date": ..., "<category>": { term_id: summary } }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermReport {
    pub date: String,
    pub category: TermCategory,
    pub terms: BTreeMap<String, TermSummary>,
}

impl Serialize for TermReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("date", &self.date)?;
        map.serialize_entry(&self.category.to_string(), &self.terms)?;
        map.end()
    }
}

/// Reduce id sets to counts. With `output_ids` the sorted id lists are kept as well.
pub fn format_report(
    tally: TermTally,
    category: TermCategory,
    upper_time_limit: DateTime<Utc>,
    output_ids: bool,
) -> TermReport {
    let terms = tally
        .into_iter()
        .map(|(term_id, stats)| {
            let summary = TermSummary {
                name: stats.name().to_string(),
                depth: stats.depth(),
                strict_count: stats.strict_ids().len(),
                total_count: stats.total_ids().len(),
                strict_ids: output_ids.then(|| stats.strict_ids().iter().cloned().collect()),
                total_ids: output_ids.then(|| stats.total_ids().iter().cloned().collect()),
            };
            (term_id, summary)
        })
        .collect();

    TermReport {
        date: format_report_date(&upper_time_limit),
        category,
        terms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn tally() -> TermTally {
        let mut t = TermTally::new();
        let s = t.get_or_insert("topic_1");
        s.resolve("One", 0);
        s.record_direct("b");
        s.record_descendant("a");
        t
    }

    #[test]
    fn test_counts_only_by_default() {
        let until = Utc.with_ymd_and_hms(2022, 5, 6, 7, 8, 9).unwrap();
        let report = format_report(tally(), TermCategory::Topic, until, false);
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({
                "date": "2022-05-06T07:08:09Z",
                "topic": {"topic_1": {"name": "One", "depth": 0, "strict_count": 1, "total_count": 2}}
            })
        );
    }

    #[test]
    fn test_ids_sorted_when_requested() {
        let until = Utc.with_ymd_and_hms(2022, 5, 6, 0, 0, 0).unwrap();
        let report = format_report(tally(), TermCategory::Data, until, true);
        let summary = &report.terms["topic_1"];
        assert_eq!(summary.strict_ids.as_deref(), Some(&["b".to_string()][..]));
        assert_eq!(
            summary.total_ids.as_deref(),
            Some(&["a".to_string(), "b".to_string()][..])
        );
        let v = serde_json::to_value(&report).unwrap();
        assert!(v.get("data").is_some());
    }
}
