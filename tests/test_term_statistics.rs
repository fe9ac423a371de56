//! End-to-end term statistics over in-memory corpora.

mod common;

use common::{at, branching_index, corpus, topic_entry, two_level_index, EDAM};
use registry_stats::application::aggregate::TermAggregator;
use registry_stats::application::clean::clean_and_filter;
use registry_stats::application::extract_terms::{extract_terms, EntryTerms};
use registry_stats::application::term_statistics::StatsOptions;
use registry_stats::calculate_term_statistics;
use registry_stats::domain::error::DomainError;
use registry_stats::domain::values::term_category::TermCategory;
use serde_json::json;
use std::collections::BTreeSet;

fn options(until: chrono::DateTime<chrono::Utc>, output_ids: bool) -> StatsOptions {
    StatsOptions {
        upper_time_limit: Some(until),
        output_ids,
        ..StatsOptions::default()
    }
}

#[test]
fn test_child_propagates_to_root() {
    let entries = vec![json!({
        "id": "A",
        "additionDate": "2020-01-01T00:00:00Z",
        "topic": [{"uri": format!("{EDAM}topic_002")}]
    })];
    let report =
        calculate_term_statistics(&entries, "Topic", &two_level_index(), &options(at(2020, 6, 1), false))
            .unwrap();

    let child = &report.terms["topic_002"];
    assert_eq!((child.strict_count, child.total_count, child.depth), (1, 1, 1));
    assert_eq!(child.name, "Child");

    let root = &report.terms["topic_001"];
    assert_eq!((root.strict_count, root.total_count, root.depth), (0, 1, 0));
    assert_eq!(root.name, "Root");
}

#[test]
fn test_entry_after_limit_creates_no_terms() {
    let entries = vec![topic_entry("A", "2020-01-01T00:00:00Z", &["topic_002"])];
    let report =
        calculate_term_statistics(&entries, "topic", &two_level_index(), &options(at(2019, 1, 1), false))
            .unwrap();
    assert!(report.terms.is_empty());
}

#[test]
fn test_duplicate_reference_counted_once() {
    let entries = vec![topic_entry("A", "2020-01-01T00:00:00Z", &["topic_002", "topic_002"])];
    let report =
        calculate_term_statistics(&entries, "topic", &two_level_index(), &options(at(2021, 1, 1), false))
            .unwrap();
    assert_eq!(report.terms["topic_002"].strict_count, 1);
    assert_eq!(report.terms["topic_001"].total_count, 1);
}

#[test]
fn test_same_entry_twice_matches_once() {
    let once = vec![topic_entry("A", "2020-01-01T00:00:00Z", &["topic_003"])];
    let twice = vec![once[0].clone(), once[0].clone()];
    let opts = options(at(2021, 1, 1), true);
    let a = calculate_term_statistics(&once, "topic", &branching_index(), &opts).unwrap();
    let b = calculate_term_statistics(&twice, "topic", &branching_index(), &opts).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_strict_subset_of_total() {
    let report =
        calculate_term_statistics(&corpus(), "topic", &branching_index(), &options(at(2030, 1, 1), true))
            .unwrap();
    assert!(!report.terms.is_empty());
    for (term_id, summary) in &report.terms {
        let strict: BTreeSet<_> = summary.strict_ids.clone().unwrap().into_iter().collect();
        let total: BTreeSet<_> = summary.total_ids.clone().unwrap().into_iter().collect();
        assert!(strict.is_subset(&total), "{term_id}: strict not within total");
        assert!(summary.strict_count <= summary.total_count);
    }
}

#[test]
fn test_totals_over_branching_corpus() {
    let report =
        calculate_term_statistics(&corpus(), "topic", &branching_index(), &options(at(2020, 12, 31), true))
            .unwrap();

    // A, B, C are indexed descendants of the root; D's term is unknown, E has none.
    assert_eq!(report.terms["topic_001"].total_ids.as_deref().unwrap(), ["A", "B", "C"]);
    assert_eq!(report.terms["topic_001"].strict_count, 0);
    assert_eq!(report.terms["topic_004"].total_ids.as_deref().unwrap(), ["B", "C"]);
    assert_eq!(report.terms["topic_003"].total_ids.as_deref().unwrap(), ["B", "C"]);
    assert_eq!(report.terms["topic_005"].depth, 2);
}

#[test]
fn test_unknown_term_stays_strict_only() {
    let report =
        calculate_term_statistics(&corpus(), "topic", &branching_index(), &options(at(2030, 1, 1), false))
            .unwrap();
    let unknown = &report.terms["topic_999"];
    assert_eq!((unknown.strict_count, unknown.total_count), (1, 1));
    assert_eq!(unknown.name, "");
    assert_eq!(unknown.depth, -1);
    // F tags the root directly; D never reaches it.
    assert_eq!(report.terms["topic_001"].strict_count, 1);
    assert_eq!(report.terms["topic_001"].total_count, 4);
}

#[test]
fn test_partition_union_equals_whole() {
    let index = branching_index();
    let entries = clean_and_filter(&corpus(), at(2030, 1, 1)).unwrap();
    let aggregator = TermAggregator::new(&index, EDAM);
    let whole = aggregator.aggregate(&extract_terms(&entries, TermCategory::Topic));

    for split in 0..=entries.len() {
        let (left, right) = entries.split_at(split);
        let mut merged = aggregator.aggregate(&extract_terms(left, TermCategory::Topic));
        merged.merge(aggregator.aggregate(&extract_terms(right, TermCategory::Topic)));
        assert_eq!(merged, whole, "split at {split}");
    }
}

#[test]
fn test_parallel_option_matches_sequential() {
    let index = branching_index();
    let sequential =
        calculate_term_statistics(&corpus(), "topic", &index, &options(at(2030, 1, 1), true)).unwrap();
    let parallel = calculate_term_statistics(
        &corpus(),
        "topic",
        &index,
        &StatsOptions {
            partitions: 4,
            ..options(at(2030, 1, 1), true)
        },
    )
    .unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn test_time_filter_is_monotonic() {
    let bounds = [at(2019, 1, 1), at(2020, 1, 2), at(2020, 3, 1), at(2020, 12, 1), at(2030, 1, 1)];
    let mut previous: BTreeSet<String> = BTreeSet::new();
    for bound in bounds {
        let ids: BTreeSet<String> = clean_and_filter(&corpus(), bound)
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert!(previous.is_subset(&ids));
        previous = ids;
    }
    assert_eq!(previous.len(), 6);
}

#[test]
fn test_depth_takes_shortest_of_three_and_five() {
    let index = serde_json::from_value(json!({
        "t": {"name": "T", "path": [{"key": "a||b||t"}, {"key": "a||c||d||e||t"}]}
    }))
    .unwrap();
    let terms: EntryTerms = [(
        "A".to_string(),
        vec![registry_stats::domain::entities::term_reference::TermReference::new("t")],
    )]
    .into_iter()
    .collect();
    let tally = TermAggregator::new(&index, EDAM).aggregate(&terms);
    assert_eq!(tally.get("t").unwrap().depth(), 2);
}

#[test]
fn test_operation_format_data_categories() {
    let entries = vec![json!({
        "bioagentsID": "tool",
        "additionDate": "2020-01-01T00:00:00Z",
        "function": [
            {
                "operation": [{"uri": format!("{EDAM}operation_0004")}],
                "input": [{"data": {"uri": format!("{EDAM}data_0006")}, "format": [{"uri": format!("{EDAM}format_1915")}]}]
            },
            {
                "operation": [{"uri": format!("{EDAM}operation_2945")}],
                "output": [{"data": {"uri": format!("{EDAM}data_0006")}}]
            }
        ]
    })];
    let empty = Default::default();
    let opts = options(at(2021, 1, 1), false);

    let ops = calculate_term_statistics(&entries, "Operation", &empty, &opts).unwrap();
    assert_eq!(ops.terms.len(), 2);
    let formats = calculate_term_statistics(&entries, "FORMAT", &empty, &opts).unwrap();
    assert_eq!(formats.terms.keys().collect::<Vec<_>>(), ["format_1915"]);
    let data = calculate_term_statistics(&entries, "data", &empty, &opts).unwrap();
    assert_eq!(data.terms["data_0006"].strict_count, 1);
}

#[test]
fn test_invalid_category_rejected() {
    let err = calculate_term_statistics(&corpus(), "license", &two_level_index(), &StatsOptions::default())
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidCategory(_)));
}

#[test]
fn test_malformed_addition_date_fails_whole_call() {
    let mut entries = corpus();
    entries.push(json!({"bioagentsID": "bad", "additionDate": "not a date", "topic": []}));
    let err = calculate_term_statistics(&entries, "topic", &two_level_index(), &options(at(2030, 1, 1), false))
        .unwrap_err();
    assert!(matches!(err, DomainError::Parse(_)));
}

#[test]
fn test_report_json_shape() {
    let entries = vec![topic_entry("A", "2020-01-01T00:00:00Z", &["topic_002"])];
    let report =
        calculate_term_statistics(&entries, "Topic", &two_level_index(), &options(at(2020, 6, 1), false))
            .unwrap();
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["date"], "2020-06-01T00:00:00Z");
    assert_eq!(value["topic"]["topic_001"]["total_count"], 1);
    assert!(value["topic"]["topic_001"].get("total_ids").is_none());
}

#[test]
fn test_compact_and_basic_offsets_are_accepted() {
    let entries = vec![
        topic_entry("A", "2020-01-01T00:00:00+0000", &["topic_002"]),
        topic_entry("B", "2020-01-01T00:00:00+00", &["topic_002"]),
        topic_entry("C", "20200101T000000Z", &["topic_002"]),
    ];
    let report =
        calculate_term_statistics(&entries, "topic", &two_level_index(), &options(at(2020, 6, 1), false))
            .unwrap();
    assert_eq!(report.terms["topic_002"].strict_count, 3);
    assert_eq!(report.terms["topic_001"].total_count, 3);
}
