//! Shared test helpers.
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use registry_stats::domain::entities::ontology::OntologyIndex;
use serde_json::{json, Value};

pub const EDAM: &str = "http://edamontology.org/";

pub fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

/// Two-level topic index: topic_001 is the root, topic_002 its child.
pub fn two_level_index() -> OntologyIndex {
    serde_json::from_value(json!({
        "topic_001": {"name": "Root", "path": [{"key": "topic_001"}]},
        "topic_002": {"name": "Child", "path": [{"key": "topic_001||topic_002"}]}
    }))
    .unwrap()
}

/// A wider index with a multi-parent term (topic_005 under both topic_003 and topic_004).
pub fn branching_index() -> OntologyIndex {
    serde_json::from_value(json!({
        "topic_001": {"name": "Root", "path": [{"key": "topic_001"}]},
        "topic_002": {"name": "Child", "path": [{"key": "topic_001||topic_002"}]},
        "topic_003": {"name": "Left", "path": [{"key": "topic_001||topic_002||topic_003"}]},
        "topic_004": {"name": "Right", "path": [{"key": "topic_001||topic_004"}]},
        "topic_005": {"name": "Shared", "path": [
            {"key": "topic_001||topic_002||topic_003||topic_005"},
            {"key": "topic_001||topic_004||topic_005"}
        ]}
    }))
    .unwrap()
}

pub fn topic_entry(id: &str, added: &str, topics: &[&str]) -> Value {
    let topics: Vec<Value> = topics
        .iter()
        .map(|t| json!({"uri": format!("{EDAM}{t}"), "term": t}))
        .collect();
    json!({"bioagentsID": id, "additionDate": added, "topic": topics})
}

pub fn corpus() -> Vec<Value> {
    vec![
        topic_entry("A", "2020-01-01T00:00:00Z", &["topic_002"]),
        topic_entry("B", "2020-02-01T00:00:00Z", &["topic_003", "topic_004"]),
        topic_entry("C", "2020-03-01T00:00:00Z", &["topic_005"]),
        topic_entry("D", "2020-04-01T00:00:00Z", &["topic_999"]),
        topic_entry("E", "2020-05-01T00:00:00Z", &[]),
        topic_entry("F", "2021-01-01T00:00:00Z", &["topic_001", "topic_002"]),
    ]
}
