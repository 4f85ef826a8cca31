use chrono::{Local, TimeZone};
use ids_results::*;

fn metrics(base: f64) -> MetricSet {
    MetricSet::new(base, base + 1.0, base + 2.0, base + 3.0).unwrap()
}

fn stamp(day: u32, hour: u32) -> chrono::DateTime<Local> {
    Local
        .with_ymd_and_hms(2026, 3, day, hour, 30, 0)
        .single()
        .expect("valid local time")
}

#[test]
fn append_assigns_dense_run_numbers() {
    let mut store = RunStore::new();
    assert!(store.is_empty());

    for i in 0..5 {
        let record = store.append("LCCDE", stamp(10 + i, 9), metrics(80.0));
        assert_eq!(record.run_number, i + 1);
    }

    assert_eq!(store.len(), 5);
    let numbers: Vec<u32> = store.runs().iter().map(|r| r.run_number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
}

#[test]
fn latest_and_get_agree() {
    let mut store = RunStore::new();
    store.append("Tree-based", stamp(1, 8), metrics(75.0));
    store.append("MTH-IDS", stamp(2, 8), metrics(85.0));

    let latest = store.latest().unwrap();
    assert_eq!(latest.run_number, 2);
    assert_eq!(latest.model_name, "MTH-IDS");

    assert_eq!(store.get(1).unwrap().model_name, "Tree-based");
    assert!(store.get(3).is_none());
    assert!(store.get(0).is_none());
}

#[test]
fn records_keep_insertion_order() {
    let mut store = RunStore::new();
    // Timestamps deliberately out of order; the store never re-sorts.
    store.append("LCCDE", stamp(20, 9), metrics(80.0));
    store.append("LCCDE", stamp(5, 9), metrics(81.0));
    store.append("LCCDE", stamp(12, 9), metrics(82.0));

    let days: Vec<u32> = store
        .runs()
        .iter()
        .map(|r| chrono::Datelike::day(&r.timestamp))
        .collect();
    assert_eq!(days, vec![20, 5, 12]);
}

#[test]
fn run_label_matches_history_format() {
    let mut store = RunStore::new();
    let record = store.append("LCCDE", stamp(15, 14), metrics(80.0));
    assert_eq!(record.label(), "Run 1 (LCCDE)");
}

#[test]
fn records_round_trip_through_json() {
    let mut store = RunStore::new();
    store.append("Tree-based", stamp(3, 11), metrics(78.5));

    let json = serde_json::to_string(store.runs()).unwrap();
    let parsed: Vec<RunRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].run_number, 1);
    assert_eq!(parsed[0].metrics.accuracy, 78.5);
}
