//! Snapshot records and their rendering.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use gaugekit_core::{
    format_collected_metric, CollectedGauge, Gauge, GaugeCell, MetricMetadata, MetricValue, Units,
};

fn sorted(mut gauges: Vec<CollectedGauge>) -> Vec<CollectedGauge> {
    gauges.sort_by(|a, b| a.fields.cmp(&b.fields));
    gauges
}

#[test]
fn one_entry_per_touched_tuple() {
    let g: Gauge<i64, (&'static str, i64, bool)> = Gauge::allocate(
        "/collect/int",
        ["region", "port", "tls"],
        MetricMetadata::new("open connections").with_units(Units::Count),
    )
    .unwrap();
    g.set(3, ("eu", 443, true));
    g.increment(("eu", 443, true));
    g.decrement(("us", 80, false));

    let snap = g.collect();
    assert_eq!(snap.tag, "gauge");
    assert_eq!(snap.metric_name, "/collect/int");
    assert_eq!(snap.field_names, vec!["region", "port", "tls"]);
    assert_eq!(snap.metadata.description, "open connections");
    assert_eq!(snap.metadata.units, Units::Count);

    let gauges = sorted(snap.gauges);
    assert_eq!(
        gauges,
        vec![
            CollectedGauge {
                fields: vec!["eu".into(), "443".into(), "true".into()],
                value: MetricValue::Int(4),
            },
            CollectedGauge {
                fields: vec!["us".into(), "80".into(), "false".into()],
                value: MetricValue::Int(-1),
            },
        ]
    );
}

#[test]
fn empty_gauge_collects_no_entries() {
    let g: Gauge<f64, (i64,)> =
        Gauge::allocate("/collect/empty", ["id"], MetricMetadata::default()).unwrap();
    let snap = g.collect();
    assert!(snap.gauges.is_empty());
    assert_eq!(snap.field_names, vec!["id"]);
}

#[test]
fn get_materializes_a_zero_cell() {
    let g: Gauge<i64, (i64,)> =
        Gauge::allocate("/collect/get", ["id"], MetricMetadata::default()).unwrap();
    assert_eq!(g.get((9,)), 0);
    let snap = g.collect();
    assert_eq!(snap.gauges.len(), 1);
    assert_eq!(snap.gauges[0].value, MetricValue::Int(0));
}

#[test]
fn collect_cells_visits_each_cell() {
    let g: Gauge<f64, (&'static str,)> =
        Gauge::allocate("/collect/cells", ["name"], MetricMetadata::default()).unwrap();
    g.set(1.5, ("a",));
    g.set(2.5, ("b",));
    g.set(4.0, ("c",));

    let mut seen = Vec::new();
    let mut total = 0.0;
    g.collect_cells(|cell, labels| {
        seen.push(labels.0);
        total += cell.get();
    });
    seen.sort();
    assert_eq!(seen, vec!["a", "b", "c"]);
    assert_eq!(total, 8.0);
}

#[test]
fn serializes_to_json() {
    let g: Gauge<f64, (bool,)> = Gauge::allocate(
        "/collect/json",
        ["hit"],
        MetricMetadata::new("ratio").with_units(Units::Seconds),
    )
    .unwrap();
    g.set(0.5, (true,));

    let v = serde_json::to_value(g.collect()).unwrap();
    assert_eq!(
        v,
        serde_json::json!({
            "tag": "gauge",
            "metric_name": "/collect/json",
            "metadata": { "description": "ratio", "units": "seconds" },
            "field_names": ["hit"],
            "gauges": [ { "fields": ["true"], "value": 0.5 } ]
        })
    );

    let i: Gauge<i64> = Gauge::allocate("/collect/json_int", [], MetricMetadata::default()).unwrap();
    i.set(12, ());
    let v = serde_json::to_value(i.collect()).unwrap();
    assert_eq!(v["gauges"][0]["value"], serde_json::json!(12));
    assert_eq!(v["gauges"][0]["fields"], serde_json::json!([]));
}

#[test]
fn format_lines() {
    let labeled: Gauge<i64, (&'static str, i64)> =
        Gauge::allocate("/fmt/labeled", ["q", "p"], MetricMetadata::default()).unwrap();
    labeled.set(7, ("jobs", 2));

    let plain: Gauge<f64> = Gauge::allocate("/fmt/plain", [], MetricMetadata::default()).unwrap();
    plain.set(1.25, ());

    let mut lines = Vec::new();
    format_collected_metric(&labeled.collect(), &mut |l: &str| lines.push(l.to_string()));
    format_collected_metric(&plain.collect(), &mut |l: &str| lines.push(l.to_string()));
    assert_eq!(lines, vec!["/fmt/labeled<jobs,2>=7", "/fmt/plain=1.25"]);
}
