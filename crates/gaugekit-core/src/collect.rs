//! Point-in-time snapshot records produced by metrics.

use std::fmt;

use serde::Serialize;

use crate::metadata::MetricMetadata;

/// Tag carried by every gauge snapshot.
pub const GAUGE_TAG: &str = "gauge";

/// A collected numeric value; serialized as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Int(i64),
    Double(f64),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Int(v) => write!(f, "{v}"),
            MetricValue::Double(v) => write!(f, "{v}"),
        }
    }
}

/// One cell of a gauge: its rendered label tuple and current value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectedGauge {
    pub fields: Vec<String>,
    pub value: MetricValue,
}

/// Snapshot of a whole metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectedMetric {
    pub tag: &'static str,
    pub metric_name: String,
    pub metadata: MetricMetadata,
    pub field_names: Vec<String>,
    pub gauges: Vec<CollectedGauge>,
}

/// Emit one human-readable line per collected cell:
/// `/name<f1,f2>=value`, or `/name=value` when the metric has no labels.
pub fn format_collected_metric(metric: &CollectedMetric, emit: &mut dyn FnMut(&str)) {
    for g in &metric.gauges {
        let line = if metric.field_names.is_empty() {
            format!("{}={}", metric.metric_name, g.value)
        } else {
            format!("{}<{}>={}", metric.metric_name, g.fields.join(","), g.value)
        };
        emit(&line);
    }
}
