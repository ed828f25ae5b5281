//! Metric metadata and name validation.

use serde::Serialize;

use crate::error::{MetricsError, Result};

/// Unit of a metric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Units {
    #[default]
    Unknown,
    Seconds,
    Milliseconds,
    Microseconds,
    Bytes,
    Count,
}

impl Units {
    pub fn as_str(self) -> &'static str {
        match self {
            Units::Unknown => "",
            Units::Seconds => "s",
            Units::Milliseconds => "ms",
            Units::Microseconds => "us",
            Units::Bytes => "bytes",
            Units::Count => "count",
        }
    }
}

/// Description and unit attached to a metric. Passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MetricMetadata {
    pub description: String,
    pub units: Units,
}

impl MetricMetadata {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            units: Units::Unknown,
        }
    }

    pub fn with_units(mut self, units: Units) -> Self {
        self.units = units;
        self
    }
}

/// Metric names look like paths: `/` followed by `[A-Za-z0-9_/]+`.
pub fn is_valid_metric_name(name: &str) -> bool {
    name.len() > 1
        && name.starts_with('/')
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'/')
}

/// Field names are identifiers: `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_valid_field_name(name: &str) -> bool {
    let mut bytes = name.bytes();
    let Some(first) = bytes.next() else { return false };
    (first.is_ascii_alphabetic() || first == b'_')
        && bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

pub(crate) fn validate_identity(metric_name: &str, field_names: &[String]) -> Result<()> {
    if !is_valid_metric_name(metric_name) {
        return Err(MetricsError::InvalidMetricName(metric_name.to_string()));
    }
    if let Some(bad) = field_names.iter().find(|f| !is_valid_field_name(f)) {
        return Err(MetricsError::InvalidFieldName(bad.clone()));
    }
    Ok(())
}
