//! Shared error type across gaugekit crates.
//!
//! Metric operations themselves are total; only construction, registration
//! and collector configuration can fail.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Unified error type used by core and collector.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetricsError {
    #[error("invalid metric name: {0:?}")]
    InvalidMetricName(String),
    #[error("invalid field name: {0:?}")]
    InvalidFieldName(String),
    #[error("duplicate metric: {0}")]
    DuplicateMetric(String),
    #[error("config: {0}")]
    Config(String),
}

impl MetricsError {
    /// Stable short code, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            MetricsError::InvalidMetricName(_) => "INVALID_METRIC_NAME",
            MetricsError::InvalidFieldName(_) => "INVALID_FIELD_NAME",
            MetricsError::DuplicateMetric(_) => "DUPLICATE_METRIC",
            MetricsError::Config(_) => "CONFIG",
        }
    }
}
