//! gaugekit core: labeled, lock-free gauge metrics and their snapshots.
//!
//! This crate holds the metric primitives (cells, typed label tuples, the
//! cell store, the gauge facade), the snapshot record they export and the
//! process-wide registry exporters read from. It has no runtime dependency so
//! it can be linked into any process.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Metric operations
//! are total; construction and registration return [`MetricsError`].

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod cell;
pub mod collect;
pub mod error;
pub mod field;
pub mod gauge;
pub mod metadata;
pub mod registry;
pub mod store;

pub use cell::{FloatCell, GaugeCell, GaugeValue, IntCell};
pub use collect::{format_collected_metric, CollectedGauge, CollectedMetric, MetricValue, GAUGE_TAG};
pub use error::{MetricsError, Result};
pub use field::{Field, FieldNames, Fields};
pub use gauge::Gauge;
pub use metadata::{MetricMetadata, Units};
pub use registry::{global_registry, Collectable, MetricRegistry};
