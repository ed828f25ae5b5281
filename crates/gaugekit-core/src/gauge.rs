//! Labeled gauge metric.
//!
//! A gauge holds values that can go up and down, such as queue depth or
//! current memory usage. It is parameterized by its numeric kind (`i64` or
//! `f64`) and by a label tuple type whose positions are `i64`, `String`,
//! `&'static str` or `bool`.
//!
//! ```
//! use gaugekit_core::{Gauge, MetricMetadata};
//!
//! let temperature: &'static Gauge<f64> =
//!     Gauge::new("/doc/cpu/temperature", [], MetricMetadata::new("CPU temperature"))
//!         .unwrap();
//! temperature.set(33.5, ());
//! temperature.increment_by(3.5, ());
//! temperature.increment_by(-3.5, ());
//! assert_eq!(temperature.get(()), 33.5);
//! ```

use crate::cell::{GaugeCell, GaugeValue};
use crate::collect::{CollectedGauge, CollectedMetric, GAUGE_TAG};
use crate::error::{MetricsError, Result};
use crate::field::{FieldNames, Fields};
use crate::metadata::{validate_identity, MetricMetadata};
use crate::registry::{global_registry, Collectable, MetricRegistry};
use crate::store::CellStore;

pub struct Gauge<T: GaugeValue, F: Fields = ()> {
    metric_name: String,
    field_names: Vec<String>,
    metadata: MetricMetadata,
    cells: CellStore<F, T::Cell>,
}

impl<T: GaugeValue, F: Fields> Gauge<T, F> {
    /// Build a gauge owned by the caller. Not registered anywhere.
    pub fn allocate(
        metric_name: &str,
        field_names: impl FieldNames<F>,
        metadata: MetricMetadata,
    ) -> Result<Self> {
        let field_names = field_names.into_names();
        validate_identity(metric_name, &field_names)?;
        Ok(Self {
            metric_name: metric_name.to_string(),
            field_names,
            metadata,
            cells: CellStore::new(),
        })
    }

    /// Build a gauge, register it in the global registry and keep it alive
    /// for the rest of the process.
    pub fn new(
        metric_name: &str,
        field_names: impl FieldNames<F>,
        metadata: MetricMetadata,
    ) -> Result<&'static Self> {
        Self::new_in(global_registry(), metric_name, field_names, metadata)
    }

    /// Like [`Gauge::new`], registering in `registry` instead of the global
    /// one.
    ///
    /// The gauge is leaked and never freed. The registry only holds a
    /// borrowed reference, which keeps the allocation reachable.
    pub fn new_in(
        registry: &MetricRegistry,
        metric_name: &str,
        field_names: impl FieldNames<F>,
        metadata: MetricMetadata,
    ) -> Result<&'static Self> {
        let gauge = Self::allocate(metric_name, field_names, metadata)?;
        if registry.contains(metric_name) {
            return Err(MetricsError::DuplicateMetric(metric_name.to_string()));
        }
        let gauge: &'static Self = Box::leak(Box::new(gauge));
        registry.add(gauge)?;
        Ok(gauge)
    }

    pub fn tag(&self) -> &'static str {
        GAUGE_TAG
    }

    pub fn metric_name(&self) -> &str {
        &self.metric_name
    }

    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }

    pub fn metadata(&self) -> &MetricMetadata {
        &self.metadata
    }

    /// Number of label tuples with a materialized cell.
    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// Increment by 1.
    pub fn increment(&self, labels: F) {
        self.increment_by(T::ONE, labels);
    }

    /// Increment by `value`.
    pub fn increment_by(&self, value: T, labels: F) {
        self.cells.get_or_create(labels).increment_by(value);
    }

    /// Decrement by 1.
    pub fn decrement(&self, labels: F) {
        self.decrement_by(T::ONE, labels);
    }

    /// Decrement by `value`.
    pub fn decrement_by(&self, value: T, labels: F) {
        self.cells.get_or_create(labels).decrement_by(value);
    }

    /// Set to `value`.
    pub fn set(&self, value: T, labels: F) {
        self.cells.get_or_create(labels).set(value);
    }

    /// Current value. An unseen tuple gets a zeroed cell and reads as zero.
    pub fn get(&self, labels: F) -> T {
        self.cells.get_or_create(labels).get()
    }

    /// Snapshot every materialized cell.
    pub fn collect(&self) -> CollectedMetric {
        let mut gauges = Vec::with_capacity(self.cells.len());
        self.collect_cells(|cell, labels| {
            gauges.push(CollectedGauge {
                fields: labels.render(),
                value: cell.get().into_metric_value(),
            });
        });
        CollectedMetric {
            tag: GAUGE_TAG,
            metric_name: self.metric_name.clone(),
            metadata: self.metadata.clone(),
            field_names: self.field_names.clone(),
            gauges,
        }
    }

    /// Invoke `on_cell` once per materialized `(cell, labels)` pair.
    pub fn collect_cells(&self, on_cell: impl FnMut(&T::Cell, &F)) {
        self.cells.for_each(on_cell);
    }
}

impl<T: GaugeValue, F: Fields> Collectable for Gauge<T, F> {
    fn metric_name(&self) -> &str {
        &self.metric_name
    }

    fn collect(&self) -> CollectedMetric {
        Gauge::collect(self)
    }
}
