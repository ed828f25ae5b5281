//! Process-wide metric registry used for discovery and export.
//!
//! The registry holds non-owning `&'static` references. Metrics registered
//! through [`crate::Gauge::new`] are leaked on purpose and stay reachable from
//! [`global_registry`] for the rest of the process.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use once_cell::sync::Lazy;

use crate::collect::CollectedMetric;
use crate::error::{MetricsError, Result};

/// Anything the registry can snapshot.
pub trait Collectable: Send + Sync {
    fn metric_name(&self) -> &str;
    fn collect(&self) -> CollectedMetric;
}

#[derive(Default)]
pub struct MetricRegistry {
    metrics: DashMap<String, &'static dyn Collectable>,
}

static GLOBAL_REGISTRY: Lazy<MetricRegistry> = Lazy::new(MetricRegistry::new);

/// The process-wide registry.
pub fn global_registry() -> &'static MetricRegistry {
    &GLOBAL_REGISTRY
}

impl MetricRegistry {
    pub fn new() -> Self {
        Self {
            metrics: DashMap::new(),
        }
    }

    /// Register a metric under its name. Names are unique per registry.
    pub fn add(&self, metric: &'static dyn Collectable) -> Result<()> {
        let name = metric.metric_name();
        match self.metrics.entry(name.to_string()) {
            Entry::Occupied(_) => {
                tracing::warn!(metric = %name, "duplicate metric registration rejected");
                Err(MetricsError::DuplicateMetric(name.to_string()))
            }
            Entry::Vacant(v) => {
                v.insert(metric);
                tracing::debug!(metric = %name, "metric registered");
                Ok(())
            }
        }
    }

    pub fn contains(&self, metric_name: &str) -> bool {
        self.metrics.contains_key(metric_name)
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Snapshot every registered metric, sorted by name.
    pub fn collect(&self) -> Vec<CollectedMetric> {
        self.collect_with_prefix("")
    }

    /// Snapshot registered metrics whose name starts with `prefix`, sorted by
    /// name.
    pub fn collect_with_prefix(&self, prefix: &str) -> Vec<CollectedMetric> {
        let mut selected: Vec<&'static dyn Collectable> = self
            .metrics
            .iter()
            .filter(|r| r.key().starts_with(prefix))
            .map(|r| *r.value())
            .collect();
        selected.sort_by(|a, b| a.metric_name().cmp(b.metric_name()));
        selected.into_iter().map(|m| m.collect()).collect()
    }
}
