//! The collector's own gauges.
//!
//! Registered once per process; they show up in the collector's snapshots
//! like any other metric.

use std::time::Instant;

use gaugekit_core::error::Result;
use gaugekit_core::{Gauge, MetricMetadata, MetricRegistry, Units};

pub struct CollectorMetrics {
    /// Snapshots emitted, by output format.
    pub snapshots: &'static Gauge<i64, (&'static str,)>,
    pub uptime_seconds: &'static Gauge<f64>,
    started: Instant,
}

impl CollectorMetrics {
    pub fn register(registry: &MetricRegistry) -> Result<Self> {
        let snapshots = Gauge::new_in(
            registry,
            "/gaugekit/collector/snapshots",
            ["format"],
            MetricMetadata::new("Snapshots emitted by the collector").with_units(Units::Count),
        )?;
        let uptime_seconds = Gauge::new_in(
            registry,
            "/gaugekit/collector/uptime_seconds",
            [],
            MetricMetadata::new("Seconds since the collector started").with_units(Units::Seconds),
        )?;
        Ok(Self {
            snapshots,
            uptime_seconds,
            started: Instant::now(),
        })
    }

    /// Refresh time-derived gauges.
    pub fn refresh(&self) {
        self.uptime_seconds
            .set(self.started.elapsed().as_secs_f64(), ());
    }
}
