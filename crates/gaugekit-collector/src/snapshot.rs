//! Periodic snapshot logger.
//!
//! On every tick the logger collects the registry (filtered by the configured
//! prefix), renders each metric in the configured format and writes the
//! lines through `tracing`.

use std::future::Future;
use std::time::Duration;

use gaugekit_core::{format_collected_metric, CollectedMetric, MetricRegistry};

use crate::config::{CollectSection, OutputFormat};
use crate::obs::metrics::CollectorMetrics;

pub struct SnapshotLogger<'r> {
    cfg: CollectSection,
    registry: &'r MetricRegistry,
    metrics: Option<CollectorMetrics>,
}

impl<'r> SnapshotLogger<'r> {
    pub fn new(cfg: CollectSection, registry: &'r MetricRegistry) -> Self {
        Self {
            cfg,
            registry,
            metrics: None,
        }
    }

    /// Track the logger's own activity in `metrics`.
    pub fn with_metrics(mut self, metrics: CollectorMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.cfg.interval_ms)
    }

    /// Collect once and return the rendered lines.
    pub fn snapshot_once(&self) -> Vec<String> {
        if let Some(m) = &self.metrics {
            m.refresh();
        }

        let collected = self.registry.collect_with_prefix(&self.cfg.prefix);
        let mut lines = Vec::new();
        for metric in &collected {
            render(metric, self.cfg.format, &mut lines);
        }

        if let Some(m) = &self.metrics {
            m.snapshots.increment((format_label(self.cfg.format),));
        }
        lines
    }

    /// Tick until `shutdown` resolves. The first snapshot is taken
    /// immediately.
    pub async fn run<S>(&self, shutdown: S) -> u64
    where
        S: Future<Output = ()>,
    {
        let mut ticker = tokio::time::interval(self.interval());
        tokio::pin!(shutdown);

        let mut taken = 0u64;
        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!(snapshots = taken, "snapshot logger stopping");
                    break;
                }
                _ = ticker.tick() => {
                    let lines = self.snapshot_once();
                    tracing::debug!(lines = lines.len(), prefix = %self.cfg.prefix, "snapshot taken");
                    for line in &lines {
                        tracing::info!(target: "gaugekit::snapshot", "{line}");
                    }
                    taken += 1;
                }
            }
        }
        taken
    }
}

fn format_label(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "text",
        OutputFormat::Json => "json",
    }
}

fn render(metric: &CollectedMetric, format: OutputFormat, out: &mut Vec<String>) {
    match format {
        OutputFormat::Text => {
            format_collected_metric(metric, &mut |line: &str| out.push(line.to_string()));
        }
        OutputFormat::Json => match serde_json::to_string(metric) {
            Ok(s) => out.push(s),
            Err(e) => {
                tracing::warn!(metric = %metric.metric_name, error = %e, "snapshot encode failed");
            }
        },
    }
}
