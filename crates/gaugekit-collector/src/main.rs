//! gaugekit collector
//!
//! Periodically snapshots every gauge in the process-wide registry and logs
//! the result.
//! - Config: `gaugekit.yaml`, or the path given as the first argument
//! - Log filter from `RUST_LOG`
//! - Stops on Ctrl-C

use tracing_subscriber::{fmt, EnvFilter};

use gaugekit_collector::{config, obs::metrics::CollectorMetrics, snapshot::SnapshotLogger};
use gaugekit_core::global_registry;

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "gaugekit.yaml".into());
    let cfg = config::load_from_file(&path).expect("config load failed");

    let metrics = CollectorMetrics::register(global_registry()).expect("collector metrics registration failed");
    let logger = SnapshotLogger::new(cfg.collect, global_registry()).with_metrics(metrics);

    tracing::info!(%path, interval_ms = logger.interval().as_millis() as u64, "gaugekit-collector starting");

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "ctrl-c handler failed; stopping");
        }
    };
    logger.run(shutdown).await;
}
