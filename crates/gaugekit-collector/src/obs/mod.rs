//! Self-observation for the collector process.

pub mod metrics;
