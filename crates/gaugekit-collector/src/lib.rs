//! gaugekit collector library entry.
//!
//! Wires the strict YAML config, the collector's own gauges and the periodic
//! snapshot logger. Consumed by the binary (`main.rs`) and by integration
//! tests.

pub mod config;
pub mod obs;
pub mod snapshot;
