//! Top-level facade crate for gaugekit.
//!
//! Re-exports the metric primitives and the snapshot collector so users can
//! depend on a single crate.

pub mod core {
    pub use gaugekit_core::*;
}

pub mod collector {
    pub use gaugekit_collector::*;
}
