//! Gauge cells: one atomically updated scalar per label tuple.
//!
//! Two numeric kinds are supported, selected at compile time through
//! [`GaugeValue`]:
//! - `i64` cells use a single `fetch_add` and wrap on overflow.
//! - `f64` cells store the IEEE-754 bits in an `AtomicU64` and add through a
//!   compare-and-swap retry loop, since there is no atomic float add.

use std::fmt;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

use crate::collect::MetricValue;

mod sealed {
    pub trait Sealed {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}
}

/// Numeric kind a gauge can hold. Implemented for `i64` and `f64` only.
pub trait GaugeValue:
    Copy + PartialEq + fmt::Debug + fmt::Display + Send + Sync + sealed::Sealed + 'static
{
    /// Cell type storing this kind.
    type Cell: GaugeCell<Value = Self>;

    const ZERO: Self;
    const ONE: Self;

    fn into_metric_value(self) -> MetricValue;
}

impl GaugeValue for i64 {
    type Cell = IntCell;
    const ZERO: Self = 0;
    const ONE: Self = 1;

    fn into_metric_value(self) -> MetricValue {
        MetricValue::Int(self)
    }
}

impl GaugeValue for f64 {
    type Cell = FloatCell;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    fn into_metric_value(self) -> MetricValue {
        MetricValue::Double(self)
    }
}

/// Operations shared by both cell kinds. A new cell reads as zero.
pub trait GaugeCell: Default + Send + Sync + 'static {
    type Value: GaugeValue;

    fn increment_by(&self, value: Self::Value);
    fn decrement_by(&self, value: Self::Value);
    fn set(&self, value: Self::Value);
    fn get(&self) -> Self::Value;
}

/// Integer gauge cell.
#[derive(Debug, Default)]
pub struct IntCell {
    value: AtomicI64,
}

impl GaugeCell for IntCell {
    type Value = i64;

    fn increment_by(&self, value: i64) {
        self.value.fetch_add(value, Ordering::Relaxed);
    }

    fn decrement_by(&self, value: i64) {
        self.increment_by(value.wrapping_neg());
    }

    fn set(&self, value: i64) {
        self.value.store(value, Ordering::Relaxed);
    }

    fn get(&self) -> i64 {
        self.value.load(Ordering::Relaxed)
    }
}

/// Floating-point gauge cell. All-zero bits are `+0.0`, so `Default` is zero.
#[derive(Debug, Default)]
pub struct FloatCell {
    bits: AtomicU64,
}

impl GaugeCell for FloatCell {
    type Value = f64;

    /// CAS retry loop. Only spins while another writer wins the race on this
    /// same cell.
    fn increment_by(&self, value: f64) {
        let mut current = self.bits.load(Ordering::Relaxed);
        loop {
            let next = (f64::from_bits(current) + value).to_bits();
            match self.bits.compare_exchange_weak(
                current,
                next,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => break,
                Err(observed) => current = observed,
            }
        }
    }

    fn decrement_by(&self, value: f64) {
        self.increment_by(-value);
    }

    fn set(&self, value: f64) {
        self.bits.store(value.to_bits(), Ordering::Relaxed);
    }

    fn get(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }
}
