//! Rotation engine: fixed regime, coordinator and metrics.
//!
//! Control flow of one run:
//!
//! ```text
//! Configuration → fixed_sequence (slot 1) → entry_day (slot 3)
//!               → RotationScheduler (slots 2, 3) → RotationMetrics → Schedule
//! ```
//!
//! # Algorithm
//!
//! `RotationScheduler` is a greedy, single-pass, day-by-day coordinator.
//! It does not search for a globally optimal rotation; some regimes
//! cannot satisfy every rule, and the engine reports the degradation in
//! the schedule's error list instead of failing.
//!
//! # Concurrency
//!
//! A run owns its configuration and phase states outright and returns
//! an immutable result. Independent configurations can be evaluated on
//! separate threads without coordination.

mod coordinator;
mod metrics;
mod regime;

pub use coordinator::{run, RotationScheduler};
pub use metrics::RotationMetrics;
pub use regime::{entry_day, fixed_sequence};
