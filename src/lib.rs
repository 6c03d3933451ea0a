//! Three-slot work/rest rotation engine for continuous drilling.
//!
//! Plans which of three supervisors is on tour on each day so that
//! exactly two are drilling at any time, while each one follows a
//! legal lifecycle (up, induction, drilling, down, rest).
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Configuration`, `Regime`, `Priorities`,
//!   `DayState`, `PhaseState`, `Schedule`, `ScheduleError`
//! - **`scoring`**: Additive move scoring (`ScoringTerm`, `MoveEvaluator`)
//! - **`rotation`**: Fixed-regime generator, day-by-day coordinator, metrics
//! - **`validation`**: Input plausibility checks
//! - **`config`**: TOML loading and saving
//!
//! # Example
//!
//! ```
//! use u_rotation::models::{Configuration, Regime};
//!
//! let config = Configuration::new(Regime::new(14, 7), 5, 30);
//! let schedule = u_rotation::run(&config);
//!
//! assert_eq!(schedule.horizon_days, 168);
//! assert!(schedule.is_conflict_free());
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Ernst et al. (2004), "Staff scheduling and rostering: A review"

pub mod config;
pub mod models;
pub mod rotation;
pub mod scoring;
pub mod validation;

pub use config::ConfigError;
pub use rotation::{run, RotationScheduler};
