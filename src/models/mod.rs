//! Rotation domain models.
//!
//! Provides the data types describing a rotation problem (regime,
//! priorities, configuration), the per-slot lifecycle (phases and day
//! states), and the result (schedule, defects, statistics).
//!
//! # Domain Mappings
//!
//! | u-rotation | Drilling rig | Shift work |
//! |------------|--------------|------------|
//! | Slot | Drilling supervisor | Crew member |
//! | Regime | Hitch / back-to-back rotation | Roster pattern |
//! | Induction | Site onboarding | Training shifts |
//! | Drilling | On tour | On shift |

mod configuration;
mod day;
mod phase;
mod priority;
mod schedule;

pub use configuration::{Configuration, Regime};
pub use day::{DayRecord, DayState, Slot};
pub use phase::{Phase, PhaseState, MIN_DRILLING_STINT, MIN_REST_BEFORE_ASCENT};
pub use priority::{Priorities, PriorityLevel, PriorityRule};
pub use schedule::{Schedule, ScheduleError, ScheduleErrorKind, ScheduleStats};
