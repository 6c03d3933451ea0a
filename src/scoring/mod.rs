//! Move scoring for the reactive slots.
//!
//! Each day the coordinator asks the [`MoveEvaluator`] to score every
//! combination of one legal action for slot 2 and one for slot 3 (at most
//! four). The score is the sum of independent [`ScoringTerm`]s, some of
//! them weighted by the run's [`Priorities`](crate::models::Priorities).
//!
//! # Usage
//!
//! ```
//! use u_rotation::models::{Configuration, DayState, PhaseState};
//! use u_rotation::scoring::{MoveContext, MoveEvaluator};
//!
//! let config = Configuration::default();
//! let ctx = MoveContext::new(
//!     &config,
//!     1,
//!     DayState::Induction,
//!     PhaseState::ascending(),
//!     PhaseState::idle(),
//!     false,
//! );
//! let best = MoveEvaluator::standard().best_move(&ctx).unwrap();
//! assert_eq!(best.mv.slot_2, DayState::Induction);
//! ```

mod context;
mod evaluator;
pub mod terms;

pub use context::{Move, MoveContext};
pub use evaluator::{MoveEvaluator, ScoredMove};

use std::fmt::Debug;

/// Score of a move. Higher is better.
pub type MoveScore = f64;

/// One additive component of a move's score.
///
/// # Score Convention
/// **Higher score = better move.** Penalties are negative.
pub trait ScoringTerm: Send + Sync + Debug {
    /// Term name, used in score breakdowns.
    fn name(&self) -> &'static str;

    /// Contribution of this term to the move's score.
    fn score(&self, ctx: &MoveContext, mv: &Move) -> MoveScore;
}
