//! Move evaluator: sums scoring terms and picks the best legal move.
//!
//! # Tie-breaking
//! Candidates are enumerated slot 2's legal actions outer, slot 3's
//! inner, each in [`PhaseState::legal_actions`] order. The first
//! candidate with the strictly greatest score wins.
//!
//! [`PhaseState::legal_actions`]: crate::models::PhaseState::legal_actions

use std::sync::Arc;

use super::terms::{
    CompleteInduction, DrillingContinuity, DrillingCap, KeepTwoProducing, ReturnFromRest,
    SafetyCeiling,
};
use super::{Move, MoveContext, MoveScore, ScoringTerm};

/// A move together with its total score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: MoveScore,
}

/// Additive scorer over a list of terms.
///
/// Has no state beyond its term list; evaluating a move is a pure
/// function of the context.
#[derive(Clone)]
pub struct MoveEvaluator {
    terms: Vec<Arc<dyn ScoringTerm>>,
}

impl MoveEvaluator {
    /// Creates an evaluator with no terms.
    pub fn empty() -> Self {
        Self { terms: Vec::new() }
    }

    /// Creates the standard evaluator used by the coordinator.
    pub fn standard() -> Self {
        Self::empty()
            .with_term(SafetyCeiling)
            .with_term(KeepTwoProducing)
            .with_term(DrillingCap)
            .with_term(CompleteInduction)
            .with_term(ReturnFromRest)
            .with_term(DrillingContinuity)
    }

    /// Adds a term.
    pub fn with_term<T: ScoringTerm + 'static>(mut self, term: T) -> Self {
        self.terms.push(Arc::new(term));
        self
    }

    /// Total score of a move.
    pub fn evaluate(&self, ctx: &MoveContext, mv: &Move) -> MoveScore {
        self.terms.iter().map(|t| t.score(ctx, mv)).sum()
    }

    /// Per-term breakdown of a move's score.
    pub fn breakdown(&self, ctx: &MoveContext, mv: &Move) -> Vec<(&'static str, MoveScore)> {
        self.terms
            .iter()
            .map(|t| (t.name(), t.score(ctx, mv)))
            .collect()
    }

    /// Scores every legal move in enumeration order.
    pub fn score_all(&self, ctx: &MoveContext) -> Vec<ScoredMove> {
        ctx.candidates()
            .into_iter()
            .map(|mv| ScoredMove {
                mv,
                score: self.evaluate(ctx, &mv),
            })
            .collect()
    }

    /// Highest-scoring legal move; first seen wins ties.
    ///
    /// Returns `None` only if no move is legal, which the phase model
    /// never produces.
    pub fn best_move(&self, ctx: &MoveContext) -> Option<ScoredMove> {
        self.score_all(ctx)
            .into_iter()
            .fold(None, |best: Option<ScoredMove>, cand| match best {
                Some(b) if b.score >= cand.score => Some(b),
                _ => Some(cand),
            })
    }
}

impl Default for MoveEvaluator {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for MoveEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoveEvaluator")
            .field(
                "terms",
                &self.terms.iter().map(|t| t.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Configuration, DayState, Phase, PhaseState};

    fn phase(phase: Phase, days_in_phase: usize) -> PhaseState {
        PhaseState {
            phase,
            days_in_phase,
            cycle_count: 2,
            total_drilled: 0,
            is_first_cycle: false,
        }
    }

    fn ctx(slot_1: DayState, s2: PhaseState, s3: PhaseState) -> MoveContext {
        MoveContext::new(&Configuration::default(), 40, slot_1, s2, s3, true)
    }

    #[derive(Debug)]
    struct Flat;

    impl ScoringTerm for Flat {
        fn name(&self) -> &'static str {
            "flat"
        }

        fn score(&self, _ctx: &MoveContext, _mv: &Move) -> MoveScore {
            1.0
        }
    }

    #[test]
    fn test_avoids_three_producing() {
        // Slot 1 drilling: one of the reactive slots has to step down.
        let c = ctx(
            DayState::Drilling,
            phase(Phase::Drilling, 5),
            phase(Phase::Drilling, 5),
        );
        let best = MoveEvaluator::standard().best_move(&c).unwrap();
        assert_eq!(c.producers(&best.mv), 2);
        // Slot 2 is the primary backstop and keeps drilling.
        assert_eq!(best.mv, Move::new(DayState::Drilling, DayState::Down));
    }

    #[test]
    fn test_keeps_drilling_when_slot_1_is_off() {
        let c = ctx(
            DayState::Rest,
            phase(Phase::Drilling, 5),
            phase(Phase::Drilling, 5),
        );
        let best = MoveEvaluator::standard().best_move(&c).unwrap();
        assert_eq!(best.mv, Move::new(DayState::Drilling, DayState::Drilling));
    }

    #[test]
    fn test_tie_goes_to_first_candidate() {
        let c = ctx(
            DayState::Drilling,
            phase(Phase::Drilling, 5),
            phase(Phase::Resting, 3),
        );
        let evaluator = MoveEvaluator::empty().with_term(Flat);
        let best = evaluator.best_move(&c).unwrap();
        assert_eq!(best.mv, c.candidates()[0]);
        assert_eq!(best.mv, Move::new(DayState::Drilling, DayState::Rest));
    }

    #[test]
    fn test_score_all_matches_candidates() {
        let c = ctx(
            DayState::Drilling,
            phase(Phase::Drilling, 5),
            phase(Phase::Resting, 3),
        );
        let scored = MoveEvaluator::standard().score_all(&c);
        let moves: Vec<Move> = scored.iter().map(|s| s.mv).collect();
        assert_eq!(moves, c.candidates());
        assert_eq!(scored.len(), 4);
    }

    #[test]
    fn test_breakdown_sums_to_total() {
        let c = ctx(
            DayState::Drilling,
            phase(Phase::Drilling, 14),
            phase(Phase::Resting, 2),
        );
        let evaluator = MoveEvaluator::standard();
        let mv = Move::new(DayState::Drilling, DayState::Up);
        let total: f64 = evaluator.breakdown(&c, &mv).iter().map(|(_, s)| s).sum();
        assert!((total - evaluator.evaluate(&c, &mv)).abs() < 1e-10);
        assert_eq!(evaluator.breakdown(&c, &mv).len(), 6);
    }

    #[test]
    fn test_empty_evaluator_scores_zero() {
        let c = ctx(
            DayState::Drilling,
            phase(Phase::Drilling, 5),
            phase(Phase::Drilling, 5),
        );
        let mv = Move::new(DayState::Drilling, DayState::Drilling);
        assert_eq!(MoveEvaluator::empty().evaluate(&c, &mv), 0.0);
    }
}
