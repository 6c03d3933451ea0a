//! Day-by-day rotation coordinator.
//!
//! # Algorithm
//!
//! 1. Generate slot 1's fixed sequence over the horizon.
//! 2. Derive slot 3's entry day from slot 1's first DOWN day.
//! 3. Start slot 2 ascending on day 0 and slot 3 idle.
//! 4. For each day `1..horizon`: score every legal action pair for
//!    slots 2 and 3, commit the best, advance both phase states.
//! 5. Run the metrics pass over the three finished sequences.
//!
//! Each day's decision is final; there is no backtracking.
//!
//! # Complexity
//! O(horizon): at most four candidate moves per day.

use tracing::{debug, trace};

use super::metrics::RotationMetrics;
use super::regime::{entry_day, fixed_sequence};
use crate::models::{Configuration, DayRecord, DayState, Phase, PhaseState, Schedule};
use crate::scoring::{Move, MoveContext, MoveEvaluator};

/// Greedy three-slot rotation scheduler.
///
/// # Example
///
/// ```
/// use u_rotation::models::{Configuration, DayState, Regime, Slot};
/// use u_rotation::rotation::RotationScheduler;
///
/// let config = Configuration::new(Regime::new(14, 7), 5, 30);
/// let schedule = RotationScheduler::new(config).run();
///
/// assert_eq!(schedule.slot_1.len(), config.horizon_days());
/// assert_eq!(schedule.state_on(Slot::One, 0), Some(DayState::Up));
/// assert!(!schedule.has_hard_sequence_defect());
/// ```
#[derive(Debug, Clone)]
pub struct RotationScheduler {
    config: Configuration,
    evaluator: MoveEvaluator,
}

impl RotationScheduler {
    /// Creates a scheduler with the standard evaluator.
    pub fn new(config: Configuration) -> Self {
        Self {
            config,
            evaluator: MoveEvaluator::standard(),
        }
    }

    /// Replaces the move evaluator.
    pub fn with_evaluator(mut self, evaluator: MoveEvaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// The configuration this scheduler runs.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Runs the full horizon and returns the finished schedule.
    pub fn run(&self) -> Schedule {
        let config = &self.config;
        let horizon_days = config.horizon_days();
        let slot_1 = fixed_sequence(config.regime, config.induction_days, horizon_days);
        let entry_day = entry_day(&slot_1, config.induction_days);

        debug!(
            work_days = config.regime.work_days,
            rest_days = config.regime.rest_days,
            induction_days = config.induction_days,
            horizon_days,
            entry_day,
            "Starting rotation run"
        );

        let (slot_2, slot_3) = self.coordinate(&slot_1, entry_day);
        let metrics = RotationMetrics::calculate(
            [slot_1.as_slice(), slot_2.as_slice(), slot_3.as_slice()],
            config,
        );

        debug!(
            errors = metrics.errors.len(),
            one_producing_days = metrics.stats.one_producing_days,
            three_producing_days = metrics.stats.three_producing_days,
            "Rotation run finished"
        );

        Schedule {
            horizon_days,
            entry_day,
            slot_1,
            slot_2,
            slot_3,
            producer_counts: metrics.producer_counts,
            errors: metrics.errors,
            stats: metrics.stats,
        }
    }

    /// Drives slots 2 and 3 against slot 1's fixed sequence.
    fn coordinate(
        &self,
        slot_1: &[DayRecord],
        entry_day: usize,
    ) -> (Vec<DayRecord>, Vec<DayRecord>) {
        let horizon_days = slot_1.len();
        let mut slot_2 = Vec::with_capacity(horizon_days);
        let mut slot_3 = Vec::with_capacity(horizon_days);
        if horizon_days == 0 {
            return (slot_2, slot_3);
        }

        let mut state_2 = PhaseState::ascending();
        let mut state_3 = PhaseState::idle();
        slot_2.push(DayRecord::new(0, DayState::Up));
        slot_3.push(DayRecord::new(0, DayState::Empty));

        for day in 1..horizon_days {
            let ctx = MoveContext::new(
                &self.config,
                day,
                slot_1[day].state,
                state_2,
                state_3,
                day >= entry_day,
            );
            let (mv, score) = match self.evaluator.best_move(&ctx) {
                Some(best) => (best.mv, best.score),
                // Every phase offers at least one action; hold position regardless.
                None => (Move::new(hold(state_2), hold(state_3)), f64::NEG_INFINITY),
            };

            trace!(
                day,
                slot_1 = %slot_1[day].state,
                slot_2 = %mv.slot_2,
                slot_3 = %mv.slot_3,
                score,
                "Committed move"
            );

            slot_2.push(DayRecord::new(day, mv.slot_2));
            slot_3.push(DayRecord::new(day, mv.slot_3));
            state_2 = state_2.advance(mv.slot_2);
            state_3 = state_3.advance(mv.slot_3);
        }

        (slot_2, slot_3)
    }
}

/// The action that keeps a slot in its current phase.
fn hold(state: PhaseState) -> DayState {
    match state.phase {
        Phase::Idle => DayState::Empty,
        Phase::GoingUp => DayState::Up,
        Phase::Induction => DayState::Induction,
        Phase::Drilling => DayState::Drilling,
        Phase::GoingDown => DayState::Down,
        Phase::Resting => DayState::Rest,
    }
}

/// Runs one configuration to completion.
///
/// Convenience for `RotationScheduler::new(*config).run()`.
pub fn run(config: &Configuration) -> Schedule {
    RotationScheduler::new(*config).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Regime, ScheduleErrorKind, Slot};

    fn states(schedule: &Schedule, slot: Slot) -> Vec<DayState> {
        schedule.sequence(slot).iter().map(|r| r.state).collect()
    }

    #[test]
    fn test_sequences_span_horizon() {
        let config = Configuration::new(Regime::new(14, 7), 5, 30);
        let s = run(&config);
        assert_eq!(s.horizon_days, 168);
        for slot in Slot::ALL {
            assert_eq!(s.sequence(slot).len(), 168);
        }
        assert_eq!(s.producer_counts.len(), 168);
        assert!(s.slot_2.iter().enumerate().all(|(d, r)| r.day == d));
    }

    #[test]
    fn test_slot_2_starts_ascending_and_slot_3_idle() {
        let s = run(&Configuration::new(Regime::new(14, 7), 5, 30));
        assert_eq!(s.state_on(Slot::Two, 0), Some(DayState::Up));
        assert_eq!(s.state_on(Slot::Three, 0), Some(DayState::Empty));
        // Induction runs its full length on the first cycle.
        assert!((1..=5).all(|d| s.state_on(Slot::Two, d) == Some(DayState::Induction)));
        assert_eq!(s.state_on(Slot::Two, 6), Some(DayState::Drilling));
    }

    #[test]
    fn test_slot_3_waits_for_entry_day() {
        let s = run(&Configuration::new(Regime::new(14, 7), 5, 30));
        assert_eq!(s.entry_day, 8);
        assert!(states(&s, Slot::Three)[..8]
            .iter()
            .all(|&st| st == DayState::Empty));
        assert_eq!(s.state_on(Slot::Three, 8), Some(DayState::Up));
        // Drilling by the time slot 1 first goes down.
        assert_eq!(s.state_on(Slot::One, 14), Some(DayState::Down));
        assert_eq!(s.state_on(Slot::Three, 14), Some(DayState::Drilling));
    }

    #[test]
    fn test_shortest_induction() {
        let s = run(&Configuration::new(Regime::new(7, 7), 1, 30));
        assert_eq!(s.state_on(Slot::Two, 1), Some(DayState::Induction));
        assert_eq!(s.state_on(Slot::Two, 2), Some(DayState::Drilling));
    }

    #[test]
    fn test_standard_regime_is_conflict_free() {
        let s = run(&Configuration::new(Regime::new(14, 7), 5, 90));
        assert!(s.is_conflict_free(), "{:?}", s.errors.first());
        assert_eq!(s.stats.three_producing_days, 0);
    }

    #[test]
    fn test_tight_regime_degrades_without_three_producing() {
        let s = run(&Configuration::new(Regime::new(7, 7), 1, 90));
        assert!(!s.errors_of_kind(ScheduleErrorKind::OneProducing).is_empty());
        assert!(s.errors_of_kind(ScheduleErrorKind::ThreeProducing).is_empty());
        assert!(!s.has_hard_sequence_defect());
    }

    #[test]
    fn test_zero_target_yields_empty_schedule() {
        let s = run(&Configuration::new(Regime::new(7, 7), 1, 0));
        assert_eq!(s.horizon_days, 0);
        assert!(s.slot_2.is_empty());
        assert!(s.is_conflict_free());
    }

    #[test]
    fn test_custom_evaluator_is_used() {
        // With no terms every tie goes to the first legal action: slot 2
        // drills from its first chance and never steps down.
        let config = Configuration::new(Regime::new(14, 7), 5, 30);
        let s = RotationScheduler::new(config)
            .with_evaluator(MoveEvaluator::empty())
            .run();
        assert_eq!(s.state_on(Slot::Two, 2), Some(DayState::Drilling));
        assert!(states(&s, Slot::Two)[2..]
            .iter()
            .all(|&st| st == DayState::Drilling));
    }

    #[test]
    fn test_hold_keeps_phase() {
        let s = PhaseState::ascending();
        assert_eq!(s.advance(hold(s)).days_in_phase, 2);
        assert_eq!(hold(PhaseState::idle()), DayState::Empty);
    }
}
