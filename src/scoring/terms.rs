//! Built-in scoring terms.
//!
//! # Magnitudes
//!
//! - **Hard** (>= 5e5): safety ceiling, producer floor, single producer.
//! - **Medium** (1e3..1e4): two-producer reward, drilling cap.
//! - **Soft** (1e2..1e3): induction completion, return from rest, continuity.
//!
//! Hard terms dominate any sum of medium and soft terms over a move, so
//! the evaluator only trades soft rules against each other once the
//! producer count is as good as the legal actions allow.

use super::{Move, MoveContext, MoveScore, ScoringTerm};
use crate::models::{DayState, Phase, PriorityRule, Slot};

/// More than two slots drilling.
pub const THREE_PRODUCING_PENALTY: f64 = 10_000_000.0;
/// Nobody drilling after the induction window.
pub const ZERO_PRODUCING_PENALTY: f64 = 5_000_000.0;
/// One slot drilling while slot 3 is active, before weighting.
pub const ONE_PRODUCING_PENALTY: f64 = 1_000_000.0;
/// Exactly two slots drilling, before weighting.
pub const TWO_PRODUCING_REWARD: f64 = 5_000.0;
/// Per day drilled past the cycle cap, before weighting.
pub const OVER_CAP_PENALTY: f64 = 2_000.0;
/// Per induction day skipped, before weighting.
pub const EARLY_DRILLING_PENALTY: f64 = 700.0;
/// Going back up while short of producers.
pub const SHORTFALL_ASCENT_REWARD: f64 = 1_500.0;
/// Per rest day missing at ascent, before weighting.
pub const EARLY_ASCENT_PENALTY: f64 = 600.0;
/// Going back up after a full rest.
pub const NATURAL_RETURN_REWARD: f64 = 100.0;
/// Staying on shift, slot 2, before weighting.
pub const PRIMARY_CONTINUITY_REWARD: f64 = 200.0;
/// Staying on shift, slot 3, before weighting.
pub const SECONDARY_CONTINUITY_REWARD: f64 = 100.0;

/// Fixed penalties for three producers or, past induction, none at all.
///
/// Independent of priority weights.
#[derive(Debug, Clone, Copy)]
pub struct SafetyCeiling;

impl ScoringTerm for SafetyCeiling {
    fn name(&self) -> &'static str {
        "safety_ceiling"
    }

    fn score(&self, ctx: &MoveContext, mv: &Move) -> MoveScore {
        match ctx.producers(mv) {
            0 if ctx.day > ctx.induction_days + 1 => -ZERO_PRODUCING_PENALTY,
            n if n > 2 => -THREE_PRODUCING_PENALTY,
            _ => 0.0,
        }
    }
}

/// Rewards two producers and penalizes one once slot 3 is active.
#[derive(Debug, Clone, Copy)]
pub struct KeepTwoProducing;

impl ScoringTerm for KeepTwoProducing {
    fn name(&self) -> &'static str {
        "keep_two_producing"
    }

    fn score(&self, ctx: &MoveContext, mv: &Move) -> MoveScore {
        let weight = ctx.priorities.weight(PriorityRule::KeepTwoProducing);
        match ctx.producers(mv) {
            1 if ctx.slot_3_active => -ONE_PRODUCING_PENALTY * weight,
            2 => TWO_PRODUCING_REWARD * weight,
            _ => 0.0,
        }
    }
}

/// Penalizes drilling past the per-cycle cap, per excess day.
#[derive(Debug, Clone, Copy)]
pub struct DrillingCap;

impl ScoringTerm for DrillingCap {
    fn name(&self) -> &'static str {
        "drilling_cap"
    }

    fn score(&self, ctx: &MoveContext, mv: &Move) -> MoveScore {
        let weight = ctx.priorities.weight(PriorityRule::LimitConsecutiveWork);
        ctx.reactive(mv)
            .iter()
            .filter(|(_, state, action)| {
                state.phase == Phase::Drilling && *action == DayState::Drilling
            })
            .map(|(_, state, _)| {
                let cap = state.drilling_cap(ctx.regime.work_days, ctx.induction_days);
                let run = state.days_in_phase + 1;
                let excess = run.saturating_sub(cap);
                -OVER_CAP_PENALTY * weight * excess as f64
            })
            .sum()
    }
}

/// Penalizes leaving induction before it is complete.
#[derive(Debug, Clone, Copy)]
pub struct CompleteInduction;

impl ScoringTerm for CompleteInduction {
    fn name(&self) -> &'static str {
        "complete_induction"
    }

    fn score(&self, ctx: &MoveContext, mv: &Move) -> MoveScore {
        let weight = ctx.priorities.weight(PriorityRule::CompleteInduction);
        ctx.reactive(mv)
            .iter()
            .filter(|(_, state, action)| {
                state.phase == Phase::Induction && *action == DayState::Drilling
            })
            .map(|(_, state, _)| {
                let skipped = ctx.induction_days.saturating_sub(state.days_in_phase);
                -EARLY_DRILLING_PENALTY * weight * skipped as f64
            })
            .sum()
    }
}

/// Scores going back up out of rest.
///
/// Strongly rewarded when short of producers; otherwise penalized per
/// missing rest day, or given a small reward once rest is served.
#[derive(Debug, Clone, Copy)]
pub struct ReturnFromRest;

impl ScoringTerm for ReturnFromRest {
    fn name(&self) -> &'static str {
        "return_from_rest"
    }

    fn score(&self, ctx: &MoveContext, mv: &Move) -> MoveScore {
        let producers = ctx.producers(mv);
        let weight = ctx.priorities.weight(PriorityRule::MinimumRest);
        let min_rest = ctx.regime.rest_days.saturating_sub(1);

        ctx.reactive(mv)
            .iter()
            .filter(|(_, state, action)| state.phase == Phase::Resting && *action == DayState::Up)
            .map(|(_, state, _)| {
                if producers < 2 {
                    SHORTFALL_ASCENT_REWARD
                } else if state.days_in_phase < min_rest {
                    let missing = min_rest - state.days_in_phase;
                    -EARLY_ASCENT_PENALTY * weight * missing as f64
                } else {
                    NATURAL_RETURN_REWARD
                }
            })
            .sum()
    }
}

/// Small reward for staying on shift; larger for slot 2, the primary backstop.
#[derive(Debug, Clone, Copy)]
pub struct DrillingContinuity;

impl ScoringTerm for DrillingContinuity {
    fn name(&self) -> &'static str {
        "drilling_continuity"
    }

    fn score(&self, ctx: &MoveContext, mv: &Move) -> MoveScore {
        let weight = ctx.priorities.weight(PriorityRule::DrillingContinuity);
        ctx.reactive(mv)
            .iter()
            .filter(|(_, state, action)| {
                state.phase == Phase::Drilling && *action == DayState::Drilling
            })
            .map(|(slot, _, _)| match slot {
                Slot::Two => PRIMARY_CONTINUITY_REWARD * weight,
                _ => SECONDARY_CONTINUITY_REWARD * weight,
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Configuration, PhaseState, Priorities, PriorityLevel, Regime};

    fn phase(phase: Phase, days_in_phase: usize, first: bool) -> PhaseState {
        PhaseState {
            phase,
            days_in_phase,
            cycle_count: if first { 1 } else { 2 },
            total_drilled: 0,
            is_first_cycle: first,
        }
    }

    fn ctx(slot_1: DayState, s2: PhaseState, s3: PhaseState) -> MoveContext {
        MoveContext::new(
            &Configuration::new(Regime::new(14, 7), 5, 90),
            30,
            slot_1,
            s2,
            s3,
            true,
        )
    }

    #[test]
    fn test_safety_ceiling() {
        let c = ctx(
            DayState::Drilling,
            phase(Phase::Drilling, 3, false),
            phase(Phase::Drilling, 3, false),
        );
        let all = Move::new(DayState::Drilling, DayState::Drilling);
        assert_eq!(SafetyCeiling.score(&c, &all), -THREE_PRODUCING_PENALTY);
        let two = Move::new(DayState::Drilling, DayState::Down);
        assert_eq!(SafetyCeiling.score(&c, &two), 0.0);
    }

    #[test]
    fn test_zero_producing_only_after_induction_window() {
        let mut c = ctx(
            DayState::Rest,
            phase(Phase::Drilling, 3, false),
            phase(Phase::Drilling, 3, false),
        );
        let none = Move::new(DayState::Down, DayState::Down);
        assert_eq!(SafetyCeiling.score(&c, &none), -ZERO_PRODUCING_PENALTY);
        c.day = 6;
        assert_eq!(SafetyCeiling.score(&c, &none), 0.0);
    }

    #[test]
    fn test_keep_two_producing_weighted() {
        let mut c = ctx(
            DayState::Drilling,
            phase(Phase::Drilling, 3, false),
            phase(Phase::Drilling, 3, false),
        );
        let one = Move::new(DayState::Down, DayState::Down);
        assert_eq!(KeepTwoProducing.score(&c, &one), -2_000_000.0);
        c.priorities = Priorities::default()
            .with(PriorityRule::KeepTwoProducing, PriorityLevel::Low);
        assert_eq!(KeepTwoProducing.score(&c, &one), -500_000.0);

        c.slot_3_active = false;
        assert_eq!(KeepTwoProducing.score(&c, &one), 0.0);
        let two = Move::new(DayState::Drilling, DayState::Down);
        assert_eq!(KeepTwoProducing.score(&c, &two), 2_500.0);
    }

    #[test]
    fn test_drilling_cap_counts_excess_days() {
        // First cycle cap for 14/7/5 is 8; continuing from day 9 is 2 over.
        let c = ctx(
            DayState::Rest,
            phase(Phase::Drilling, 9, true),
            phase(Phase::Drilling, 3, false),
        );
        let mv = Move::new(DayState::Drilling, DayState::Drilling);
        assert_eq!(DrillingCap.score(&c, &mv), -2.0 * OVER_CAP_PENALTY * 2.0);
        let stop = Move::new(DayState::Down, DayState::Drilling);
        assert_eq!(DrillingCap.score(&c, &stop), 0.0);
    }

    #[test]
    fn test_complete_induction_penalizes_skipped_days() {
        let c = ctx(
            DayState::Drilling,
            phase(Phase::Induction, 2, true),
            PhaseState::idle(),
        );
        let early = Move::new(DayState::Drilling, DayState::Up);
        assert_eq!(
            CompleteInduction.score(&c, &early),
            -EARLY_DRILLING_PENALTY * 2.0 * 3.0
        );
        let stay = Move::new(DayState::Induction, DayState::Up);
        assert_eq!(CompleteInduction.score(&c, &stay), 0.0);
    }

    #[test]
    fn test_return_from_rest() {
        // Short of producers: reward regardless of rest served.
        let c = ctx(
            DayState::Rest,
            phase(Phase::Resting, 1, false),
            phase(Phase::Drilling, 4, false),
        );
        let up = Move::new(DayState::Up, DayState::Drilling);
        assert_eq!(ReturnFromRest.score(&c, &up), SHORTFALL_ASCENT_REWARD);

        // Two producing, 2 of 6 rest days served → 4 missing at medium weight.
        let c = ctx(
            DayState::Drilling,
            phase(Phase::Resting, 2, false),
            phase(Phase::Drilling, 4, false),
        );
        assert_eq!(ReturnFromRest.score(&c, &up), -EARLY_ASCENT_PENALTY * 4.0);

        let c = ctx(
            DayState::Drilling,
            phase(Phase::Resting, 6, false),
            phase(Phase::Drilling, 4, false),
        );
        assert_eq!(ReturnFromRest.score(&c, &up), NATURAL_RETURN_REWARD);
    }

    #[test]
    fn test_continuity_prefers_slot_2() {
        let c = ctx(
            DayState::Rest,
            phase(Phase::Drilling, 3, false),
            phase(Phase::Drilling, 3, false),
        );
        let only_2 = Move::new(DayState::Drilling, DayState::Down);
        let only_3 = Move::new(DayState::Down, DayState::Drilling);
        assert!(DrillingContinuity.score(&c, &only_2) > DrillingContinuity.score(&c, &only_3));
    }
}
