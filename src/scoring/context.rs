//! Day context for move evaluation.

use crate::models::{Configuration, DayState, PhaseState, Priorities, Regime, Slot};

/// Everything the evaluator may look at when scoring a day's move.
///
/// Built fresh by the coordinator for every simulated day. Carries its
/// own copy of the priorities.
#[derive(Debug, Clone, Copy)]
pub struct MoveContext {
    /// Day being decided.
    pub day: usize,
    /// Slot 1's fixed state on `day`.
    pub slot_1: DayState,
    /// Slot 2's phase as of the previous day.
    pub slot_2: PhaseState,
    /// Slot 3's phase as of the previous day.
    pub slot_3: PhaseState,
    /// Whether slot 3 has reached its entry day.
    pub slot_3_active: bool,
    pub regime: Regime,
    pub induction_days: usize,
    pub priorities: Priorities,
}

/// A candidate pair of same-day actions for the reactive slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub slot_2: DayState,
    pub slot_3: DayState,
}

impl Move {
    /// Creates a move.
    pub fn new(slot_2: DayState, slot_3: DayState) -> Self {
        Self { slot_2, slot_3 }
    }
}

impl MoveContext {
    /// Creates a context for `day` under `config`.
    pub fn new(
        config: &Configuration,
        day: usize,
        slot_1: DayState,
        slot_2: PhaseState,
        slot_3: PhaseState,
        slot_3_active: bool,
    ) -> Self {
        Self {
            day,
            slot_1,
            slot_2,
            slot_3,
            slot_3_active,
            regime: config.regime,
            induction_days: config.induction_days,
            priorities: config.priorities,
        }
    }

    /// Number of drilling slots if `mv` is committed.
    pub fn producers(&self, mv: &Move) -> usize {
        [self.slot_1, mv.slot_2, mv.slot_3]
            .into_iter()
            .filter(|s| s.is_producing())
            .count()
    }

    /// Each reactive slot paired with its current phase and proposed action.
    pub fn reactive(&self, mv: &Move) -> [(Slot, PhaseState, DayState); 2] {
        [
            (Slot::Two, self.slot_2, mv.slot_2),
            (Slot::Three, self.slot_3, mv.slot_3),
        ]
    }

    /// All legal moves, slot 2's actions outer and slot 3's inner.
    pub fn candidates(&self) -> Vec<Move> {
        let slot_3_actions = self
            .slot_3
            .legal_actions(self.slot_3_active, self.induction_days);
        self.slot_2
            .legal_actions(true, self.induction_days)
            .into_iter()
            .flat_map(|a2| slot_3_actions.iter().map(move |&a3| Move::new(a2, a3)))
            .collect()
    }
}
