//! Phase model for the reactive slots.
//!
//! A reactive slot carries a `PhaseState` from one day to the next. The
//! state is a plain `Copy` value: each simulated day produces a fresh
//! value from the previous one and the committed action, via
//! [`PhaseState::advance`].
//!
//! # Legal actions
//!
//! | Phase | Offered actions (in order) |
//! |-------|---------------------------|
//! | Idle | `Empty` if inactive, else `Up` |
//! | GoingUp | `Induction` on the first cycle (when induction is configured), else `Drilling` |
//! | Induction | `Drilling`, plus `Induction` while `days_in_phase < induction_days` |
//! | Drilling | `Drilling`, plus `Down` once `days_in_phase >= 2` |
//! | GoingDown | `Rest` |
//! | Resting | `Rest`, plus `Up` once `days_in_phase >= 1` |
//!
//! [`PhaseState::legal_actions`] is the only place the hard sequencing
//! rules are enforced.

use serde::{Deserialize, Serialize};

use super::DayState;

/// Minimum consecutive drilling days before a slot may step down.
pub const MIN_DRILLING_STINT: usize = 2;

/// Minimum rest days before a slot may go back up.
pub const MIN_REST_BEFORE_ASCENT: usize = 1;

/// Lifecycle phase of a reactive slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Not yet started.
    Idle,
    GoingUp,
    Induction,
    Drilling,
    GoingDown,
    Resting,
}

impl Phase {
    /// Phase a slot is in after taking `action`.
    pub fn entered_by(action: DayState) -> Self {
        match action {
            DayState::Up => Phase::GoingUp,
            DayState::Induction => Phase::Induction,
            DayState::Drilling => Phase::Drilling,
            DayState::Down => Phase::GoingDown,
            DayState::Rest => Phase::Resting,
            DayState::Empty => Phase::Idle,
        }
    }
}

/// Per-slot lifecycle tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseState {
    /// Current phase.
    pub phase: Phase,
    /// Consecutive days spent in `phase`, including today (>= 1).
    pub days_in_phase: usize,
    /// Number of ascents so far.
    pub cycle_count: usize,
    /// Total drilling days so far.
    pub total_drilled: usize,
    /// True from the first ascent until the next one.
    pub is_first_cycle: bool,
}

impl PhaseState {
    /// A slot that has not started yet.
    pub fn idle() -> Self {
        Self {
            phase: Phase::Idle,
            days_in_phase: 1,
            cycle_count: 0,
            total_drilled: 0,
            is_first_cycle: false,
        }
    }

    /// A slot already travelling up on its first cycle (slot 2 on day 0).
    pub fn ascending() -> Self {
        Self {
            phase: Phase::GoingUp,
            days_in_phase: 1,
            cycle_count: 1,
            total_drilled: 0,
            is_first_cycle: true,
        }
    }

    /// Actions this slot may take tomorrow.
    ///
    /// Returns one or two actions. The order is significant: the move
    /// evaluator keeps the first of equally scored combinations.
    pub fn legal_actions(&self, is_active: bool, induction_days: usize) -> Vec<DayState> {
        match self.phase {
            Phase::Idle if is_active => vec![DayState::Up],
            Phase::Idle => vec![DayState::Empty],
            Phase::GoingUp => {
                if self.is_first_cycle && induction_days > 0 {
                    vec![DayState::Induction]
                } else {
                    vec![DayState::Drilling]
                }
            }
            Phase::Induction => {
                if self.days_in_phase < induction_days {
                    vec![DayState::Drilling, DayState::Induction]
                } else {
                    vec![DayState::Drilling]
                }
            }
            Phase::Drilling => {
                if self.days_in_phase >= MIN_DRILLING_STINT {
                    vec![DayState::Drilling, DayState::Down]
                } else {
                    vec![DayState::Drilling]
                }
            }
            Phase::GoingDown => vec![DayState::Rest],
            Phase::Resting => {
                if self.days_in_phase >= MIN_REST_BEFORE_ASCENT {
                    vec![DayState::Rest, DayState::Up]
                } else {
                    vec![DayState::Rest]
                }
            }
        }
    }

    /// Applies a committed action and returns the next day's state.
    pub fn advance(self, action: DayState) -> Self {
        let mut next = self;
        let phase = Phase::entered_by(action);

        if action == DayState::Up {
            next.is_first_cycle = self.cycle_count == 0;
            next.cycle_count += 1;
        }

        if phase == self.phase {
            next.days_in_phase += 1;
        } else {
            next.phase = phase;
            next.days_in_phase = 1;
        }

        if action == DayState::Drilling {
            next.total_drilled += 1;
        }

        next
    }

    /// Nominal drilling-day cap for the current cycle.
    ///
    /// The induction offset applies only on the first cycle.
    pub fn drilling_cap(&self, work_days: usize, induction_days: usize) -> usize {
        let offset = if self.is_first_cycle { induction_days } else { 0 };
        work_days.saturating_sub(offset + 1)
    }
}
