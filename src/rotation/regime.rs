//! Fixed-regime generator and slot 3 entry point.
//!
//! Slot 1 never reacts to anything. Its sequence repeats
//!
//! ```text
//! UP, INDUCTION x induction, DRILLING x max(1, work - induction - 1), DOWN, REST x (rest - 1)
//! ```
//!
//! from day 0, truncated at the horizon. It is the reference clock the
//! reactive slots accommodate.

use std::iter::repeat;

use crate::models::{DayRecord, DayState, Regime};

/// One cycle of the fixed regime.
fn cycle_pattern(regime: Regime, induction_days: usize) -> Vec<DayState> {
    let drilling = regime.drilling_days(induction_days);
    let resting = regime.rest_days.saturating_sub(1);

    let mut pattern = Vec::with_capacity(induction_days + drilling + resting + 2);
    pattern.push(DayState::Up);
    pattern.extend(repeat(DayState::Induction).take(induction_days));
    pattern.extend(repeat(DayState::Drilling).take(drilling));
    pattern.push(DayState::Down);
    pattern.extend(repeat(DayState::Rest).take(resting));
    pattern
}

/// Generates slot 1's full sequence over `total_days`.
///
/// Always succeeds; a zero horizon yields an empty sequence.
pub fn fixed_sequence(regime: Regime, induction_days: usize, total_days: usize) -> Vec<DayRecord> {
    let pattern = cycle_pattern(regime, induction_days);
    pattern
        .iter()
        .cycle()
        .take(total_days)
        .enumerate()
        .map(|(day, &state)| DayRecord::new(day, state))
        .collect()
}

/// Day on which slot 3 is activated.
///
/// Slot 3 must finish its own induction and be drilling before slot 1
/// first goes down: `max(0, first_down - induction - 1)`. A sequence
/// that never goes down uses its length as the first-down day.
pub fn entry_day(slot_1: &[DayRecord], induction_days: usize) -> usize {
    let first_down = slot_1
        .iter()
        .find(|r| r.state == DayState::Down)
        .map(|r| r.day)
        .unwrap_or(slot_1.len());
    first_down.saturating_sub(induction_days + 1)
}
