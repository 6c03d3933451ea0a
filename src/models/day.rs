//! Day-level facts: what a slot is doing on a given day.
//!
//! A rotation is recorded as one `DayRecord` per slot per day. The same
//! `DayState` values double as the *actions* a reactive slot can take,
//! since choosing an action for a day is the same as fixing its state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// State of one slot on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayState {
    /// Travelling to the rig.
    Up,
    /// Onboarding; first cycle only.
    Induction,
    /// On shift and producing.
    Drilling,
    /// Travelling off the rig.
    Down,
    /// Off rotation.
    Rest,
    /// Not yet activated.
    Empty,
}

impl DayState {
    /// Whether this state counts towards the daily producer count.
    #[inline]
    pub fn is_producing(self) -> bool {
        self == DayState::Drilling
    }

    /// One-character code used for compact text strips.
    pub fn symbol(self) -> char {
        match self {
            DayState::Up => 'U',
            DayState::Induction => 'I',
            DayState::Drilling => 'D',
            DayState::Down => 'v',
            DayState::Rest => '.',
            DayState::Empty => ' ',
        }
    }
}

impl fmt::Display for DayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DayState::Up => "UP",
            DayState::Induction => "INDUCTION",
            DayState::Drilling => "DRILLING",
            DayState::Down => "DOWN",
            DayState::Rest => "REST",
            DayState::Empty => "EMPTY",
        };
        f.write_str(name)
    }
}

/// A slot's state on a specific day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Day index (0-based from the start of the horizon).
    pub day: usize,
    /// State held on that day.
    pub state: DayState,
}

impl DayRecord {
    /// Creates a new record.
    pub fn new(day: usize, state: DayState) -> Self {
        Self { day, state }
    }
}

/// One of the three interchangeable supervisor slots.
///
/// Slot 1 follows the fixed regime; slots 2 and 3 react to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Slot {
    One,
    Two,
    Three,
}

impl Slot {
    /// All slots in reporting order.
    pub const ALL: [Slot; 3] = [Slot::One, Slot::Two, Slot::Three];

    /// 0-based index into per-slot arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Slot::One => 0,
            Slot::Two => 1,
            Slot::Three => 2,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot {}", self.index() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_drilling_produces() {
        let producing: Vec<DayState> = [
            DayState::Up,
            DayState::Induction,
            DayState::Drilling,
            DayState::Down,
            DayState::Rest,
            DayState::Empty,
        ]
        .into_iter()
        .filter(|s| s.is_producing())
        .collect();
        assert_eq!(producing, vec![DayState::Drilling]);
    }

    #[test]
    fn test_day_state_serde_names() {
        let json = serde_json::to_string(&DayState::Induction).unwrap();
        assert_eq!(json, "\"INDUCTION\"");
        let back: DayState = serde_json::from_str("\"DOWN\"").unwrap();
        assert_eq!(back, DayState::Down);
    }

    #[test]
    fn test_slot_display_and_index() {
        assert_eq!(Slot::Three.to_string(), "slot 3");
        assert_eq!(Slot::ALL.map(Slot::index), [0, 1, 2]);
    }
}
