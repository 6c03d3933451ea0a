//! Rotation schedule (result) model.
//!
//! A schedule is the complete day-by-day state of all three slots over
//! the horizon, plus the derived producer counts, detected defects and
//! summary statistics. Defects are data: an infeasible configuration
//! still yields a full-length schedule with a non-empty error list.

use serde::{Deserialize, Serialize};

use super::{DayRecord, DayState, PriorityRule, Slot};

/// A complete rotation for one configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Number of simulated days.
    pub horizon_days: usize,
    /// Day on which slot 3 was activated.
    pub entry_day: usize,
    /// Fixed-regime slot.
    pub slot_1: Vec<DayRecord>,
    /// Primary reactive slot.
    pub slot_2: Vec<DayRecord>,
    /// Secondary reactive slot.
    pub slot_3: Vec<DayRecord>,
    /// Number of drilling slots per day.
    pub producer_counts: Vec<u8>,
    /// Defects, in day order.
    pub errors: Vec<ScheduleError>,
    pub stats: ScheduleStats,
}

/// A defect detected in a finished schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleError {
    /// Day the defect occurs on.
    pub day: usize,
    /// Classification.
    pub kind: ScheduleErrorKind,
    /// Human-readable description.
    pub message: String,
    /// Slots involved in the defect.
    pub involved: Vec<Slot>,
    /// Priority rule whose weighting explains why the defect was tolerated.
    pub caused_by: Option<PriorityRule>,
}

/// Classification of schedule defects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleErrorKind {
    /// Three slots drilling on the same day.
    ThreeProducing,
    /// A single slot drilling once slot 3 has started.
    OneProducing,
    /// A forbidden transition (UP→UP, UP→DOWN, DOWN→UP).
    InvalidSequence,
    /// Nobody drilling after the initial induction window.
    ZeroProducing,
    /// An isolated one-day drilling stint.
    ShortProducing,
}

impl ScheduleErrorKind {
    /// All kinds in reporting order.
    pub const ALL: [ScheduleErrorKind; 5] = [
        ScheduleErrorKind::ThreeProducing,
        ScheduleErrorKind::OneProducing,
        ScheduleErrorKind::InvalidSequence,
        ScheduleErrorKind::ZeroProducing,
        ScheduleErrorKind::ShortProducing,
    ];
}

/// Summary statistics of a schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleStats {
    pub total_days: usize,
    pub zero_producing_days: usize,
    pub one_producing_days: usize,
    pub two_producing_days: usize,
    pub three_producing_days: usize,
    /// Ascents by slot 2 (UP days not preceded by UP).
    pub slot_2_cycles: usize,
    /// Mean length of slot 2's contiguous REST runs.
    pub slot_2_average_rest_days: f64,
    /// Drilling days per slot.
    pub drilled_days: [usize; 3],
}

impl ScheduleError {
    /// Creates an error with no priority attribution.
    pub fn new(
        day: usize,
        kind: ScheduleErrorKind,
        message: impl Into<String>,
        involved: Vec<Slot>,
    ) -> Self {
        Self {
            day,
            kind,
            message: message.into(),
            involved,
            caused_by: None,
        }
    }

    /// Attributes the error to a priority rule.
    pub fn caused_by(mut self, rule: Option<PriorityRule>) -> Self {
        self.caused_by = rule;
        self
    }

    /// Three slots drilling.
    pub fn three_producing(day: usize, involved: Vec<Slot>) -> Self {
        Self::new(
            day,
            ScheduleErrorKind::ThreeProducing,
            format!("Day {day}: three supervisors drilling"),
            involved,
        )
    }

    /// Only one slot drilling.
    pub fn one_producing(day: usize, involved: Vec<Slot>) -> Self {
        let who = involved
            .first()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "nobody".to_string());
        Self::new(
            day,
            ScheduleErrorKind::OneProducing,
            format!("Day {day}: only {who} drilling"),
            involved,
        )
    }

    /// Nobody drilling.
    pub fn zero_producing(day: usize) -> Self {
        Self::new(
            day,
            ScheduleErrorKind::ZeroProducing,
            format!("Day {day}: no supervisor drilling"),
            Vec::new(),
        )
    }

    /// Forbidden transition on one slot.
    pub fn invalid_sequence(day: usize, slot: Slot, from: DayState, to: DayState) -> Self {
        Self::new(
            day,
            ScheduleErrorKind::InvalidSequence,
            format!("Day {day}: {slot} goes {from} -> {to}"),
            vec![slot],
        )
    }

    /// Isolated single drilling day on one slot.
    pub fn short_producing(day: usize, slot: Slot) -> Self {
        Self::new(
            day,
            ScheduleErrorKind::ShortProducing,
            format!("Day {day}: {slot} drills for a single day"),
            vec![slot],
        )
    }
}

impl Schedule {
    /// Day-state sequence of a slot.
    pub fn sequence(&self, slot: Slot) -> &[DayRecord] {
        match slot {
            Slot::One => &self.slot_1,
            Slot::Two => &self.slot_2,
            Slot::Three => &self.slot_3,
        }
    }

    /// State of a slot on a day, if within the horizon.
    pub fn state_on(&self, slot: Slot, day: usize) -> Option<DayState> {
        self.sequence(slot).get(day).map(|r| r.state)
    }

    /// Producer count on a day, if within the horizon.
    pub fn producers_on(&self, day: usize) -> Option<u8> {
        self.producer_counts.get(day).copied()
    }

    /// All errors of one kind.
    pub fn errors_of_kind(&self, kind: ScheduleErrorKind) -> Vec<&ScheduleError> {
        self.errors.iter().filter(|e| e.kind == kind).collect()
    }

    /// Whether no defects were detected.
    pub fn is_conflict_free(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether any forbidden transition was produced.
    ///
    /// Such a defect points at the coordinator, not at a tolerated trade-off.
    pub fn has_hard_sequence_defect(&self) -> bool {
        self.errors
            .iter()
            .any(|e| e.kind == ScheduleErrorKind::InvalidSequence)
    }

    /// First day on which a slot is in `state`.
    pub fn first_day_in(&self, slot: Slot, state: DayState) -> Option<usize> {
        self.sequence(slot)
            .iter()
            .find(|r| r.state == state)
            .map(|r| r.day)
    }
}
