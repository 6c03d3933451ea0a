//! Schedule metrics and defect detection.
//!
//! Turns the three finished sequences into per-day producer counts, a
//! chronological defect list and summary statistics.
//!
//! # Defects
//!
//! | Kind | Condition |
//! |------|-----------|
//! | ThreeProducing | 3 drilling (always reported) |
//! | OneProducing | 1 drilling, on or after slot 3's first non-EMPTY day |
//! | ZeroProducing | 0 drilling, day > induction + 1 |
//! | InvalidSequence | UP→UP, UP→DOWN or DOWN→UP on any slot |
//! | ShortProducing | DRILLING with a non-drilling day before and a non-drilling, non-EMPTY day after |
//!
//! Within a day, producer-count defects come first, then sequence
//! defects in slot order.

use crate::models::{
    Configuration, DayRecord, DayState, Priorities, PriorityLevel, PriorityRule, ScheduleError,
    ScheduleStats, Slot,
};

/// Output of the metrics pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationMetrics {
    /// Drilling slots per day.
    pub producer_counts: Vec<u8>,
    /// Defects in day order.
    pub errors: Vec<ScheduleError>,
    pub stats: ScheduleStats,
}

impl RotationMetrics {
    /// Computes counts, defects and statistics for three finished sequences.
    ///
    /// # Arguments
    /// * `sequences` - Slot 1, 2 and 3 day records, all of the same length.
    /// * `config` - The configuration that produced them (induction window
    ///   and priority attribution).
    pub fn calculate(sequences: [&[DayRecord]; 3], config: &Configuration) -> Self {
        let total_days = sequences.iter().map(|s| s.len()).min().unwrap_or(0);
        let producer_counts: Vec<u8> = (0..total_days)
            .map(|d| {
                sequences
                    .iter()
                    .filter(|s| s[d].state.is_producing())
                    .count() as u8
            })
            .collect();

        let slot_3_start = sequences[Slot::Three.index()]
            .iter()
            .find(|r| r.state != DayState::Empty)
            .map(|r| r.day);

        let mut errors = Vec::new();
        for day in 0..total_days {
            let producing: Vec<Slot> = Slot::ALL
                .into_iter()
                .filter(|s| sequences[s.index()][day].state.is_producing())
                .collect();

            match producing.len() {
                3 => errors.push(ScheduleError::three_producing(day, producing)),
                1 if slot_3_start.is_some_and(|start| day >= start) => errors.push(
                    ScheduleError::one_producing(day, producing)
                        .caused_by(one_producing_cause(&config.priorities)),
                ),
                0 if day > config.induction_days + 1 => errors.push(
                    ScheduleError::zero_producing(day)
                        .caused_by(zero_producing_cause(&config.priorities)),
                ),
                _ => {}
            }

            for slot in Slot::ALL {
                if let Some(err) = sequence_defect(sequences[slot.index()], slot, day) {
                    errors.push(err);
                }
            }
        }

        let stats = ScheduleStats {
            total_days,
            zero_producing_days: bucket(&producer_counts, 0),
            one_producing_days: bucket(&producer_counts, 1),
            two_producing_days: bucket(&producer_counts, 2),
            three_producing_days: bucket(&producer_counts, 3),
            slot_2_cycles: count_cycles(sequences[Slot::Two.index()]),
            slot_2_average_rest_days: average_rest_run(sequences[Slot::Two.index()]),
            drilled_days: sequences.map(|s| s.iter().filter(|r| r.state.is_producing()).count()),
        };

        Self {
            producer_counts,
            errors,
            stats,
        }
    }
}

/// A single producer is tolerated when two-producing is not top priority,
/// or when a high minimum-rest rule held back an early ascent.
fn one_producing_cause(priorities: &Priorities) -> Option<PriorityRule> {
    if priorities.keep_two_producing != PriorityLevel::High {
        Some(PriorityRule::KeepTwoProducing)
    } else if priorities.minimum_rest == PriorityLevel::High {
        Some(PriorityRule::MinimumRest)
    } else {
        None
    }
}

fn zero_producing_cause(priorities: &Priorities) -> Option<PriorityRule> {
    (priorities.keep_two_producing != PriorityLevel::High)
        .then_some(PriorityRule::KeepTwoProducing)
}

/// Forbidden transition or isolated drilling day ending at `day`.
fn sequence_defect(seq: &[DayRecord], slot: Slot, day: usize) -> Option<ScheduleError> {
    let current = seq[day].state;
    let previous = day.checked_sub(1).map(|d| seq[d].state);

    if let Some(prev) = previous {
        let forbidden = matches!(
            (prev, current),
            (DayState::Up, DayState::Up)
                | (DayState::Up, DayState::Down)
                | (DayState::Down, DayState::Up)
        );
        if forbidden {
            return Some(ScheduleError::invalid_sequence(day, slot, prev, current));
        }
    }

    if current == DayState::Drilling && previous != Some(DayState::Drilling) {
        let next = seq.get(day + 1).map(|r| r.state)?;
        if next != DayState::Drilling && next != DayState::Empty {
            return Some(ScheduleError::short_producing(day, slot));
        }
    }

    None
}

fn bucket(counts: &[u8], n: u8) -> usize {
    counts.iter().filter(|&&c| c == n).count()
}

/// Number of ascents: UP days not immediately preceded by UP.
fn count_cycles(seq: &[DayRecord]) -> usize {
    seq.iter()
        .enumerate()
        .filter(|(i, r)| {
            r.state == DayState::Up && (*i == 0 || seq[i - 1].state != DayState::Up)
        })
        .count()
}

/// Mean length of maximal contiguous REST runs; 0 when there are none.
fn average_rest_run(seq: &[DayRecord]) -> f64 {
    let mut runs = Vec::new();
    let mut current = 0usize;
    for r in seq {
        if r.state == DayState::Rest {
            current += 1;
        } else if current > 0 {
            runs.push(current);
            current = 0;
        }
    }
    if current > 0 {
        runs.push(current);
    }

    if runs.is_empty() {
        0.0
    } else {
        runs.iter().sum::<usize>() as f64 / runs.len() as f64
    }
}
