//! Tunable priority rules and their weights.
//!
//! Five soft rules bias the move evaluator. Each is set to one of three
//! levels; the level maps to a multiplicative weight on that rule's
//! scoring terms. Hard safety terms (three producers, zero producers)
//! are never weighted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named, tunable scoring rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityRule {
    /// Keep exactly two slots drilling every day.
    KeepTwoProducing,
    /// Do not drill past the nominal per-cycle cap.
    LimitConsecutiveWork,
    /// Do not go back up before the nominal rest is served.
    MinimumRest,
    /// Serve the full induction before drilling.
    CompleteInduction,
    /// Prefer keeping a drilling slot on shift.
    DrillingContinuity,
}

impl PriorityRule {
    /// All rules, in declaration order.
    pub const ALL: [PriorityRule; 5] = [
        PriorityRule::KeepTwoProducing,
        PriorityRule::LimitConsecutiveWork,
        PriorityRule::MinimumRest,
        PriorityRule::CompleteInduction,
        PriorityRule::DrillingContinuity,
    ];
}

impl fmt::Display for PriorityRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PriorityRule::KeepTwoProducing => "keep two producing",
            PriorityRule::LimitConsecutiveWork => "limit consecutive work",
            PriorityRule::MinimumRest => "minimum rest",
            PriorityRule::CompleteInduction => "complete induction",
            PriorityRule::DrillingContinuity => "drilling continuity",
        };
        f.write_str(name)
    }
}

/// Strength of a priority rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityLevel {
    High,
    #[default]
    Medium,
    Low,
}

impl PriorityLevel {
    /// Multiplier applied to the rule's scoring terms.
    #[inline]
    pub fn weight(self) -> f64 {
        match self {
            PriorityLevel::High => 2.0,
            PriorityLevel::Medium => 1.0,
            PriorityLevel::Low => 0.5,
        }
    }
}

/// Level assignment for every priority rule.
///
/// Passed by value into each run; there is no shared default state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Priorities {
    pub keep_two_producing: PriorityLevel,
    pub limit_consecutive_work: PriorityLevel,
    pub minimum_rest: PriorityLevel,
    pub complete_induction: PriorityLevel,
    pub drilling_continuity: PriorityLevel,
}

impl Default for Priorities {
    fn default() -> Self {
        Self {
            keep_two_producing: PriorityLevel::High,
            limit_consecutive_work: PriorityLevel::High,
            minimum_rest: PriorityLevel::Medium,
            complete_induction: PriorityLevel::High,
            drilling_continuity: PriorityLevel::Medium,
        }
    }
}

impl Priorities {
    /// Level of a rule.
    pub fn level(&self, rule: PriorityRule) -> PriorityLevel {
        match rule {
            PriorityRule::KeepTwoProducing => self.keep_two_producing,
            PriorityRule::LimitConsecutiveWork => self.limit_consecutive_work,
            PriorityRule::MinimumRest => self.minimum_rest,
            PriorityRule::CompleteInduction => self.complete_induction,
            PriorityRule::DrillingContinuity => self.drilling_continuity,
        }
    }

    /// Weight of a rule.
    #[inline]
    pub fn weight(&self, rule: PriorityRule) -> f64 {
        self.level(rule).weight()
    }

    /// Returns a copy with one rule set to `level`.
    pub fn with(mut self, rule: PriorityRule, level: PriorityLevel) -> Self {
        let slot = match rule {
            PriorityRule::KeepTwoProducing => &mut self.keep_two_producing,
            PriorityRule::LimitConsecutiveWork => &mut self.limit_consecutive_work,
            PriorityRule::MinimumRest => &mut self.minimum_rest,
            PriorityRule::CompleteInduction => &mut self.complete_induction,
            PriorityRule::DrillingContinuity => &mut self.drilling_continuity,
        };
        *slot = level;
        self
    }
}
