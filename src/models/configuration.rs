//! Run configuration: regime, induction, target and priorities.
//!
//! # Horizon
//!
//! The simulated horizon over-provisions the drilling target so that
//! tail effects never truncate a comparison window:
//!
//! ```text
//! cycles  = ceil(target / max(1, work - induction - 1))
//! horizon = max(cycles * (work + rest) * 2, target * 2)
//! ```

use serde::{Deserialize, Serialize};

use super::Priorities;

/// Recurring work/rest pattern of one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Regime {
    /// Days on rotation per cycle, travel days included.
    pub work_days: usize,
    /// Days off rotation per cycle, the down day included.
    pub rest_days: usize,
}

impl Regime {
    /// Creates a regime.
    pub fn new(work_days: usize, rest_days: usize) -> Self {
        Self {
            work_days,
            rest_days,
        }
    }

    /// Full cycle length.
    #[inline]
    pub fn cycle_days(&self) -> usize {
        self.work_days + self.rest_days
    }

    /// Drilling days per fixed-regime cycle once induction is taken out.
    ///
    /// Never less than one.
    #[inline]
    pub fn drilling_days(&self, induction_days: usize) -> usize {
        self.work_days.saturating_sub(induction_days + 1).max(1)
    }
}

/// Input to one rotation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Onboarding days on a slot's first cycle.
    pub induction_days: usize,
    /// Drilling-day target; sizes the horizon, not a cutoff.
    pub total_drilling_days: usize,
    pub regime: Regime,
    #[serde(default)]
    pub priorities: Priorities,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(Regime::new(14, 7), 5, 90)
    }
}

impl Configuration {
    /// Creates a configuration with default priorities.
    pub fn new(regime: Regime, induction_days: usize, total_drilling_days: usize) -> Self {
        Self {
            regime,
            induction_days,
            total_drilling_days,
            priorities: Priorities::default(),
        }
    }

    /// Sets the priorities.
    pub fn with_priorities(mut self, priorities: Priorities) -> Self {
        self.priorities = priorities;
        self
    }

    /// Sets the induction length.
    pub fn with_induction(mut self, induction_days: usize) -> Self {
        self.induction_days = induction_days;
        self
    }

    /// Estimated number of cycles needed to reach the drilling target.
    pub fn estimated_cycles(&self) -> usize {
        self.total_drilling_days
            .div_ceil(self.regime.drilling_days(self.induction_days))
    }

    /// Number of simulated days for this configuration.
    pub fn horizon_days(&self) -> usize {
        let by_cycles = self.estimated_cycles() * self.regime.cycle_days() * 2;
        by_cycles.max(self.total_drilling_days * 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regime_cycle_and_drilling_days() {
        let r = Regime::new(14, 7);
        assert_eq!(r.cycle_days(), 21);
        assert_eq!(r.drilling_days(5), 8);
        assert_eq!(r.drilling_days(0), 13);
        assert_eq!(r.drilling_days(20), 1);
    }

    #[test]
    fn test_horizon_14_7() {
        // ceil(30 / 8) = 4 cycles → 4 * 21 * 2 = 168
        let c = Configuration::new(Regime::new(14, 7), 5, 30);
        assert_eq!(c.estimated_cycles(), 4);
        assert_eq!(c.horizon_days(), 168);
    }

    #[test]
    fn test_horizon_degenerate_regimes() {
        // 1-day work leaves no drilling room; drilling_days clamps to 1.
        // 10 cycles * 2 days * 2 = 40
        let c = Configuration::new(Regime::new(1, 1), 0, 10);
        assert_eq!(c.horizon_days(), 40);

        let zero = Configuration::new(Regime::new(7, 7), 1, 0);
        assert_eq!(zero.horizon_days(), 0);
    }

    #[test]
    fn test_horizon_exceeds_target() {
        for (w, r, i, t) in [(14, 7, 5, 30), (7, 7, 1, 90), (28, 28, 7, 120), (2, 1, 0, 1)] {
            let c = Configuration::new(Regime::new(w, r), i, t);
            assert!(c.horizon_days() > t, "{w}/{r} induction {i}");
        }
    }

    #[test]
    fn test_default_configuration() {
        let c = Configuration::default();
        assert_eq!(c.regime, Regime::new(14, 7));
        assert_eq!(c.induction_days, 5);
        assert_eq!(c.total_drilling_days, 90);
    }
}
