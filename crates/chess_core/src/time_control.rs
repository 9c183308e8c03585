//! Wall-clock search deadlines.
//!
//! Search is plain synchronous recursion with no cancellation signal; the
//! only lever is the deadline checked at the root loop and at every
//! recursive call. Once a think starts, it stops only by running out of
//! budget.

use std::time::{Duration, Instant};

/// A started clock with an optional budget.
#[derive(Clone, Copy, Debug)]
pub struct Deadline {
    started: Instant,
    budget: Option<Duration>,
}

impl Deadline {
    /// Start the clock with the given budget.
    pub fn start(budget: Duration) -> Self {
        Self {
            started: Instant::now(),
            budget: Some(budget),
        }
    }

    /// A deadline that never expires. Tests use this for deterministic
    /// fixed-depth searches.
    pub fn unlimited() -> Self {
        Self {
            started: Instant::now(),
            budget: None,
        }
    }

    #[inline]
    pub fn expired(&self) -> bool {
        match self.budget {
            Some(budget) => self.started.elapsed() >= budget,
            None => false,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
