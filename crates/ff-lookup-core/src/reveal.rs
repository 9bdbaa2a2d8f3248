//! Staggered reveal of result sections
//!
//! Sections appear one after another once results arrive instead of all at
//! once. The first section is visible immediately.

use std::time::Duration;

/// Default gap between two sections appearing
pub const DEFAULT_STEP: Duration = Duration::from_millis(120);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    step: Duration,
}

impl Default for Reveal {
    fn default() -> Self {
        Self::new(DEFAULT_STEP)
    }
}

impl Reveal {
    pub fn new(step: Duration) -> Self {
        Self { step }
    }

    /// Number of the `total` sections visible `elapsed` after results arrived
    pub fn visible(&self, elapsed: Duration, total: usize) -> usize {
        if total == 0 {
            return 0;
        }
        if self.step.is_zero() {
            return total;
        }
        let steps = elapsed.as_millis() / self.step.as_millis().max(1);
        usize::try_from(steps)
            .unwrap_or(usize::MAX)
            .saturating_add(1)
            .min(total)
    }

    /// True once every section is on screen
    pub fn is_complete(&self, elapsed: Duration, total: usize) -> bool {
        self.visible(elapsed, total) == total
    }
}
