// Copyright (C) 2025 Headsup Poker Contributors
// SPDX-License-Identifier: Apache-2.0

//! Wall clock abstraction for the time bounded decision loop.
use std::time::{Duration, Instant};

/// A monotonic clock measuring time elapsed since an arbitrary epoch.
///
/// The decision loop polls the clock to honor its wall clock budget,
/// tests inject a fake clock to step through the loop without real
/// delays.
pub trait Clock {
    /// Time elapsed since the clock epoch.
    fn now(&self) -> Duration;
}

/// A [Clock] anchored to the system monotonic clock at construction.
#[derive(Debug)]
pub struct SystemClock {
    epoch: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::default();
        let t1 = clock.now();
        let t2 = clock.now();
        assert!(t2 >= t1);
    }
}
