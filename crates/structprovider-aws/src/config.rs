// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Polling configuration for long-running AWS operations.

use std::time::Duration;

/// Bounds for polling an operation until it settles.
///
/// Defaults match Athena query execution: wait 3 s before the first check,
/// check every 3 s, give up after 10 minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    /// Total time allowed.
    pub timeout:     Duration,
    /// Wait before the first check.
    pub delay:       Duration,
    /// Wait between checks.
    pub min_timeout: Duration
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            timeout:     Duration::from_secs(10 * 60),
            delay:       Duration::from_secs(3),
            min_timeout: Duration::from_secs(3)
        }
    }
}

impl PollConfig {
    /// Replace the total time allowed.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the initial wait.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Replace the wait between checks.
    #[must_use]
    pub const fn with_min_timeout(mut self, min_timeout: Duration) -> Self {
        self.min_timeout = min_timeout;
        self
    }
}
