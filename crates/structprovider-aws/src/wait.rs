// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Polling a remote operation until it settles.
//!
//! ```text
//! sleep(delay)
//! loop:
//!   refresh() ──error──────────────▶ Err(error)
//!     │ state ∈ target  ──────────▶ Ok(value)
//!     │ state ∈ pending ──────────▶ sleep(min_timeout), loop
//!     └ otherwise ────────────────▶ Err(UnexpectedState)
//! whole loop bounded by timeout ──▶ Err(Timeout)
//! ```
//!
//! The fixed interval between refreshes is a `backon` constant backoff that
//! retries only while the state is pending.
//!
//! Used inside record lifecycle methods, never by the adapter. Dropping the
//! returned future cancels the wait.

use std::future::Future;

use backon::{ConstantBuilder, Retryable};
use tracing::{debug, trace};

use crate::{config::PollConfig, error::AwsError};

/// Expected states of a polled operation.
#[derive(Debug, Clone, Copy)]
pub struct StateChange<'a> {
    /// States meaning "still in progress".
    pub pending: &'a [&'a str],
    /// States meaning "done".
    pub target:  &'a [&'a str],
    /// Timing.
    pub config:  PollConfig
}

impl StateChange<'_> {
    /// Poll `refresh` until it reports a target state.
    ///
    /// `refresh` returns the current value together with its state name.
    ///
    /// # Errors
    ///
    /// The first error from `refresh`, [`AwsError::UnexpectedState`] or
    /// [`AwsError::Timeout`].
    pub async fn wait<T, F, Fut>(&self, mut refresh: F) -> Result<T, AwsError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<(T, String), AwsError>>
    {
        let mut last_state = String::new();
        let polled = tokio::time::timeout(
            self.config.timeout,
            self.poll(&mut refresh, &mut last_state)
        )
        .await;

        match polled {
            Ok(result) => result,
            Err(_) => Err(AwsError::Timeout {
                last_state,
                target: self.targets(),
                timeout: self.config.timeout
            })
        }
    }

    async fn poll<T, F, Fut>(&self, refresh: &mut F, last_state: &mut String) -> Result<T, AwsError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<(T, String), AwsError>>
    {
        tokio::time::sleep(self.config.delay).await;

        let (pending, target) = (self.pending, self.target);
        let attempt = || {
            let refreshed = refresh();
            async move {
                let (value, state) = refreshed.await.map_err(Settle::Failed)?;
                if target.contains(&state.as_str()) {
                    debug!(state = %state, "target state reached");
                    Ok(value)
                } else if pending.contains(&state.as_str()) {
                    Err(Settle::Pending(state))
                } else {
                    Err(Settle::Failed(AwsError::UnexpectedState {
                        state,
                        target: targets(target)
                    }))
                }
            }
        };

        attempt
            .retry(
                ConstantBuilder::default()
                    .with_delay(self.config.min_timeout)
                    .with_max_times(usize::MAX)
            )
            .when(Settle::is_pending)
            .notify(|settle, delay| {
                if let Settle::Pending(state) = settle {
                    trace!(state = %state, delay = ?delay, "still pending");
                    last_state.clone_from(state);
                }
            })
            .await
            .map_err(|settle| match settle {
                Settle::Failed(err) => err,
                Settle::Pending(state) => AwsError::UnexpectedState {
                    state,
                    target: targets(target)
                }
            })
    }

    fn targets(&self) -> Vec<String> {
        targets(self.target)
    }
}

/// Outcome of one refresh that did not reach a target state.
enum Settle {
    /// Still in progress; retried after the interval.
    Pending(String),
    /// Refresh error or unexpected state; ends the wait.
    Failed(AwsError)
}

impl Settle {
    const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }
}

fn targets(target: &[&str]) -> Vec<String> {
    target.iter().map(|s| (*s).to_string()).collect()
}
