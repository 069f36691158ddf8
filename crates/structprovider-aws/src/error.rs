// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! AWS record errors.
//!
//! Returned by the Athena and EC2 records' lifecycle methods and carried
//! unchanged to the host through `OperationError::Lifecycle`.

use std::time::Duration;

use thiserror::Error;

/// Failure of an AWS-backed lifecycle method.
#[derive(Debug, Error)]
pub enum AwsError {
    /// Error reported by an AWS API call.
    #[error("AWS error: {message}")]
    Sdk {
        /// Service error code, when the API returned one.
        code:    Option<String>,
        /// Service error message.
        message: String
    },

    /// The availability zone lookup matched nothing.
    #[error("no matching AZ found")]
    NoMatchingZone,

    /// The availability zone lookup matched more than one zone.
    #[error("multiple AZs matched; use additional constraints to reduce matches to a single AZ")]
    MultipleZones,

    /// An Athena query ended in the `FAILED` state.
    #[error("reason: {reason}")]
    QueryFailed {
        /// State change reason reported by Athena.
        reason: String
    },

    /// A polled operation reached a state that is neither pending nor
    /// target.
    #[error("unexpected state '{state}', wanted target '{}'", target.join(", "))]
    UnexpectedState {
        /// State observed.
        state:  String,
        /// Target states.
        target: Vec<String>
    },

    /// A polled operation did not reach a target state in time.
    #[error(
        "timeout while waiting for state to become '{}' (last state: '{last_state}', timeout: {timeout:?})",
        target.join(", ")
    )]
    Timeout {
        /// Last state observed, empty if none was.
        last_state: String,
        /// Target states.
        target:     Vec<String>,
        /// Configured bound.
        timeout:    Duration
    },

    /// An Athena statement that should return no rows returned some.
    #[error("Athena {statement} database, unexpected query result: {result}")]
    UnexpectedResult {
        /// `create` or `drop`.
        statement: &'static str,
        /// Flattened result set.
        result:    String
    },

    /// `show databases` did not list the database.
    #[error("Athena not found database: {name}, query result: {result}")]
    DatabaseNotFound {
        /// Database name.
        name:   String,
        /// Flattened result set.
        result: String
    }
}

impl AwsError {
    /// Build an SDK error from a code and message.
    pub fn sdk(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Sdk {
            code:    Some(code.into()),
            message: message.into()
        }
    }

    /// Service error code, if any.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Sdk {
                code, ..
            } => code.as_deref(),
            _ => None
        }
    }

    /// Check if this is a lookup that matched no zone.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NoMatchingZone | Self::DatabaseNotFound { .. })
    }

    /// Check if a poll ran out of time.
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
