// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Service client seams.
//!
//! The records talk to Athena and EC2 through [`AthenaApi`] and [`Ec2Api`].
//! A host wires real SDK clients behind them; tests wire fakes. Both are
//! bundled in [`AwsClient`], the metadata every AWS record receives.

use std::{collections::BTreeMap, fmt, sync::Arc};

use async_trait::async_trait;

use crate::{config::PollConfig, error::AwsError};

/// Athena query execution state.
pub mod query_state {
    /// Waiting to run.
    pub const QUEUED: &str = "QUEUED";
    /// Running.
    pub const RUNNING: &str = "RUNNING";
    /// Finished successfully.
    pub const SUCCEEDED: &str = "SUCCEEDED";
    /// Finished with an error.
    pub const FAILED: &str = "FAILED";
    /// Cancelled by a user.
    pub const CANCELLED: &str = "CANCELLED";
}

/// Status of one query execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryStatus {
    /// One of the [`query_state`] names.
    pub state:               String,
    /// Why the state last changed, if Athena said.
    pub state_change_reason: Option<String>
}

/// Rows returned by a finished query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    /// Result rows; each datum is a varchar value, `None` for null.
    pub rows: Vec<Vec<Option<String>>>
}

impl ResultSet {
    /// All non-null values, row by row.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().flatten().filter_map(Option::as_deref)
    }

    /// Values joined by newlines, for error messages.
    pub fn flatten(&self) -> String {
        self.values().collect::<Vec<_>>().join("\n")
    }
}

/// The Athena calls the database record needs.
#[async_trait]
pub trait AthenaApi: Send + Sync {
    /// Start `query`, writing results under `output_location`. Returns the
    /// execution id.
    async fn start_query_execution(&self, query: &str, output_location: &str) -> Result<String, AwsError>;

    /// Current status of an execution.
    async fn get_query_execution(&self, execution_id: &str) -> Result<QueryStatus, AwsError>;

    /// Results of a finished execution.
    async fn get_query_results(&self, execution_id: &str) -> Result<ResultSet, AwsError>;
}

/// Name/values filter for EC2 describe calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    /// Attribute name.
    pub name:   String,
    /// Accepted values.
    pub values: Vec<String>
}

/// Build one filter per non-empty attribute, ordered by name.
///
/// EC2 rejects an explicitly empty filter list, so an all-empty input
/// yields an empty vector the client should omit.
pub fn attribute_filters<'a>(attributes: impl IntoIterator<Item = (&'a str, &'a str)>) -> Vec<Filter> {
    attributes
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect::<BTreeMap<_, _>>()
        .into_iter()
        .map(|(name, value)| Filter {
            name:   name.to_string(),
            values: vec![value.to_string()]
        })
        .collect()
}

/// Parameters of `DescribeAvailabilityZones`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeAvailabilityZones {
    /// Restrict to these zone names. Empty means all.
    pub zone_names: Vec<String>,
    /// Attribute filters. Empty means none.
    pub filters:    Vec<Filter>
}

/// One availability zone as described by EC2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityZoneInfo {
    /// Zone name, e.g. `us-west-2a`.
    pub zone_name:   String,
    /// Region name, e.g. `us-west-2`.
    pub region_name: String,
    /// Zone state, e.g. `available`.
    pub state:       String
}

/// The EC2 calls the availability zone record needs.
#[async_trait]
pub trait Ec2Api: Send + Sync {
    /// Zones matching `input`.
    async fn describe_availability_zones(
        &self,
        input: DescribeAvailabilityZones
    ) -> Result<Vec<AvailabilityZoneInfo>, AwsError>;
}

/// Provider metadata handed to every AWS record.
#[derive(Clone)]
pub struct AwsClient {
    /// Athena connection.
    pub athena: Arc<dyn AthenaApi>,
    /// EC2 connection.
    pub ec2:    Arc<dyn Ec2Api>,
    /// Polling bounds for long-running operations.
    pub poll:   PollConfig
}

impl AwsClient {
    /// Bundle service clients with default polling.
    pub fn new(athena: Arc<dyn AthenaApi>, ec2: Arc<dyn Ec2Api>) -> Self {
        Self {
            athena,
            ec2,
            poll: PollConfig::default()
        }
    }

    /// Replace the polling bounds.
    #[must_use]
    pub const fn with_poll(mut self, poll: PollConfig) -> Self {
        self.poll = poll;
        self
    }
}

impl fmt::Debug for AwsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwsClient").field("poll", &self.poll).finish_non_exhaustive()
    }
}
