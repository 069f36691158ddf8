// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! AWS records built on structprovider.
//!
//! | Name | Kind | Record |
//! |------|------|--------|
//! | `aws_athena_database` | resource | [`AthenaDatabase`] |
//! | `aws_availability_zone` | data source | [`AvailabilityZone`] |
//!
//! The records reach AWS through the [`AthenaApi`] and [`Ec2Api`] seams
//! bundled in [`AwsClient`].

#![warn(missing_docs)]

mod athena;
mod availability_zone;
mod client;
mod config;
mod error;
mod wait;

use structprovider::{ConfigFault, Provider};

pub use crate::{
    athena::AthenaDatabase,
    availability_zone::AvailabilityZone,
    client::{
        AthenaApi, AvailabilityZoneInfo, AwsClient, DescribeAvailabilityZones, Ec2Api, Filter,
        QueryStatus, ResultSet, attribute_filters, query_state
    },
    config::PollConfig,
    error::AwsError,
    wait::StateChange
};

/// Register every AWS record.
///
/// # Errors
///
/// A [`ConfigFault`] if a record is misdeclared.
pub fn provider() -> Result<Provider<AwsClient>, ConfigFault> {
    let mut provider = Provider::new();
    provider
        .resource::<AthenaDatabase>("aws_athena_database")?
        .data_source::<AvailabilityZone>("aws_availability_zone")?;
    Ok(provider)
}
