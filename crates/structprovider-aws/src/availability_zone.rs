// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `aws_availability_zone` data source.

use structprovider::{Identifier, Reader, Record, async_trait};
use tracing::debug;

use crate::{
    client::{AwsClient, DescribeAvailabilityZones, attribute_filters},
    error::AwsError
};

/// A single availability zone, looked up by name and/or state.
#[derive(Debug, Default, Clone, PartialEq, Eq, Record)]
#[record(data_source, meta = "AwsClient", error = "AwsError")]
pub struct AvailabilityZone {
    /// Zone name.
    #[tf(",optional,computed")]
    pub name: String,

    /// Region the zone belongs to.
    #[tf(",computed")]
    pub region: String,

    /// Zone name without the region prefix (`a` for `us-west-2a`). Lets
    /// lookup tables key on the zone letter across regions.
    #[tf(",computed")]
    pub name_suffix: String,

    /// Zone state, e.g. `available`.
    #[tf(",optional,computed")]
    pub state: String
}

impl AvailabilityZone {
    fn request(&self) -> DescribeAvailabilityZones {
        DescribeAvailabilityZones {
            zone_names: if self.name.is_empty() {
                Vec::new()
            } else {
                vec![self.name.clone()]
            },
            filters:    attribute_filters([("state", self.state.as_str())])
        }
    }
}

impl Identifier for AvailabilityZone {
    fn id(&self) -> String {
        self.name.clone()
    }
}

#[async_trait]
impl Reader for AvailabilityZone {
    async fn read(&mut self, client: &AwsClient) -> Result<(), AwsError> {
        let request = self.request();
        debug!(?request, "reading availability zone");

        let mut zones = client.ec2.describe_availability_zones(request).await?;
        let zone = match zones.len() {
            0 => return Err(AwsError::NoMatchingZone),
            1 => zones.remove(0),
            _ => return Err(AwsError::MultipleZones)
        };

        self.name_suffix = zone
            .zone_name
            .get(zone.region_name.len()..)
            .unwrap_or_default()
            .to_string();
        self.name = zone.zone_name;
        self.region = zone.region_name;
        self.state = zone.state;
        Ok(())
    }
}
