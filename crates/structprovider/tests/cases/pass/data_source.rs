// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Data source with a custom context and error type.

use structprovider::{Identifier, Reader, Record, async_trait, new_data_source};

pub struct Lookup {
    pub region: String
}

#[derive(Debug)]
pub struct LookupError;

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("lookup failed")
    }
}

impl std::error::Error for LookupError {}

#[derive(Debug, Default, Record)]
#[record(data_source, meta = "Lookup", error = "LookupError")]
pub struct Zone {
    #[tf(",optional,computed")]
    pub name: String,

    #[tf(",computed")]
    pub region: String
}

impl Identifier for Zone {
    fn id(&self) -> String {
        self.name.clone()
    }
}

#[async_trait]
impl Reader for Zone {
    async fn read(&mut self, lookup: &Lookup) -> Result<(), LookupError> {
        self.region.clone_from(&lookup.region);
        Ok(())
    }
}

fn main() {
    let descriptor = new_data_source::<Zone>().unwrap();
    assert_eq!(descriptor.schema.len(), 2);
}
