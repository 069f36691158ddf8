// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Full resource with in-place update and default context.

use structprovider::{
    BoxError, Identifier, Reader, Record, Resource, Updater, async_trait, new_resource
};

#[derive(Debug, Default, Record)]
#[record(updater)]
pub struct Bucket {
    #[tf(",required,forcenew")]
    pub name: String,

    #[tf("versioned,optional")]
    pub versioning: bool
}

impl Identifier for Bucket {
    fn id(&self) -> String {
        self.name.clone()
    }
}

#[async_trait]
impl Reader for Bucket {
    async fn read(&mut self, _meta: &()) -> Result<(), BoxError> {
        Ok(())
    }
}

#[async_trait]
impl Resource for Bucket {
    async fn create(&mut self, _meta: &()) -> Result<(), BoxError> {
        Ok(())
    }

    async fn delete(&mut self, _meta: &()) -> Result<(), BoxError> {
        Ok(())
    }
}

#[async_trait]
impl Updater for Bucket {
    async fn update(&mut self, _meta: &()) -> Result<(), BoxError> {
        Ok(())
    }
}

fn main() {
    let descriptor = new_resource::<Bucket>().unwrap();
    assert!(descriptor.update.is_some());
    assert!(descriptor.schema.contains_key("versioned"));
}
