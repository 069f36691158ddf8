// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Named registry of descriptors.
//!
//! A host looks resources and data sources up by their external type name
//! (`aws_athena_database`, `aws_availability_zone`). Names are unique per
//! kind; registering twice is a [`ConfigFault`].

use std::collections::{BTreeMap, btree_map::Entry};

use tracing::debug;

use crate::{
    error::ConfigFault,
    record::Record,
    registration::{ResourceDescriptor, new_data_source, new_resource}
};

/// Resources and data sources sharing one metadata type.
pub struct Provider<M: ?Sized> {
    resources:    BTreeMap<String, ResourceDescriptor<M>>,
    data_sources: BTreeMap<String, ResourceDescriptor<M>>
}

impl<M: ?Sized> Default for Provider<M> {
    fn default() -> Self {
        Self {
            resources:    BTreeMap::new(),
            data_sources: BTreeMap::new()
        }
    }
}

impl<M: ?Sized + Send + Sync + 'static> Provider<M> {
    /// Empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `R` as a resource under `name`.
    ///
    /// # Errors
    ///
    /// Any fault from [`new_resource`], or [`ConfigFault::DuplicateName`].
    pub fn resource<R>(&mut self, name: impl Into<String>) -> Result<&mut Self, ConfigFault>
    where
        R: Record<Meta = M>
    {
        let descriptor = new_resource::<R>()?;
        insert(&mut self.resources, "resource", name.into(), descriptor)?;
        Ok(self)
    }

    /// Register `R` as a data source under `name`.
    ///
    /// # Errors
    ///
    /// Any fault from [`new_data_source`], or [`ConfigFault::DuplicateName`].
    pub fn data_source<R>(&mut self, name: impl Into<String>) -> Result<&mut Self, ConfigFault>
    where
        R: Record<Meta = M>
    {
        let descriptor = new_data_source::<R>()?;
        insert(&mut self.data_sources, "data source", name.into(), descriptor)?;
        Ok(self)
    }
}

impl<M: ?Sized> Provider<M> {
    /// Resource descriptor by name.
    pub fn get_resource(&self, name: &str) -> Option<&ResourceDescriptor<M>> {
        self.resources.get(name)
    }

    /// Data source descriptor by name.
    pub fn get_data_source(&self, name: &str) -> Option<&ResourceDescriptor<M>> {
        self.data_sources.get(name)
    }

    /// Registered resources, ordered by name.
    pub fn resources(&self) -> impl Iterator<Item = (&str, &ResourceDescriptor<M>)> {
        self.resources.iter().map(|(name, d)| (name.as_str(), d))
    }

    /// Registered data sources, ordered by name.
    pub fn data_sources(&self) -> impl Iterator<Item = (&str, &ResourceDescriptor<M>)> {
        self.data_sources.iter().map(|(name, d)| (name.as_str(), d))
    }
}

impl<M: ?Sized> std::fmt::Debug for Provider<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provider")
            .field("resources", &self.resources.keys().collect::<Vec<_>>())
            .field("data_sources", &self.data_sources.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn insert<M: ?Sized>(
    map: &mut BTreeMap<String, ResourceDescriptor<M>>,
    kind: &'static str,
    name: String,
    descriptor: ResourceDescriptor<M>
) -> Result<(), ConfigFault> {
    match map.entry(name) {
        Entry::Occupied(taken) => Err(ConfigFault::DuplicateName {
            kind,
            name: taken.key().clone()
        }),
        Entry::Vacant(slot) => {
            debug!(kind, name = slot.key().as_str(), "descriptor added");
            slot.insert(descriptor);
            Ok(())
        }
    }
}
