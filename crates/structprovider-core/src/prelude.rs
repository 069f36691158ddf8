// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use structprovider_core::prelude::*;
//! ```

pub use crate::{
    Capabilities, ConfigFault, Identifier, MemoryState, OperationError, Provider, Reader, Record,
    Resource, ResourceDescriptor, Schema, SchemaMap, State, Updater, ValueType, async_trait,
    new_data_source, new_resource
};
