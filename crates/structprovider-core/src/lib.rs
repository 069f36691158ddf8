// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core traits and types for structprovider.
//!
//! Turns a flat record type into a declarative resource schema and drives
//! its lifecycle methods against host-held state. `structprovider-derive`
//! generates the [`Record`] glue; everything here also works with a
//! hand-written implementation.
//!
//! # Overview
//!
//! ```text
//! Record::fields()
//!       │
//!       ▼
//! ┌──────────────┐   parse_tag  field_name_to_schema_name  schema_type
//! │ build_schema │ ─────────────────────────────────────────────────────▶ SchemaMap
//! └──────────────┘                                                      FieldMapping
//!       │
//!       ▼
//! ┌────────────────┐      get / set      ┌────────────┐
//! │ StructResource │ ◀─────────────────▶ │ dyn State  │
//! └────────────────┘                     └────────────┘
//!       │ invoke(Operation, &Meta)
//!       ▼
//! Identifier / Reader / Resource / Updater
//! ```
//!
//! - [`new_resource`], [`new_data_source`]: registration into a
//!   [`ResourceDescriptor`]
//! - [`Provider`]: named registry of descriptors
//! - [`MemoryState`]: in-process [`State`]
//! - [`prelude`]: convenient re-exports

#![warn(missing_docs)]
#![warn(clippy::all)]

mod adapter;
mod builder;
mod error;
mod field;
mod naming;
mod provider;
mod record;
mod registration;
mod schema;
mod state;
mod value;

pub mod prelude;
pub mod tag;

/// Re-export async_trait for generated code.
pub use async_trait::async_trait;
/// Re-export of the boxed future type used by handlers.
pub use futures::future::BoxFuture;

pub use crate::{
    adapter::StructResource,
    builder::{Binding, FieldMapping, build_schema},
    error::{BoxError, ConfigFault, OperationError, Result},
    field::{Field, FieldAccess, Getter, Setter},
    naming::field_name_to_schema_name,
    provider::Provider,
    record::{Capabilities, Capability, Identifier, Operation, Reader, Record, Resource, Updater},
    registration::{Handler, ResourceDescriptor, new_data_source, new_resource},
    schema::{Schema, SchemaMap, ValueType, schema_type},
    state::{MemoryState, State, StateError},
    tag::{Tag, TagName, TagOptions, parse_tag},
    value::{Kind, Primitive, Value}
};
