// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Lifecycle adapter.
//!
//! [`StructResource`] bridges host state and a record type. Every operation
//! round-trips through [`get`](StructResource::get) (state → fresh record) and
//! [`set`](StructResource::set) (record → state):
//!
//! ```text
//! create:  get → Create → set → Read → set
//! read:    get → Read → set              (no-op without Reader)
//! update:  get → Update → set → Read → set
//! delete:  get → Delete → set_id("")
//! ```
//!
//! The second `set` after Create and Update captures values only the backing
//! system knows (server-assigned attributes, eventually consistent fields).
//!
//! Errors from lifecycle methods and state writes abort the operation and are
//! returned as-is. The adapter never retries and holds no locks; the host
//! serializes operations per instance.

use std::fmt;

use tracing::{debug, warn};

use crate::{
    builder::{FieldMapping, build_schema},
    error::{ConfigFault, OperationError, Result},
    field::Field,
    record::{Capabilities, Capability, Operation, Record},
    schema::SchemaMap,
    state::State
};

/// Schema, field mapping and capabilities of one record type.
///
/// Built once at registration; read-only afterwards and shared by every
/// instance operation of that type.
pub struct StructResource<R: Record> {
    fields:       Vec<Field<R>>,
    schema:       SchemaMap,
    mapping:      FieldMapping,
    capabilities: Capabilities
}

impl<R: Record> StructResource<R> {
    /// Derive the schema for `R`.
    ///
    /// # Errors
    ///
    /// Any [`ConfigFault`] raised by the schema builder.
    pub fn new() -> Result<Self, ConfigFault> {
        let fields = R::fields();
        let (schema, mapping) = build_schema::<R>(&fields)?;
        Ok(Self {
            fields,
            schema,
            mapping,
            capabilities: R::capabilities()
        })
    }

    /// Declarative schema.
    pub const fn schema(&self) -> &SchemaMap {
        &self.schema
    }

    /// External key to internal field mapping.
    pub const fn mapping(&self) -> &FieldMapping {
        &self.mapping
    }

    /// Capabilities of `R`.
    pub const fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Build a zero-valued record and fill it from state.
    ///
    /// Keys absent from state leave the field at its default.
    ///
    /// # Errors
    ///
    /// [`OperationError::ValueKind`] when a state value does not fit its
    /// field.
    pub fn get<S: State + ?Sized>(&self, state: &S) -> Result<R> {
        let mut record = R::default();

        for (key, binding) in self.mapping.iter() {
            let Some(raw) = state.get_ok(key) else {
                continue;
            };
            let field = &self.fields[binding.index];
            field
                .assign(&mut record, raw)
                .map_err(|found| OperationError::ValueKind {
                    record:   R::NAME,
                    field:    binding.ident,
                    key:      key.to_string(),
                    expected: field.kind().unwrap_or(found.kind()),
                    found:    found.kind()
                })?;
        }

        Ok(record)
    }

    /// Write the record's identity and every mapped field into state.
    ///
    /// # Errors
    ///
    /// The first state write failure, unchanged.
    pub fn set<S: State + ?Sized>(&self, record: &R, state: &mut S) -> Result<()> {
        if let Some(id) = record.identity() {
            state.set_id(&id);
        }

        for (key, binding) in self.mapping.iter() {
            if let Some(value) = self.fields[binding.index].extract(record) {
                state.set(key, value).map_err(OperationError::State)?;
            }
        }

        Ok(())
    }

    /// Create the managed object, then refresh it.
    ///
    /// # Errors
    ///
    /// Lifecycle or state failures, unchanged. If Create fails nothing is
    /// written.
    pub async fn create<S: State + ?Sized>(&self, state: &mut S, meta: &R::Meta) -> Result<()> {
        self.require(Capability::Resource)?;
        debug!(record = R::NAME, "create");

        let mut record = self.get(state)?;
        self.call(&mut record, Operation::Create, meta).await?;
        self.set(&record, state)?;
        self.call(&mut record, Operation::Read, meta).await?;
        self.set(&record, state)
    }

    /// Refresh the managed object.
    ///
    /// Without the Reader capability this is a no-op.
    ///
    /// # Errors
    ///
    /// Lifecycle or state failures, unchanged.
    pub async fn read<S: State + ?Sized>(&self, state: &mut S, meta: &R::Meta) -> Result<()> {
        let mut record = self.get(state)?;
        if !self.capabilities.reader {
            warn!(record = R::NAME, "read skipped: type does not implement Reader");
            return Ok(());
        }
        debug!(record = R::NAME, id = state.id(), "read");

        self.call(&mut record, Operation::Read, meta).await?;
        self.set(&record, state)
    }

    /// Update the managed object in place, then refresh it.
    ///
    /// # Errors
    ///
    /// Lifecycle or state failures, unchanged.
    pub async fn update<S: State + ?Sized>(&self, state: &mut S, meta: &R::Meta) -> Result<()> {
        self.require(Capability::Updater)?;
        debug!(record = R::NAME, id = state.id(), "update");

        let mut record = self.get(state)?;
        self.call(&mut record, Operation::Update, meta).await?;
        self.set(&record, state)?;
        self.call(&mut record, Operation::Read, meta).await?;
        self.set(&record, state)
    }

    /// Destroy the managed object and clear the identity.
    ///
    /// # Errors
    ///
    /// Lifecycle failures, unchanged; the identity is then left as it was.
    pub async fn delete<S: State + ?Sized>(&self, state: &mut S, meta: &R::Meta) -> Result<()> {
        self.require(Capability::Resource)?;
        debug!(record = R::NAME, id = state.id(), "delete");

        let mut record = self.get(state)?;
        self.call(&mut record, Operation::Delete, meta).await?;
        state.set_id("");
        Ok(())
    }

    /// Dispatch by operation.
    ///
    /// # Errors
    ///
    /// See the individual operations.
    pub async fn run<S: State + ?Sized>(
        &self,
        operation: Operation,
        state: &mut S,
        meta: &R::Meta
    ) -> Result<()> {
        match operation {
            Operation::Create => self.create(state, meta).await,
            Operation::Read => self.read(state, meta).await,
            Operation::Update => self.update(state, meta).await,
            Operation::Delete => self.delete(state, meta).await
        }
    }

    const fn require(&self, capability: Capability) -> Result<()> {
        if self.capabilities.has(capability) {
            Ok(())
        } else {
            Err(OperationError::Unsupported {
                record: R::NAME,
                capability
            })
        }
    }

    async fn call(&self, record: &mut R, operation: Operation, meta: &R::Meta) -> Result<()> {
        match record.invoke(operation, meta).await {
            Some(result) => result.map_err(|e| OperationError::Lifecycle(e.into())),
            None => Err(OperationError::Unsupported {
                record:     R::NAME,
                capability: operation.capability()
            })
        }
    }
}

impl<R: Record> fmt::Debug for StructResource<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructResource")
            .field("record", &R::NAME)
            .field("schema", &self.schema)
            .field("capabilities", &self.capabilities)
            .finish_non_exhaustive()
    }
}
