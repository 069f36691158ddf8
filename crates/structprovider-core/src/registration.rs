// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Registration entry points.
//!
//! [`new_resource`] and [`new_data_source`] build a [`ResourceDescriptor`]
//! for a record type: its schema plus one handler per lifecycle operation
//! the host may invoke. All structural checks happen here, so a misdeclared
//! type is rejected before the host starts serving.
//!
//! ```text
//!                 ┌──────────────┬─────────────────┐
//!                 │ new_resource │ new_data_source │
//! ┌───────────────┼──────────────┼─────────────────┤
//! │ create/delete │      ✓       │        -        │
//! │ read          │      ✓       │        ✓        │
//! │ update        │  if Updater  │        -        │
//! └───────────────┴──────────────┴─────────────────┘
//! ```

use std::{fmt, sync::Arc};

use futures::future::BoxFuture;
use tracing::info;

use crate::{
    adapter::StructResource,
    error::{ConfigFault, OperationError},
    record::{Capabilities, Record},
    schema::SchemaMap,
    state::State
};

/// Lifecycle operation bound to a record type.
///
/// Receives the instance state and the provider metadata, and completes
/// when the operation has finished.
pub type Handler<M> = Arc<
    dyn for<'a> Fn(&'a mut dyn State, &'a M) -> BoxFuture<'a, Result<(), OperationError>>
        + Send
        + Sync
>;

/// Schema plus lifecycle handlers, as handed to the host.
pub struct ResourceDescriptor<M: ?Sized> {
    /// Declarative schema.
    pub schema: SchemaMap,

    /// Create handler. `None` for data sources.
    pub create: Option<Handler<M>>,

    /// Read handler.
    pub read: Handler<M>,

    /// Update handler. `None` unless the type implements `Updater`.
    pub update: Option<Handler<M>>,

    /// Delete handler. `None` for data sources.
    pub delete: Option<Handler<M>>
}

impl<M: ?Sized> ResourceDescriptor<M> {
    /// Check if only the read handler is wired.
    pub const fn is_data_source(&self) -> bool {
        self.create.is_none() && self.update.is_none() && self.delete.is_none()
    }

    /// Check if the host must replace instead of update on change.
    pub const fn requires_replace(&self) -> bool {
        self.create.is_some() && self.update.is_none()
    }
}

impl<M: ?Sized> fmt::Debug for ResourceDescriptor<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceDescriptor")
            .field("schema", &self.schema)
            .field("create", &self.create.is_some())
            .field("read", &true)
            .field("update", &self.update.is_some())
            .field("delete", &self.delete.is_some())
            .finish()
    }
}

/// Pin the higher-ranked signature on a handler closure.
fn handler<M, F>(f: F) -> Handler<M>
where
    M: ?Sized + 'static,
    F: for<'a> Fn(&'a mut dyn State, &'a M) -> BoxFuture<'a, Result<(), OperationError>>
        + Send
        + Sync
        + 'static
{
    Arc::new(f)
}

fn read_handler<R: Record>(adapter: &Arc<StructResource<R>>) -> Handler<R::Meta> {
    let adapter = Arc::clone(adapter);
    handler(move |state: &mut dyn State, meta: &R::Meta| {
        let adapter = Arc::clone(&adapter);
        Box::pin(async move { adapter.read(state, meta).await })
    })
}

fn check<R: Record>(required: &'static str, preset: Capabilities) -> Result<(), ConfigFault> {
    match R::capabilities().missing(preset) {
        None => Ok(()),
        Some(missing) => Err(ConfigFault::MissingCapability {
            record: R::NAME,
            required,
            missing
        })
    }
}

/// Register `R` as a fully managed resource.
///
/// `R` must implement `Identifier`, `Reader` and `Resource`. The update
/// handler is wired only when `R` also implements `Updater`; otherwise the
/// host treats every change as replace.
///
/// # Errors
///
/// [`ConfigFault::MissingCapability`] or any schema builder fault.
pub fn new_resource<R: Record>() -> Result<ResourceDescriptor<R::Meta>, ConfigFault> {
    check::<R>("Resource", Capabilities::RESOURCE)?;
    let adapter = Arc::new(StructResource::<R>::new()?);

    let create = {
        let adapter = Arc::clone(&adapter);
        handler(move |state: &mut dyn State, meta: &R::Meta| {
            let adapter = Arc::clone(&adapter);
            Box::pin(async move { adapter.create(state, meta).await })
        })
    };
    let delete = {
        let adapter = Arc::clone(&adapter);
        handler(move |state: &mut dyn State, meta: &R::Meta| {
            let adapter = Arc::clone(&adapter);
            Box::pin(async move { adapter.delete(state, meta).await })
        })
    };
    let update = adapter.capabilities().is_updater().then(|| {
        let adapter = Arc::clone(&adapter);
        handler(move |state: &mut dyn State, meta: &R::Meta| {
            let adapter = Arc::clone(&adapter);
            Box::pin(async move { adapter.update(state, meta).await })
        })
    });

    info!(
        record = R::NAME,
        keys = adapter.schema().len(),
        updatable = update.is_some(),
        "resource registered"
    );

    Ok(ResourceDescriptor {
        schema: adapter.schema().clone(),
        create: Some(create),
        read: read_handler(&adapter),
        update,
        delete: Some(delete)
    })
}

/// Register `R` as a read-only data source.
///
/// `R` must implement `Identifier` and `Reader`. Only the read handler is
/// wired, even if `R` also implements `Resource`.
///
/// # Errors
///
/// [`ConfigFault::MissingCapability`] or any schema builder fault.
pub fn new_data_source<R: Record>() -> Result<ResourceDescriptor<R::Meta>, ConfigFault> {
    check::<R>("DataSource", Capabilities::DATA_SOURCE)?;
    let adapter = Arc::new(StructResource::<R>::new()?);

    info!(
        record = R::NAME,
        keys = adapter.schema().len(),
        "data source registered"
    );

    Ok(ResourceDescriptor {
        schema: adapter.schema().clone(),
        create: None,
        read:   read_handler(&adapter),
        update: None,
        delete: None
    })
}
