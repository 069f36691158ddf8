// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! Procedural macro behind `structprovider`.
//!
//! Use the `structprovider` crate instead; it re-exports [`macro@Record`]
//! together with the runtime the generated code refers to.

mod record;

use proc_macro::TokenStream;

/// Derive the `Record` glue for a flat struct.
///
/// # Struct attributes
///
/// `#[record(...)]`, all optional:
///
/// | Option | Meaning |
/// |--------|---------|
/// | `meta = "Type"` | Context passed to lifecycle methods (default `()`) |
/// | `error = "Type"` | Lifecycle error (default `structprovider::BoxError`) |
/// | `identifier` | Implements `Identifier` |
/// | `reader` | Implements `Reader` |
/// | `data_source` | `identifier` + `reader` |
/// | `resource` | `data_source` + `Resource` |
/// | `updater` | `resource` + `Updater` |
///
/// # Field attributes
///
/// - `#[tf("name,option,...")]`: annotation string. An empty name derives
///   the key from the field identifier; `-` excludes the field.
/// - `#[tf(flatten)]`: embedded sub-record. Rejected at registration.
/// - no attribute: same as `#[tf("")]`.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Record, Default)]
/// #[record(updater, meta = "AwsClient", error = "AwsError")]
/// pub struct AthenaDatabase {
///     #[tf(",required,forcenew")]
///     pub name: String,
///
///     #[tf(",optional")]
///     pub force_destroy: bool
/// }
/// ```
#[proc_macro_derive(Record, attributes(record, tf))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive(input)
}
