// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Record derive macro implementation.
//!
//! # Architecture
//!
//! ```text
//! record.rs (orchestrator)
//! │
//! ├── parse.rs      → RecordDef, FieldDef, CapabilitySet
//! ├── fields.rs     → Record::fields (field descriptor table)
//! └── lifecycle.rs  → Record::capabilities, identity, invoke
//! ```
//!
//! # Generated Code
//!
//! For a record like:
//!
//! ```rust,ignore
//! #[derive(Record, Default)]
//! #[record(data_source, meta = "AwsClient", error = "AwsError")]
//! pub struct AvailabilityZone {
//!     #[tf(",optional,computed")]
//!     pub name: String
//! }
//! ```
//!
//! the macro emits a single `impl ::structprovider::Record for
//! AvailabilityZone`, run through `async_trait`. Paths are absolute, so the
//! user crate only needs the `structprovider` dependency.

mod fields;
mod lifecycle;
mod parse;

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use self::parse::RecordDef;

/// Main entry point for the Record derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match RecordDef::from_derive_input(&input) {
        Ok(record) => generate(&record).into(),
        Err(err) => err.write_errors().into()
    }
}

fn generate(def: &RecordDef) -> proc_macro2::TokenStream {
    let ident = &def.ident;
    let name = ident.to_string();
    let meta = &def.meta;
    let error = &def.error;
    let (impl_generics, ty_generics, where_clause) = def.generics.split_for_impl();

    let fields = fields::generate(def);
    let lifecycle = lifecycle::generate(def);

    quote! {
        #[::structprovider::async_trait]
        impl #impl_generics ::structprovider::Record for #ident #ty_generics #where_clause {
            type Meta = #meta;
            type Error = #error;

            const NAME: &'static str = #name;

            #fields
            #lifecycle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_single_record_impl() {
        let input: DeriveInput = syn::parse_quote! {
            #[record(resource, meta = "Client", error = "Failure")]
            pub struct Bucket {
                #[tf(",required,forcenew")]
                pub name: String
            }
        };
        let def = RecordDef::from_derive_input(&input).expect("parse");
        let out = generate(&def).to_string();

        assert!(out.starts_with("# [:: structprovider :: async_trait]"));
        assert!(out.contains("impl :: structprovider :: Record for Bucket"));
        assert!(out.contains("type Meta = Client ;"));
        assert!(out.contains("type Error = Failure ;"));
        assert!(out.contains("const NAME : & 'static str = \"Bucket\" ;"));
    }

    #[test]
    fn keeps_generics() {
        let input: DeriveInput = syn::parse_quote! {
            struct Wrapper<T: Default + Send + Sync + 'static> {
                #[tf("-")]
                inner: T
            }
        };
        let def = RecordDef::from_derive_input(&input).expect("parse");
        let out = generate(&def).to_string();

        assert!(out.contains("impl < T : Default + Send + Sync + 'static > :: structprovider :: Record for Wrapper < T >"));
    }
}
