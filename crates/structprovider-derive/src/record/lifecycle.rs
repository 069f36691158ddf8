// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Capability glue generation.
//!
//! Emits `capabilities`, `identity` and `invoke`. Each declared capability
//! becomes a fully qualified call into its trait, so declaring a capability
//! without implementing the trait is a compile error:
//!
//! ```text
//! Operation::Create → <Self as Resource>::create(self, meta)
//! Operation::Read   → <Self as Reader>::read(self, meta)
//! Operation::Update → <Self as Updater>::update(self, meta)
//! Operation::Delete → <Self as Resource>::delete(self, meta)
//! ```
//!
//! Undeclared operations resolve to `None`.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::{CapabilitySet, RecordDef};

/// Generate `capabilities`, `identity` and `invoke`.
pub fn generate(def: &RecordDef) -> TokenStream {
    let capabilities = capabilities(def.caps);
    let identity = identity(def.caps);
    let invoke = invoke(def.caps);

    quote! {
        #capabilities
        #identity
        #invoke
    }
}

fn capabilities(caps: CapabilitySet) -> TokenStream {
    let CapabilitySet {
        identifier,
        reader,
        resource,
        updater
    } = caps;

    quote! {
        fn capabilities() -> ::structprovider::Capabilities {
            ::structprovider::Capabilities {
                identifier: #identifier,
                reader: #reader,
                resource: #resource,
                updater: #updater
            }
        }
    }
}

fn identity(caps: CapabilitySet) -> TokenStream {
    let body = if caps.identifier {
        quote! {
            ::core::option::Option::Some(<Self as ::structprovider::Identifier>::id(self))
        }
    } else {
        quote! { ::core::option::Option::None }
    };

    quote! {
        fn identity(&self) -> ::core::option::Option<::std::string::String> {
            #body
        }
    }
}

fn invoke(caps: CapabilitySet) -> TokenStream {
    let mut arms = Vec::new();
    if caps.resource {
        arms.push(quote! {
            ::structprovider::Operation::Create => ::core::option::Option::Some(
                <Self as ::structprovider::Resource>::create(self, meta).await
            ),
        });
    }
    if caps.reader {
        arms.push(quote! {
            ::structprovider::Operation::Read => ::core::option::Option::Some(
                <Self as ::structprovider::Reader>::read(self, meta).await
            ),
        });
    }
    if caps.updater {
        arms.push(quote! {
            ::structprovider::Operation::Update => ::core::option::Option::Some(
                <Self as ::structprovider::Updater>::update(self, meta).await
            ),
        });
    }
    if caps.resource {
        arms.push(quote! {
            ::structprovider::Operation::Delete => ::core::option::Option::Some(
                <Self as ::structprovider::Resource>::delete(self, meta).await
            ),
        });
    }
    if !(caps.resource && caps.reader && caps.updater) {
        arms.push(quote! {
            _ => ::core::option::Option::None,
        });
    }

    quote! {
        async fn invoke(
            &mut self,
            operation: ::structprovider::Operation,
            meta: &Self::Meta
        ) -> ::core::option::Option<::core::result::Result<(), Self::Error>> {
            let _ = &meta;
            match operation {
                #(#arms)*
            }
        }
    }
}
