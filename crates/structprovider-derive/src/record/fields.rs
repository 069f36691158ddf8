// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field descriptor table generation.
//!
//! Emits the body of `Record::fields`: one `Field` per struct field in
//! declaration order.
//!
//! | Tag | Generated entry |
//! |-----|-----------------|
//! | `"..."` / none | `Field::new` with typed accessors |
//! | `"-..."` | `Field::opaque` |
//! | `flatten` | `Field::embedded` |
//!
//! Typed accessors go through `Primitive`, so a non-primitive field that is
//! not excluded fails to compile at the `Primitive` bound.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;

use super::parse::{FieldDef, FieldTag, RecordDef};

/// Generate `fn fields() -> Vec<Field<Self>>`.
pub fn generate(def: &RecordDef) -> TokenStream {
    let entries = def.fields.iter().map(entry);

    quote! {
        fn fields() -> ::std::vec::Vec<::structprovider::Field<Self>> {
            ::std::vec![#(#entries),*]
        }
    }
}

fn entry(field: &FieldDef) -> TokenStream {
    let ident = &field.ident;
    // `r#type` is stored and keyed as `type`.
    let name = ident.unraw().to_string();

    match &field.tag {
        FieldTag::Value(tag) => {
            let ty = &field.ty;
            quote! {
                ::structprovider::Field::new(
                    #name,
                    #tag,
                    <#ty as ::structprovider::Primitive>::KIND,
                    |record: &Self| ::structprovider::Primitive::to_value(&record.#ident),
                    |record: &mut Self, value: ::structprovider::Value| {
                        record.#ident = <#ty as ::structprovider::Primitive>::from_value(value)?;
                        ::core::result::Result::Ok(())
                    }
                )
            }
        }
        FieldTag::Excluded(tag) => quote! {
            ::structprovider::Field::opaque(#name, #tag)
        },
        FieldTag::Flatten => quote! {
            ::structprovider::Field::embedded(#name, "")
        }
    }
}
