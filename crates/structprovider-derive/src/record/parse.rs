// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for the Record derive macro.
//!
//! Struct-level `#[record(...)]` is parsed with darling. Field-level
//! `#[tf(...)]` is parsed by hand: it holds either the raw annotation string
//! or the `flatten` marker, neither of which fits darling's key-value model.
//!
//! ```text
//! RecordDef
//! ├── ident, generics
//! ├── meta: Type            (default `()`)
//! ├── error: Type           (default `::structprovider::BoxError`)
//! ├── caps: CapabilitySet   (implications applied)
//! └── fields: Vec<FieldDef>
//!     └── FieldDef
//!         ├── ident, ty
//!         └── tag: FieldTag (Value / Excluded / Flatten)
//! ```
//!
//! The annotation string itself is validated at registration by the runtime
//! tag parser; here only the exclusion sentinel is inspected, so excluded
//! fields need not be primitive.

use darling::FromDeriveInput;
use syn::{Attribute, DeriveInput, Generics, Ident, LitStr, Type};

/// Exclusion sentinel in the name segment.
const SKIP: &str = "-";

/// Struct-level attributes parsed from `#[record(...)]`.
///
/// # Example
///
/// ```rust,ignore
/// #[record(updater, meta = "AwsClient", error = "AwsError")]
/// ```
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(record), supports(struct_named))]
pub struct RecordAttrs {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics.
    pub generics: Generics,

    /// Context type passed to lifecycle methods.
    #[darling(default)]
    pub meta: Option<Type>,

    /// Error type returned by lifecycle methods.
    #[darling(default)]
    pub error: Option<Type>,

    /// Implements `Identifier`.
    #[darling(default)]
    pub identifier: bool,

    /// Implements `Reader`.
    #[darling(default)]
    pub reader: bool,

    /// Implements `Identifier` + `Reader`.
    #[darling(default)]
    pub data_source: bool,

    /// Implements `Identifier` + `Reader` + `Resource`.
    #[darling(default)]
    pub resource: bool,

    /// Implements the full resource contract plus `Updater`.
    #[darling(default)]
    pub updater: bool
}

/// Declared capability traits, with implications applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CapabilitySet {
    pub identifier: bool,
    pub reader:     bool,
    pub resource:   bool,
    pub updater:    bool
}

impl CapabilitySet {
    fn from_attrs(attrs: &RecordAttrs) -> Self {
        let updater = attrs.updater;
        let resource = attrs.resource || updater;
        Self {
            identifier: attrs.identifier || attrs.data_source || resource,
            reader: attrs.reader || attrs.data_source || resource,
            resource,
            updater
        }
    }
}

/// How a field takes part in the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldTag {
    /// Primitive field with its raw annotation string (possibly empty).
    Value(String),

    /// Excluded with `-`; carries the raw annotation string.
    Excluded(String),

    /// `#[tf(flatten)]`: embedded sub-record.
    Flatten
}

/// One struct field.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier.
    pub ident: Ident,

    /// Field type.
    pub ty: Type,

    /// Parsed `#[tf(...)]`.
    pub tag: FieldTag
}

impl FieldDef {
    /// Parse a named field.
    ///
    /// # Errors
    ///
    /// Returns error for unnamed fields, repeated `#[tf]`, or a `#[tf]`
    /// argument that is neither a string literal nor `flatten`.
    pub fn from_field(field: &syn::Field) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("Record fields must be named").with_span(field)
        })?;

        let mut tag = None;
        for attr in field.attrs.iter().filter(|a| a.path().is_ident("tf")) {
            if tag.is_some() {
                return Err(darling::Error::custom("duplicate #[tf] attribute").with_span(attr));
            }
            tag = Some(parse_tf(attr)?);
        }

        Ok(Self {
            ident,
            ty: field.ty.clone(),
            tag: tag.unwrap_or_else(|| FieldTag::Value(String::new()))
        })
    }
}

fn parse_tf(attr: &Attribute) -> darling::Result<FieldTag> {
    if let Ok(lit) = attr.parse_args::<LitStr>() {
        let raw = lit.value();
        let name = raw.split(',').next().unwrap_or_default().trim();
        return Ok(if name == SKIP {
            FieldTag::Excluded(raw)
        } else {
            FieldTag::Value(raw)
        });
    }
    match attr.parse_args::<Ident>() {
        Ok(marker) if marker == "flatten" => Ok(FieldTag::Flatten),
        _ => Err(darling::Error::custom(
            "expected #[tf(\"name,option,...\")] or #[tf(flatten)]"
        )
        .with_span(attr))
    }
}

/// Complete parsed record definition.
#[derive(Debug)]
pub struct RecordDef {
    pub ident:    Ident,
    pub generics: Generics,
    pub meta:     Type,
    pub error:    Type,
    pub caps:     CapabilitySet,
    pub fields:   Vec<FieldDef>
}

impl RecordDef {
    /// Parse from syn's `DeriveInput`.
    ///
    /// # Errors
    ///
    /// - Applied to anything but a struct with named fields
    /// - Unknown or malformed `#[record(...)]` options
    /// - Malformed `#[tf(...)]` on any field
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = RecordAttrs::from_derive_input(input)?;

        let fields = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => named
                    .named
                    .iter()
                    .map(FieldDef::from_field)
                    .collect::<darling::Result<Vec<_>>>()?,
                _ => {
                    return Err(darling::Error::custom("Record requires named fields")
                        .with_span(&input.ident));
                }
            },
            _ => {
                return Err(darling::Error::custom("Record can only be derived for structs")
                    .with_span(&input.ident));
            }
        };

        let caps = CapabilitySet::from_attrs(&attrs);
        let RecordAttrs {
            ident,
            generics,
            meta,
            error,
            ..
        } = attrs;

        Ok(Self {
            ident,
            generics,
            meta: meta.unwrap_or_else(|| syn::parse_quote!(())),
            error: error.unwrap_or_else(|| syn::parse_quote!(::structprovider::BoxError)),
            caps,
            fields
        })
    }
}
