// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Schema construction.
//!
//! One pass over a record's field table produces both the [`SchemaMap`]
//! and the [`FieldMapping`]:
//!
//! ```text
//! Field { ident, tag, access }
//!   │
//!   ├── embedded?            → ConfigFault::EmbeddedField
//!   ├── parse_tag(tag)
//!   │     ├── "-"            → skipped
//!   │     ├── ""             → field_name_to_schema_name(ident)
//!   │     └── override       → used as is
//!   ├── unknown options?     → ConfigFault::UnknownTagOption
//!   ├── schema_type(kind)    → ConfigFault::UnsupportedKind
//!   └── key already taken?   → ConfigFault::DuplicateKey
//! ```

use std::collections::{BTreeMap, btree_map::Entry};

use tracing::trace;

use crate::{
    error::ConfigFault,
    field::{Field, FieldAccess},
    naming::field_name_to_schema_name,
    record::Record,
    schema::{Schema, SchemaMap, schema_type},
    tag::{TagName, parse_tag}
};

/// Where an external key lives inside the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    /// Internal field identifier.
    pub ident: &'static str,
    /// Position in the record's field table.
    pub index: usize
}

/// External key to internal field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMapping {
    bindings: BTreeMap<String, Binding>
}

impl FieldMapping {
    /// Internal identifier for an external key.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.bindings.get(key).map(|b| b.ident)
    }

    /// Iterate `(external key, binding)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Binding)> {
        self.bindings.iter().map(|(key, binding)| (key.as_str(), *binding))
    }

    /// Number of mapped fields.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if nothing is mapped.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Build the schema and field mapping for `R` from its field table.
///
/// # Errors
///
/// Any [`ConfigFault`] listed in the module docs.
pub fn build_schema<R: Record>(fields: &[Field<R>]) -> Result<(SchemaMap, FieldMapping), ConfigFault> {
    let mut schema = SchemaMap::new();
    let mut mapping = FieldMapping::default();

    for (index, field) in fields.iter().enumerate() {
        let ident = field.ident();
        if field.is_embedded() {
            return Err(ConfigFault::EmbeddedField {
                record: R::NAME,
                field:  ident
            });
        }

        let tag = parse_tag(field.tag());
        let key = match tag.name {
            TagName::Skip => {
                trace!(record = R::NAME, field = ident, "field excluded");
                continue;
            }
            TagName::Derive => field_name_to_schema_name(ident),
            TagName::Override(name) => name.to_string()
        };

        if let Some(option) = tag.options.unknown.first() {
            return Err(ConfigFault::UnknownTagOption {
                record: R::NAME,
                field:  ident,
                option: option.clone()
            });
        }

        let kind = match field.access() {
            FieldAccess::Value {
                kind, ..
            } => *kind,
            _ => {
                return Err(ConfigFault::OpaqueField {
                    record: R::NAME,
                    field:  ident
                });
            }
        };
        let value_type = schema_type(kind).map_err(|kind| ConfigFault::UnsupportedKind {
            record: R::NAME,
            field: ident,
            kind
        })?;

        let entry = Schema {
            value_type,
            computed: tag.options.computed,
            optional: tag.options.optional,
            required: tag.options.required,
            force_new: tag.options.force_new
        };

        match mapping.bindings.entry(key.clone()) {
            Entry::Occupied(taken) => {
                return Err(ConfigFault::DuplicateKey {
                    record: R::NAME,
                    key,
                    first: taken.get().ident,
                    second: ident
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(Binding {
                    ident,
                    index
                });
            }
        }
        trace!(record = R::NAME, field = ident, key = %key, ?entry, "field mapped");
        schema.insert(key, entry);
    }

    Ok((schema, mapping))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        record::{Capabilities, Operation},
        schema::ValueType,
        value::{Kind, Primitive, Value}
    };

    macro_rules! test_record {
        ($name:ident { $($field:ident : $ty:ty = $tag:literal),* $(,)? }) => {
            #[derive(Default)]
            #[allow(non_snake_case)]
            struct $name {
                $($field: $ty),*
            }

            #[async_trait::async_trait]
            impl Record for $name {
                type Meta = ();
                type Error = crate::error::BoxError;

                const NAME: &'static str = stringify!($name);

                fn fields() -> Vec<Field<Self>> {
                    vec![$(
                        Field::new(
                            stringify!($field),
                            $tag,
                            <$ty as Primitive>::KIND,
                            |r: &Self| r.$field.to_value(),
                            |r: &mut Self, v: Value| {
                                r.$field = <$ty as Primitive>::from_value(v)?;
                                Ok(())
                            }
                        )
                    ),*]
                }

                fn capabilities() -> Capabilities {
                    Capabilities::NONE
                }

                fn identity(&self) -> Option<String> {
                    None
                }

                async fn invoke(
                    &mut self,
                    _operation: Operation,
                    _meta: &()
                ) -> Option<Result<(), Self::Error>> {
                    None
                }
            }
        };
    }

    test_record!(TestResource {
        Name: String = ",optional,computed",
        Region: String = ",computed",
        Bucket: String = ",required,forcenew",
        ForceDestroy: bool = ",optional"
    });

    test_record!(Renamed {
        Name: String = "zone_name,computed",
        Hidden: String = "-",
        Count: i64 = "-"
    });

    test_record!(WithInt {
        Name: String = "",
        Count: i64 = ",optional"
    });

    test_record!(Colliding {
        NameSuffix: String = ",computed",
        Suffix: String = "name_suffix"
    });

    test_record!(Sensitive {
        Token: String = ",optional,sensitive"
    });

    fn build<R: Record>() -> Result<(SchemaMap, FieldMapping), ConfigFault> {
        build_schema::<R>(&R::fields())
    }

    #[test]
    fn builds_flat_resource_schema() {
        let (schema, mapping) = build::<TestResource>().expect("schema");
        let expected = SchemaMap::from([
            (
                "name".to_string(),
                Schema::new(ValueType::String).optional().computed()
            ),
            ("region".to_string(), Schema::new(ValueType::String).computed()),
            (
                "bucket".to_string(),
                Schema::new(ValueType::String).required().force_new()
            ),
            (
                "force_destroy".to_string(),
                Schema::new(ValueType::Bool).optional()
            )
        ]);
        assert_eq!(schema, expected);
        assert_eq!(mapping.len(), 4);
        assert_eq!(mapping.get("force_destroy"), Some("ForceDestroy"));
        assert_eq!(mapping.get("bucket"), Some("Bucket"));
    }

    #[test]
    fn overrides_and_skips() {
        let (schema, mapping) = build::<Renamed>().expect("schema");
        assert_eq!(schema.len(), 1);
        assert_eq!(mapping.get("zone_name"), Some("Name"));
        assert!(mapping.get("hidden").is_none());
        assert!(schema.get("count").is_none());
    }

    #[test]
    fn unsupported_kind_is_a_fault() {
        assert_eq!(
            build::<WithInt>().unwrap_err(),
            ConfigFault::UnsupportedKind {
                record: "WithInt",
                field:  "Count",
                kind:   Kind::Int
            }
        );
    }

    #[test]
    fn duplicate_key_is_a_fault() {
        assert_eq!(
            build::<Colliding>().unwrap_err(),
            ConfigFault::DuplicateKey {
                record: "Colliding",
                key:    "name_suffix".to_string(),
                first:  "NameSuffix",
                second: "Suffix"
            }
        );
    }

    #[test]
    fn unknown_option_is_a_fault() {
        assert_eq!(
            build::<Sensitive>().unwrap_err(),
            ConfigFault::UnknownTagOption {
                record: "Sensitive",
                field:  "Token",
                option: "sensitive".to_string()
            }
        );
    }

    #[test]
    fn embedded_field_is_a_fault() {
        let mut fields = TestResource::fields();
        fields.push(Field::embedded("Inner", ""));
        assert_eq!(
            build_schema::<TestResource>(&fields).unwrap_err(),
            ConfigFault::EmbeddedField {
                record: "TestResource",
                field:  "Inner"
            }
        );
    }

    #[test]
    fn opaque_field_must_be_skipped() {
        let mut fields = TestResource::fields();
        fields.push(Field::opaque("Client", "-"));
        assert!(build_schema::<TestResource>(&fields).is_ok());

        fields.push(Field::opaque("Cache", ""));
        assert_eq!(
            build_schema::<TestResource>(&fields).unwrap_err(),
            ConfigFault::OpaqueField {
                record: "TestResource",
                field:  "Cache"
            }
        );
    }

    #[test]
    fn schema_keys_are_unique_and_complete() {
        let (schema, mapping) = build::<TestResource>().expect("schema");
        let fields = TestResource::fields();
        assert_eq!(schema.len(), fields.len());
        for (key, binding) in mapping.iter() {
            assert!(schema.contains_key(key));
            assert_eq!(fields[binding.index].ident(), binding.ident);
        }
    }
}
