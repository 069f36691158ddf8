// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! End-to-end tests for `#[derive(Record)]` through registration.

use std::sync::Mutex;

use structprovider::{
    Capabilities, ConfigFault, Identifier, Kind, MemoryState, Operation, Reader, Record, Resource,
    Schema, SchemaMap, State, StructResource, Updater, Value, ValueType, async_trait,
    new_data_source, new_resource
};

#[derive(Debug, Default, Record)]
#[record(data_source, meta = "str")]
struct Zone {
    #[tf(",optional,computed")]
    name: String,

    #[tf(",computed")]
    region: String,

    #[tf(",computed")]
    name_suffix: String,

    #[tf(",optional,computed")]
    state: String
}

impl Identifier for Zone {
    fn id(&self) -> String {
        self.name.clone()
    }
}

#[async_trait]
impl Reader for Zone {
    async fn read(&mut self, region: &str) -> Result<(), structprovider::BoxError> {
        if self.name.is_empty() {
            return Err("no matching AZ found".into());
        }
        self.region = region.to_string();
        self.name_suffix = self.name.strip_prefix(region).unwrap_or_default().to_string();
        self.state = "available".to_string();
        Ok(())
    }
}

#[derive(Debug)]
struct Rejected(String);

impl std::fmt::Display for Rejected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rejected: {}", self.0)
    }
}

impl std::error::Error for Rejected {}

#[derive(Default)]
struct Journal {
    calls: Mutex<Vec<&'static str>>,
    fail:  Option<&'static str>
}

impl Journal {
    fn note(&self, call: &'static str) -> Result<(), Rejected> {
        self.calls.lock().expect("journal").push(call);
        match self.fail {
            Some(failing) if failing == call => Err(Rejected(call.to_string())),
            _ => Ok(())
        }
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().expect("journal").clone()
    }
}

#[derive(Debug, Default, Record)]
#[record(updater, meta = "Journal", error = "Rejected")]
struct Database {
    #[tf(",required,forcenew")]
    name: String,

    #[tf(",required,forcenew")]
    bucket: String,

    #[tf(",optional")]
    force_destroy: bool,

    #[tf("-")]
    scratch: Vec<String>
}

impl Identifier for Database {
    fn id(&self) -> String {
        self.name.clone()
    }
}

#[async_trait]
impl Reader for Database {
    async fn read(&mut self, journal: &Journal) -> Result<(), Rejected> {
        journal.note("read")
    }
}

#[async_trait]
impl Resource for Database {
    async fn create(&mut self, journal: &Journal) -> Result<(), Rejected> {
        self.scratch.push(format!("create database {};", self.name));
        journal.note("create")
    }

    async fn delete(&mut self, journal: &Journal) -> Result<(), Rejected> {
        journal.note("delete")
    }
}

#[async_trait]
impl Updater for Database {
    async fn update(&mut self, journal: &Journal) -> Result<(), Rejected> {
        journal.note("update")
    }
}

#[derive(Debug, Default, Record)]
struct Counter {
    #[tf(",computed")]
    count: i64
}

#[derive(Debug, Default, Record)]
#[record(data_source)]
struct Collides {
    #[tf(",computed")]
    name_suffix: String,

    #[tf("name_suffix,optional")]
    suffix: String
}

impl Identifier for Collides {
    fn id(&self) -> String {
        self.name_suffix.clone()
    }
}

#[async_trait]
impl Reader for Collides {
    async fn read(&mut self, _meta: &()) -> Result<(), structprovider::BoxError> {
        Ok(())
    }
}

#[derive(Debug, Default, Record)]
struct Subnet {
    #[tf(",optional")]
    ipv6_cidr_block: String,

    #[tf(",computed")]
    r#type: String,

    #[tf(",optional")]
    s3_bucket: String
}

#[test]
fn zone_schema_matches_declaration() {
    let descriptor = new_data_source::<Zone>().expect("zone");
    let text = || Schema::new(ValueType::String);
    let expected = SchemaMap::from([
        ("name".to_string(), text().optional().computed()),
        ("region".to_string(), text().computed()),
        ("name_suffix".to_string(), text().computed()),
        ("state".to_string(), text().optional().computed())
    ]);

    assert_eq!(descriptor.schema, expected);
    assert!(descriptor.schema.values().all(|s| !s.required && !s.force_new));
    assert!(descriptor.is_data_source());
}

#[test]
fn bucket_is_required_and_force_new() {
    let descriptor = new_resource::<Database>().expect("database");
    let bucket = &descriptor.schema["bucket"];

    assert_eq!(bucket.value_type, ValueType::String);
    assert!(bucket.required && bucket.force_new);
    assert!(!bucket.optional && !bucket.computed);
    assert!(!descriptor.schema.contains_key("scratch"));
    assert_eq!(descriptor.schema["force_destroy"].value_type, ValueType::Bool);
}

#[test]
fn keys_keep_digits_and_drop_raw_prefix() {
    let adapter = StructResource::<Subnet>::new().expect("subnet");

    assert_eq!(
        adapter.schema().keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["ipv6_cidr_block", "s3_bucket", "type"]
    );
    assert_eq!(adapter.mapping().get("type"), Some("type"));
    assert_eq!(adapter.mapping().get("ipv6_cidr_block"), Some("ipv6_cidr_block"));
}

#[test]
fn raw_identifier_field_round_trips() {
    let adapter = StructResource::<Subnet>::new().expect("subnet");
    let state = MemoryState::new().with("type", "private").with("s3_bucket", "logs");

    let subnet = adapter.get(&state).expect("get");

    assert_eq!(subnet.r#type, "private");
    assert_eq!(subnet.s3_bucket, "logs");
}

#[test]
fn derived_capabilities() {
    assert_eq!(Zone::capabilities(), Capabilities::DATA_SOURCE);
    assert_eq!(Database::capabilities(), Capabilities::UPDATER);
    assert_eq!(Counter::capabilities(), Capabilities::NONE);
    assert_eq!(Database::NAME, "Database");
    assert_eq!(Database::fields()[3].kind(), None);
}

#[test]
fn registration_faults() {
    assert_eq!(
        new_data_source::<Counter>().unwrap_err(),
        ConfigFault::MissingCapability {
            record:   "Counter",
            required: "DataSource",
            missing:  structprovider::Capability::Identifier
        }
    );
    assert_eq!(
        StructResource::<Counter>::new().unwrap_err(),
        ConfigFault::UnsupportedKind {
            record: "Counter",
            field:  "count",
            kind:   Kind::Int
        }
    );
    assert!(matches!(
        new_data_source::<Collides>().unwrap_err(),
        ConfigFault::DuplicateKey { .. }
    ));
}

#[tokio::test]
async fn zone_read_through_descriptor() {
    let descriptor = new_data_source::<Zone>().expect("zone");
    let mut state = MemoryState::typed(&descriptor.schema).with("name", "us-west-2a");

    (descriptor.read)(&mut state, "us-west-2").await.expect("read");

    assert_eq!(state.id(), "us-west-2a");
    assert_eq!(state.get("name_suffix"), Some(&Value::from("a")));
    assert_eq!(state.get("state"), Some(&Value::from("available")));
}

#[tokio::test]
async fn zone_read_error_is_returned_unchanged() {
    let descriptor = new_data_source::<Zone>().expect("zone");
    let mut state = MemoryState::typed(&descriptor.schema);

    let err = (descriptor.read)(&mut state, "us-west-2").await.unwrap_err();

    assert_eq!(err.to_string(), "no matching AZ found");
    assert!(state.is_absent());
}

#[tokio::test]
async fn database_lifecycle_through_descriptor() {
    let descriptor = new_resource::<Database>().expect("database");
    let journal = Journal::default();
    let mut state = MemoryState::typed(&descriptor.schema)
        .with("name", "analytics")
        .with("bucket", "results");

    let create = descriptor.create.as_ref().expect("create");
    create(&mut state, &journal).await.expect("create");
    assert_eq!(state.id(), "analytics");
    assert_eq!(state.get("force_destroy"), Some(&Value::Bool(false)));

    let update = descriptor.update.as_ref().expect("update");
    update(&mut state, &journal).await.expect("update");

    let delete = descriptor.delete.as_ref().expect("delete");
    delete(&mut state, &journal).await.expect("delete");
    assert!(state.is_absent());

    assert_eq!(journal.calls(), vec!["create", "read", "update", "read", "delete"]);
}

#[tokio::test]
async fn failed_delete_keeps_identity() {
    let descriptor = new_resource::<Database>().expect("database");
    let journal = Journal {
        fail: Some("delete"),
        ..Journal::default()
    };
    let mut state = MemoryState::new().with("name", "analytics").with_id("analytics");

    let delete = descriptor.delete.as_ref().expect("delete");
    let err = delete(&mut state, &journal).await.unwrap_err();

    assert_eq!(err.downcast_ref::<Rejected>().map(|r| r.0.as_str()), Some("delete"));
    assert_eq!(state.id(), "analytics");
}

#[tokio::test]
async fn adapter_dispatch_matches_handlers() {
    let adapter = StructResource::<Database>::new().expect("database");
    let journal = Journal::default();
    let mut state = MemoryState::new().with("name", "analytics").with("bucket", "results");

    adapter.run(Operation::Read, &mut state, &journal).await.expect("read");

    assert_eq!(journal.calls(), vec!["read"]);
    assert_eq!(state.id(), "analytics");
}
