// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Non-primitive helper fields excluded with `-`, generic record.

use std::{collections::HashMap, marker::PhantomData};

use structprovider::{Record, StructResource};

#[derive(Default, Record)]
pub struct Cached<T: Default + Send + Sync + 'static> {
    #[tf(",computed")]
    pub key: String,

    #[tf("-")]
    pub cache: HashMap<String, Vec<u8>>,

    #[tf("-")]
    pub marker: PhantomData<T>,

    untagged_flag: bool
}

fn main() {
    let adapter = StructResource::<Cached<u32>>::new().unwrap();
    assert_eq!(adapter.schema().len(), 2);
    assert_eq!(adapter.mapping().get("untagged_flag"), Some("untagged_flag"));
}
