// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! External key derivation.
//!
//! Fields without a name override get a lowercase, underscore-separated key
//! derived from their identifier. `ForceDestroy` and `force_destroy` both
//! become `force_destroy`. Digits stay attached to the word before them, so
//! `Ipv6CidrBlock` and `ipv6_cidr_block` both become `ipv6_cidr_block`. No
//! collision checking happens here; the schema builder owns that.

use convert_case::{Boundary, Case, Casing};

/// Word boundaries for identifiers. A digit never starts a new word.
const WORD_BOUNDARIES: [Boundary; 4] = [
    Boundary::Underscore,
    Boundary::LowerUpper,
    Boundary::DigitUpper,
    Boundary::Acronym
];

/// Derive the external schema key for a field identifier.
pub fn field_name_to_schema_name(ident: &str) -> String {
    ident.set_boundaries(&WORD_BOUNDARIES).to_case(Case::Snake)
}
