// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field annotation parsing.
//!
//! Every record field carries a compact annotation string:
//!
//! ```text
//! name,opt1,opt2,...
//! ```
//!
//! - `name` empty → derive the external key from the field identifier
//! - `name` = `-` → exclude the field entirely
//! - anything else → explicit external key
//!
//! Options are matched case-sensitively against [`OPTIONS`]. Tokens outside
//! that vocabulary are collected in [`TagOptions::unknown`]; the parser
//! itself never fails, the schema builder decides what to do with them.

/// `computed` option.
pub const COMPUTED: &str = "computed";

/// `optional` option.
pub const OPTIONAL: &str = "optional";

/// `required` option.
pub const REQUIRED: &str = "required";

/// `forcenew` option.
pub const FORCE_NEW: &str = "forcenew";

/// Name segment that excludes a field.
pub const SKIP: &str = "-";

/// Recognized option vocabulary.
pub const OPTIONS: [&str; 4] = [COMPUTED, OPTIONAL, REQUIRED, FORCE_NEW];

/// Name segment of a parsed tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagName<'a> {
    /// Derive the external key from the field identifier.
    Derive,

    /// Use this external key.
    Override(&'a str),

    /// Leave the field out of the schema.
    Skip
}

/// Option flags of a parsed tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagOptions {
    /// `computed` present.
    pub computed: bool,

    /// `optional` present.
    pub optional: bool,

    /// `required` present.
    pub required: bool,

    /// `forcenew` present.
    pub force_new: bool,

    /// Tokens outside the vocabulary, in order of appearance.
    pub unknown: Vec<String>
}

impl TagOptions {
    /// Check if a recognized option is set.
    pub fn contains(&self, option: &str) -> bool {
        match option {
            COMPUTED => self.computed,
            OPTIONAL => self.optional,
            REQUIRED => self.required,
            FORCE_NEW => self.force_new,
            _ => false
        }
    }

    fn insert(&mut self, option: &str) {
        match option {
            COMPUTED => self.computed = true,
            OPTIONAL => self.optional = true,
            REQUIRED => self.required = true,
            FORCE_NEW => self.force_new = true,
            other => self.unknown.push(other.to_string())
        }
    }
}

/// A parsed field annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag<'a> {
    /// Name segment.
    pub name:    TagName<'a>,
    /// Option segments.
    pub options: TagOptions
}

/// Parse a field annotation string.
///
/// Segments are trimmed; empty option segments are ignored.
///
/// # Example
///
/// ```rust
/// use structprovider_core::tag::{TagName, parse_tag};
///
/// let tag = parse_tag(",required,forcenew");
/// assert_eq!(tag.name, TagName::Derive);
/// assert!(tag.options.required);
/// assert!(tag.options.force_new);
/// ```
pub fn parse_tag(tag: &str) -> Tag<'_> {
    let mut segments = tag.split(',').map(str::trim);

    let name = match segments.next().unwrap_or_default() {
        "" => TagName::Derive,
        SKIP => TagName::Skip,
        name => TagName::Override(name)
    };

    let mut options = TagOptions::default();
    for option in segments.filter(|s| !s.is_empty()) {
        options.insert(option);
    }

    Tag {
        name,
        options
    }
}
