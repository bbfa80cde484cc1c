// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fixture records bound by an external configuration engine.
//!
//! Three nesting levels, owned strictly by value:
//!
//! ```text
//! ComplexStructure
//! ├── compound: ArrayElement
//! │   ├── compound: ArrayOfArrayElement
//! │   ├── complex_container: sequence<ArrayOfArrayElement>
//! │   └── complex_array: ArrayOfArrayElement[10]
//! ├── vector_of_compound: sequence<ArrayElement>
//! ├── vector_of_vector_of_compound: sequence<sequence<ArrayElement>>
//! ├── array_of_compound: ArrayElement[10]
//! └── array_of_vector_of_compound: sequence<ArrayElement>[10]
//! ```
//!
//! Field names are normative: they are the keys an external loader or
//! serializer binds its documents onto. The two doubly-nested container
//! fields keep both nesting orders (sequence-of-sequences and
//! fixed-array-of-sequences) as distinct, independent fields.

use crate::enumeration::Enumeration;
use crate::fixed::FIXED_ARRAY_LEN;
use serde::{Deserialize, Serialize};

/// Leaf record: four scalars, no nested records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayOfArrayElement {
    /// Enumeration field, `First` until a loader sets it
    pub enm: Enumeration,

    /// Integer field
    pub intg: i32,

    /// Text field
    pub str: String,

    /// Floating-point field
    pub fp: f64,
}

/// Mid-level record: the four scalars plus one owned leaf and every
/// single-level container shape over integers and leaves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayElement {
    pub enm: Enumeration,
    pub intg: i32,
    pub str: String,
    pub fp: f64,

    /// Owned leaf record, lifetime bound to this record
    pub compound: ArrayOfArrayElement,

    /// Variable-length integer sequence
    pub simple_container: Vec<i32>,

    /// Variable-length leaf sequence
    pub complex_container: Vec<ArrayOfArrayElement>,

    /// Fixed integer slots
    pub simple_array: [i32; FIXED_ARRAY_LEN],

    /// Fixed leaf slots
    pub complex_array: [ArrayOfArrayElement; FIXED_ARRAY_LEN],
}

/// Root fixture record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplexStructure {
    pub enm: Enumeration,
    pub intg: i32,
    pub str: String,
    pub fp: f64,

    /// Owned mid-level record
    pub compound: ArrayElement,

    pub simple_container: Vec<i32>,
    pub simple_array: [i32; FIXED_ARRAY_LEN],

    /// Sequence of mid-level records
    pub vector_of_compound: Vec<ArrayElement>,

    /// Sequence of sequences of mid-level records
    pub vector_of_vector_of_compound: Vec<Vec<ArrayElement>>,

    /// Fixed slots of mid-level records
    pub array_of_compound: [ArrayElement; FIXED_ARRAY_LEN],

    /// Fixed slots, each holding a sequence of mid-level records
    /// (the inverse nesting order of `vector_of_vector_of_compound`)
    pub array_of_vector_of_compound: [Vec<ArrayElement>; FIXED_ARRAY_LEN],
}
