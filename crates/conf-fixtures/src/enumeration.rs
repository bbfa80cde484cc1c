// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fixture enumeration with an explicit 1-based raw mapping.
//!
//! The closed set {First, Second, Third} is numbered from 1: a raw zero
//! read from an external source is the "never touched" sentinel and must
//! stay distinguishable from an explicitly-set `First`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw value an external source reports for a field it never touched.
pub const ENUMERATION_UNSET: i32 = 0;

/// Closed three-member set used by every fixture record.
///
/// Discriminants are 1-based; zero is reserved as the uninitialized
/// sentinel and is never a valid member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum Enumeration {
    /// First member (raw value 1, also the default)
    First = 1,

    /// Second member (raw value 2)
    Second = 2,

    /// Third member (raw value 3)
    Third = 3,
}

impl Default for Enumeration {
    fn default() -> Self {
        Enumeration::First
    }
}

impl Enumeration {
    /// Return the canonical i32 representation for this member.
    ///
    /// Keeps the mapping explicit instead of relying on unchecked casts.
    pub const fn to_i32(self) -> i32 {
        match self {
            Enumeration::First => 1,
            Enumeration::Second => 2,
            Enumeration::Third => 3,
        }
    }

    /// Convert from a raw i32 value.
    ///
    /// Returns `None` for [`ENUMERATION_UNSET`] and any other value
    /// outside `1..=3`.
    pub const fn from_i32(value: i32) -> Option<Self> {
        match value {
            1 => Some(Enumeration::First),
            2 => Some(Enumeration::Second),
            3 => Some(Enumeration::Third),
            _ => None,
        }
    }

    /// Returns true if a raw value is the uninitialized sentinel.
    pub const fn is_unset(value: i32) -> bool {
        value == ENUMERATION_UNSET
    }
}

/// Raw value that maps onto no enumeration member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumerationOutOfRange {
    /// The rejected raw value.
    pub value: i32,
}

impl fmt::Display for EnumerationOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if Enumeration::is_unset(self.value) {
            write!(f, "enumeration value 0 is the unset sentinel")
        } else {
            write!(f, "enumeration value {} out of range 1..=3", self.value)
        }
    }
}

impl std::error::Error for EnumerationOutOfRange {}

impl TryFrom<i32> for Enumeration {
    type Error = EnumerationOutOfRange;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Enumeration::from_i32(value).ok_or(EnumerationOutOfRange { value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumeration_raw_values() {
        assert_eq!(Enumeration::First.to_i32(), 1);
        assert_eq!(Enumeration::Second.to_i32(), 2);
        assert_eq!(Enumeration::Third.to_i32(), 3);
    }

    #[test]
    fn test_enumeration_from_i32() {
        assert_eq!(Enumeration::from_i32(1), Some(Enumeration::First));
        assert_eq!(Enumeration::from_i32(2), Some(Enumeration::Second));
        assert_eq!(Enumeration::from_i32(3), Some(Enumeration::Third));
        assert_eq!(Enumeration::from_i32(4), None);
        assert_eq!(Enumeration::from_i32(-1), None);
    }

    #[test]
    fn test_zero_is_unset_not_first() {
        assert_eq!(Enumeration::from_i32(ENUMERATION_UNSET), None);
        assert!(Enumeration::is_unset(0));
        assert!(!Enumeration::is_unset(Enumeration::First.to_i32()));
    }

    #[test]
    fn test_default_is_first() {
        assert_eq!(Enumeration::default(), Enumeration::First);
        assert_eq!(Enumeration::default().to_i32(), 1);
    }

    #[test]
    fn test_try_from_roundtrip() {
        for member in [Enumeration::First, Enumeration::Second, Enumeration::Third] {
            assert_eq!(Enumeration::try_from(member.to_i32()), Ok(member));
        }
    }

    #[test]
    fn test_try_from_error_display() {
        let err = Enumeration::try_from(0).expect_err("zero must not map to a member");
        assert_eq!(err.value, 0);
        assert_eq!(err.to_string(), "enumeration value 0 is the unset sentinel");

        let err = Enumeration::try_from(7).expect_err("7 must not map to a member");
        assert_eq!(err.to_string(), "enumeration value 7 out of range 1..=3");
    }
}
