//! Strongly-typed identifiers used across the workspace.

use serde::{Deserialize, Serialize};

/// Identifier of a single `ValueType` instance.
///
/// Every construction (default, parameterized, copy, move) yields a fresh id.
/// Assignment never changes it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(u64);

/// Position of a lifecycle event in the stream produced by one tracer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventSequence(u64);

macro_rules! impl_counter_newtype {
    ($t:ty, $prefix:literal) => {
        impl $t {
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}{}", $prefix, self.0)
            }
        }

        impl From<u64> for $t {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_counter_newtype!(InstanceId, "#");
impl_counter_newtype!(EventSequence, "seq:");
