//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. Two value objects holding the same
//! attribute values are equal.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (a snapshot of `data` + `name`)
/// - **Entity**: has identity (a live `ValueType` with its `InstanceId`)
///
/// Two instances with different ids compare equal through their value-object
/// snapshots when their fields match:
///
/// ```ignore
/// let a = ValueType::new(&tracer, 42, "Object1");
/// let b = a.clone();
/// assert_ne!(a.id(), b.id());
/// assert_eq!(a.state(), b.state());
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
