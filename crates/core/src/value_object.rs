//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** - two instances
/// with the same attributes are the same value. Construction is the only
/// validation gate: once a value object exists, it is valid.
///
/// To "modify" a value object, construct a new one; this keeps values safe
/// to copy, share and compare like primitives.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
