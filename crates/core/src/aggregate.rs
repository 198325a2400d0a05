//! Aggregate root trait for state-mutating domain models.

/// Aggregate root marker + minimal interface.
///
/// This is intentionally small so domain modules can decide how they model
/// state transitions (guarded mutation, event application, etc.) without
/// bringing in any infrastructure concerns.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Incremented once per successful mutation. A host that needs to
    /// serialize concurrent writers per aggregate id can compare versions
    /// in a transactional read-modify-write.
    fn version(&self) -> u64;
}
