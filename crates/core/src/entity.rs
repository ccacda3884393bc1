//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two inventory records with the same id describe the same tea, even when one
/// of them carries a stale quantity.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// True when `other` refers to the same entity, regardless of its state.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
