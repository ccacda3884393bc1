//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: a `StarRating` of 4 is interchangeable
/// with every other `StarRating` of 4, and a price of `$15.99` with every other
/// `$15.99`. They are immutable; "changing" one means constructing a new value,
/// which re-runs its validation.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct StarRating(u8);
///
/// impl ValueObject for StarRating {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
