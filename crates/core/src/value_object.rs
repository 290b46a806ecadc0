//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry **no identity**: two with the same attributes are equal.
/// An inventory record `("Aged Brie", 2, 0)` is a value object; the item built
/// from it and aged over time is an entity.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Record {
///     name: String,
///     sell_in: i32,
///     quality: i32,
/// }
///
/// impl ValueObject for Record {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
