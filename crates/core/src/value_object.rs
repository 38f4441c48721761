//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity. Two instances holding the same values are
/// the same thing (a category tag, a quality reading). They are cheap to copy
/// and never mutated in place; a "change" produces a new value.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Category { Legendary, Generic }
///
/// impl ValueObject for Category {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
