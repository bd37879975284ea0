// SPDX-License-Identifier: MPL-2.0
//! Portfolio value objects.
//!
//! Pure data describing one image of the remote collection. Lookups and
//! ordering over a whole collection live in [`crate::gallery`].

use std::fmt;

// =============================================================================
// ImageId
// =============================================================================

/// Opaque identifier of an image on the remote service.
///
/// The identifier is only ever compared for equality and interpolated into
/// the image-bytes URL; its content is never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(String);

impl ImageId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Order
// =============================================================================

/// Position of an image in the collection's total order.
///
/// Orders are unique within a collection but may be sparse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Order(i64);

impl Order {
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw order value.
    #[must_use]
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// ImageDescriptor
// =============================================================================

/// Immutable record describing one image of the portfolio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDescriptor {
    id: ImageId,
    order: Order,
    description: String,
}

impl ImageDescriptor {
    #[must_use]
    pub fn new(id: impl Into<String>, order: i64, description: impl Into<String>) -> Self {
        Self {
            id: ImageId::new(id),
            order: Order::new(order),
            description: description.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &ImageId {
        &self.id
    }

    #[must_use]
    pub fn order(&self) -> Order {
        self.order
    }

    /// Caption shown under the image in the overlay. Empty when the service
    /// did not supply one.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_exposes_fields() {
        let descriptor = ImageDescriptor::new("a", 3, "Alpha");
        assert_eq!(descriptor.id(), &ImageId::new("a"));
        assert_eq!(descriptor.order(), Order::new(3));
        assert_eq!(descriptor.description(), "Alpha");
    }

    #[test]
    fn orders_compare_numerically() {
        assert!(Order::new(2) < Order::new(10));
        assert!(Order::new(-1) < Order::new(0));
    }

    #[test]
    fn image_id_displays_raw_value() {
        assert_eq!(ImageId::from("x-1").to_string(), "x-1");
    }
}
