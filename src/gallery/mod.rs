// SPDX-License-Identifier: MPL-2.0
//! The ordered image collection and the loader that fetches it.
//!
//! A [`Gallery`] is created once per page view from the remote list and is
//! never mutated afterwards. It is cheap to clone (the descriptors live
//! behind an `Arc`) so every navigation controller can hold its own handle
//! to the same instance.
//!
//! Descriptors are kept in the order the service returned them, which is the
//! order the grid renders. Navigation never uses that order: it walks an
//! index sorted by [`Order`] instead.

pub mod loader;
mod wire;

pub use loader::{fetch_all, GalleryLoader, GalleryStatus, LoadTicket, RetryPolicy};

use crate::domain::portfolio::{ImageDescriptor, ImageId, Order};
use crate::error::{NetworkError, NotFoundError};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Default)]
struct Inner {
    /// Descriptors in service order.
    descriptors: Vec<ImageDescriptor>,
    /// Indices into `descriptors`, sorted by ascending order.
    by_order: Vec<usize>,
    /// Rank (index into `by_order`) of every identifier.
    rank_by_id: HashMap<ImageId, usize>,
}

/// Immutable, shareable collection of image descriptors.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    inner: Arc<Inner>,
}

impl Gallery {
    /// Creates an empty gallery, the state rendered before (or instead of) a
    /// successful fetch.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a gallery from descriptors in service order.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::Malformed`] if two descriptors share an order
    /// or an identifier.
    pub fn from_descriptors(descriptors: Vec<ImageDescriptor>) -> Result<Self, NetworkError> {
        let mut by_order: Vec<usize> = (0..descriptors.len()).collect();
        by_order.sort_by_key(|&index| descriptors[index].order());

        if let Some(pair) = by_order
            .windows(2)
            .find(|pair| descriptors[pair[0]].order() == descriptors[pair[1]].order())
        {
            return Err(NetworkError::Malformed(format!(
                "duplicate order {}",
                descriptors[pair[0]].order()
            )));
        }

        let mut rank_by_id = HashMap::with_capacity(descriptors.len());
        for (rank, &index) in by_order.iter().enumerate() {
            let id = descriptors[index].id().clone();
            if rank_by_id.insert(id, rank).is_some() {
                return Err(NetworkError::Malformed(format!(
                    "duplicate id {}",
                    descriptors[index].id()
                )));
            }
        }

        Ok(Self {
            inner: Arc::new(Inner {
                descriptors,
                by_order,
                rank_by_id,
            }),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.descriptors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.descriptors.is_empty()
    }

    /// Iterates descriptors in service order (grid order).
    pub fn iter(&self) -> impl Iterator<Item = &ImageDescriptor> {
        self.inner.descriptors.iter()
    }

    /// Returns the descriptor with the given identifier, if any.
    #[must_use]
    pub fn get(&self, id: &ImageId) -> Option<&ImageDescriptor> {
        self.rank(id).map(|rank| self.by_rank(rank))
    }

    /// Returns the order of the descriptor with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError::Id`] if no descriptor has that identifier.
    pub fn position(&self, id: &ImageId) -> Result<Order, NotFoundError> {
        self.get(id)
            .map(ImageDescriptor::order)
            .ok_or_else(|| NotFoundError::Id(id.clone()))
    }

    /// Returns the descriptor whose order equals `order`.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError::Order`] if no descriptor has that order.
    pub fn at_position(&self, order: Order) -> Result<&ImageDescriptor, NotFoundError> {
        self.inner
            .by_order
            .binary_search_by_key(&order, |&index| self.inner.descriptors[index].order())
            .map(|rank| self.by_rank(rank))
            .map_err(|_| NotFoundError::Order(order))
    }

    /// Smallest order in the collection.
    #[must_use]
    pub fn first_order(&self) -> Option<Order> {
        self.inner.by_order.first().map(|&index| self.inner.descriptors[index].order())
    }

    /// Largest order in the collection.
    #[must_use]
    pub fn last_order(&self) -> Option<Order> {
        self.inner.by_order.last().map(|&index| self.inner.descriptors[index].order())
    }

    /// Zero-based rank of the identifier in the sorted order.
    #[must_use]
    pub fn rank(&self, id: &ImageId) -> Option<usize> {
        self.inner.rank_by_id.get(id).copied()
    }

    /// The descriptor that follows `id` in order, or `None` at the last one.
    #[must_use]
    pub fn successor(&self, id: &ImageId) -> Option<&ImageDescriptor> {
        let rank = self.rank(id)?;
        (rank + 1 < self.len()).then(|| self.by_rank(rank + 1))
    }

    /// The descriptor that precedes `id` in order, or `None` at the first one.
    #[must_use]
    pub fn predecessor(&self, id: &ImageId) -> Option<&ImageDescriptor> {
        let rank = self.rank(id)?;
        rank.checked_sub(1).map(|previous| self.by_rank(previous))
    }

    /// Whether two handles point to the same fetched collection.
    #[must_use]
    pub fn ptr_eq(&self, other: &Gallery) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn by_rank(&self, rank: usize) -> &ImageDescriptor {
        &self.inner.descriptors[self.inner.by_order[rank]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Gallery {
        Gallery::from_descriptors(vec![
            ImageDescriptor::new("a", 0, "A"),
            ImageDescriptor::new("b", 1, "B"),
            ImageDescriptor::new("c", 2, "C"),
        ])
        .expect("valid gallery")
    }

    #[test]
    fn empty_gallery_has_no_bounds() {
        let gallery = Gallery::empty();
        assert!(gallery.is_empty());
        assert_eq!(gallery.first_order(), None);
        assert_eq!(gallery.last_order(), None);
    }

    #[test]
    fn position_and_at_position_round_trip() {
        let gallery = abc();
        for p in 0..3 {
            let descriptor = gallery.at_position(Order::new(p)).expect("in range");
            assert_eq!(gallery.position(descriptor.id()), Ok(Order::new(p)));
        }
    }

    #[test]
    fn position_of_unknown_id_is_not_found() {
        let gallery = abc();
        let missing = ImageId::new("zzz");
        assert_eq!(
            gallery.position(&missing),
            Err(NotFoundError::Id(missing.clone()))
        );
    }

    #[test]
    fn at_position_out_of_range_is_not_found() {
        let gallery = abc();
        assert_eq!(
            gallery.at_position(Order::new(3)),
            Err(NotFoundError::Order(Order::new(3)))
        );
        assert_eq!(
            gallery.at_position(Order::new(-1)),
            Err(NotFoundError::Order(Order::new(-1)))
        );
    }

    #[test]
    fn navigation_uses_order_not_service_position() {
        let gallery = Gallery::from_descriptors(vec![
            ImageDescriptor::new("late", 2, ""),
            ImageDescriptor::new("early", 0, ""),
            ImageDescriptor::new("middle", 1, ""),
        ])
        .expect("valid gallery");

        let grid: Vec<&str> = gallery.iter().map(|d| d.id().as_str()).collect();
        assert_eq!(grid, ["late", "early", "middle"]);

        let next = gallery.successor(&ImageId::new("early")).expect("has next");
        assert_eq!(next.id().as_str(), "middle");
        assert_eq!(gallery.first_order(), Some(Order::new(0)));
        assert_eq!(gallery.last_order(), Some(Order::new(2)));
    }

    #[test]
    fn sparse_orders_step_to_neighbours() {
        let gallery = Gallery::from_descriptors(vec![
            ImageDescriptor::new("x", 10, ""),
            ImageDescriptor::new("y", 40, ""),
            ImageDescriptor::new("z", 25, ""),
        ])
        .expect("valid gallery");

        let x = ImageId::new("x");
        assert_eq!(gallery.successor(&x).map(|d| d.id().as_str()), Some("z"));
        assert!(gallery.predecessor(&x).is_none());
        assert!(gallery.successor(&ImageId::new("y")).is_none());
    }

    #[test]
    fn duplicate_order_is_malformed() {
        let result = Gallery::from_descriptors(vec![
            ImageDescriptor::new("a", 0, ""),
            ImageDescriptor::new("b", 0, ""),
        ]);
        assert!(matches!(result, Err(NetworkError::Malformed(_))));
    }

    #[test]
    fn duplicate_id_is_malformed() {
        let result = Gallery::from_descriptors(vec![
            ImageDescriptor::new("a", 0, ""),
            ImageDescriptor::new("a", 1, ""),
        ]);
        assert!(matches!(result, Err(NetworkError::Malformed(_))));
    }

    #[test]
    fn clones_share_the_same_instance() {
        let gallery = abc();
        let handle = gallery.clone();
        assert!(gallery.ptr_eq(&handle));
        assert!(!gallery.ptr_eq(&abc()));
    }
}
