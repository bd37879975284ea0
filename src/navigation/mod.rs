// SPDX-License-Identifier: MPL-2.0
//! Overlay navigation through the ordered gallery.
//!
//! Every grid item owns a [`NavigationController`]: a small state machine
//! (`Closed` / `Open`) over a shared, read-only [`Gallery`]. While open, the
//! controller walks the gallery in [`Order`], clamping at both ends. Closing
//! resets it to the item it belongs to, so reopening never shows the image
//! the user last navigated to.
//!
//! Transitions return an [`Effect`] describing what the overlay must render
//! next. A no-op (boundary reached, key while closed, open on a compact
//! layout) returns [`Effect::None`] and leaves the state untouched.

pub mod grid;
pub mod keyboard;
pub mod layout;

pub use grid::GridNavigation;
pub use keyboard::NavigationKey;
pub use layout::LayoutClass;

use crate::domain::portfolio::{ImageDescriptor, ImageId, Order};
use crate::error::NotFoundError;
use crate::gallery::Gallery;

/// Visibility of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    Closed,
    Open,
}

/// View state of one grid item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub current_id: ImageId,
    pub current_description: String,
    pub overlay: Overlay,
}

impl NavigationState {
    #[must_use]
    pub fn is_overlay_open(&self) -> bool {
        self.overlay == Overlay::Open
    }
}

/// Snapshot used to enable or disable the overlay's arrow buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationInfo {
    pub can_move_backward: bool,
    pub can_move_forward: bool,
    /// Zero-based rank of the current image in order.
    pub current_index: usize,
    pub total_count: usize,
}

/// Inputs accepted by a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Grid item clicked. Suppressed on compact layouts.
    Open(LayoutClass),
    /// Overlay dismissed.
    Close,
    /// Forward arrow pressed.
    MoveForward,
    /// Backward arrow pressed.
    MoveBackward,
    /// Key pressed while this controller has focus.
    Key(NavigationKey),
}

/// What the overlay must do after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// Overlay is visible and shows this image.
    Show {
        id: ImageId,
        description: String,
    },
    /// Overlay was hidden.
    Hide,
}

/// Per-item overlay controller.
#[derive(Debug, Clone)]
pub struct NavigationController {
    gallery: Gallery,
    original: ImageDescriptor,
    current_order: Order,
    state: NavigationState,
}

impl NavigationController {
    /// Creates the controller of the grid item showing `original_id`.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError::Id`] if `original_id` is not part of
    /// `gallery`. Every later lookup stays inside the same gallery, so this
    /// is the only place a lookup can fail.
    pub fn new(gallery: Gallery, original_id: &ImageId) -> Result<Self, NotFoundError> {
        let original = gallery
            .get(original_id)
            .cloned()
            .ok_or_else(|| NotFoundError::Id(original_id.clone()))?;

        Ok(Self {
            current_order: original.order(),
            state: initial_state(&original),
            original,
            gallery,
        })
    }

    #[must_use]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Identifier of the grid item this controller belongs to.
    #[must_use]
    pub fn original_id(&self) -> &ImageId {
        self.original.id()
    }

    #[must_use]
    pub fn current_id(&self) -> &ImageId {
        &self.state.current_id
    }

    #[must_use]
    pub fn current_description(&self) -> &str {
        &self.state.current_description
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_overlay_open()
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// Whether the current image has the smallest order.
    #[must_use]
    pub fn is_at_first(&self) -> bool {
        self.gallery.first_order() == Some(self.current_order)
    }

    /// Whether the current image has the largest order.
    #[must_use]
    pub fn is_at_last(&self) -> bool {
        self.gallery.last_order() == Some(self.current_order)
    }

    #[must_use]
    pub fn info(&self) -> NavigationInfo {
        let open = self.is_open();
        NavigationInfo {
            can_move_backward: open && !self.is_at_first(),
            can_move_forward: open && !self.is_at_last(),
            current_index: self.gallery.rank(&self.state.current_id).unwrap_or(0),
            total_count: self.gallery.len(),
        }
    }

    /// Handles one input and returns the resulting effect.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Open(layout) => self.open(layout),
            Message::Close => self.close(),
            Message::MoveForward => self.move_forward(),
            Message::MoveBackward => self.move_backward(),
            Message::Key(key) => self.handle_key(key),
        }
    }

    /// Opens the overlay on the current image.
    pub fn open(&mut self, layout: LayoutClass) -> Effect {
        if !layout.allows_overlay() || self.is_open() {
            return Effect::None;
        }
        self.state.overlay = Overlay::Open;
        tracing::debug!(id = %self.state.current_id, "overlay opened");
        self.show_current()
    }

    /// Closes the overlay and forgets any navigation done while it was open.
    pub fn close(&mut self) -> Effect {
        if !self.is_open() {
            return Effect::None;
        }
        self.current_order = self.original.order();
        self.state = initial_state(&self.original);
        tracing::debug!(id = %self.state.current_id, "overlay closed");
        Effect::Hide
    }

    /// Shows the next image in order. No-op at the last image.
    pub fn move_forward(&mut self) -> Effect {
        if !self.is_open() || self.is_at_last() {
            return Effect::None;
        }
        match self.gallery.successor(&self.state.current_id).cloned() {
            Some(next) => self.move_to(next),
            None => Effect::None,
        }
    }

    /// Shows the previous image in order. No-op at the first image.
    pub fn move_backward(&mut self) -> Effect {
        if !self.is_open() || self.is_at_first() {
            return Effect::None;
        }
        match self.gallery.predecessor(&self.state.current_id).cloned() {
            Some(previous) => self.move_to(previous),
            None => Effect::None,
        }
    }

    /// Keyboard dispatch. Keys are ignored while the overlay is closed.
    pub fn handle_key(&mut self, key: NavigationKey) -> Effect {
        if !self.is_open() {
            return Effect::None;
        }
        match key {
            NavigationKey::Left if !self.is_at_first() => self.move_backward(),
            NavigationKey::Right if !self.is_at_last() => self.move_forward(),
            NavigationKey::Escape => self.close(),
            NavigationKey::Left | NavigationKey::Right => Effect::None,
        }
    }

    fn move_to(&mut self, target: ImageDescriptor) -> Effect {
        self.current_order = target.order();
        self.state.current_id = target.id().clone();
        self.state.current_description = target.description().to_string();
        tracing::debug!(id = %self.state.current_id, order = %self.current_order, "overlay moved");
        self.show_current()
    }

    fn show_current(&self) -> Effect {
        Effect::Show {
            id: self.state.current_id.clone(),
            description: self.state.current_description.clone(),
        }
    }
}

fn initial_state(original: &ImageDescriptor) -> NavigationState {
    NavigationState {
        current_id: original.id().clone(),
        current_description: original.description().to_string(),
        overlay: Overlay::Closed,
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

    fn controller(gallery: &Gallery, id: &str) -> NavigationController {
        NavigationController::new(gallery.clone(), &ImageId::new(id)).expect("known id")
    }

    #[test]
    fn new_controller_is_closed_on_its_item() {
        let nav = controller(&abc(), "b");
        assert!(!nav.is_open());
        assert_eq!(nav.current_id().as_str(), "b");
        assert_eq!(nav.current_description(), "B");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let result = NavigationController::new(abc(), &ImageId::new("zzz"));
        assert!(matches!(result, Err(NotFoundError::Id(_))));
    }

    #[test]
    fn open_shows_current_image() {
        let mut nav = controller(&abc(), "b");
        let effect = nav.open(LayoutClass::Regular);
        assert_eq!(
            effect,
            Effect::Show {
                id: ImageId::new("b"),
                description: "B".to_string()
            }
        );
        assert!(nav.is_open());
    }

    #[test]
    fn open_is_suppressed_on_compact_layout() {
        let mut nav = controller(&abc(), "b");
        let before = nav.state().clone();
        assert_eq!(nav.open(LayoutClass::Compact), Effect::None);
        assert_eq!(nav.state(), &before);
    }

    #[test]
    fn moves_are_ignored_while_closed() {
        let mut nav = controller(&abc(), "b");
        assert_eq!(nav.move_forward(), Effect::None);
        assert_eq!(nav.move_backward(), Effect::None);
        assert_eq!(nav.handle_key(NavigationKey::Right), Effect::None);
        assert_eq!(nav.current_id().as_str(), "b");
    }

    #[test]
    fn forward_at_last_is_noop() {
        let mut nav = controller(&abc(), "c");
        nav.open(LayoutClass::Regular);
        let before = nav.state().clone();
        assert_eq!(nav.move_forward(), Effect::None);
        assert_eq!(nav.state(), &before);
    }

    #[test]
    fn backward_at_first_is_noop() {
        let mut nav = controller(&abc(), "a");
        nav.open(LayoutClass::Regular);
        let before = nav.state().clone();
        assert_eq!(nav.move_backward(), Effect::None);
        assert_eq!(nav.state(), &before);
    }

    #[test]
    fn move_updates_description() {
        let mut nav = controller(&abc(), "a");
        nav.open(LayoutClass::Regular);
        nav.move_forward();
        assert_eq!(nav.current_id().as_str(), "b");
        assert_eq!(nav.current_description(), "B");
    }

    #[test]
    fn close_resets_to_original() {
        let gallery = abc();
        let fresh = controller(&gallery, "b");
        let mut nav = fresh.clone();

        nav.open(LayoutClass::Regular);
        nav.move_backward();
        assert_eq!(nav.current_id().as_str(), "a");

        assert_eq!(nav.close(), Effect::Hide);
        assert_eq!(nav.state(), fresh.state());
    }

    #[test]
    fn close_while_closed_is_noop() {
        let mut nav = controller(&abc(), "b");
        assert_eq!(nav.close(), Effect::None);
    }

    #[test]
    fn escape_closes_overlay() {
        let mut nav = controller(&abc(), "b");
        nav.open(LayoutClass::Regular);
        nav.move_forward();
        assert_eq!(nav.handle_key(NavigationKey::Escape), Effect::Hide);
        assert_eq!(nav.current_id().as_str(), "b");
    }

    #[test]
    fn arrow_keys_at_boundaries_are_ignored() {
        let mut nav = controller(&abc(), "a");
        nav.open(LayoutClass::Regular);
        assert_eq!(nav.handle_key(NavigationKey::Left), Effect::None);

        nav.move_forward();
        nav.move_forward();
        assert_eq!(nav.handle_key(NavigationKey::Right), Effect::None);
        assert_eq!(nav.current_id().as_str(), "c");
    }

    #[test]
    fn info_reflects_boundaries() {
        let mut nav = controller(&abc(), "a");
        let closed = nav.info();
        assert!(!closed.can_move_backward);
        assert!(!closed.can_move_forward);

        nav.open(LayoutClass::Regular);
        let info = nav.info();
        assert!(!info.can_move_backward);
        assert!(info.can_move_forward);
        assert_eq!(info.current_index, 0);
        assert_eq!(info.total_count, 3);

        nav.move_forward();
        let info = nav.info();
        assert!(info.can_move_backward);
        assert!(info.can_move_forward);
        assert_eq!(info.current_index, 1);
    }

    #[test]
    fn handle_dispatches_messages() {
        let mut nav = controller(&abc(), "b");
        assert!(matches!(
            nav.handle(Message::Open(LayoutClass::Regular)),
            Effect::Show { .. }
        ));
        assert!(matches!(nav.handle(Message::MoveForward), Effect::Show { .. }));
        assert_eq!(nav.current_id().as_str(), "c");
        assert!(matches!(nav.handle(Message::MoveBackward), Effect::Show { .. }));
        assert_eq!(nav.handle(Message::Close), Effect::Hide);
    }

    #[test]
    fn sparse_orders_are_walked_in_order() {
        let gallery = Gallery::from_descriptors(vec![
            ImageDescriptor::new("p", 5, ""),
            ImageDescriptor::new("q", 20, ""),
            ImageDescriptor::new("r", 11, ""),
        ])
        .expect("valid gallery");
        let mut nav = controller(&gallery, "p");
        nav.open(LayoutClass::Regular);

        nav.move_forward();
        assert_eq!(nav.current_id().as_str(), "r");
        nav.move_forward();
        assert_eq!(nav.current_id().as_str(), "q");
        assert!(nav.is_at_last());
        assert_eq!(nav.move_forward(), Effect::None);
    }
}
