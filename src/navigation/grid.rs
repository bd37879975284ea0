// SPDX-License-Identifier: MPL-2.0
//! One controller per grid item.

use super::{Effect, LayoutClass, Message, NavigationController, NavigationKey};
use crate::gallery::Gallery;

/// Controllers for every item of a gallery, in grid order.
///
/// Each controller owns its own state; they share only the gallery.
#[derive(Debug, Clone, Default)]
pub struct GridNavigation {
    controllers: Vec<NavigationController>,
}

impl GridNavigation {
    /// Builds one controller per descriptor of `gallery`.
    #[must_use]
    pub fn from_gallery(gallery: &Gallery) -> Self {
        let controllers = gallery
            .iter()
            .filter_map(|descriptor| NavigationController::new(gallery.clone(), descriptor.id()).ok())
            .collect();
        Self { controllers }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NavigationController> {
        self.controllers.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&NavigationController> {
        self.controllers.get(index)
    }

    /// Index of the item whose overlay is open, if any.
    #[must_use]
    pub fn open_index(&self) -> Option<usize> {
        self.controllers.iter().position(NavigationController::is_open)
    }

    /// The controller whose overlay is open, if any.
    #[must_use]
    pub fn open_controller(&self) -> Option<&NavigationController> {
        self.open_index().and_then(|index| self.controllers.get(index))
    }

    /// Routes a message to the item at `index`.
    ///
    /// Opening is refused while another item's overlay is already open: the
    /// overlay is modal.
    pub fn handle(&mut self, index: usize, message: Message) -> Effect {
        if matches!(message, Message::Open(_)) && self.open_index().is_some_and(|open| open != index) {
            return Effect::None;
        }
        match self.controllers.get_mut(index) {
            Some(controller) => controller.handle(message),
            None => Effect::None,
        }
    }

    /// Opens the overlay of the item at `index`.
    pub fn open(&mut self, index: usize, layout: LayoutClass) -> Effect {
        self.handle(index, Message::Open(layout))
    }

    /// Routes a key press to the open overlay. Ignored when none is open.
    pub fn handle_key(&mut self, key: NavigationKey) -> Effect {
        match self.open_index() {
            Some(index) => self.handle(index, Message::Key(key)),
            None => Effect::None,
        }
    }
}
