// SPDX-License-Identifier: MPL-2.0
//! Keyboard keys understood by the overlay.

use iced::keyboard::{self, key::Named};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKey {
    /// Left arrow: previous image.
    Left,
    /// Right arrow: next image.
    Right,
    /// Escape: close the overlay.
    Escape,
}

impl NavigationKey {
    /// Maps a toolkit key to a navigation key. Other keys are not ours.
    #[must_use]
    pub fn from_key(key: &keyboard::Key) -> Option<Self> {
        match key {
            keyboard::Key::Named(Named::ArrowLeft) => Some(Self::Left),
            keyboard::Key::Named(Named::ArrowRight) => Some(Self::Right),
            keyboard::Key::Named(Named::Escape) => Some(Self::Escape),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_escape_are_mapped() {
        assert_eq!(
            NavigationKey::from_key(&keyboard::Key::Named(Named::ArrowLeft)),
            Some(NavigationKey::Left)
        );
        assert_eq!(
            NavigationKey::from_key(&keyboard::Key::Named(Named::ArrowRight)),
            Some(NavigationKey::Right)
        );
        assert_eq!(
            NavigationKey::from_key(&keyboard::Key::Named(Named::Escape)),
            Some(NavigationKey::Escape)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(
            NavigationKey::from_key(&keyboard::Key::Named(Named::ArrowUp)),
            None
        );
        assert_eq!(
            NavigationKey::from_key(&keyboard::Key::Character("l".into())),
            None
        );
    }
}
