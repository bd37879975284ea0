// SPDX-License-Identifier: MPL-2.0
//! Layout classification used to gate the overlay.

/// Presentation class of the viewport, computed once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutClass {
    #[default]
    Regular,
    /// Narrow viewport. Clicking a grid item does not open the overlay.
    Compact,
}

impl LayoutClass {
    /// Classifies a viewport width against the compact threshold.
    #[must_use]
    pub fn from_width(width: f32, compact_threshold: f32) -> Self {
        if width < compact_threshold {
            Self::Compact
        } else {
            Self::Regular
        }
    }

    #[must_use]
    pub fn allows_overlay(self) -> bool {
        matches!(self, Self::Regular)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_width_is_compact() {
        assert_eq!(LayoutClass::from_width(599.0, 600.0), LayoutClass::Compact);
        assert!(!LayoutClass::Compact.allows_overlay());
    }

    #[test]
    fn threshold_width_is_regular() {
        assert_eq!(LayoutClass::from_width(600.0, 600.0), LayoutClass::Regular);
        assert!(LayoutClass::Regular.allows_overlay());
    }
}
