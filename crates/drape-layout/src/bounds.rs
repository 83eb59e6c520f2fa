// crates/drape-layout/src/bounds.rs
use crate::Frame;
use drape_core::TransitionSettings;

/// The two rectangles a presentation can be bounded by, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresentationBounds {
    /// The whole window or screen
    pub screen: Frame,
    /// The presenting view, which may exclude headers and footers
    pub presenting: Frame,
}

impl PresentationBounds {
    pub fn new(screen: Frame, presenting: Frame) -> Self {
        Self { screen, presenting }
    }

    /// Bounds where the presenting view fills the screen.
    pub fn full(screen: Frame) -> Self {
        Self::new(screen, screen)
    }

    /// The container the element and its chrome are laid out in.
    pub fn container_for(&self, settings: &TransitionSettings) -> Frame {
        if settings.entire_screen {
            self.screen
        } else {
            self.presenting
        }
    }
}
