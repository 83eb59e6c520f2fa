// crates/drape-layout/src/lib.rs

use drape_core::{Result, TransitionSettings};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod frame;
pub mod bounds;
pub mod plan;

pub use frame::*;
pub use bounds::*;
pub use plan::*;

/// The three frames an animation driver interpolates between.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionFrames {
    /// Where the element starts when presented
    pub start: Frame,
    /// Where the element rests while presented
    pub displayed: Frame,
    /// Where the element ends up when dismissed
    pub end: Frame,
}

impl TransitionFrames {
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            start: self.start.translated(offset),
            displayed: self.displayed.translated(offset),
            end: self.end.translated(offset),
        }
    }
}

pub trait FrameEngine {
    /// Frames in container-local coordinates for a container of `container` pixels.
    fn compute_frames(&self, container: Vec2, settings: &TransitionSettings) -> Result<TransitionFrames>;
}

/// Resolves sizes against the container, the settled position as a plain anchor
/// and both directions relative to the settled position.
#[derive(Debug)]
pub struct AnchoredFrameEngine {
    debug: bool,
}

impl AnchoredFrameEngine {
    pub fn new() -> Self {
        Self { debug: false }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Frames in screen coordinates, laid out in the container the settings select.
    pub fn frames_in(&self, bounds: &PresentationBounds, settings: &TransitionSettings) -> Result<TransitionFrames> {
        let container = bounds.container_for(settings);
        let frames = self.compute_frames(container.size, settings)?;
        Ok(frames.translated(container.origin))
    }
}

impl Default for AnchoredFrameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameEngine for AnchoredFrameEngine {
    fn compute_frames(&self, container: Vec2, settings: &TransitionSettings) -> Result<TransitionFrames> {
        let start_size = settings.size.start.to_pixels(container);
        let displayed_size = settings.size.displayed.to_pixels(container);
        let end_size = settings.size.end.to_pixels(container);

        let displayed_origin = settings.position.resolve(displayed_size, container);
        let start_origin = settings
            .direction_in
            .resolve_relative(&settings.position, start_size, container)?;
        let end_origin = settings
            .direction_out
            .resolve_relative(&settings.position, end_size, container)?;

        let frames = TransitionFrames {
            start: Frame::from_origin_size(start_origin, start_size),
            displayed: Frame::from_origin_size(displayed_origin, displayed_size),
            end: Frame::from_origin_size(end_origin, end_size),
        };

        if self.debug {
            debug!(
                "Container {:?}: start {:?}, displayed {:?}, end {:?}",
                container, frames.start, frames.displayed, frames.end
            );
        }

        Ok(frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drape_core::{Anchor, DrapeError, Location, SizePercent, TransitionSize};

    #[test]
    fn test_standard_frames() {
        let engine = AnchoredFrameEngine::new();
        let frames = engine
            .compute_frames(Vec2::new(400.0, 800.0), &TransitionSettings::standard())
            .unwrap();

        assert_eq!(frames.displayed, Frame::new(40.0, 200.0, 320.0, 400.0));
        assert_eq!(frames.start, Frame::new(-320.0, 200.0, 320.0, 400.0));
        assert_eq!(frames.end, Frame::new(720.0, 200.0, 320.0, 400.0));
    }

    #[test]
    fn test_each_frame_uses_its_own_size() {
        let settings = TransitionSettings::standard()
            .with_position(Anchor::Bottom)
            .with_directions(Anchor::Bottom, Anchor::Bottom)
            .with_size(TransitionSize::new(
                SizePercent::new(1.0, 0.25),
                SizePercent::new(1.0, 0.5),
                SizePercent::new(0.5, 0.25),
            ));
        let frames = AnchoredFrameEngine::new()
            .compute_frames(Vec2::new(400.0, 800.0), &settings)
            .unwrap();

        assert_eq!(frames.start, Frame::new(0.0, 1000.0, 400.0, 200.0));
        assert_eq!(frames.displayed, Frame::new(0.0, 400.0, 400.0, 400.0));
        assert_eq!(frames.end, Frame::new(100.0, 1000.0, 200.0, 200.0));
    }

    #[test]
    fn test_literal_points_pass_through() {
        let settings = TransitionSettings::standard()
            .with_position(Location::point(5.0, 6.0))
            .with_directions(Location::point(-50.0, 6.0), Location::point(5.0, 900.0));
        let frames = AnchoredFrameEngine::new()
            .compute_frames(Vec2::new(400.0, 800.0), &settings)
            .unwrap();

        assert_eq!(frames.displayed.origin, Vec2::new(5.0, 6.0));
        assert_eq!(frames.start.origin, Vec2::new(-50.0, 6.0));
        assert_eq!(frames.end.origin, Vec2::new(5.0, 900.0));
    }

    #[test]
    fn test_anchored_direction_with_literal_position_fails() {
        let settings = TransitionSettings::standard().with_position(Location::point(5.0, 6.0));
        let result = AnchoredFrameEngine::new().compute_frames(Vec2::new(400.0, 800.0), &settings);
        assert!(matches!(
            result,
            Err(DrapeError::InvalidAnchorCombination { direction: Anchor::Left, .. })
        ));
    }

    #[test]
    fn test_frames_in_presenting_view() {
        let bounds = PresentationBounds::new(
            Frame::new(0.0, 0.0, 400.0, 900.0),
            Frame::new(0.0, 50.0, 400.0, 800.0),
        );
        let engine = AnchoredFrameEngine::new();

        let frames = engine.frames_in(&bounds, &TransitionSettings::standard()).unwrap();
        assert_eq!(frames.displayed, Frame::new(40.0, 250.0, 320.0, 400.0));

        let settings = TransitionSettings::standard().with_entire_screen(true);
        let frames = engine.frames_in(&bounds, &settings).unwrap();
        assert_eq!(frames.displayed, Frame::new(40.0, 225.0, 320.0, 450.0));
    }
}
