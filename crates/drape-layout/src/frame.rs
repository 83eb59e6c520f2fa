// crates/drape-layout/src/frame.rs
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A rectangle in pixel units: where an element sits at one point of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Frame {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    pub fn min(&self) -> Vec2 {
        self.origin
    }

    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.origin.x
            && point.x <= self.origin.x + self.size.x
            && point.y >= self.origin.y
            && point.y <= self.origin.y + self.size.y
    }

    pub fn contains_frame(&self, other: &Frame) -> bool {
        self.contains_point(other.min()) && self.contains_point(other.max())
    }

    /// Overlap test with touching edges counting as an intersection.
    pub fn intersects(&self, other: &Frame) -> bool {
        !(self.origin.x + self.size.x < other.origin.x
            || other.origin.x + other.size.x < self.origin.x
            || self.origin.y + self.size.y < other.origin.y
            || other.origin.y + other.size.y < self.origin.y)
    }

    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            origin: self.origin + offset,
            size: self.size,
        }
    }

    /// Component-wise interpolation of origin and size. `t` is not clamped.
    pub fn lerp(&self, other: &Frame, t: f32) -> Self {
        Self {
            origin: self.origin.lerp(other.origin, t),
            size: self.size.lerp(other.size, t),
        }
    }
}
