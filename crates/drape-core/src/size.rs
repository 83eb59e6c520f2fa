// crates/drape-core/src/size.rs
use crate::{ConfigurationWarning, DrapeError, Result};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Element size as a fraction of its container, each axis in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "SizePercentRepr")]
pub struct SizePercent {
    width: f32,
    height: f32,
}

#[derive(Deserialize)]
struct SizePercentRepr {
    width: f32,
    height: f32,
}

impl From<SizePercentRepr> for SizePercent {
    fn from(repr: SizePercentRepr) -> Self {
        SizePercent::new(repr.width, repr.height)
    }
}

fn clamp_fraction(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

impl SizePercent {
    pub const FULL: SizePercent = SizePercent { width: 1.0, height: 1.0 };

    /// Never fails: fractions outside 0.0..=1.0 are clamped and NaN becomes 0.0.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: clamp_fraction(width),
            height: clamp_fraction(height),
        }
    }

    /// Like [`SizePercent::new`] but reports every clamped fraction.
    pub fn clamped(width: f32, height: f32) -> (Self, Vec<ConfigurationWarning>) {
        let size = Self::new(width, height);
        let warnings = [(width, size.width), (height, size.height)]
            .into_iter()
            .filter(|(requested, clamped)| requested != clamped)
            .map(|(requested, clamped)| ConfigurationWarning::FractionClamped { requested, clamped })
            .collect();
        (size, warnings)
    }

    /// Rejects fractions outside 0.0..=1.0 instead of clamping them.
    pub fn try_new(width: f32, height: f32) -> Result<Self> {
        for value in [width, height] {
            if !(0.0..=1.0).contains(&value) {
                return Err(DrapeError::FractionOutOfRange(value));
            }
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Pixel size inside a container of the given pixel size.
    pub fn to_pixels(&self, container: Vec2) -> Vec2 {
        Vec2::new(self.width * container.x, self.height * container.y)
    }
}

impl Default for SizePercent {
    fn default() -> Self {
        SizePercent::FULL
    }
}

/// Sizes at the three points of a transition. No relationship between them is
/// enforced.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TransitionSize {
    pub start: SizePercent,
    pub displayed: SizePercent,
    pub end: SizePercent,
}

impl TransitionSize {
    pub fn new(start: SizePercent, displayed: SizePercent, end: SizePercent) -> Self {
        Self { start, displayed, end }
    }

    /// The same size throughout the transition.
    pub fn uniform(size: SizePercent) -> Self {
        Self::new(size, size, size)
    }
}
