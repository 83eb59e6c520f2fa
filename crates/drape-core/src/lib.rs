// crates/drape-core/src/lib.rs
pub mod anchor;
pub mod location;
pub mod size;
pub mod settings;
pub mod config;

pub use anchor::*;
pub use location::*;
pub use size::*;
pub use settings::*;

use glam::Vec2;
use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum DrapeError {
    #[error("Direction {direction:?} is anchored but the settled position is a literal point ({}, {})", settled.x, settled.y)]
    InvalidAnchorCombination { direction: Anchor, settled: Vec2 },

    #[error("Anchor index out of range: {0} (expected 0..=8)")]
    AnchorIndexOutOfRange(i64),

    #[error("Size fraction out of range: {0} (expected 0.0..=1.0)")]
    FractionOutOfRange(f32),

    #[error("Unknown anchor: {0}")]
    UnknownAnchor(String),

    #[error("Invalid settings: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DrapeError>;

/// A recoverable configuration problem. A default was substituted and the
/// computation carried on; hosts can surface these for debugging.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationWarning {
    AnchorIndexOutOfRange { index: i64, substituted: Anchor },
    NegativeDuration(f64),
    FractionClamped { requested: f32, clamped: f32 },
}

impl fmt::Display for ConfigurationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationWarning::AnchorIndexOutOfRange { index, substituted } => {
                write!(f, "anchor index {} out of range, using {:?}", index, substituted)
            }
            ConfigurationWarning::NegativeDuration(secs) => {
                write!(f, "negative duration {}s, treating as zero", secs)
            }
            ConfigurationWarning::FractionClamped { requested, clamped } => {
                write!(f, "size fraction {} clamped to {}", requested, clamped)
            }
        }
    }
}
