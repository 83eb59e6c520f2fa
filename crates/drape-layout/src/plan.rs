// crates/drape-layout/src/plan.rs
//! Keyframes for the host's animation driver. Nothing here runs or times an
//! animation; a plan only says where to go from and to.

use crate::{Frame, TransitionFrames};
use drape_core::TransitionSettings;
use glam::Vec4;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPhase {
    Presenting,
    Dismissing,
}

/// Dimming layer drawn between the presenting view and the element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChromeSpec {
    pub color: Vec4,
    pub dismiss_on_tap: bool,
}

impl ChromeSpec {
    pub fn from_settings(settings: &TransitionSettings) -> Option<Self> {
        settings.chrome.map(|color| Self {
            color,
            dismiss_on_tap: settings.chrome_dismiss,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub frame: Frame,
    /// Opacity of the presented element
    pub alpha: f32,
    /// Opacity of the chrome layer
    pub chrome_alpha: f32,
}

impl Keyframe {
    pub fn lerp(&self, other: &Keyframe, t: f32) -> Self {
        Self {
            frame: self.frame.lerp(&other.frame, t),
            alpha: self.alpha + (other.alpha - self.alpha) * t,
            chrome_alpha: self.chrome_alpha + (other.chrome_alpha - self.chrome_alpha) * t,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationPlan {
    pub phase: TransitionPhase,
    pub from: Keyframe,
    pub to: Keyframe,
    pub duration: Duration,
    pub chrome: Option<ChromeSpec>,
}

impl AnimationPlan {
    pub fn new(phase: TransitionPhase, frames: &TransitionFrames, settings: &TransitionSettings) -> Self {
        let (from, to) = match phase {
            TransitionPhase::Presenting => {
                let alpha = if settings.fade.fade_in { 0.0 } else { 1.0 };
                (
                    Keyframe { frame: frames.start, alpha, chrome_alpha: 0.0 },
                    Keyframe { frame: frames.displayed, alpha: 1.0, chrome_alpha: 1.0 },
                )
            }
            TransitionPhase::Dismissing => {
                let alpha = if settings.fade.fade_out { 0.0 } else { 1.0 };
                (
                    Keyframe { frame: frames.displayed, alpha: 1.0, chrome_alpha: 1.0 },
                    Keyframe { frame: frames.end, alpha, chrome_alpha: 0.0 },
                )
            }
        };

        Self {
            phase,
            from,
            to,
            duration: settings.animation_duration(),
            chrome: ChromeSpec::from_settings(settings),
        }
    }

    pub fn presenting(frames: &TransitionFrames, settings: &TransitionSettings) -> Self {
        Self::new(TransitionPhase::Presenting, frames, settings)
    }

    pub fn dismissing(frames: &TransitionFrames, settings: &TransitionSettings) -> Self {
        Self::new(TransitionPhase::Dismissing, frames, settings)
    }

    /// Keyframe at `progress`, clamped to 0.0..=1.0.
    pub fn sample(&self, progress: f32) -> Keyframe {
        let t = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        self.from.lerp(&self.to, t)
    }
}
