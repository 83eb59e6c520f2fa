// crates/drape-core/src/settings.rs
use crate::{Anchor, ConfigurationWarning, DrapeError, Location, Result, SizePercent, TransitionSize};
use glam::Vec4;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FadeSpec {
    pub fade_in: bool,
    pub fade_out: bool,
}

impl FadeSpec {
    pub fn new(fade_in: bool, fade_out: bool) -> Self {
        Self { fade_in, fade_out }
    }

    pub fn both() -> Self {
        Self::new(true, true)
    }

    pub fn none() -> Self {
        Self::new(false, false)
    }
}

/// Everything one transition style needs. Built once by the host before the
/// presentation starts and only read afterwards.
///
/// Missing JSON fields take their value from [`TransitionSettings::standard`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionSettings {
    /// Where the element comes to rest when fully presented
    pub position: Location,
    /// Where the element comes from when presented
    pub direction_in: Location,
    /// Where the element goes when dismissed
    pub direction_out: Location,
    pub fade: FadeSpec,
    /// Animation duration in seconds
    pub duration: f64,
    /// Dimming color (RGBA) drawn behind the element. `None` leaves the
    /// background interactive.
    pub chrome: Option<Vec4>,
    /// Cover the entire screen instead of only the presenting view
    pub entire_screen: bool,
    /// Tapping the chrome dismisses the element
    pub chrome_dismiss: bool,
    pub size: TransitionSize,
}

impl TransitionSettings {
    pub const STANDARD_CHROME: Vec4 = Vec4::new(0.0, 0.0, 1.0, 0.4);

    /// Centered at 80% x 50% of the container, in from the left and out to the
    /// right, fading both ways over 0.3 seconds.
    pub fn standard() -> Self {
        Self {
            position: Location::Anchor(Anchor::Center),
            direction_in: Location::Anchor(Anchor::Left),
            direction_out: Location::Anchor(Anchor::Right),
            fade: FadeSpec::both(),
            duration: 0.3,
            chrome: Some(Self::STANDARD_CHROME),
            entire_screen: false,
            chrome_dismiss: false,
            size: TransitionSize::uniform(SizePercent::new(0.8, 0.5)),
        }
    }

    pub fn with_position(mut self, position: impl Into<Location>) -> Self {
        self.position = position.into();
        self
    }

    pub fn with_directions(mut self, direction_in: impl Into<Location>, direction_out: impl Into<Location>) -> Self {
        self.direction_in = direction_in.into();
        self.direction_out = direction_out.into();
        self
    }

    pub fn with_fade(mut self, fade: FadeSpec) -> Self {
        self.fade = fade;
        self
    }

    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    pub fn with_chrome(mut self, chrome: Option<Vec4>) -> Self {
        self.chrome = chrome;
        self
    }

    pub fn with_entire_screen(mut self, entire_screen: bool) -> Self {
        self.entire_screen = entire_screen;
        self
    }

    pub fn with_chrome_dismiss(mut self, chrome_dismiss: bool) -> Self {
        self.chrome_dismiss = chrome_dismiss;
        self
    }

    pub fn with_size(mut self, size: TransitionSize) -> Self {
        self.size = size;
        self
    }

    /// The background stays interactive when there is no chrome to block it.
    pub fn background_interactive(&self) -> bool {
        self.chrome.is_none()
    }

    /// Tap dismissal needs a chrome to receive the tap.
    pub fn dismisses_on_chrome_tap(&self) -> bool {
        self.chrome_dismiss && self.chrome.is_some()
    }

    /// Duration the host should animate for. Negative values are treated as zero.
    pub fn animation_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.duration).unwrap_or(Duration::ZERO)
    }

    /// Check the settings before a transition starts.
    ///
    /// An anchored direction paired with a literal settled position is an error.
    /// Recoverable problems come back as warnings and are also logged.
    pub fn validate(&self) -> Result<Vec<ConfigurationWarning>> {
        if let Location::Point(settled) = self.position {
            for direction in [self.direction_in, self.direction_out] {
                if let Location::Anchor(direction) = direction {
                    return Err(DrapeError::InvalidAnchorCombination { direction, settled });
                }
            }
        }

        let mut warnings = Vec::new();
        if self.duration < 0.0 {
            warnings.push(ConfigurationWarning::NegativeDuration(self.duration));
        }

        for warning in &warnings {
            warn!("{}", warning);
        }
        Ok(warnings)
    }
}

impl Default for TransitionSettings {
    fn default() -> Self {
        Self::standard()
    }
}
