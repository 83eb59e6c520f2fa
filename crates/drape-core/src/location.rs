// crates/drape-core/src/location.rs
use crate::{Anchor, DrapeError, Result};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Either a literal coordinate or a symbolic anchor.
///
/// Literal points are absolute: they resolve to themselves regardless of sizes or
/// of what they are resolved relative to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Point(Vec2),
    Anchor(Anchor),
}

impl Location {
    pub fn point(x: f32, y: f32) -> Self {
        Location::Point(Vec2::new(x, y))
    }

    pub fn as_anchor(&self) -> Option<Anchor> {
        match self {
            Location::Anchor(anchor) => Some(*anchor),
            Location::Point(_) => None,
        }
    }

    pub fn is_point(&self) -> bool {
        matches!(self, Location::Point(_))
    }

    /// Resolve as a settled position.
    pub fn resolve(&self, size: Vec2, container: Vec2) -> Vec2 {
        match self {
            Location::Point(point) => *point,
            Location::Anchor(anchor) => anchor.origin(size, container),
        }
    }

    /// Resolve as an entry or exit direction relative to the `settled` location.
    ///
    /// A symbolic direction needs a symbolic settled position to borrow its cross
    /// axis from; pairing it with a literal point is reported as
    /// [`DrapeError::InvalidAnchorCombination`].
    pub fn resolve_relative(&self, settled: &Location, size: Vec2, container: Vec2) -> Result<Vec2> {
        match (self, settled) {
            (Location::Point(point), _) => Ok(*point),
            (Location::Anchor(direction), Location::Anchor(settled)) => {
                Ok(direction.offscreen_origin(*settled, size, container))
            }
            (Location::Anchor(direction), Location::Point(settled)) => {
                Err(DrapeError::InvalidAnchorCombination {
                    direction: *direction,
                    settled: *settled,
                })
            }
        }
    }
}

impl From<Anchor> for Location {
    fn from(anchor: Anchor) -> Self {
        Location::Anchor(anchor)
    }
}

impl From<Vec2> for Location {
    fn from(point: Vec2) -> Self {
        Location::Point(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_point_is_fixed() {
        let location = Location::point(12.0, -7.5);
        let sizes = [Vec2::ZERO, Vec2::new(50.0, 80.0), Vec2::new(-10.0, 1e6)];
        let relatives = [
            Location::Anchor(Anchor::Center),
            Location::Anchor(Anchor::TopLeft),
            Location::point(3.0, 4.0),
        ];

        for size in sizes {
            for container in sizes {
                assert_eq!(location.resolve(size, container), Vec2::new(12.0, -7.5));
                for relative in &relatives {
                    assert_eq!(
                        location.resolve_relative(relative, size, container).unwrap(),
                        Vec2::new(12.0, -7.5)
                    );
                }
            }
        }
    }

    #[test]
    fn test_anchor_resolution_delegates() {
        let size = Vec2::new(100.0, 100.0);
        let container = Vec2::new(300.0, 300.0);
        let location = Location::from(Anchor::BottomRight);

        assert_eq!(location.resolve(size, container), Vec2::new(200.0, 200.0));
        assert_eq!(
            Location::from(Anchor::TopLeft)
                .resolve_relative(&location, size, container)
                .unwrap(),
            Vec2::new(-100.0, -100.0)
        );
    }

    #[test]
    fn test_anchored_direction_against_point_is_an_error() {
        let settled = Location::point(10.0, 20.0);
        let direction = Location::Anchor(Anchor::Left);

        let err = direction
            .resolve_relative(&settled, Vec2::new(50.0, 50.0), Vec2::new(200.0, 200.0))
            .unwrap_err();
        match err {
            DrapeError::InvalidAnchorCombination { direction, settled } => {
                assert_eq!(direction, Anchor::Left);
                assert_eq!(settled, Vec2::new(10.0, 20.0));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_location_json_shape() {
        let anchor: Location = serde_json::from_str(r#"{"anchor":"top_left"}"#).unwrap();
        assert_eq!(anchor, Location::Anchor(Anchor::TopLeft));

        let point: Location = serde_json::from_str(r#"{"point":[4.0,8.0]}"#).unwrap();
        assert_eq!(point, Location::point(4.0, 8.0));
    }
}
