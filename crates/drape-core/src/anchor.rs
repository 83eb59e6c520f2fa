// crates/drape-core/src/anchor.rs
use crate::{ConfigurationWarning, DrapeError};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

/// One of the nine compass positions inside a rectangular container.
///
/// The discriminants follow the index order used by [`Anchor::from_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Anchor {
    BottomLeft = 0,
    Bottom = 1,
    BottomRight = 2,
    Right = 3,
    Center = 4,
    TopRight = 5,
    Top = 6,
    TopLeft = 7,
    Left = 8,
}

/// Placement of an element along one axis of its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Flush with the left or top edge
    Start,
    /// Centered
    Middle,
    /// Flush with the right or bottom edge
    End,
}

impl Align {
    /// Offset that places `extent` at this alignment inside `container_extent`.
    pub fn inset(self, extent: f32, container_extent: f32) -> f32 {
        match self {
            Align::Start => 0.0,
            Align::Middle => (container_extent - extent) / 2.0,
            Align::End => container_extent - extent,
        }
    }

    /// Offset that places `extent` just past the edge this alignment names.
    /// A centered alignment has no edge to leave through.
    pub fn outset(self, extent: f32, container_extent: f32) -> Option<f32> {
        match self {
            Align::Start => Some(-extent),
            Align::Middle => None,
            Align::End => Some(container_extent + extent),
        }
    }
}

// (horizontal, vertical) alignment, indexed by discriminant.
const PLACEMENT: [(Align, Align); 9] = [
    (Align::Start, Align::End),    // BottomLeft
    (Align::Middle, Align::End),   // Bottom
    (Align::End, Align::End),      // BottomRight
    (Align::End, Align::Middle),   // Right
    (Align::Middle, Align::Middle), // Center
    (Align::End, Align::Start),    // TopRight
    (Align::Middle, Align::Start), // Top
    (Align::Start, Align::Start),  // TopLeft
    (Align::Start, Align::Middle), // Left
];

impl Anchor {
    pub const ALL: [Anchor; 9] = [
        Anchor::BottomLeft,
        Anchor::Bottom,
        Anchor::BottomRight,
        Anchor::Right,
        Anchor::Center,
        Anchor::TopRight,
        Anchor::Top,
        Anchor::TopLeft,
        Anchor::Left,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Horizontal alignment of this anchor.
    pub fn column(self) -> Align {
        PLACEMENT[self.index()].0
    }

    /// Vertical alignment of this anchor.
    pub fn row(self) -> Align {
        PLACEMENT[self.index()].1
    }

    pub fn is_corner(self) -> bool {
        self.column() != Align::Middle && self.row() != Align::Middle
    }

    pub fn xpos(self, size: Vec2, container: Vec2) -> f32 {
        self.column().inset(size.x, container.x)
    }

    pub fn ypos(self, size: Vec2, container: Vec2) -> f32 {
        self.row().inset(size.y, container.y)
    }

    /// Top-left coordinate placing an element of `size` at this anchor inside
    /// `container`. No bounds checking: oversized or negative inputs produce the
    /// plain arithmetic result.
    pub fn origin(self, size: Vec2, container: Vec2) -> Vec2 {
        Vec2::new(self.xpos(size, container), self.ypos(size, container))
    }

    /// Top-left coordinate placing an element just outside the container edge this
    /// direction names.
    ///
    /// Edge directions keep the cross axis of the `settled` anchor, so an element
    /// entering from the left slides in at the height it comes to rest at. Corner
    /// directions ignore `settled`, and `Center` resolves to the centered origin.
    pub fn offscreen_origin(self, settled: Anchor, size: Vec2, container: Vec2) -> Vec2 {
        if self == Anchor::Center {
            return self.origin(size, container);
        }

        let x = self
            .column()
            .outset(size.x, container.x)
            .unwrap_or_else(|| settled.xpos(size, container));
        let y = self
            .row()
            .outset(size.y, container.y)
            .unwrap_or_else(|| settled.ypos(size, container));

        Vec2::new(x, y)
    }

    /// Lenient index lookup. Indices outside 0..=8 fall back to `Center` and the
    /// substitution is returned as a warning.
    pub fn from_index(index: i64) -> (Anchor, Option<ConfigurationWarning>) {
        match Anchor::try_from(index) {
            Ok(anchor) => (anchor, None),
            Err(_) => {
                let warning = ConfigurationWarning::AnchorIndexOutOfRange {
                    index,
                    substituted: Anchor::Center,
                };
                warn!("{}", warning);
                (Anchor::Center, Some(warning))
            }
        }
    }
}

impl TryFrom<i64> for Anchor {
    type Error = DrapeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|i| Anchor::ALL.get(i).copied())
            .ok_or(DrapeError::AnchorIndexOutOfRange(value))
    }
}

impl FromStr for Anchor {
    type Err = DrapeError;

    /// Accepts snake_case, camelCase and kebab-case names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let anchor = match key.as_str() {
            "bottomleft" => Anchor::BottomLeft,
            "bottom" => Anchor::Bottom,
            "bottomright" => Anchor::BottomRight,
            "right" => Anchor::Right,
            "center" => Anchor::Center,
            "topright" => Anchor::TopRight,
            "top" => Anchor::Top,
            "topleft" => Anchor::TopLeft,
            "left" => Anchor::Left,
            _ => return Err(DrapeError::UnknownAnchor(s.to_string())),
        };
        Ok(anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER: Vec2 = Vec2::new(300.0, 200.0);
    const SIZE: Vec2 = Vec2::new(100.0, 50.0);

    #[test]
    fn test_origin_table() {
        let expected = [
            (Anchor::TopLeft, Vec2::new(0.0, 0.0)),
            (Anchor::Top, Vec2::new(100.0, 0.0)),
            (Anchor::TopRight, Vec2::new(200.0, 0.0)),
            (Anchor::Left, Vec2::new(0.0, 75.0)),
            (Anchor::Center, Vec2::new(100.0, 75.0)),
            (Anchor::Right, Vec2::new(200.0, 75.0)),
            (Anchor::BottomLeft, Vec2::new(0.0, 150.0)),
            (Anchor::Bottom, Vec2::new(100.0, 150.0)),
            (Anchor::BottomRight, Vec2::new(200.0, 150.0)),
        ];

        for (anchor, origin) in expected {
            assert_eq!(anchor.origin(SIZE, CONTAINER), origin, "{:?}", anchor);
        }
    }

    #[test]
    fn test_origin_stays_inside_container() {
        for anchor in Anchor::ALL {
            let origin = anchor.origin(SIZE, CONTAINER);
            let max = origin + SIZE;
            assert!(origin.x >= 0.0 && origin.y >= 0.0, "{:?}", anchor);
            assert!(max.x <= CONTAINER.x && max.y <= CONTAINER.y, "{:?}", anchor);
        }
    }

    #[test]
    fn test_corners_match_container_minus_size() {
        let span = CONTAINER - SIZE;
        assert_eq!(Anchor::TopLeft.origin(SIZE, CONTAINER), Vec2::ZERO);
        assert_eq!(Anchor::TopRight.origin(SIZE, CONTAINER), Vec2::new(span.x, 0.0));
        assert_eq!(Anchor::BottomLeft.origin(SIZE, CONTAINER), Vec2::new(0.0, span.y));
        assert_eq!(Anchor::BottomRight.origin(SIZE, CONTAINER), span);
    }

    #[test]
    fn test_origin_is_unchecked_for_oversized_elements() {
        let origin = Anchor::BottomRight.origin(Vec2::new(400.0, 300.0), CONTAINER);
        assert_eq!(origin, Vec2::new(-100.0, -100.0));
    }

    #[test]
    fn test_offscreen_corners_ignore_settled_anchor() {
        for settled in Anchor::ALL {
            assert_eq!(
                Anchor::TopLeft.offscreen_origin(settled, SIZE, CONTAINER),
                Vec2::new(-100.0, -50.0)
            );
            assert_eq!(
                Anchor::TopRight.offscreen_origin(settled, SIZE, CONTAINER),
                Vec2::new(400.0, -50.0)
            );
            assert_eq!(
                Anchor::BottomLeft.offscreen_origin(settled, SIZE, CONTAINER),
                Vec2::new(-100.0, 250.0)
            );
            assert_eq!(
                Anchor::BottomRight.offscreen_origin(settled, SIZE, CONTAINER),
                Vec2::new(400.0, 250.0)
            );
            assert_eq!(
                Anchor::Center.offscreen_origin(settled, SIZE, CONTAINER),
                Vec2::new(100.0, 75.0)
            );
        }
    }

    #[test]
    fn test_offscreen_edges_follow_settled_cross_axis() {
        for settled in Anchor::ALL {
            let left = Anchor::Left.offscreen_origin(settled, SIZE, CONTAINER);
            let right = Anchor::Right.offscreen_origin(settled, SIZE, CONTAINER);
            let top = Anchor::Top.offscreen_origin(settled, SIZE, CONTAINER);
            let bottom = Anchor::Bottom.offscreen_origin(settled, SIZE, CONTAINER);

            assert_eq!(left, Vec2::new(-SIZE.x, settled.ypos(SIZE, CONTAINER)));
            assert_eq!(right, Vec2::new(CONTAINER.x + SIZE.x, settled.ypos(SIZE, CONTAINER)));
            assert_eq!(top, Vec2::new(settled.xpos(SIZE, CONTAINER), -SIZE.y));
            assert_eq!(bottom, Vec2::new(settled.xpos(SIZE, CONTAINER), CONTAINER.y + SIZE.y));
        }
    }

    #[test]
    fn test_index_order() {
        for (i, anchor) in Anchor::ALL.iter().enumerate() {
            assert_eq!(Anchor::try_from(i as i64).unwrap(), *anchor);
            assert_eq!(Anchor::from_index(i as i64), (*anchor, None));
            assert_eq!(anchor.index(), i);
        }
        assert_eq!(Anchor::try_from(0).unwrap(), Anchor::BottomLeft);
        assert_eq!(Anchor::try_from(8).unwrap(), Anchor::Left);
    }

    #[test]
    fn test_out_of_range_index_falls_back_to_center() {
        for index in [9, -1, i64::MAX, i64::MIN] {
            let (anchor, warning) = Anchor::from_index(index);
            assert_eq!(anchor, Anchor::Center);
            assert_eq!(
                warning,
                Some(ConfigurationWarning::AnchorIndexOutOfRange {
                    index,
                    substituted: Anchor::Center,
                })
            );
        }
    }

    #[test]
    fn test_strict_index_reports_range_error() {
        assert!(matches!(
            Anchor::try_from(9),
            Err(DrapeError::AnchorIndexOutOfRange(9))
        ));
        assert!(matches!(
            Anchor::try_from(-1),
            Err(DrapeError::AnchorIndexOutOfRange(-1))
        ));
    }

    #[test]
    fn test_anchor_parsing() {
        assert_eq!("bottom_left".parse::<Anchor>().unwrap(), Anchor::BottomLeft);
        assert_eq!("topRight".parse::<Anchor>().unwrap(), Anchor::TopRight);
        assert_eq!("bottom-right".parse::<Anchor>().unwrap(), Anchor::BottomRight);
        assert_eq!(" Center ".parse::<Anchor>().unwrap(), Anchor::Center);
        assert!(matches!(
            "middle".parse::<Anchor>(),
            Err(DrapeError::UnknownAnchor(_))
        ));
    }

    #[test]
    fn test_corner_classification() {
        let corners: Vec<Anchor> = Anchor::ALL.into_iter().filter(|a| a.is_corner()).collect();
        assert_eq!(
            corners,
            vec![Anchor::BottomLeft, Anchor::BottomRight, Anchor::TopRight, Anchor::TopLeft]
        );
    }
}
