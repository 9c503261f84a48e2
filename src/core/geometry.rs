use serde::{Deserialize, Serialize};

/// Canvas-space position in the document layer's units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate by an offset, yielding an absolute position.
    pub fn offset_by(self, offset: Point) -> Point {
        Point {
            x: self.x + offset.x,
            y: self.y + offset.y,
        }
    }

    pub fn distance_to(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// True when `a` and `b` are close enough to be considered the same
/// connection point. The boundary itself counts as a hit.
pub fn within_snap_distance(a: Point, b: Point, tolerance: f32) -> bool {
    a.distance_to(b) <= tolerance
}
