use super::geometry::Point;
use super::types::PinAddress;
use serde::{Deserialize, Serialize};

/// Read-only simulation view of a drawn wire.
///
/// Only the first and last control points participate in connectivity;
/// interior bend points are rendering geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireDesc {
    pub points: Vec<Point>,
}

impl WireDesc {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Straight two-point wire.
    pub fn between(start: Point, end: Point) -> Self {
        Self {
            points: vec![start, end],
        }
    }

    pub fn first_point(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last_point(&self) -> Option<Point> {
        self.points.last().copied()
    }
}

/// Per-wire resolution record produced by the connection graph builder.
///
/// `is_connected` is false when either endpoint failed to resolve to a pin
/// or when both endpoints resolved to outputs (a rejected short circuit).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireConnection {
    pub start: Option<PinAddress>,
    pub end: Option<PinAddress>,
    pub is_connected: bool,
}

impl WireConnection {
    pub fn unresolved() -> Self {
        Self {
            start: None,
            end: None,
            is_connected: false,
        }
    }

    /// The pin on the far side of this wire from `addr`, if the wire
    /// carries signal at all.
    pub fn opposite(&self, addr: &PinAddress) -> Option<PinAddress> {
        if !self.is_connected {
            return None;
        }
        match (self.start, self.end) {
            (Some(start), Some(end)) if start == *addr => Some(end),
            (Some(start), Some(end)) if end == *addr => Some(start),
            _ => None,
        }
    }
}
