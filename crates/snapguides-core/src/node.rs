//! Node geometry as reported by the host canvas.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a node on the canvas.
pub type NodeId = Uuid;

/// A node's axis-aligned rectangle in canvas-space coordinates.
///
/// The host canvas owns and mutates node geometry; this crate only reads
/// it. `dimensions` stays `None` until the host has measured the node, and
/// unmeasured nodes are skipped during alignment comparison so no guide is
/// ever built from undefined values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeRect {
    /// Node identity, assigned by the host.
    pub id: NodeId,
    /// Top-left corner in canvas coordinates.
    pub position: Point,
    /// Measured width/height, if the host has measured the node yet.
    pub dimensions: Option<Size>,
}

impl NodeRect {
    /// Create a measured node rectangle.
    pub fn new(id: NodeId, position: Point, dimensions: Size) -> Self {
        Self {
            id,
            position,
            dimensions: Some(dimensions),
        }
    }

    /// Create a node the host has not measured yet.
    pub fn unmeasured(id: NodeId, position: Point) -> Self {
        Self {
            id,
            position,
            dimensions: None,
        }
    }

    /// Bounding rectangle, if the node has been measured.
    pub fn bounds(&self) -> Option<Rect> {
        self.dimensions
            .map(|size| Rect::from_origin_size(self.position, size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measured_bounds() {
        let node = NodeRect::new(Uuid::new_v4(), Point::new(10.0, 20.0), Size::new(100.0, 50.0));
        let bounds = node.bounds().unwrap();
        assert!((bounds.x0 - 10.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 110.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unmeasured_has_no_bounds() {
        let node = NodeRect::unmeasured(Uuid::new_v4(), Point::new(10.0, 20.0));
        assert!(node.bounds().is_none());
    }

    #[test]
    fn test_zero_size_bounds() {
        // Degenerate nodes participate with whatever size they carry.
        let node = NodeRect::new(Uuid::new_v4(), Point::new(5.0, 5.0), Size::ZERO);
        let bounds = node.bounds().unwrap();
        assert!(bounds.is_zero_area());
        assert!((bounds.x0 - bounds.x1).abs() < f64::EPSILON);
    }
}
