//! Viewport transform between canvas and screen coordinates.

use kurbo::{Affine, Point, Vec2};
use serde::{Deserialize, Serialize};

use crate::geometry::Axis;

/// Snapshot of the host canvas's pan/zoom state.
///
/// Maps canvas-space (diagram-internal, zoom/pan-independent) coordinates
/// to screen-space pixels: `screen = canvas * zoom + offset`. The host owns
/// this state and may change it between drag frames, so alignment code
/// reads a fresh snapshot on every evaluation and never caches one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Current pan offset in screen pixels.
    pub offset: Vec2,
    /// Current zoom scale.
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl Viewport {
    /// Create a viewport with the given pan offset and zoom.
    pub fn new(offset: Vec2, zoom: f64) -> Self {
        Self { offset, zoom }
    }

    /// Get the affine transform from canvas to screen coordinates.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.zoom)
    }

    /// Get the inverse transform, from screen back to canvas coordinates.
    pub fn inverse_transform(&self) -> Affine {
        Affine::scale(1.0 / self.zoom) * Affine::translate(-self.offset)
    }

    /// Convert a canvas point to screen coordinates.
    pub fn canvas_to_screen(&self, canvas_point: Point) -> Point {
        self.transform() * canvas_point
    }

    /// Convert a screen point to canvas coordinates.
    pub fn screen_to_canvas(&self, screen_point: Point) -> Point {
        self.inverse_transform() * screen_point
    }

    /// Pan offset component along one axis.
    pub fn offset_on(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.offset.x,
            Axis::Y => self.offset.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_viewport_is_identity() {
        let viewport = Viewport::default();
        let canvas = Point::new(100.0, 200.0);
        let screen = viewport.canvas_to_screen(canvas);
        assert!((screen.x - canvas.x).abs() < f64::EPSILON);
        assert!((screen.y - canvas.y).abs() < f64::EPSILON);
    }

    #[test]
    fn test_canvas_to_screen_with_offset() {
        let viewport = Viewport::new(Vec2::new(50.0, 100.0), 1.0);
        let screen = viewport.canvas_to_screen(Point::new(100.0, 200.0));
        assert!((screen.x - 150.0).abs() < f64::EPSILON);
        assert!((screen.y - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_canvas_to_screen_with_zoom() {
        let viewport = Viewport::new(Vec2::ZERO, 2.0);
        let screen = viewport.canvas_to_screen(Point::new(100.0, 200.0));
        assert!((screen.x - 200.0).abs() < f64::EPSILON);
        assert!((screen.y - 400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zoom_applied_before_offset() {
        // screen = canvas * zoom + offset, not (canvas + offset) * zoom
        let viewport = Viewport::new(Vec2::new(10.0, 20.0), 2.0);
        let screen = viewport.canvas_to_screen(Point::new(50.0, 0.0));
        assert!((screen.x - 110.0).abs() < f64::EPSILON);
        assert!((screen.y - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_roundtrip_conversion() {
        let viewport = Viewport::new(Vec2::new(30.0, -20.0), 1.5);

        let original = Point::new(123.0, 456.0);
        let screen = viewport.canvas_to_screen(original);
        let back = viewport.screen_to_canvas(screen);

        assert!((back.x - original.x).abs() < 1e-10);
        assert!((back.y - original.y).abs() < 1e-10);
    }

    #[test]
    fn test_offset_on_axis() {
        let viewport = Viewport::new(Vec2::new(7.0, 11.0), 1.0);
        assert!((viewport.offset_on(Axis::X) - 7.0).abs() < f64::EPSILON);
        assert!((viewport.offset_on(Axis::Y) - 11.0).abs() < f64::EPSILON);
    }
}
