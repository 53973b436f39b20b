//! Span and guide-line primitives for alignment detection.

use kurbo::{Point, Rect, Size};
use peniko::Color;

use crate::viewport::Viewport;

/// Axis selector for alignment comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// The perpendicular axis (a guide line's length axis).
    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// Guide line orientation.
///
/// Alignment on the X axis produces a vertical line, and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl From<Axis> for Orientation {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::X => Orientation::Vertical,
            Axis::Y => Orientation::Horizontal,
        }
    }
}

/// Minimal canvas-space interval covering two rectangles on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub start: f64,
    pub end: f64,
}

impl Span {
    /// Length of the interval.
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Check whether a coordinate lies inside the interval (inclusive).
    pub fn contains(&self, value: f64) -> bool {
        value >= self.start && value <= self.end
    }
}

/// Compute the joint extent of two rectangles along one axis.
///
/// `start` is the smaller near edge and `end` the larger far edge, so
/// `start <= end` holds for non-negative sizes and the result is symmetric
/// in its rectangle arguments.
pub fn compute_span(axis: Axis, a: Rect, b: Rect) -> Span {
    match axis {
        Axis::X => Span {
            start: a.x0.min(b.x0),
            end: a.x1.max(b.x1),
        },
        Axis::Y => Span {
            start: a.y0.min(b.y0),
            end: a.y1.max(b.y1),
        },
    }
}

/// A renderable guide line descriptor in screen space.
///
/// Guide lines are rebuilt from scratch on every drag frame and never
/// diffed against the previous frame, so `key` only needs to be unique
/// within a single frame.
#[derive(Debug, Clone)]
pub struct GuideLine {
    pub orientation: Orientation,
    /// Rendering identity: axis prefix, rounded canvas coordinate, and an
    /// occurrence counter within the frame.
    pub key: String,
    /// Screen-space translate offset for the line's top-left corner.
    pub screen_origin: Point,
    /// Length of the line in screen pixels.
    pub screen_length: f64,
    pub color: Color,
}

impl GuideLine {
    /// Screen-space size: one device pixel across, `screen_length` along.
    pub fn screen_size(&self) -> Size {
        match self.orientation {
            Orientation::Vertical => Size::new(1.0, self.screen_length),
            Orientation::Horizontal => Size::new(self.screen_length, 1.0),
        }
    }
}

/// Build a guide line at `canvas_coord` on `axis`, covering `span` on the
/// perpendicular axis, mapped into screen space with the live viewport.
///
/// `seq` is the guide's occurrence index within the current frame; it keeps
/// keys unique when several guides land on the same coordinate.
pub fn build_guide_line(
    axis: Axis,
    canvas_coord: f64,
    span: Span,
    viewport: &Viewport,
    seq: usize,
    color: Color,
) -> GuideLine {
    let canvas_origin = match axis {
        Axis::X => Point::new(canvas_coord, span.start),
        Axis::Y => Point::new(span.start, canvas_coord),
    };
    let prefix = match axis {
        Axis::X => 'v',
        Axis::Y => 'h',
    };

    GuideLine {
        orientation: axis.into(),
        key: format!("{}-{}-{}", prefix, canvas_coord.round(), seq),
        screen_origin: viewport.canvas_to_screen(canvas_origin),
        screen_length: span.length() * viewport.zoom,
        color,
    }
}
