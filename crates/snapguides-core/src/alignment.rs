//! Alignment controller: drag handling and the published guide set.

use kurbo::Rect;
use peniko::Color;

use crate::config::AlignmentConfig;
use crate::geometry::{Axis, GuideLine, build_guide_line, compute_span};
use crate::node::NodeRect;
use crate::viewport::Viewport;

/// Payload of a drag-move event from the host canvas.
///
/// Carries the dragged node's id and current geometry, read fresh by the
/// host for every pointer-move tick.
#[derive(Debug, Clone, Copy)]
pub struct DragMoveEvent {
    pub node: NodeRect,
}

impl DragMoveEvent {
    pub fn new(node: NodeRect) -> Self {
        Self { node }
    }
}

/// Detects edge/center alignment between a dragged node and the other
/// nodes on the canvas, publishing guide lines for the renderer.
///
/// The guide set is the only state carried across callbacks within a drag
/// gesture. It is replaced wholesale on every evaluation and emptied on
/// drag end, so the renderer never sees guides from a previous frame mixed
/// with current ones. The host must attach the controller to its drag
/// lifecycle and detach it on teardown; evaluation itself is synchronous
/// and completes before control returns to the host.
#[derive(Debug, Clone, Default)]
pub struct AlignmentGuides {
    config: AlignmentConfig,
    guides: Vec<GuideLine>,
}

impl AlignmentGuides {
    /// Create a controller with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller with a custom configuration.
    pub fn with_config(config: AlignmentConfig) -> Self {
        Self {
            config,
            guides: Vec::new(),
        }
    }

    pub fn config(&self) -> &AlignmentConfig {
        &self.config
    }

    /// The currently published guide lines.
    ///
    /// Always reflects exactly the most recent drag-move evaluation, or is
    /// empty when no drag is in progress.
    pub fn guides(&self) -> &[GuideLine] {
        &self.guides
    }

    /// Evaluate alignment for one drag-move tick.
    ///
    /// Clears the previous frame's guides, compares the dragged node
    /// against every other measured node, and publishes the new set.
    /// `viewport` must be the host's live transform for this tick, since
    /// the user may zoom or pan mid-drag.
    pub fn on_drag_move(&mut self, event: &DragMoveEvent, nodes: &[NodeRect], viewport: &Viewport) {
        self.guides.clear();

        // An unmeasured dragged node has nothing well-defined to compare.
        let Some(dragged) = event.node.bounds() else {
            return;
        };

        let color = self.config.color();
        let mut seq = 0;

        for target in nodes {
            if target.id == event.node.id {
                continue;
            }
            let Some(target_bounds) = target.bounds() else {
                continue;
            };
            self.compare_axis(Axis::X, dragged, target_bounds, viewport, color, &mut seq);
            self.compare_axis(Axis::Y, dragged, target_bounds, viewport, color, &mut seq);
        }

        log::trace!("drag-move published {} guide line(s)", self.guides.len());
    }

    /// Clear the published set when the drag gesture ends.
    pub fn on_drag_end(&mut self) {
        self.guides.clear();
        log::trace!("drag-end cleared guide lines");
    }

    /// Compare one axis of a dragged/target pair: both edges and the
    /// centers, emitting a guide for every feature pair within tolerance.
    /// Simultaneous matches all emit independently; coincident guides from
    /// different pairs are not merged.
    fn compare_axis(
        &mut self,
        axis: Axis,
        dragged: Rect,
        target: Rect,
        viewport: &Viewport,
        color: Color,
        seq: &mut usize,
    ) {
        let tolerance = self.config.tolerance;
        // Joint extent on the perpendicular axis, shared by every guide
        // this pair produces.
        let span = compute_span(axis.other(), dragged, target);

        let (dragged_edges, target_edges, dragged_center, target_center) = match axis {
            Axis::X => (
                [dragged.x0, dragged.x1],
                [target.x0, target.x1],
                dragged.center().x,
                target.center().x,
            ),
            Axis::Y => (
                [dragged.y0, dragged.y1],
                [target.y0, target.y1],
                dragged.center().y,
                target.center().y,
            ),
        };

        for dragged_edge in dragged_edges {
            for target_edge in target_edges {
                if (dragged_edge - target_edge).abs() <= tolerance {
                    self.guides
                        .push(build_guide_line(axis, target_edge, span, viewport, *seq, color));
                    *seq += 1;
                }
            }
        }

        if (dragged_center - target_center).abs() <= tolerance {
            self.guides
                .push(build_guide_line(axis, target_center, span, viewport, *seq, color));
            *seq += 1;
        }
    }
}
