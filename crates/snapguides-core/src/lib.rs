//! Snap guide detection for node-based diagram canvases.
//!
//! While the host canvas drags a node, the [`alignment::AlignmentGuides`]
//! controller compares the dragged rectangle against every other node on
//! the canvas and publishes screen-space guide lines wherever edges or
//! centers nearly align. The host owns node geometry, drag dispatch, and
//! the viewport transform; rendering the published descriptors is equally
//! the host's concern.

pub mod alignment;
pub mod config;
pub mod geometry;
pub mod node;
pub mod viewport;

pub use alignment::{AlignmentGuides, DragMoveEvent};
pub use config::{AlignmentConfig, ConfigError, DEFAULT_TOLERANCE, GuideColor};
pub use geometry::{Axis, GuideLine, Orientation, Span, build_guide_line, compute_span};
pub use node::{NodeId, NodeRect};
pub use viewport::Viewport;
