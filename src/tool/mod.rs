//! Event-driven construction tools and their shared contract.
//!
//! Each tool is a state machine over the same pointer-event contract:
//! `pointer_down` starts (or continues) a gesture, `pointer_move` updates
//! live preview state, `pointer_up` and `force_finalize` complete it. A
//! finished gesture hands exactly one document entity to the sink,
//! synchronously, at the moment finalization succeeds.

pub mod circle;
pub mod events;
pub mod label;
pub mod manager;
pub mod path;
pub mod polygon;

// Re-export commonly used types at module level
pub use circle::CircleTool;
pub use events::ButtonState;
pub use label::LabelTool;
pub use manager::{ToolKind, ToolManager};
pub use path::PathTool;
pub use polygon::PolygonTool;

use crate::config::OptionSnapshot;
use crate::document::{DocumentEntity, Geometry, ObjectSink};
use crate::error::ToolError;
use crate::geometry::{CubicSegment, Point};

/// Renderable preview outline for a gesture in progress.
///
/// Cheap to produce and purely descriptive; the rendering layer decides how
/// to stroke it.
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    /// Axis-aligned ellipse given by center and radii.
    Ellipse { center: Point, rx: f64, ry: f64 },
    /// Closed polygon through the listed vertices.
    Polygon(Vec<Point>),
    /// Sequence of cubic segments.
    Path(Vec<CubicSegment>),
}

/// The shared contract every construction tool implements.
///
/// Methods that can finalize take the sink so the completion notification
/// fires inside the same call that completes the gesture. All methods run
/// on the editor's event thread; none blocks.
pub trait Tool {
    /// True between a gesture's first committing event and its finalization.
    fn active(&self) -> bool;

    /// Begins a new gesture or continues the current one. Configuration is
    /// read from `options` exactly once, when a gesture starts.
    fn pointer_down(
        &mut self,
        pos: Point,
        options: &OptionSnapshot,
        sink: &mut dyn ObjectSink,
    ) -> Result<(), ToolError>;

    /// Updates live/preview state. Only the path tool finalizes from here
    /// (auto-completion when the pointer travels free of buttons).
    fn pointer_move(
        &mut self,
        pos: Point,
        buttons: ButtonState,
        sink: &mut dyn ObjectSink,
    ) -> Result<(), ToolError>;

    /// Gesture-type-specific release handling: drag tools finalize, the
    /// path tool commits a node and waits for more input.
    fn pointer_up(&mut self, sink: &mut dyn ObjectSink) -> Result<(), ToolError>;

    /// Externally triggered completion (tool switch, Escape). Emits a valid
    /// object from whatever state is present; a no-op while inactive.
    fn force_finalize(&mut self, sink: &mut dyn ObjectSink) -> Result<(), ToolError>;

    /// Explicit closed-path completion. Meaningful for the path tool; a
    /// no-op everywhere else.
    fn finalize_closure(&mut self, _sink: &mut dyn ObjectSink) -> Result<(), ToolError> {
        Ok(())
    }

    /// Displayable outline for the current state, or `None` when there is
    /// nothing to show. Never mutates committed state.
    fn preview(&self) -> Option<Outline>;

    /// The finalized core geometric value of the last completed gesture.
    fn result(&self) -> Result<Geometry, ToolError>;

    /// The finalized geometry wrapped per the captured fill/style
    /// configuration.
    fn document_object(&self) -> Result<DocumentEntity, ToolError>;
}

/// Extracts the geometric payload from a finished entity.
pub(crate) fn entity_geometry(entity: &DocumentEntity) -> Geometry {
    match entity {
        DocumentEntity::Stroke(g) | DocumentEntity::Filled(g) => g.clone(),
        DocumentEntity::Label(label) => Geometry::Label(label.clone()),
    }
}

/// Shared `result()` behavior: the last finished entity's payload, or
/// `InvalidState` when no gesture has finalized since the last start.
pub(crate) fn finished_geometry(
    finished: Option<&DocumentEntity>,
) -> Result<Geometry, ToolError> {
    finished
        .map(entity_geometry)
        .ok_or_else(|| ToolError::InvalidState("no finalized gesture".into()))
}

/// Shared `document_object()` behavior.
pub(crate) fn finished_entity(
    finished: Option<&DocumentEntity>,
) -> Result<DocumentEntity, ToolError> {
    finished
        .cloned()
        .ok_or_else(|| ToolError::InvalidState("no finalized gesture".into()))
}

#[cfg(test)]
mod tests;
