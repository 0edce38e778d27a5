//! Path tool: multi-click polyline/curve builder with move-triggered
//! auto-finalization.
//!
//! Unlike the drag tools, a release does not finish the gesture: each
//! release commits the tracked point as a new node and waits for more
//! input. The gesture completes when the pointer travels away with no
//! button held (open path), or through [`Tool::finalize_closure`] for an
//! explicit closed path.

use super::{ButtonState, Outline, Tool, finished_entity, finished_geometry};
use crate::config::OptionSnapshot;
use crate::document::{DocumentEntity, Geometry, ObjectSink};
use crate::error::ToolError;
use crate::geometry::{LinkMode, Path, PathNode, Point};
use log::{debug, warn};

/// Distance in device units beyond which a button-free move is read as
/// "moved away to finish" rather than pointer jitter.
pub const AUTO_FINALIZE_EPSILON: f64 = 2.0;

/// Gesture parameters captured once when the path gesture starts.
#[derive(Debug, Clone, Copy)]
pub struct PathParams {
    /// Fill the finished path instead of stroking it.
    pub fill: bool,
    /// The host requested closed-path completion for this gesture; it calls
    /// `finalize_closure` instead of letting the open auto-finalize run.
    pub closed_path: bool,
    /// Link mode for every segment committed during the gesture.
    pub link: LinkMode,
}

impl Default for PathParams {
    fn default() -> Self {
        Self {
            fill: false,
            closed_path: false,
            link: LinkMode::Curved,
        }
    }
}

/// Multi-click path construction state machine.
///
/// Idle → Building on the first pointer-down (which commits the first
/// node); each release appends the tracked point; a button-free move past
/// the tolerance finalizes the open path.
#[derive(Debug, Default)]
pub struct PathTool {
    active: bool,
    nodes: Vec<PathNode>,
    current: Point,
    params: PathParams,
    finished: Option<DocumentEntity>,
}

impl PathTool {
    /// Creates an idle path tool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters of the current (or last) gesture.
    pub fn params(&self) -> &PathParams {
        &self.params
    }

    /// Committed nodes of the gesture in progress.
    pub fn committed_nodes(&self) -> &[PathNode] {
        &self.nodes
    }

    fn emit(&mut self, path: Path, sink: &mut dyn ObjectSink) {
        let geometry = Geometry::Path(path);
        if geometry.is_degenerate() {
            warn!("Finalizing path with fewer than two nodes");
        }
        let entity = DocumentEntity::shape(geometry, self.params.fill);
        self.finished = Some(entity.clone());
        self.active = false;
        sink.object_created(entity);
    }
}

impl Tool for PathTool {
    fn active(&self) -> bool {
        self.active
    }

    /// Starts a new path on the first press; while building, a press only
    /// updates the tracked point (nodes grow via release).
    fn pointer_down(
        &mut self,
        pos: Point,
        options: &OptionSnapshot,
        _sink: &mut dyn ObjectSink,
    ) -> Result<(), ToolError> {
        self.current = pos;
        if !self.active {
            self.params = PathParams {
                fill: options.fill,
                closed_path: options.closed_path,
                link: options.link_mode(),
            };
            self.nodes = vec![PathNode::first(pos)];
            self.finished = None;
            self.active = true;
            debug!("Path gesture started at {pos:?}");
        }
        Ok(())
    }

    /// A button-free move past the tolerance means the user moved away to
    /// finish; otherwise the tracked point follows the pointer.
    fn pointer_move(
        &mut self,
        pos: Point,
        buttons: ButtonState,
        sink: &mut dyn ObjectSink,
    ) -> Result<(), ToolError> {
        if !self.active {
            return Ok(());
        }
        if !buttons.any_held() && pos.distance(self.current) > AUTO_FINALIZE_EPSILON {
            return self.force_finalize(sink);
        }
        self.current = pos;
        Ok(())
    }

    /// Commits the tracked point as a new node; never finalizes.
    fn pointer_up(&mut self, _sink: &mut dyn ObjectSink) -> Result<(), ToolError> {
        if self.active {
            self.nodes.push(PathNode::linked(self.current, self.params.link));
        }
        Ok(())
    }

    /// Builds the open path from the committed nodes and emits it. A no-op
    /// while inactive.
    fn force_finalize(&mut self, sink: &mut dyn ObjectSink) -> Result<(), ToolError> {
        if !self.active {
            return Ok(());
        }
        let path = Path::open(std::mem::take(&mut self.nodes));
        debug!("Path gesture finished open with {} nodes", path.nodes.len());
        self.emit(path, sink);
        Ok(())
    }

    /// Explicit closed-path completion: links the last node back to the
    /// first with the configured link mode. Only valid while active.
    fn finalize_closure(&mut self, sink: &mut dyn ObjectSink) -> Result<(), ToolError> {
        if !self.active {
            return Ok(());
        }
        let path = Path::closed(std::mem::take(&mut self.nodes), self.params.link);
        debug!(
            "Path gesture finished closed with {} nodes",
            path.nodes.len()
        );
        self.emit(path, sink);
        Ok(())
    }

    /// Committed nodes plus the uncommitted tracked point, with freshly
    /// derived controls. Never touches the committed list.
    fn preview(&self) -> Option<Outline> {
        if !self.active || self.nodes.is_empty() {
            return None;
        }
        let mut preview_nodes = self.nodes.clone();
        preview_nodes.push(PathNode::linked(self.current, self.params.link));
        let preview = Path::open(preview_nodes);
        Some(Outline::Path(preview.compute_controls()))
    }

    fn result(&self) -> Result<Geometry, ToolError> {
        finished_geometry(self.finished.as_ref())
    }

    fn document_object(&self) -> Result<DocumentEntity, ToolError> {
        finished_entity(self.finished.as_ref())
    }
}
