//! Regular polygon tool: press at the center, drag out radius and rotation.

use super::{ButtonState, Outline, Tool, finished_entity, finished_geometry};
use crate::config::{CenterMode, OptionSnapshot};
use crate::document::{DocumentEntity, Geometry, ObjectSink};
use crate::error::ToolError;
use crate::geometry::{Point, Polygon, exscribed_polygon, inscribed_polygon};
use log::{debug, warn};

/// Gesture parameters captured once at pointer-down.
#[derive(Debug, Clone, Copy)]
pub struct PolygonParams {
    /// Side count, validated to be at least 3 before the gesture activates.
    pub sides: u32,
    /// Vertices on the reference circle (true) vs edges tangent to it.
    pub inscribed: bool,
    /// How the host interprets the anchor point.
    pub center_mode: CenterMode,
    /// Fill the finished polygon instead of stroking it.
    pub fill: bool,
}

impl Default for PolygonParams {
    fn default() -> Self {
        Self {
            sides: 3,
            inscribed: true,
            center_mode: CenterMode::default(),
            fill: false,
        }
    }
}

/// Single-gesture regular polygon construction.
///
/// The press position is the center; the live pointer position defines both
/// the radius and the rotation angle of the polygon.
#[derive(Debug, Default)]
pub struct PolygonTool {
    active: bool,
    center: Point,
    current: Point,
    params: PolygonParams,
    finished: Option<DocumentEntity>,
}

impl PolygonTool {
    /// Creates an idle polygon tool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters of the current (or last) gesture.
    pub fn params(&self) -> &PolygonParams {
        &self.params
    }

    fn radius(&self) -> f64 {
        self.current.distance(self.center)
    }

    /// Rotation angle from center to the live pointer; 0 when they
    /// coincide, avoiding the undefined atan2(0, 0).
    fn angle(&self) -> f64 {
        let d = self.current - self.center;
        if d.x == 0.0 && d.y == 0.0 {
            0.0
        } else {
            d.y.atan2(d.x)
        }
    }

    fn build(&self) -> Result<Polygon, ToolError> {
        if self.params.inscribed {
            inscribed_polygon(self.params.sides, self.center, self.radius(), self.angle())
        } else {
            exscribed_polygon(self.params.sides, self.center, self.radius(), self.angle())
        }
    }

    fn finalize(&mut self, sink: &mut dyn ObjectSink) -> Result<(), ToolError> {
        let geometry = Geometry::Polygon(self.build()?);
        if geometry.is_degenerate() {
            warn!("Finalizing zero-radius polygon at {:?}", self.center);
        }
        let entity = DocumentEntity::shape(geometry, self.params.fill);
        debug!(
            "Polygon gesture finished: {} sides, radius {:.3}",
            self.params.sides,
            self.radius()
        );
        self.finished = Some(entity.clone());
        self.active = false;
        sink.object_created(entity);
        Ok(())
    }
}

impl Tool for PolygonTool {
    fn active(&self) -> bool {
        self.active
    }

    fn pointer_down(
        &mut self,
        pos: Point,
        options: &OptionSnapshot,
        _sink: &mut dyn ObjectSink,
    ) -> Result<(), ToolError> {
        // Reject unusable configuration before the gesture activates, so
        // every active gesture stays previewable.
        if options.sides < 3 {
            return Err(ToolError::InvalidConfiguration(format!(
                "polygon needs at least 3 sides, got {}",
                options.sides
            )));
        }
        self.params = PolygonParams {
            sides: options.sides,
            inscribed: options.inscribed,
            center_mode: options.center_mode,
            fill: options.fill,
        };
        self.center = pos;
        self.current = pos;
        self.finished = None;
        self.active = true;
        Ok(())
    }

    fn pointer_move(
        &mut self,
        pos: Point,
        _buttons: ButtonState,
        _sink: &mut dyn ObjectSink,
    ) -> Result<(), ToolError> {
        if self.active {
            self.current = pos;
        }
        Ok(())
    }

    /// Guarded: release without an active gesture is a no-op.
    fn pointer_up(&mut self, sink: &mut dyn ObjectSink) -> Result<(), ToolError> {
        if self.active {
            self.finalize(sink)?;
        }
        Ok(())
    }

    fn force_finalize(&mut self, sink: &mut dyn ObjectSink) -> Result<(), ToolError> {
        self.pointer_up(sink)
    }

    fn preview(&self) -> Option<Outline> {
        if !self.active {
            return None;
        }
        // Side count was validated at gesture start, so build cannot fail.
        self.build().ok().map(|p| Outline::Polygon(p.vertices))
    }

    fn result(&self) -> Result<Geometry, ToolError> {
        finished_geometry(self.finished.as_ref())
    }

    fn document_object(&self) -> Result<DocumentEntity, ToolError> {
        finished_entity(self.finished.as_ref())
    }
}
