//! Circle tool: press at the center, drag out the radius, release.

use super::{ButtonState, Outline, Tool, finished_entity, finished_geometry};
use crate::config::OptionSnapshot;
use crate::document::{DocumentEntity, Geometry, ObjectSink};
use crate::error::ToolError;
use crate::geometry::{Point, circle};
use log::{debug, warn};

/// Gesture parameters captured once at pointer-down.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircleParams {
    /// Fill the finished circle instead of stroking it.
    pub fill: bool,
}

/// Single-gesture circle construction.
///
/// Idle → Active on pointer-down (center fixed), radius tracks the pointer
/// on every move, pointer-up finalizes and emits.
#[derive(Debug, Default)]
pub struct CircleTool {
    active: bool,
    center: Point,
    radius: f64,
    params: CircleParams,
    finished: Option<DocumentEntity>,
}

impl CircleTool {
    /// Creates an idle circle tool.
    pub fn new() -> Self {
        Self::default()
    }

    fn finalize(&mut self, sink: &mut dyn ObjectSink) {
        let geometry = Geometry::Circle(circle(self.center, self.radius));
        if geometry.is_degenerate() {
            warn!("Finalizing zero-radius circle at {:?}", self.center);
        }
        let entity = DocumentEntity::shape(geometry, self.params.fill);
        debug!(
            "Circle gesture finished: center {:?}, radius {:.3}",
            self.center, self.radius
        );
        self.finished = Some(entity.clone());
        self.active = false;
        sink.object_created(entity);
    }
}

impl Tool for CircleTool {
    fn active(&self) -> bool {
        self.active
    }

    fn pointer_down(
        &mut self,
        pos: Point,
        options: &OptionSnapshot,
        _sink: &mut dyn ObjectSink,
    ) -> Result<(), ToolError> {
        self.center = pos;
        self.radius = 0.0;
        self.params = CircleParams { fill: options.fill };
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
            self.radius = pos.distance(self.center);
        }
        Ok(())
    }

    fn pointer_up(&mut self, sink: &mut dyn ObjectSink) -> Result<(), ToolError> {
        self.finalize(sink);
        Ok(())
    }

    fn force_finalize(&mut self, sink: &mut dyn ObjectSink) -> Result<(), ToolError> {
        if self.active {
            self.finalize(sink);
        }
        Ok(())
    }

    fn preview(&self) -> Option<Outline> {
        if !self.active {
            return None;
        }
        // Axis-aligned bounding ellipse of the live circle.
        Some(Outline::Ellipse {
            center: self.center,
            rx: self.radius,
            ry: self.radius,
        })
    }

    fn result(&self) -> Result<Geometry, ToolError> {
        finished_geometry(self.finished.as_ref())
    }

    fn document_object(&self) -> Result<DocumentEntity, ToolError> {
        finished_entity(self.finished.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentLog;

    #[test]
    fn drag_gesture_produces_circle_with_pointer_radius() {
        let mut tool = CircleTool::new();
        let mut log = DocumentLog::new();
        let options = OptionSnapshot::default();

        tool.pointer_down(Point::new(10.0, 10.0), &options, &mut log)
            .unwrap();
        assert!(tool.active());
        tool.pointer_move(Point::new(13.0, 14.0), ButtonState::left_held(), &mut log)
            .unwrap();
        tool.pointer_up(&mut log).unwrap();

        assert!(!tool.active());
        assert_eq!(log.len(), 1);
        match tool.result().unwrap() {
            Geometry::Circle(c) => {
                assert_eq!(c.center, Point::new(10.0, 10.0));
                assert!((c.radius - 5.0).abs() < f64::EPSILON);
            }
            other => panic!("expected circle, got {other:?}"),
        }
    }

    #[test]
    fn fill_flag_is_captured_at_gesture_start() {
        let mut tool = CircleTool::new();
        let mut log = DocumentLog::new();
        let filled = OptionSnapshot {
            fill: true,
            ..Default::default()
        };

        tool.pointer_down(Point::new(0.0, 0.0), &filled, &mut log)
            .unwrap();
        tool.pointer_move(Point::new(2.0, 0.0), ButtonState::left_held(), &mut log)
            .unwrap();
        tool.pointer_up(&mut log).unwrap();

        assert!(matches!(
            tool.document_object().unwrap(),
            DocumentEntity::Filled(_)
        ));
    }

    #[test]
    fn result_before_any_finalize_is_invalid_state() {
        let tool = CircleTool::new();
        assert!(matches!(tool.result(), Err(ToolError::InvalidState(_))));
        assert!(matches!(
            tool.document_object(),
            Err(ToolError::InvalidState(_))
        ));
    }

    #[test]
    fn preview_is_bounding_ellipse_and_idempotent() {
        let mut tool = CircleTool::new();
        let mut log = DocumentLog::new();

        assert!(tool.preview().is_none());
        tool.pointer_down(Point::new(1.0, 2.0), &OptionSnapshot::default(), &mut log)
            .unwrap();
        tool.pointer_move(Point::new(4.0, 2.0), ButtonState::left_held(), &mut log)
            .unwrap();

        let first = tool.preview().unwrap();
        assert_eq!(first, tool.preview().unwrap());
        assert_eq!(
            first,
            Outline::Ellipse {
                center: Point::new(1.0, 2.0),
                rx: 3.0,
                ry: 3.0,
            }
        );
    }

    #[test]
    fn force_finalize_matches_pointer_up_while_active() {
        let mut tool = CircleTool::new();
        let mut log = DocumentLog::new();

        tool.pointer_down(Point::new(0.0, 0.0), &OptionSnapshot::default(), &mut log)
            .unwrap();
        tool.pointer_move(Point::new(0.0, 7.0), ButtonState::left_held(), &mut log)
            .unwrap();
        tool.force_finalize(&mut log).unwrap();

        assert!(!tool.active());
        assert_eq!(log.len(), 1);

        // Inactive force-finalize stays silent.
        tool.force_finalize(&mut log).unwrap();
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn new_gesture_clears_previous_result() {
        let mut tool = CircleTool::new();
        let mut log = DocumentLog::new();

        tool.pointer_down(Point::new(0.0, 0.0), &OptionSnapshot::default(), &mut log)
            .unwrap();
        tool.pointer_up(&mut log).unwrap();
        assert!(tool.result().is_ok());

        tool.pointer_down(Point::new(5.0, 5.0), &OptionSnapshot::default(), &mut log)
            .unwrap();
        assert!(matches!(tool.result(), Err(ToolError::InvalidState(_))));
    }
}
