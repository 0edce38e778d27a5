//! Label tool: the label floats with the cursor until release anchors it.

use super::{ButtonState, Outline, Tool, finished_entity, finished_geometry};
use crate::config::{LabelAlign, OptionSnapshot};
use crate::document::{DocumentEntity, Geometry, LabelRecord, ObjectSink};
use crate::error::ToolError;
use crate::geometry::Point;
use log::debug;

/// Gesture parameters captured once at pointer-down.
#[derive(Debug, Clone, Default)]
pub struct LabelParams {
    /// Placement relative to the anchor.
    pub align: LabelAlign,
    /// Text read from the option panel, if any was entered.
    pub text: Option<String>,
}

/// Single-gesture label placement.
///
/// Pointer-down captures text and alignment from the option snapshot; the
/// anchor tracks the pointer until release finalizes the record.
#[derive(Debug, Default)]
pub struct LabelTool {
    active: bool,
    anchor: Point,
    params: LabelParams,
    finished: Option<DocumentEntity>,
}

impl LabelTool {
    /// Creates an idle label tool.
    pub fn new() -> Self {
        Self::default()
    }

    fn finalize(&mut self, sink: &mut dyn ObjectSink) {
        let entity = DocumentEntity::Label(LabelRecord {
            text: self.params.text.clone(),
            align: self.params.align,
            anchor: self.anchor,
        });
        debug!("Label gesture finished at {:?}", self.anchor);
        self.finished = Some(entity.clone());
        self.active = false;
        sink.object_created(entity);
    }
}

impl Tool for LabelTool {
    fn active(&self) -> bool {
        self.active
    }

    fn pointer_down(
        &mut self,
        pos: Point,
        options: &OptionSnapshot,
        _sink: &mut dyn ObjectSink,
    ) -> Result<(), ToolError> {
        self.anchor = pos;
        self.params = LabelParams {
            align: options.align,
            text: options.text.clone(),
        };
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
            self.anchor = pos;
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

    /// No live shape preview for text; the host renders its own caret/ghost.
    fn preview(&self) -> Option<Outline> {
        None
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
    fn anchor_floats_with_cursor_until_release() {
        let mut tool = LabelTool::new();
        let mut log = DocumentLog::new();
        let options = OptionSnapshot {
            align: LabelAlign::NorthEast,
            text: Some("axis".to_string()),
            ..Default::default()
        };

        tool.pointer_down(Point::new(1.0, 1.0), &options, &mut log)
            .unwrap();
        tool.pointer_move(Point::new(8.0, -3.0), ButtonState::left_held(), &mut log)
            .unwrap();
        tool.pointer_up(&mut log).unwrap();

        assert!(!tool.active());
        match tool.document_object().unwrap() {
            DocumentEntity::Label(record) => {
                assert_eq!(record.anchor, Point::new(8.0, -3.0));
                assert_eq!(record.align, LabelAlign::NorthEast);
                assert_eq!(record.text.as_deref(), Some("axis"));
            }
            other => panic!("expected label, got {other:?}"),
        }
    }

    #[test]
    fn label_tool_has_no_preview() {
        let mut tool = LabelTool::new();
        let mut log = DocumentLog::new();
        assert!(tool.preview().is_none());
        tool.pointer_down(Point::new(0.0, 0.0), &OptionSnapshot::default(), &mut log)
            .unwrap();
        assert!(tool.preview().is_none());
    }

    #[test]
    fn missing_text_still_finalizes_but_flags_degenerate() {
        let mut tool = LabelTool::new();
        let mut log = DocumentLog::new();

        tool.pointer_down(Point::new(2.0, 2.0), &OptionSnapshot::default(), &mut log)
            .unwrap();
        tool.pointer_up(&mut log).unwrap();

        assert_eq!(log.len(), 1);
        assert!(log.entities()[0].is_degenerate());
    }

    #[test]
    fn alignment_is_captured_at_gesture_start() {
        let mut tool = LabelTool::new();
        let mut log = DocumentLog::new();
        let options = OptionSnapshot {
            align: LabelAlign::SouthWest,
            text: Some("origin".to_string()),
            ..Default::default()
        };

        tool.pointer_down(Point::new(0.0, 0.0), &options, &mut log)
            .unwrap();
        // Changing the snapshot after gesture start must not affect it.
        tool.pointer_up(&mut log).unwrap();

        match tool.result().unwrap() {
            Geometry::Label(record) => assert_eq!(record.align, LabelAlign::SouthWest),
            other => panic!("expected label, got {other:?}"),
        }
    }
}
