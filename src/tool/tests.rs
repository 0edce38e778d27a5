//! Cross-tool gesture tests driving tools through the shared contract.

use super::*;
use crate::config::{LabelAlign, OptionSnapshot};
use crate::document::{DocumentEntity, DocumentLog, Geometry};
use crate::geometry::Point;

fn run_drag_gesture(
    tool: &mut dyn Tool,
    down: Point,
    up: Point,
    options: &OptionSnapshot,
    log: &mut DocumentLog,
) {
    tool.pointer_down(down, options, log).unwrap();
    tool.pointer_move(up, ButtonState::left_held(), log).unwrap();
    tool.pointer_up(log).unwrap();
}

#[test]
fn every_finalized_gesture_emits_exactly_one_entity() {
    let mut log = DocumentLog::new();
    let options = OptionSnapshot {
        text: Some("note".to_string()),
        ..Default::default()
    };

    let mut tools: Vec<Box<dyn Tool>> = vec![
        ToolKind::Circle.create(),
        ToolKind::Polygon.create(),
        ToolKind::Label.create(),
    ];
    for tool in &mut tools {
        run_drag_gesture(
            tool.as_mut(),
            Point::new(0.0, 0.0),
            Point::new(4.0, 3.0),
            &options,
            &mut log,
        );
    }
    assert_eq!(log.len(), 3);

    // Path: down + up + move-away.
    let mut path = ToolKind::Path.create();
    path.pointer_down(Point::new(0.0, 0.0), &options, &mut log)
        .unwrap();
    path.pointer_up(&mut log).unwrap();
    path.pointer_move(Point::new(9.0, 0.0), ButtonState::released(), &mut log)
        .unwrap();
    assert_eq!(log.len(), 4);

    // Redundant finalize attempts stay silent.
    for tool in &mut tools {
        tool.force_finalize(&mut log).unwrap();
    }
    path.force_finalize(&mut log).unwrap();
    assert_eq!(log.len(), 4);
}

#[test]
fn emitted_entity_matches_document_object() {
    let mut log = DocumentLog::new();
    let mut tool = CircleTool::new();

    run_drag_gesture(
        &mut tool,
        Point::new(2.0, 2.0),
        Point::new(2.0, 6.0),
        &OptionSnapshot::default(),
        &mut log,
    );

    assert_eq!(log.entities()[0], tool.document_object().unwrap());
}

#[test]
fn finalized_payload_round_trips_without_drift() {
    let mut log = DocumentLog::new();
    let mut tool = PathTool::new();
    let options = OptionSnapshot::default();
    let points = [
        Point::new(0.125, 0.25),
        Point::new(17.375, -3.5),
        Point::new(5.0625, 11.75),
    ];

    tool.pointer_down(points[0], &options, &mut log).unwrap();
    for p in &points[1..] {
        tool.pointer_move(*p, ButtonState::left_held(), &mut log)
            .unwrap();
        tool.pointer_up(&mut log).unwrap();
    }
    tool.force_finalize(&mut log).unwrap();

    // The committed coordinates survive wrapping and re-extraction exactly.
    let Geometry::Path(path) = tool.result().unwrap() else {
        panic!("expected path");
    };
    for (node, expected) in path.nodes.iter().zip(points) {
        assert_eq!(node.point, expected);
    }
    let DocumentEntity::Stroke(Geometry::Path(emitted)) = &log.entities()[0] else {
        panic!("expected stroked path");
    };
    assert_eq!(*emitted, path);
}

#[test]
fn preview_is_stable_between_events_for_all_tools() {
    let mut log = DocumentLog::new();
    let options = OptionSnapshot {
        sides: 5,
        ..Default::default()
    };

    for kind in [ToolKind::Circle, ToolKind::Polygon, ToolKind::Path] {
        let mut tool = kind.create();
        tool.pointer_down(Point::new(1.0, 1.0), &options, &mut log)
            .unwrap();
        tool.pointer_move(Point::new(7.0, 4.0), ButtonState::left_held(), &mut log)
            .unwrap();
        let first = tool.preview();
        assert!(first.is_some(), "{kind:?} should preview while active");
        assert_eq!(first, tool.preview());
        assert_eq!(first, tool.preview());
    }
}

#[test]
fn tools_are_reusable_across_consecutive_gestures() {
    let mut log = DocumentLog::new();
    let mut tool = PolygonTool::new();
    let options = OptionSnapshot {
        sides: 4,
        ..Default::default()
    };

    run_drag_gesture(
        &mut tool,
        Point::new(0.0, 0.0),
        Point::new(3.0, 0.0),
        &options,
        &mut log,
    );
    run_drag_gesture(
        &mut tool,
        Point::new(10.0, 10.0),
        Point::new(10.0, 15.0),
        &options,
        &mut log,
    );

    assert_eq!(log.len(), 2);
    match tool.result().unwrap() {
        Geometry::Polygon(poly) => {
            for v in &poly.vertices {
                assert!((v.distance(Point::new(10.0, 10.0)) - 5.0).abs() < 1e-9);
            }
        }
        other => panic!("expected polygon, got {other:?}"),
    }
}

#[test]
fn label_entity_carries_text_align_and_anchor() {
    let mut log = DocumentLog::new();
    let mut tool = LabelTool::new();
    let options = OptionSnapshot {
        align: LabelAlign::SouthEast,
        text: Some("P_0".to_string()),
        ..Default::default()
    };

    run_drag_gesture(
        &mut tool,
        Point::new(0.0, 0.0),
        Point::new(12.0, 7.0),
        &options,
        &mut log,
    );

    match &log.entities()[0] {
        DocumentEntity::Label(record) => {
            assert_eq!(record.text.as_deref(), Some("P_0"));
            assert_eq!(record.align, LabelAlign::SouthEast);
            assert_eq!(record.anchor, Point::new(12.0, 7.0));
        }
        other => panic!("expected label, got {other:?}"),
    }
}
