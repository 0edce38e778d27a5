//! Finalized geometry, document entities, and the completion notification.
//!
//! Tools hand finished objects to the host document through the
//! [`ObjectSink`] trait: exactly one synchronous `object_created` call per
//! finalized gesture. [`DocumentLog`] is the bundled sink — an append-only
//! collection the editor drains after dispatching events.

use crate::config::LabelAlign;
use crate::geometry::{Circle, Path, Point, Polygon};
use log::debug;
use serde::{Deserialize, Serialize};

/// A finalized text label: content, alignment, and anchor point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelRecord {
    /// Text content, if the option panel provided any.
    pub text: Option<String>,
    /// Placement relative to the anchor.
    pub align: LabelAlign,
    /// Anchor point in document coordinates.
    pub anchor: Point,
}

/// The finalized core geometric value of a gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Geometry {
    Circle(Circle),
    Polygon(Polygon),
    Path(Path),
    Label(LabelRecord),
}

impl Geometry {
    /// Whether the geometry has no drawable extent (zero radius, a path
    /// with a single node, an empty label). Degenerate output still
    /// finalizes; callers that cannot use it check here.
    pub fn is_degenerate(&self) -> bool {
        match self {
            Geometry::Circle(circle) => circle.radius <= 0.0,
            Geometry::Polygon(polygon) => {
                let Some(first) = polygon.vertices.first() else {
                    return true;
                };
                polygon.vertices.iter().all(|v| v.distance(*first) == 0.0)
            }
            Geometry::Path(path) => path.is_degenerate(),
            Geometry::Label(label) => label.text.as_deref().is_none_or(str::is_empty),
        }
    }
}

/// The immutable, style-wrapped object handed off to the drawing document.
///
/// Shape geometry arrives either stroked or filled, per the fill flag
/// captured at gesture start; labels have no fill dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentEntity {
    /// Outlined shape
    Stroke(Geometry),
    /// Filled shape
    Filled(Geometry),
    /// Text label
    Label(LabelRecord),
}

impl DocumentEntity {
    /// Wraps finalized geometry per the gesture's fill flag.
    pub fn shape(geometry: Geometry, fill: bool) -> Self {
        if fill {
            DocumentEntity::Filled(geometry)
        } else {
            DocumentEntity::Stroke(geometry)
        }
    }

    /// Whether the wrapped payload is degenerate.
    pub fn is_degenerate(&self) -> bool {
        match self {
            DocumentEntity::Stroke(g) | DocumentEntity::Filled(g) => g.is_degenerate(),
            DocumentEntity::Label(label) => label.text.as_deref().is_none_or(str::is_empty),
        }
    }
}

/// Receives finished document entities.
///
/// Called exactly once per gesture, synchronously, at the moment
/// finalization succeeds. Implementations must not assume asynchronous
/// delivery: the entity is live before the tool method returns.
pub trait ObjectSink {
    fn object_created(&mut self, entity: DocumentEntity);
}

/// Append-only sink collecting finished entities for the host document.
#[derive(Debug, Default)]
pub struct DocumentLog {
    entities: Vec<DocumentEntity>,
}

impl DocumentLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entities collected so far, oldest first.
    pub fn entities(&self) -> &[DocumentEntity] {
        &self.entities
    }

    /// Number of collected entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether nothing has been collected yet.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Removes and returns all collected entities, oldest first.
    pub fn drain(&mut self) -> Vec<DocumentEntity> {
        std::mem::take(&mut self.entities)
    }
}

impl ObjectSink for DocumentLog {
    fn object_created(&mut self, entity: DocumentEntity) {
        debug!("Document object created: {entity:?}");
        self.entities.push(entity);
    }
}
