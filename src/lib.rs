//! Interactive, in-place geometric object construction for vector-drawing
//! editors.
//!
//! Circles, regular polygons, text labels, and Bezier/line paths are built
//! incrementally from pointer events (press, drag, release) and committed
//! into the host document once complete. Each tool is a small state machine
//! over the shared [`tool::Tool`] contract: it accumulates geometric state
//! across a gesture, answers [`tool::Tool::preview`] with valid live
//! geometry at every intermediate step, and hands off exactly one immutable
//! [`document::DocumentEntity`] when the gesture finalizes.
//!
//! Windowing, option-panel widgets, and rendering live outside this crate:
//! events arrive as plain values, configuration arrives as a one-shot
//! [`config::OptionSnapshot`], and finished objects leave through
//! [`document::ObjectSink`].

pub mod config;
pub mod document;
pub mod error;
pub mod geometry;
pub mod tool;

pub use config::OptionSnapshot;
pub use document::{DocumentEntity, DocumentLog, Geometry, ObjectSink};
pub use error::ToolError;
pub use tool::{ButtonState, Outline, Tool, ToolKind, ToolManager};
