//! Equip-one-tool-at-a-time lifecycle management.

use super::{CircleTool, LabelTool, PathTool, PolygonTool, Tool};
use crate::document::ObjectSink;
use crate::error::ToolError;
use log::debug;

/// The construction tools the editor can equip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Circle,
    Polygon,
    Label,
    Path,
}

impl ToolKind {
    /// Creates a fresh idle tool instance of this kind.
    pub fn create(self) -> Box<dyn Tool> {
        match self {
            ToolKind::Circle => Box::new(CircleTool::new()),
            ToolKind::Polygon => Box::new(PolygonTool::new()),
            ToolKind::Label => Box::new(LabelTool::new()),
            ToolKind::Path => Box::new(PathTool::new()),
        }
    }
}

/// Owns the currently equipped tool.
///
/// A tool instance lives from equip to the next switch and is reused across
/// gestures in between. Switching force-finalizes any gesture in progress
/// so the in-flight object is committed rather than silently dropped, then
/// replaces the instance.
pub struct ToolManager {
    kind: ToolKind,
    tool: Box<dyn Tool>,
}

impl ToolManager {
    /// Creates a manager with the given tool equipped.
    pub fn new(kind: ToolKind) -> Self {
        Self {
            kind,
            tool: kind.create(),
        }
    }

    /// Kind of the currently equipped tool.
    pub fn kind(&self) -> ToolKind {
        self.kind
    }

    /// The equipped tool, for event dispatch.
    pub fn active_tool(&self) -> &dyn Tool {
        self.tool.as_ref()
    }

    /// Mutable access to the equipped tool, for event dispatch.
    pub fn active_tool_mut(&mut self) -> &mut dyn Tool {
        self.tool.as_mut()
    }

    /// Switches tools, completing any gesture in progress first.
    ///
    /// Re-equipping the current kind still replaces the instance with a
    /// fresh one.
    pub fn equip(&mut self, kind: ToolKind, sink: &mut dyn ObjectSink) -> Result<(), ToolError> {
        self.tool.force_finalize(sink)?;
        debug!("Switching tool from {:?} to {:?}", self.kind, kind);
        self.kind = kind;
        self.tool = kind.create();
        Ok(())
    }
}
