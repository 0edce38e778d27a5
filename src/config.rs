//! Gesture configuration snapshots.
//!
//! Option panels live outside this crate; the editor reads whatever widgets
//! it shows into an [`OptionSnapshot`] and passes that to `pointer_down`.
//! Each tool copies the values it recognizes exactly once, at gesture
//! start, so a gesture's parameters never change mid-flight no matter what
//! the panel does afterwards.

use crate::geometry::LinkMode;
use serde::{Deserialize, Serialize};

/// How the polygon anchor point is interpreted while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CenterMode {
    /// The press position is the polygon center.
    #[default]
    Center,
    /// The press position is the first vertex.
    FirstVertex,
}

/// Label placement relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelAlign {
    /// Centered on the anchor
    #[default]
    Center,
    /// Above and to the right of the anchor
    NorthEast,
    /// Above and to the left of the anchor
    NorthWest,
    /// Below and to the right of the anchor
    SouthEast,
    /// Below and to the left of the anchor
    SouthWest,
}

/// One-shot configuration read at gesture start.
///
/// Tools only look at the fields they recognize: `fill` (circle, polygon,
/// path), `sides`/`inscribed`/`center_mode` (polygon), `align`/`text`
/// (label), `closed_path`/`use_bezier` (path). Unrecognized fields are
/// ignored, which lets the editor keep a single snapshot for whichever tool
/// is equipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionSnapshot {
    /// Fill the finished shape instead of stroking its outline.
    pub fill: bool,
    /// Regular polygon side count; values below 3 are rejected.
    pub sides: u32,
    /// Vertices on the reference circle (true) vs edges tangent to it.
    pub inscribed: bool,
    /// Polygon anchor interpretation.
    pub center_mode: CenterMode,
    /// Label alignment relative to its anchor.
    pub align: LabelAlign,
    /// Label text entered in the option panel, if any.
    pub text: Option<String>,
    /// Close the path back to its first node on finalize.
    pub closed_path: bool,
    /// Join path nodes with smooth curves instead of straight segments.
    pub use_bezier: bool,
}

impl Default for OptionSnapshot {
    fn default() -> Self {
        Self {
            fill: false,
            sides: 3,
            inscribed: true,
            center_mode: CenterMode::default(),
            align: LabelAlign::default(),
            text: None,
            closed_path: false,
            use_bezier: true,
        }
    }
}

impl OptionSnapshot {
    /// Link mode for new path segments under this configuration.
    pub fn link_mode(&self) -> LinkMode {
        if self.use_bezier {
            LinkMode::Curved
        } else {
            LinkMode::Straight
        }
    }
}
