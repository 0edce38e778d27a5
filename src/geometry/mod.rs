//! Geometric primitives and the path model.
//!
//! This module provides the pure building blocks the tools assemble their
//! output from:
//! - [`Point`]: immutable 2D value type with Euclidean distance
//! - [`primitives`]: circle and inscribed/exscribed regular polygons
//! - [`path`]: ordered path nodes, link modes, and control smoothing

pub mod path;
pub mod point;
pub mod primitives;

// Re-export commonly used types at module level
pub use path::{CubicSegment, LinkMode, Path, PathNode};
pub use point::Point;
pub use primitives::{Circle, Polygon, circle, exscribed_polygon, inscribed_polygon};
