//! Path model: ordered nodes, link modes, and control-point smoothing.
//!
//! A path is an ordered node list where every node after the first carries
//! the link mode of its incoming connection. Curved links get their cubic
//! control points derived from the surrounding node positions; straight
//! links degenerate to collinear controls so a single segment type covers
//! both cases.

use super::point::Point;
use serde::{Deserialize, Serialize};

/// How two consecutive path nodes connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkMode {
    /// Straight segment between the nodes.
    Straight,
    /// Smooth interpolated curve through the nodes.
    Curved,
}

/// One committed path node with the link mode of its incoming connection.
///
/// The first node of a path has no incoming link.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathNode {
    pub point: Point,
    pub link: Option<LinkMode>,
}

impl PathNode {
    /// Creates the first node of a path (no incoming link).
    pub fn first(point: Point) -> Self {
        Self { point, link: None }
    }

    /// Creates a node linked to its predecessor with the given mode.
    pub fn linked(point: Point, link: LinkMode) -> Self {
        Self {
            point,
            link: Some(link),
        }
    }
}

/// One cubic Bezier segment of a path outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicSegment {
    pub from: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub to: Point,
}

/// An ordered node sequence, optionally closed back to the first node.
///
/// `closure` carries the link mode of the closing connection when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub nodes: Vec<PathNode>,
    pub closure: Option<LinkMode>,
}

impl Path {
    /// Builds an open path from a node list.
    pub fn open(nodes: Vec<PathNode>) -> Self {
        Self {
            nodes,
            closure: None,
        }
    }

    /// Builds a closed path; `closure` links the last node back to the first.
    pub fn closed(nodes: Vec<PathNode>, closure: LinkMode) -> Self {
        Self {
            nodes,
            closure: Some(closure),
        }
    }

    /// Whether the path cycles back to its first node.
    pub fn is_closed(&self) -> bool {
        self.closure.is_some()
    }

    /// A path with fewer than two connected nodes has no drawable extent.
    pub fn is_degenerate(&self) -> bool {
        self.nodes.len() < 2
    }

    /// Derives the cubic segments of this path, including the closing
    /// segment for closed paths.
    ///
    /// Curved links use Catmull-Rom tangents from the neighboring node
    /// positions; open ends get mirrored phantom neighbors so the curve
    /// runs naturally through the first and last node. Straight links use
    /// collinear one-third controls. Non-mutating.
    pub fn compute_controls(&self) -> Vec<CubicSegment> {
        let n = self.nodes.len();
        if n < 2 {
            return Vec::new();
        }

        let segment_count = if self.is_closed() { n } else { n - 1 };
        let mut segments = Vec::with_capacity(segment_count);

        for seg in 0..segment_count {
            let from = self.nodes[seg].point;
            let to = self.nodes[(seg + 1) % n].point;
            let link = if seg + 1 < n {
                // Incoming link of the target node; absent only for the
                // first node, which is never a segment target here.
                self.nodes[seg + 1].link.unwrap_or(LinkMode::Straight)
            } else {
                self.closure.unwrap_or(LinkMode::Straight)
            };

            let segment = match link {
                LinkMode::Straight => CubicSegment {
                    from,
                    ctrl1: from.lerp(to, 1.0 / 3.0),
                    ctrl2: from.lerp(to, 2.0 / 3.0),
                    to,
                },
                LinkMode::Curved => {
                    let before = self.neighbor_before(seg, from, to);
                    let after = self.neighbor_after(seg, from, to);
                    CubicSegment {
                        from,
                        ctrl1: from + (to - before) * (1.0 / 6.0),
                        ctrl2: to - (after - from) * (1.0 / 6.0),
                        to,
                    }
                }
            };
            segments.push(segment);
        }

        segments
    }

    /// Node position preceding segment `seg`, wrapping when closed and
    /// mirroring a phantom point at an open start.
    fn neighbor_before(&self, seg: usize, from: Point, to: Point) -> Point {
        let n = self.nodes.len();
        if seg > 0 {
            self.nodes[seg - 1].point
        } else if self.is_closed() {
            self.nodes[n - 1].point
        } else {
            from * 2.0 - to
        }
    }

    /// Node position following segment `seg`, wrapping when closed and
    /// mirroring a phantom point at an open end.
    fn neighbor_after(&self, seg: usize, from: Point, to: Point) -> Point {
        let n = self.nodes.len();
        if seg + 2 < n {
            self.nodes[seg + 2].point
        } else if self.is_closed() {
            self.nodes[(seg + 2) % n].point
        } else {
            to * 2.0 - from
        }
    }
}
