//! Pure constructors for circles and regular polygons.
//!
//! These are the stateless building blocks the tools call for both preview
//! and finalization, so they must never depend on gesture state.

use super::point::Point;
use crate::error::ToolError;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A circle described by center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

/// A polygon described by its ordered vertex list.
///
/// Regular polygons produced by [`inscribed_polygon`] and
/// [`exscribed_polygon`] list vertices counter-clockwise starting from the
/// base angle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

/// Creates a circle from center and radius.
pub fn circle(center: Point, radius: f64) -> Circle {
    Circle { center, radius }
}

/// Computes a regular polygon whose vertices lie on the given circle.
///
/// The first vertex sits at `angle` radians from the center; the remaining
/// vertices follow at steps of `2π/sides`. `radius` is the circumradius of
/// the produced polygon.
///
/// # Errors
/// `InvalidConfiguration` when `sides < 3`.
pub fn inscribed_polygon(
    sides: u32,
    center: Point,
    radius: f64,
    angle: f64,
) -> Result<Polygon, ToolError> {
    let step = polygon_step(sides)?;
    let vertices = (0..sides)
        .map(|k| vertex_at(center, radius, angle + k as f64 * step))
        .collect();
    Ok(Polygon { vertices })
}

/// Computes a regular polygon whose edges are tangent to the given circle.
///
/// `radius` is the apothem: the circle is the polygon's incircle, touching
/// each edge at its midpoint. The circumradius is `radius / cos(π/sides)`
/// and the vertex angles are offset by `π/sides` from the inscribed case so
/// the tangent points stay aligned with the base angle.
///
/// # Errors
/// `InvalidConfiguration` when `sides < 3`.
pub fn exscribed_polygon(
    sides: u32,
    center: Point,
    radius: f64,
    angle: f64,
) -> Result<Polygon, ToolError> {
    let step = polygon_step(sides)?;
    let half_step = PI / sides as f64;
    let circumradius = radius / half_step.cos();
    let vertices = (0..sides)
        .map(|k| vertex_at(center, circumradius, angle + half_step + k as f64 * step))
        .collect();
    Ok(Polygon { vertices })
}

fn polygon_step(sides: u32) -> Result<f64, ToolError> {
    if sides < 3 {
        return Err(ToolError::InvalidConfiguration(format!(
            "polygon needs at least 3 sides, got {sides}"
        )));
    }
    Ok(2.0 * PI / sides as f64)
}

fn vertex_at(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}
