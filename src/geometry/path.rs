//! Boundary path construction for the supported arena shapes
//!
//! `generate_shape_path` turns a shape tag plus sizing into a
//! `PathDescriptor`: an exact analytic description that renderers sample
//! into outlines and the validator queries for containment. The enum is
//! matched exhaustively, so adding a shape is a compile-checked extension.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::ArenaShape;
use crate::consts::{STAR_INNER_RATIO, STAR_VERTEX_COUNT};
use crate::polar_to_cartesian;

/// Closed boundary geometry for one shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PathDescriptor {
    Circle {
        center: Vec2,
        radius: f32,
    },
    Ellipse {
        center: Vec2,
        semi_x: f32,
        semi_y: f32,
    },
    /// Ordered vertices, implicitly closed back to the first
    Polygon { points: Vec<Vec2> },
    /// Rectangle of `width × height` whose short ends are semicircular caps
    /// of radius `height / 2`
    Racetrack {
        center: Vec2,
        width: f32,
        height: f32,
    },
}

/// Build the closed boundary for `shape`, centered at `center`.
///
/// `radius` is the circumscribing radius; `width`/`height` override it for
/// shapes that are not radius-symmetric (rectangle, oval, racetrack).
/// Deterministic and pure. Non-finite or non-positive sizing is a contract
/// violation and panics.
pub fn generate_shape_path(
    shape: ArenaShape,
    center: Vec2,
    radius: f32,
    width: Option<f32>,
    height: Option<f32>,
) -> PathDescriptor {
    assert!(center.is_finite(), "generate_shape_path: non-finite center");
    assert!(
        radius.is_finite() && radius > 0.0,
        "generate_shape_path: radius must be positive, got {radius}"
    );
    for (name, value) in [("width", width), ("height", height)] {
        if let Some(v) = value {
            assert!(
                v.is_finite() && v > 0.0,
                "generate_shape_path: {name} must be positive, got {v}"
            );
        }
    }

    match shape {
        ArenaShape::Circle => PathDescriptor::Circle { center, radius },
        ArenaShape::Oval => PathDescriptor::Ellipse {
            center,
            semi_x: width.map_or(radius, |w| w / 2.0),
            semi_y: height.map_or(radius, |h| h / 2.0),
        },
        ArenaShape::Rectangle => {
            let hw = width.unwrap_or(radius * 2.0) / 2.0;
            let hh = height.unwrap_or(radius * 2.0) / 2.0;
            PathDescriptor::Polygon {
                points: vec![
                    center + Vec2::new(-hw, -hh),
                    center + Vec2::new(hw, -hh),
                    center + Vec2::new(hw, hh),
                    center + Vec2::new(-hw, hh),
                ],
            }
        }
        ArenaShape::Pentagon | ArenaShape::Hexagon | ArenaShape::Octagon => {
            // polygon_sides is Some for exactly these variants
            let n = shape.polygon_sides().unwrap_or(6);
            PathDescriptor::Polygon {
                points: (0..n)
                    .map(|i| {
                        // Vertex 0 points up (-90°)
                        let angle = -90.0 + i as f32 * 360.0 / n as f32;
                        center + polar_to_cartesian(radius, angle)
                    })
                    .collect(),
            }
        }
        ArenaShape::Star => PathDescriptor::Polygon {
            points: (0..STAR_VERTEX_COUNT)
                .map(|i| {
                    let r = if i % 2 == 0 {
                        radius
                    } else {
                        radius * STAR_INNER_RATIO
                    };
                    center + polar_to_cartesian(r, i as f32 * 36.0)
                })
                .collect(),
        },
        ArenaShape::Racetrack => {
            let width = width.unwrap_or(radius * 2.0);
            let height = height.unwrap_or(radius);
            assert!(
                width >= height,
                "generate_shape_path: racetrack needs width >= height, got {width} x {height}"
            );
            PathDescriptor::Racetrack {
                center,
                width,
                height,
            }
        }
    }
}

impl PathDescriptor {
    /// Sample a closed outline (first point not repeated at the end).
    /// Polygon variants return their exact vertices; curved variants are
    /// tessellated with `segments` steps.
    pub fn sample_outline(&self, segments: u32) -> Vec<Vec2> {
        let segments = segments.max(8);
        match self {
            PathDescriptor::Circle { center, radius } => (0..segments)
                .map(|i| *center + polar_to_cartesian(*radius, i as f32 * 360.0 / segments as f32))
                .collect(),
            PathDescriptor::Ellipse {
                center,
                semi_x,
                semi_y,
            } => (0..segments)
                .map(|i| {
                    let theta = (i as f32 * 360.0 / segments as f32).to_radians();
                    *center + Vec2::new(semi_x * theta.cos(), semi_y * theta.sin())
                })
                .collect(),
            PathDescriptor::Polygon { points } => points.clone(),
            PathDescriptor::Racetrack {
                center,
                width,
                height,
            } => {
                // Straight span between the cap centers
                let half_span = (width - height) / 2.0;
                let cap_radius = height / 2.0;
                let per_cap = (segments / 2).max(2);
                let mut points = Vec::with_capacity(per_cap as usize * 2 + 2);
                // Right cap sweeps bottom to top, left cap top to bottom;
                // the straight edges fall out of the connection order
                for i in 0..=per_cap {
                    let angle = -90.0 + i as f32 * 180.0 / per_cap as f32;
                    points.push(
                        *center + Vec2::new(half_span, 0.0) + polar_to_cartesian(cap_radius, angle),
                    );
                }
                for i in 0..=per_cap {
                    let angle = 90.0 + i as f32 * 180.0 / per_cap as f32;
                    points.push(
                        *center + Vec2::new(-half_span, 0.0) + polar_to_cartesian(cap_radius, angle),
                    );
                }
                points
            }
        }
    }

    /// True when the disc at `point` with radius `r` lies fully inside the
    /// boundary. Used by validation for obstacles, pits, and goal objects.
    pub fn contains_circle(&self, point: Vec2, r: f32) -> bool {
        match self {
            PathDescriptor::Circle { center, radius } => {
                (point - *center).length() + r <= *radius
            }
            PathDescriptor::Ellipse {
                center,
                semi_x,
                semi_y,
            } => {
                // A disc fits iff its center is inside the ellipse and the
                // boundary is at least r away
                let d = point - *center;
                let inside = (d.x / semi_x).powi(2) + (d.y / semi_y).powi(2) <= 1.0;
                inside && dist_point_ellipse(d, *semi_x, *semi_y) >= r
            }
            PathDescriptor::Polygon { points } => {
                // A disc fits in a simple polygon iff its center is inside
                // and no edge comes closer than r
                point_in_polygon(point, points)
                    && polygon_edges(points).all(|(a, b)| dist_point_segment(point, a, b) >= r)
            }
            PathDescriptor::Racetrack {
                center,
                width,
                height,
            } => {
                // The racetrack is the set of points within height/2 of the
                // horizontal spine segment
                let half_span = (width - height) / 2.0;
                let a = *center + Vec2::new(-half_span, 0.0);
                let b = *center + Vec2::new(half_span, 0.0);
                dist_point_segment(point, a, b) + r <= height / 2.0
            }
        }
    }
}

/// Iterate polygon edges as (start, end) pairs, closing back to the first
fn polygon_edges(points: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    (0..points.len()).map(|i| (points[i], points[(i + 1) % points.len()]))
}

/// Distance from a point to the boundary of an axis-aligned ellipse with
/// semi-axes `a`, `b` centered at the origin.
///
/// Closest-point search on the first quadrant, stepping the parametric
/// angle by the arc distance to the target measured from the evolute.
/// Converges to well under the tolerances validation needs in a handful of
/// iterations for the eccentricities arena shapes use.
fn dist_point_ellipse(p: Vec2, a: f32, b: f32) -> f32 {
    // The search assumes a >= b; the problem is symmetric under swapping axes
    let (a, b, px, py) = if a >= b {
        (a, b, p.x.abs(), p.y.abs())
    } else {
        (b, a, p.y.abs(), p.x.abs())
    };

    let mut t = std::f32::consts::FRAC_PI_4;
    let mut x = a * t.cos();
    let mut y = b * t.sin();
    for _ in 0..6 {
        // Center of curvature for the current boundary point
        let ex = (a * a - b * b) / a * t.cos().powi(3);
        let ey = (b * b - a * a) / b * t.sin().powi(3);
        let rx = x - ex;
        let ry = y - ey;
        let qx = px - ex;
        let qy = py - ey;
        let r_len = (rx * rx + ry * ry).sqrt();
        let q_len = (qx * qx + qy * qy).sqrt();
        if q_len == 0.0 || r_len == 0.0 {
            break;
        }
        let cross = ((rx * qy - ry * qx) / (r_len * q_len)).clamp(-1.0, 1.0);
        let delta_c = r_len * cross.asin();
        let delta_t = delta_c / (a * a + b * b - x * x - y * y).sqrt();
        t = (t + delta_t).clamp(0.0, std::f32::consts::FRAC_PI_2);
        x = a * t.cos();
        y = b * t.sin();
    }

    Vec2::new(px - x, py - y).length()
}

/// Distance from a point to a line segment
fn dist_point_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return (p - a).length();
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).length()
}

/// Even-odd ray cast; works for concave simple polygons (the star)
fn point_in_polygon(p: Vec2, points: &[Vec2]) -> bool {
    let mut inside = false;
    for (a, b) in polygon_edges(points) {
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polygon_points(shape: ArenaShape, radius: f32) -> Vec<Vec2> {
        match generate_shape_path(shape, Vec2::ZERO, radius, None, None) {
            PathDescriptor::Polygon { points } => points,
            other => panic!("expected polygon, got {other:?}"),
        }
    }

    #[test]
    fn test_regular_polygons_vertex_count_and_radius() {
        for (shape, n) in [
            (ArenaShape::Pentagon, 5),
            (ArenaShape::Hexagon, 6),
            (ArenaShape::Octagon, 8),
        ] {
            let points = polygon_points(shape, 20.0);
            assert_eq!(points.len(), n);
            for p in &points {
                assert!((p.length() - 20.0).abs() < 1e-3, "{shape:?}: {p:?}");
            }
            // Vertex 0 points up (-90°)
            assert!(points[0].x.abs() < 1e-3);
            assert!((points[0].y + 20.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_star_alternating_radii() {
        let points = polygon_points(ArenaShape::Star, 20.0);
        assert_eq!(points.len(), 10);
        for (i, p) in points.iter().enumerate() {
            let expected = if i % 2 == 0 { 20.0 } else { 10.0 };
            assert!((p.length() - expected).abs() < 1e-3, "vertex {i}: {p:?}");
        }
    }

    #[test]
    fn test_rectangle_defaults_to_square() {
        let points = polygon_points(ArenaShape::Rectangle, 10.0);
        assert_eq!(points.len(), 4);
        for p in &points {
            assert!((p.x.abs() - 10.0).abs() < 1e-4);
            assert!((p.y.abs() - 10.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_oval_override_extents() {
        let path = generate_shape_path(ArenaShape::Oval, Vec2::ZERO, 10.0, Some(40.0), Some(20.0));
        assert_eq!(
            path,
            PathDescriptor::Ellipse {
                center: Vec2::ZERO,
                semi_x: 20.0,
                semi_y: 10.0,
            }
        );
        let outline = path.sample_outline(64);
        assert_eq!(outline.len(), 64);
        for p in outline {
            let v = (p.x / 20.0).powi(2) + (p.y / 10.0).powi(2);
            assert!((v - 1.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_racetrack_outline_stays_in_bounds() {
        let path =
            generate_shape_path(ArenaShape::Racetrack, Vec2::ZERO, 10.0, Some(60.0), Some(20.0));
        let outline = path.sample_outline(32);
        for p in &outline {
            assert!(p.x.abs() <= 30.0 + 1e-3);
            assert!(p.y.abs() <= 10.0 + 1e-3);
        }
        // Cap extremes are present
        assert!(outline.iter().any(|p| (p.x - 30.0).abs() < 1e-3));
        assert!(outline.iter().any(|p| (p.x + 30.0).abs() < 1e-3));
    }

    #[test]
    fn test_circle_containment() {
        let path = generate_shape_path(ArenaShape::Circle, Vec2::ZERO, 25.0, None, None);
        assert!(path.contains_circle(Vec2::new(20.0, 0.0), 5.0));
        assert!(!path.contains_circle(Vec2::new(20.0, 0.0), 5.1));
        assert!(!path.contains_circle(Vec2::new(30.0, 0.0), 1.0));
    }

    #[test]
    fn test_eccentric_oval_containment_near_major_axis() {
        let path = generate_shape_path(ArenaShape::Oval, Vec2::ZERO, 10.0, Some(40.0), Some(20.0));
        // Nearest boundary point to (12, 0) is at (16, 6), ~7.21 away;
        // the flat end curves back inside the naive shrunk-axes bound
        assert!(path.contains_circle(Vec2::new(12.0, 0.0), 7.0));
        assert!(!path.contains_circle(Vec2::new(12.0, 0.0), 8.0));
        // Along the minor axis the nearest boundary point is (0, 10)
        assert!(path.contains_circle(Vec2::new(0.0, 5.0), 4.9));
        assert!(!path.contains_circle(Vec2::new(0.0, 5.0), 5.1));
        // Outside the ellipse entirely
        assert!(!path.contains_circle(Vec2::new(21.0, 0.0), 0.5));
    }

    #[test]
    fn test_tall_oval_containment_swaps_axes() {
        let path = generate_shape_path(ArenaShape::Oval, Vec2::ZERO, 10.0, Some(20.0), Some(40.0));
        assert!(path.contains_circle(Vec2::new(0.0, 12.0), 7.0));
        assert!(!path.contains_circle(Vec2::new(0.0, 12.0), 8.0));
    }

    #[test]
    fn test_oval_centered_disc_limited_by_minor_axis() {
        let path = generate_shape_path(ArenaShape::Oval, Vec2::ZERO, 10.0, Some(40.0), Some(20.0));
        assert!(path.contains_circle(Vec2::ZERO, 9.9));
        assert!(!path.contains_circle(Vec2::ZERO, 10.1));
    }

    #[test]
    fn test_hexagon_containment_tighter_than_circumradius() {
        let path = generate_shape_path(ArenaShape::Hexagon, Vec2::ZERO, 20.0, None, None);
        // Apothem of a hexagon is radius * cos(30°) ≈ 17.32
        assert!(path.contains_circle(Vec2::ZERO, 17.0));
        assert!(!path.contains_circle(Vec2::ZERO, 17.5));
        // Near a flat edge the circumradius bound would wrongly pass
        assert!(!path.contains_circle(Vec2::new(16.0, 0.0), 2.0));
    }

    #[test]
    fn test_star_containment_respects_concavity() {
        let path = generate_shape_path(ArenaShape::Star, Vec2::ZERO, 20.0, None, None);
        assert!(path.contains_circle(Vec2::ZERO, 5.0));
        // A point between two star points is outside the polygon even
        // though it is well within the outer radius
        assert!(!path.contains_circle(polar_to_cartesian(15.0, 18.0), 0.5));
    }

    #[test]
    fn test_racetrack_containment_rejects_corners() {
        let path =
            generate_shape_path(ArenaShape::Racetrack, Vec2::ZERO, 10.0, Some(60.0), Some(20.0));
        assert!(path.contains_circle(Vec2::ZERO, 9.0));
        assert!(path.contains_circle(Vec2::new(25.0, 0.0), 3.0));
        // The bounding-rect corner is outside the rounded cap
        assert!(!path.contains_circle(Vec2::new(28.5, 8.5), 1.0));
    }

    #[test]
    fn test_deterministic() {
        let a = generate_shape_path(ArenaShape::Star, Vec2::new(3.0, -2.0), 12.0, None, None);
        let b = generate_shape_path(ArenaShape::Star, Vec2::new(3.0, -2.0), 12.0, None, None);
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "radius must be positive")]
    fn test_rejects_zero_radius() {
        generate_shape_path(ArenaShape::Circle, Vec2::ZERO, 0.0, None, None);
    }
}
