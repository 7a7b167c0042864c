//! Circular arc geometry for exit gaps and wall segments
//!
//! An arc is stored as a normalized start angle plus a signed sweep in
//! [-180°, 180°]. `generate_arc` always picks the *shorter* way around
//! between its two endpoint angles, so `350° → 10°` is the 20° arc crossing
//! 0°, never the 340° complement.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{normalize_angle_deg, polar_to_cartesian};

/// A circular arc on the boundary of some circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcDescriptor {
    pub center: Vec2,
    pub radius: f32,
    /// Start angle, degrees, normalized to [0, 360)
    pub start_deg: f32,
    /// Signed sweep, degrees, in [-180, 180]; positive is counterclockwise
    pub sweep_deg: f32,
}

/// Build the shorter arc between `start_deg` and `end_deg` on a circle of
/// `radius` around `center`. Equal angles yield a zero-length arc.
///
/// Panics on non-finite input or a non-positive radius; that is a caller
/// bug, not bad user data.
pub fn generate_arc(center: Vec2, radius: f32, start_deg: f32, end_deg: f32) -> ArcDescriptor {
    assert!(
        center.is_finite() && start_deg.is_finite() && end_deg.is_finite(),
        "generate_arc: non-finite input"
    );
    assert!(
        radius.is_finite() && radius > 0.0,
        "generate_arc: radius must be positive, got {radius}"
    );

    let delta = normalize_angle_deg(end_deg - start_deg);
    let sweep_deg = if delta > 180.0 { delta - 360.0 } else { delta };

    ArcDescriptor {
        center,
        radius,
        start_deg: normalize_angle_deg(start_deg),
        sweep_deg,
    }
}

impl ArcDescriptor {
    /// Unsigned angular span, degrees
    #[inline]
    pub fn span_deg(&self) -> f32 {
        self.sweep_deg.abs()
    }

    /// End angle, degrees, normalized to [0, 360)
    #[inline]
    pub fn end_deg(&self) -> f32 {
        normalize_angle_deg(self.start_deg + self.sweep_deg)
    }

    /// Zero-length arcs come from degenerate `start == end` input
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sweep_deg == 0.0
    }

    /// Check whether an angle (degrees) lies on the arc, wraparound included
    pub fn contains_angle(&self, angle_deg: f32) -> bool {
        if self.sweep_deg >= 0.0 {
            normalize_angle_deg(angle_deg - self.start_deg) <= self.sweep_deg
        } else {
            normalize_angle_deg(self.start_deg - angle_deg) <= -self.sweep_deg
        }
    }

    /// Point at the angular middle of the arc
    pub fn midpoint(&self) -> Vec2 {
        self.center + polar_to_cartesian(self.radius, self.start_deg + self.sweep_deg / 2.0)
    }

    /// Sample points along the arc from start to end
    pub fn sample(&self, num_points: usize) -> Vec<Vec2> {
        (0..num_points)
            .map(|i| {
                let t = i as f32 / (num_points - 1).max(1) as f32;
                let angle = self.start_deg + t * self.sweep_deg;
                self.center + polar_to_cartesian(self.radius, angle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_wraparound_takes_shorter_way() {
        let arc = generate_arc(Vec2::ZERO, 25.0, 350.0, 10.0);
        assert!((arc.span_deg() - 20.0).abs() < 1e-4);
        assert!(arc.contains_angle(0.0));
        assert!(arc.contains_angle(355.0));
        assert!(!arc.contains_angle(180.0));
    }

    #[test]
    fn test_arc_reverse_direction() {
        // 10° back to 350° also spans 20°, swept clockwise
        let arc = generate_arc(Vec2::ZERO, 25.0, 10.0, 350.0);
        assert!((arc.span_deg() - 20.0).abs() < 1e-4);
        assert!(arc.sweep_deg < 0.0);
        assert!(arc.contains_angle(0.0));
        assert!(!arc.contains_angle(90.0));
    }

    #[test]
    fn test_arc_no_wrap() {
        let arc = generate_arc(Vec2::ZERO, 10.0, 30.0, 120.0);
        assert!((arc.span_deg() - 90.0).abs() < 1e-4);
        assert!(arc.contains_angle(75.0));
        assert!(!arc.contains_angle(150.0));
        assert!((arc.end_deg() - 120.0).abs() < 1e-4);
    }

    #[test]
    fn test_arc_degenerate_is_zero_length() {
        let arc = generate_arc(Vec2::ZERO, 10.0, 45.0, 45.0);
        assert!(arc.is_empty());
        assert_eq!(arc.span_deg(), 0.0);
        assert!(arc.contains_angle(45.0));
        assert!(!arc.contains_angle(46.0));
    }

    #[test]
    fn test_arc_midpoint_crosses_zero() {
        let arc = generate_arc(Vec2::ZERO, 10.0, 350.0, 10.0);
        let mid = arc.midpoint();
        assert!((mid.x - 10.0).abs() < 1e-3);
        assert!(mid.y.abs() < 1e-3);
    }

    #[test]
    fn test_arc_sample_endpoints() {
        let center = Vec2::new(5.0, -3.0);
        let arc = generate_arc(center, 8.0, 0.0, 90.0);
        let pts = arc.sample(5);
        assert_eq!(pts.len(), 5);
        assert!((pts[0] - (center + Vec2::new(8.0, 0.0))).length() < 1e-3);
        assert!((pts[4] - (center + Vec2::new(0.0, 8.0))).length() < 1e-3);
    }

    #[test]
    #[should_panic(expected = "radius must be positive")]
    fn test_arc_rejects_bad_radius() {
        generate_arc(Vec2::ZERO, -1.0, 0.0, 90.0);
    }
}
