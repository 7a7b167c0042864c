//! Spintop Arena - configuration and procedural layout for a spinning-top combat arena
//!
//! Core modules:
//! - `config`: The `ArenaConfig` schema and its nested value types
//! - `geometry`: Shape boundary and arc builders (pure, deterministic)
//! - `placement`: Seeded random scattering of obstacles and pits
//! - `validate`: Whole-config structural validation
//! - `presets`: Named ready-to-play configurations
//!
//! Everything works in abstract arena units ("em") centered on the arena
//! origin; renderers and the simulation apply their own scale and transform.
//! Angles in the public API are degrees, matching the configuration document.

pub mod config;
pub mod geometry;
pub mod placement;
pub mod presets;
pub mod validate;

pub use config::{ArenaConfig, ArenaShape, ObstacleConfig, PitConfig};
pub use geometry::{ArcDescriptor, PathDescriptor, generate_arc, generate_shape_path};
pub use placement::{
    ExcludeZone, PitPlacement, PlacementPolicy, RetryFallback, generate_random_obstacles,
    generate_random_pits, scatter_obstacles, scatter_pits,
};
pub use validate::{Validation, validate_arena_config};

use glam::Vec2;

/// Engine constants
pub mod consts {
    /// Supported arena extent range (em)
    pub const MIN_ARENA_EXTENT: f32 = 10.0;
    pub const MAX_ARENA_EXTENT: f32 = 200.0;

    /// Element count limits
    pub const MAX_LOOPS: usize = 10;
    pub const MAX_PORTALS: usize = 2;
    pub const MAX_CHARGE_POINTS: u32 = 12;

    /// Wall segment count bounds (when walls are enabled)
    pub const MIN_WALL_COUNT: u32 = 3;
    pub const MAX_WALL_COUNT: u32 = 20;

    /// Obstacle size bounds for procedural scattering (em)
    pub const OBSTACLE_MIN_RADIUS: f32 = 1.0;
    pub const OBSTACLE_MAX_RADIUS: f32 = 3.0;

    /// Pit spin drain, percent of max spin per second (engine-wide, not per pit)
    pub const PIT_DRAIN_RATE: f32 = 10.0;
    /// Chance per second that a trapped top escapes a pit
    pub const PIT_ESCAPE_CHANCE: f32 = 0.3;
    /// Gap kept between an edge-placed pit and the arena boundary (em)
    pub const EDGE_PIT_MARGIN: f32 = 1.5;
    /// Center-placed pits cluster within this fraction of the arena radius
    pub const CENTER_CLUSTER_FRACTION: f32 = 0.25;

    /// Retry budget per element for random placement
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 32;

    /// Star outline: inner vertices sit at this fraction of the outer radius
    pub const STAR_INNER_RATIO: f32 = 0.5;
    /// Star outline vertex count (5 points, outer/inner alternating)
    pub const STAR_VERTEX_COUNT: usize = 10;

    /// Charge point defaults
    pub const CHARGE_POINT_RADIUS: f32 = 1.2;
    pub const DEFAULT_RECHARGE_RATE: f32 = 5.0;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_angle_deg(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}

/// Convert polar (r, degrees) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, angle_deg: f32) -> Vec2 {
    let theta = angle_deg.to_radians();
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, degrees in [0, 360))
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), normalize_angle_deg(pos.y.atan2(pos.x).to_degrees()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_angle_deg() {
        assert_eq!(normalize_angle_deg(0.0), 0.0);
        assert_eq!(normalize_angle_deg(360.0), 0.0);
        assert_eq!(normalize_angle_deg(-90.0), 270.0);
        assert_eq!(normalize_angle_deg(725.0), 5.0);
    }

    #[test]
    fn test_polar_round_trip() {
        let p = polar_to_cartesian(10.0, 45.0);
        let (r, theta) = cartesian_to_polar(p);
        assert!((r - 10.0).abs() < 1e-4);
        assert!((theta - 45.0).abs() < 1e-3);
    }
}
