//! Arena configuration schema
//!
//! The `ArenaConfig` document and its nested value types. These are plain
//! serde-serializable values with no behavior beyond derivation helpers and
//! pure `with_*` transforms; validation lives in `crate::validate` and
//! geometry construction in `crate::geometry`.
//!
//! The whole graph is owned by one `ArenaConfig` value. Editors clone a
//! preset, apply transforms, and persist the result as an opaque JSON
//! document.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Boundary shape of the arena (or of a loop / water body)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ArenaShape {
    #[default]
    Circle,
    Rectangle,
    Pentagon,
    Hexagon,
    Octagon,
    Star,
    Oval,
    Racetrack,
}

impl ArenaShape {
    /// Vertex count for the regular-polygon shapes, None otherwise
    pub fn polygon_sides(&self) -> Option<usize> {
        match self {
            ArenaShape::Pentagon => Some(5),
            ArenaShape::Hexagon => Some(6),
            ArenaShape::Octagon => Some(8),
            _ => None,
        }
    }
}

/// Cosmetic theme tag; has no effect on geometry or rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ArenaTheme {
    #[default]
    Classic,
    Neon,
    Volcanic,
    Glacial,
    Jungle,
    Void,
}

/// Liquid filling a water body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LiquidType {
    #[default]
    Water,
    Blood,
    Lava,
    Acid,
    Oil,
    Ice,
}

impl LiquidType {
    /// Default RGBA color when the config doesn't override it
    pub fn default_color(&self) -> [f32; 4] {
        match self {
            LiquidType::Water => [0.23, 0.51, 0.96, 0.75],
            LiquidType::Blood => [0.55, 0.07, 0.07, 0.85],
            LiquidType::Lava => [0.94, 0.35, 0.13, 0.95],
            LiquidType::Acid => [0.42, 0.84, 0.16, 0.80],
            LiquidType::Oil => [0.12, 0.10, 0.09, 0.92],
            LiquidType::Ice => [0.68, 0.89, 0.98, 0.70],
        }
    }
}

/// A fixed spot on a loop that restores spin over time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChargePoint {
    /// Position on the loop, degrees from the loop's 0° reference
    pub angle: f32,
    /// Spin restored per second while a top sits on the point
    pub recharge_rate: f32,
    pub radius: f32,
    pub color: [f32; 4],
}

/// A closed speed-boost path on the arena floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoopConfig {
    pub radius: f32,
    /// Extent overrides for non-circular loop shapes
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub height: Option<f32>,
    pub shape: ArenaShape,
    /// Multiplicative speed boost while traversing the loop
    pub speed_boost: f32,
    #[serde(default)]
    pub spin_boost: Option<f32>,
    pub friction_multiplier: f32,
    #[serde(default)]
    pub rotation: Option<f32>,
    #[serde(default)]
    pub color: Option<[f32; 4]>,
    /// Number of charge points, 0-12; `charge_points` is derived from it
    pub charge_point_count: u32,
    /// Derived: always `charge_point_count` entries, evenly spaced
    pub charge_points: Vec<ChargePoint>,
}

impl LoopConfig {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            width: None,
            height: None,
            shape: ArenaShape::Circle,
            speed_boost: 1.5,
            spin_boost: None,
            friction_multiplier: 0.8,
            rotation: None,
            color: None,
            charge_point_count: 0,
            charge_points: Vec::new(),
        }
    }

    /// Derive evenly spaced charge points, all with the same recharge rate.
    /// Point `i` sits at `360/count * i` degrees.
    pub fn with_charge_points(mut self, count: u32, recharge_rate: f32) -> Self {
        let count = count.min(MAX_CHARGE_POINTS);
        self.charge_point_count = count;
        self.charge_points = (0..count)
            .map(|i| ChargePoint {
                angle: 360.0 / count as f32 * i as f32,
                recharge_rate,
                radius: CHARGE_POINT_RADIUS,
                color: [1.0, 0.85, 0.2, 1.0],
            })
            .collect();
        self
    }
}

/// Per-edge wall widths for rectangular arenas; a width of 0 is an exit gap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WallWidths {
    Uniform(f32),
    PerEdge {
        top: f32,
        right: f32,
        bottom: f32,
        left: f32,
    },
}

/// Settings for an enabled boundary wall
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallSettings {
    /// Number of wall segments around the boundary, 3-20
    pub wall_count: u32,
    /// Spin damage dealt on contact
    pub base_damage: f32,
    /// Knockback distance on contact (em)
    pub recoil_distance: f32,
    pub has_spikes: bool,
    pub spike_damage_multiplier: f32,
    pub has_springs: bool,
    pub spring_recoil_multiplier: f32,
    pub thickness: f32,
    #[serde(default)]
    pub wall_widths: Option<WallWidths>,
}

impl Default for WallSettings {
    fn default() -> Self {
        Self {
            wall_count: 8,
            base_damage: 2.0,
            recoil_distance: 3.0,
            has_spikes: false,
            spike_damage_multiplier: 2.0,
            has_springs: false,
            spring_recoil_multiplier: 1.5,
            thickness: 1.0,
            wall_widths: None,
        }
    }
}

/// Boundary wall: disabled (open or sealed) or enabled with segment settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WallConfig {
    /// No wall segments. `all_exits: true` leaves the boundary fully open;
    /// `false` seals it with an intangible boundary that nothing crosses.
    Disabled { all_exits: bool },
    Enabled(WallSettings),
}

impl Default for WallConfig {
    fn default() -> Self {
        WallConfig::Enabled(WallSettings::default())
    }
}

/// A gap in the boundary wall
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExitConfig {
    /// Center of the gap, degrees
    pub angle: f32,
    /// Angular span of the gap, degrees
    pub width: f32,
    pub enabled: bool,
}

/// Kinds of static obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ObstacleKind {
    #[default]
    Rock,
    Pillar,
    Bumper,
    Spinner,
}

/// A circular obstacle on the arena floor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleConfig {
    pub kind: ObstacleKind,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// A spin-draining hazard. Drain rate and escape chance are engine constants
/// (`PIT_DRAIN_RATE`, `PIT_ESCAPE_CHANCE`); `damage_per_second` records the
/// rate the generator stamped on the pit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitConfig {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub damage_per_second: f32,
    #[serde(default)]
    pub visual_depth: Option<f32>,
}

/// Where a water body sits relative to the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaterBodyKind {
    /// Fills the middle of the arena
    Center,
    /// Surrounds the loop at `loop_index` (must reference an existing loop)
    Moat { loop_index: usize },
    /// A free-standing annulus
    Ring,
}

/// A liquid hazard region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterBodyConfig {
    pub enabled: bool,
    pub kind: WaterBodyKind,
    pub shape: ArenaShape,
    pub radius: f32,
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub height: Option<f32>,
    /// Radial thickness for `Ring` and `Moat` bodies
    #[serde(default)]
    pub ring_thickness: Option<f32>,
    #[serde(default)]
    pub rotation: Option<f32>,
    pub liquid: LiquidType,
    /// Spin lost per second while submerged
    pub spin_drain_rate: f32,
    pub speed_multiplier: f32,
    pub viscosity: f32,
    #[serde(default)]
    pub color: Option<[f32; 4]>,
}

impl WaterBodyConfig {
    /// Effective render color (config override or the liquid's default)
    pub fn effective_color(&self) -> [f32; 4] {
        self.color.unwrap_or_else(|| self.liquid.default_color())
    }
}

/// A paired teleport entry/exit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    pub id: u32,
    pub in_point: Vec2,
    pub out_point: Vec2,
    pub radius: f32,
    #[serde(default)]
    pub cooldown: Option<f32>,
    #[serde(default)]
    pub color: Option<[f32; 4]>,
    pub bidirectional: bool,
}

/// Kinds of destructible objective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GoalObjectKind {
    #[default]
    Crystal,
    Totem,
    Core,
}

/// A destructible objective
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalObjectConfig {
    pub kind: GoalObjectKind,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    #[serde(default)]
    pub color: Option<[f32; 4]>,
}

/// A fixed turret that fires spin-damaging beams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaserGunConfig {
    pub x: f32,
    pub y: f32,
    /// Aim direction, degrees
    pub angle: f32,
    /// Seconds between shots
    pub fire_interval: f32,
    pub damage: f32,
    /// Angular sweep around `angle`, degrees (None = fixed aim)
    #[serde(default)]
    pub sweep: Option<f32>,
}

/// A rotating floor region that drags anything on it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationBodyConfig {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// Degrees per second
    pub angular_velocity: f32,
    pub clockwise: bool,
}

/// The complete arena document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaConfig {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Bounding extents (em); diameter for radius-symmetric shapes
    pub width: f32,
    pub height: f32,
    pub shape: ArenaShape,
    pub theme: ArenaTheme,
    /// Whole-arena rotation, 0-360 degrees
    #[serde(default)]
    pub rotation: Option<f32>,
    #[serde(default)]
    pub loops: Vec<LoopConfig>,
    #[serde(default)]
    pub exits: Vec<ExitConfig>,
    pub wall: WallConfig,
    #[serde(default)]
    pub obstacles: Vec<ObstacleConfig>,
    #[serde(default)]
    pub pits: Vec<PitConfig>,
    #[serde(default)]
    pub water_body: Option<WaterBodyConfig>,
    #[serde(default)]
    pub portals: Vec<PortalConfig>,
    #[serde(default)]
    pub laser_guns: Vec<LaserGunConfig>,
    #[serde(default)]
    pub goal_objects: Vec<GoalObjectConfig>,
    #[serde(default)]
    pub require_all_goals_destroyed: bool,
    #[serde(default)]
    pub rotation_bodies: Vec<RotationBodyConfig>,
    /// Simulation tuning
    pub gravity: f32,
    pub air_resistance: f32,
    pub surface_friction: f32,
    /// Cosmetic overrides
    #[serde(default)]
    pub floor_color: Option<[f32; 4]>,
    #[serde(default)]
    pub floor_texture: Option<String>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            name: "Untitled Arena".to_string(),
            description: None,
            width: 50.0,
            height: 50.0,
            shape: ArenaShape::Circle,
            theme: ArenaTheme::Classic,
            rotation: None,
            loops: Vec::new(),
            exits: Vec::new(),
            wall: WallConfig::default(),
            obstacles: Vec::new(),
            pits: Vec::new(),
            water_body: None,
            portals: Vec::new(),
            laser_guns: Vec::new(),
            goal_objects: Vec::new(),
            require_all_goals_destroyed: false,
            rotation_bodies: Vec::new(),
            gravity: 9.8,
            air_resistance: 0.02,
            surface_friction: 0.3,
            floor_color: None,
            floor_texture: None,
        }
    }
}

impl ArenaConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Half of the smaller extent: the radius of the largest centered circle
    /// guaranteed to fit in the bounding extents
    pub fn bounding_radius(&self) -> f32 {
        self.width.min(self.height) / 2.0
    }

    // Pure transforms. The editor holds the mutable state; the engine only
    // ever produces new values.

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_shape(mut self, shape: ArenaShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_extents(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_loop(mut self, loop_config: LoopConfig) -> Self {
        self.loops.push(loop_config);
        self
    }

    pub fn with_wall(mut self, wall: WallConfig) -> Self {
        self.wall = wall;
        self
    }

    pub fn with_exit(mut self, exit: ExitConfig) -> Self {
        self.exits.push(exit);
        self
    }

    /// Replace the obstacle set (typically with generator output)
    pub fn with_obstacles(mut self, obstacles: Vec<ObstacleConfig>) -> Self {
        self.obstacles = obstacles;
        self
    }

    /// Replace the pit set (typically with generator output)
    pub fn with_pits(mut self, pits: Vec<PitConfig>) -> Self {
        self.pits = pits;
        self
    }

    pub fn with_water_body(mut self, water_body: WaterBodyConfig) -> Self {
        self.water_body = Some(water_body);
        self
    }

    pub fn with_portal(mut self, portal: PortalConfig) -> Self {
        self.portals.push(portal);
        self
    }

    pub fn with_goal_object(mut self, goal: GoalObjectConfig) -> Self {
        self.goal_objects.push(goal);
        self
    }

    /// Circular regions that procedural placement must keep clear:
    /// every loop ring and a centered water body
    pub fn exclusion_zones(&self) -> Vec<crate::placement::ExcludeZone> {
        let mut zones: Vec<crate::placement::ExcludeZone> = self
            .loops
            .iter()
            .map(|l| crate::placement::ExcludeZone {
                x: 0.0,
                y: 0.0,
                radius: l.radius,
            })
            .collect();
        if let Some(water) = &self.water_body
            && water.enabled
            && matches!(water.kind, WaterBodyKind::Center)
        {
            zones.push(crate::placement::ExcludeZone {
                x: 0.0,
                y: 0.0,
                radius: water.radius,
            });
        }
        zones
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charge_point_derivation() {
        let loop_config = LoopConfig::new(12.0).with_charge_points(4, 6.0);
        assert_eq!(loop_config.charge_point_count, 4);
        assert_eq!(loop_config.charge_points.len(), 4);
        for (i, cp) in loop_config.charge_points.iter().enumerate() {
            assert!((cp.angle - 90.0 * i as f32).abs() < 1e-5);
            assert_eq!(cp.recharge_rate, 6.0);
        }
    }

    #[test]
    fn test_charge_point_count_capped() {
        let loop_config = LoopConfig::new(12.0).with_charge_points(99, 1.0);
        assert_eq!(loop_config.charge_point_count, 12);
        assert_eq!(loop_config.charge_points.len(), 12);
    }

    #[test]
    fn test_transforms_do_not_touch_original() {
        let base = ArenaConfig::new("base");
        let derived = base.clone().with_loop(LoopConfig::new(10.0));
        assert!(base.loops.is_empty());
        assert_eq!(derived.loops.len(), 1);
    }

    #[test]
    fn test_exclusion_zones_cover_loops_and_center_water() {
        let config = ArenaConfig::new("zones")
            .with_loop(LoopConfig::new(15.0))
            .with_water_body(WaterBodyConfig {
                enabled: true,
                kind: WaterBodyKind::Center,
                shape: ArenaShape::Circle,
                radius: 8.0,
                width: None,
                height: None,
                ring_thickness: None,
                rotation: None,
                liquid: LiquidType::Water,
                spin_drain_rate: 5.0,
                speed_multiplier: 0.6,
                viscosity: 1.0,
                color: None,
            });
        let zones = config.exclusion_zones();
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].radius, 15.0);
        assert_eq!(zones[1].radius, 8.0);
    }

    #[test]
    fn test_json_round_trip() {
        let config = ArenaConfig::new("round trip")
            .with_loop(LoopConfig::new(10.0).with_charge_points(3, 4.0))
            .with_portal(PortalConfig {
                id: 1,
                in_point: Vec2::new(-10.0, 0.0),
                out_point: Vec2::new(10.0, 0.0),
                radius: 2.0,
                cooldown: Some(1.5),
                color: None,
                bidirectional: true,
            });
        let json = serde_json::to_string(&config).unwrap();
        let back: ArenaConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_liquid_default_colors_distinct() {
        let liquids = [
            LiquidType::Water,
            LiquidType::Blood,
            LiquidType::Lava,
            LiquidType::Acid,
            LiquidType::Oil,
            LiquidType::Ice,
        ];
        for (i, a) in liquids.iter().enumerate() {
            for b in &liquids[i + 1..] {
                assert_ne!(a.default_color(), b.default_color());
            }
        }
    }
}
