//! Named preset arenas
//!
//! Complete, ready-to-play configurations the editor clones as starting
//! points. Every preset validates clean; the test below keeps that honest.

use glam::Vec2;

use crate::config::{
    ArenaConfig, ArenaShape, ArenaTheme, ExitConfig, GoalObjectConfig, GoalObjectKind,
    LaserGunConfig, LiquidType, LoopConfig, ObstacleConfig, ObstacleKind, PortalConfig,
    RotationBodyConfig, WallConfig, WallSettings, WaterBodyConfig, WaterBodyKind,
};
use crate::placement::{PitPlacement, scatter_obstacles, scatter_pits};

/// All preset names, lookup keys for `preset`
pub fn preset_names() -> &'static [&'static str] {
    &["classic-dish", "hexpit", "starfall", "speedway", "maelstrom"]
}

/// Look up a preset by name
pub fn preset(name: &str) -> Option<ArenaConfig> {
    match name {
        "classic-dish" => Some(classic_dish()),
        "hexpit" => Some(hexpit()),
        "starfall" => Some(starfall()),
        "speedway" => Some(speedway()),
        "maelstrom" => Some(maelstrom()),
        _ => None,
    }
}

/// Every preset, in `preset_names` order
pub fn all_presets() -> Vec<ArenaConfig> {
    preset_names()
        .iter()
        .map(|name| preset(name).unwrap_or_default())
        .collect()
}

/// The traditional bowl: circular, walled, one boost loop, light clutter
fn classic_dish() -> ArenaConfig {
    let config = ArenaConfig::new("Classic Dish")
        .with_shape(ArenaShape::Circle)
        .with_extents(50.0, 50.0)
        .with_loop(LoopConfig::new(15.0).with_charge_points(4, 5.0))
        .with_exit(ExitConfig {
            angle: 90.0,
            width: 20.0,
            enabled: false,
        });
    let zones = config.exclusion_zones();
    let obstacles = scatter_obstacles(0xD15C, 4, 50.0, 50.0, &zones);
    ArenaConfig {
        description: Some("A plain walled bowl with a single boost loop.".to_string()),
        ..config.with_obstacles(obstacles)
    }
}

/// Hexagonal pit-fighting floor with central hazards and twin objectives
fn hexpit() -> ArenaConfig {
    let pits = scatter_pits(0x4E9, 3, 25.0, PitPlacement::Center, 1.5);
    ArenaConfig {
        description: Some("Six walls, a pitted center, two totems to crack.".to_string()),
        theme: ArenaTheme::Volcanic,
        require_all_goals_destroyed: true,
        ..ArenaConfig::new("Hexpit")
            .with_shape(ArenaShape::Hexagon)
            .with_extents(50.0, 50.0)
            .with_wall(WallConfig::Enabled(WallSettings {
                wall_count: 6,
                has_spikes: true,
                ..Default::default()
            }))
            .with_pits(pits)
            .with_goal_object(GoalObjectConfig {
                kind: GoalObjectKind::Totem,
                x: 10.0,
                y: 0.0,
                radius: 2.0,
                color: None,
            })
            .with_goal_object(GoalObjectConfig {
                kind: GoalObjectKind::Totem,
                x: -10.0,
                y: 0.0,
                radius: 2.0,
                color: None,
            })
    }
}

/// Open star with edge pits, paired portals, and a sweeping laser
fn starfall() -> ArenaConfig {
    // The star's concave edges pull the usable floor well inside the outer
    // radius; edge pits ring the inscribed region instead
    let pits = scatter_pits(0x57A2, 4, 12.0, PitPlacement::Edges, 1.5);
    ArenaConfig {
        description: Some("No walls. Fall off the points or take the portals.".to_string()),
        theme: ArenaTheme::Void,
        laser_guns: vec![LaserGunConfig {
            x: 0.0,
            y: 0.0,
            angle: 0.0,
            fire_interval: 4.0,
            damage: 6.0,
            sweep: Some(360.0),
        }],
        ..ArenaConfig::new("Starfall")
            .with_shape(ArenaShape::Star)
            .with_extents(50.0, 50.0)
            .with_wall(WallConfig::Disabled { all_exits: true })
            .with_pits(pits)
            .with_portal(PortalConfig {
                id: 1,
                in_point: Vec2::new(-8.0, 0.0),
                out_point: Vec2::new(8.0, 0.0),
                radius: 1.5,
                cooldown: Some(2.0),
                color: None,
                bidirectional: true,
            })
    }
}

/// Long racetrack with an oval boost loop and a moat around it
fn speedway() -> ArenaConfig {
    let mut loop_config = LoopConfig::new(12.0).with_charge_points(2, 8.0);
    loop_config.shape = ArenaShape::Oval;
    loop_config.width = Some(60.0);
    loop_config.height = Some(25.0);
    loop_config.speed_boost = 2.0;

    ArenaConfig {
        description: Some("Keep your speed up on the long straights.".to_string()),
        theme: ArenaTheme::Neon,
        surface_friction: 0.15,
        ..ArenaConfig::new("Speedway")
            .with_shape(ArenaShape::Racetrack)
            .with_extents(80.0, 40.0)
            .with_loop(loop_config)
            .with_water_body(WaterBodyConfig {
                enabled: true,
                kind: WaterBodyKind::Moat { loop_index: 0 },
                shape: ArenaShape::Oval,
                radius: 12.0,
                width: Some(60.0),
                height: Some(25.0),
                ring_thickness: Some(2.0),
                rotation: None,
                liquid: LiquidType::Oil,
                spin_drain_rate: 4.0,
                speed_multiplier: 0.5,
                viscosity: 3.0,
                color: None,
            })
            .with_obstacles(vec![
                ObstacleConfig {
                    kind: ObstacleKind::Bumper,
                    x: 20.0,
                    y: 0.0,
                    radius: 2.0,
                },
                ObstacleConfig {
                    kind: ObstacleKind::Bumper,
                    x: -20.0,
                    y: 0.0,
                    radius: 2.0,
                },
            ])
    }
}

/// Oval arena churned by a central lava pool and a rotating floor
fn maelstrom() -> ArenaConfig {
    ArenaConfig {
        description: Some("The floor spins and the middle burns.".to_string()),
        theme: ArenaTheme::Volcanic,
        rotation_bodies: vec![RotationBodyConfig {
            x: 0.0,
            y: 0.0,
            radius: 14.0,
            angular_velocity: 30.0,
            clockwise: true,
        }],
        ..ArenaConfig::new("Maelstrom")
            .with_shape(ArenaShape::Oval)
            .with_extents(60.0, 40.0)
            .with_wall(WallConfig::Enabled(WallSettings {
                wall_count: 12,
                has_springs: true,
                ..Default::default()
            }))
            .with_water_body(WaterBodyConfig {
                enabled: true,
                kind: WaterBodyKind::Center,
                shape: ArenaShape::Circle,
                radius: 8.0,
                width: None,
                height: None,
                ring_thickness: None,
                rotation: None,
                liquid: LiquidType::Lava,
                spin_drain_rate: 12.0,
                speed_multiplier: 0.7,
                viscosity: 4.0,
                color: None,
            })
            .with_obstacles(vec![
                ObstacleConfig {
                    kind: ObstacleKind::Pillar,
                    x: 0.0,
                    y: 12.0,
                    radius: 2.0,
                },
                ObstacleConfig {
                    kind: ObstacleKind::Pillar,
                    x: 0.0,
                    y: -12.0,
                    radius: 2.0,
                },
            ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_arena_config;

    #[test]
    fn test_every_preset_is_valid() {
        for name in preset_names() {
            let config = preset(name).expect("listed preset must exist");
            let result = validate_arena_config(&config);
            assert!(result.valid, "preset {name}: {:?}", result.errors);
        }
    }

    #[test]
    fn test_unknown_preset_is_none() {
        assert!(preset("does-not-exist").is_none());
    }

    #[test]
    fn test_presets_are_deterministic() {
        assert_eq!(preset("classic-dish"), preset("classic-dish"));
        assert_eq!(preset("starfall"), preset("starfall"));
    }

    #[test]
    fn test_all_presets_matches_names() {
        let presets = all_presets();
        assert_eq!(presets.len(), preset_names().len());
        for (config, name) in presets.iter().zip(preset_names()) {
            assert_eq!(&config.name.to_lowercase().replace(' ', "-"), name);
        }
    }
}
