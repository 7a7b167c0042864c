//! Whole-config validation
//!
//! `validate_arena_config` checks structural and semantic constraints across
//! an `ArenaConfig` and reports *every* violation as a human-readable
//! message, so an editor can show the complete list. It never panics on bad
//! user data and never mutates its input.

use glam::Vec2;

use crate::config::{ArenaConfig, ArenaShape, WallConfig, WaterBodyKind};
use crate::consts::*;
use crate::geometry::{PathDescriptor, generate_shape_path};

/// Validation outcome: `valid` is true exactly when `errors` is empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Check every constraint on the config and collect all violations
pub fn validate_arena_config(config: &ArenaConfig) -> Validation {
    let mut errors = Vec::new();

    if config.name.trim().is_empty() {
        errors.push("arena name must not be empty".to_string());
    }

    let extents_valid = check_extents(config, &mut errors);

    if config.loops.len() > MAX_LOOPS {
        errors.push(format!(
            "at most {MAX_LOOPS} loops allowed (got {})",
            config.loops.len()
        ));
    }
    for (i, loop_config) in config.loops.iter().enumerate() {
        if !(loop_config.radius > 0.0) {
            errors.push(format!("loop {i}: radius must be positive"));
        }
        if loop_config.charge_point_count > MAX_CHARGE_POINTS {
            errors.push(format!(
                "loop {i}: at most {MAX_CHARGE_POINTS} charge points allowed (got {})",
                loop_config.charge_point_count
            ));
        }
        if loop_config.charge_points.len() != loop_config.charge_point_count as usize {
            errors.push(format!(
                "loop {i}: {} charge points derived but count is {}",
                loop_config.charge_points.len(),
                loop_config.charge_point_count
            ));
        }
    }

    if config.portals.len() > MAX_PORTALS {
        errors.push(format!(
            "at most {MAX_PORTALS} portals allowed (got {})",
            config.portals.len()
        ));
    }

    if let WallConfig::Enabled(settings) = &config.wall
        && !(MIN_WALL_COUNT..=MAX_WALL_COUNT).contains(&settings.wall_count)
    {
        errors.push(format!(
            "wall count must be between {MIN_WALL_COUNT} and {MAX_WALL_COUNT} (got {})",
            settings.wall_count
        ));
    }

    if let Some(water) = &config.water_body {
        match water.kind {
            WaterBodyKind::Moat { loop_index } => {
                if loop_index >= config.loops.len() {
                    errors.push(format!(
                        "moat water body references loop {loop_index} but only {} loops exist",
                        config.loops.len()
                    ));
                }
            }
            WaterBodyKind::Ring => {
                if !water.ring_thickness.is_some_and(|t| t > 0.0) {
                    errors.push("ring water body needs a positive ring thickness".to_string());
                }
            }
            WaterBodyKind::Center => {}
        }
        if !(water.radius > 0.0) {
            errors.push("water body radius must be positive".to_string());
        }
    }

    // Containment checks need a well-formed boundary
    if extents_valid {
        let boundary = generate_shape_path(
            config.shape,
            Vec2::ZERO,
            config.bounding_radius(),
            Some(config.width),
            Some(config.height),
        );
        check_elements(config, &boundary, &mut errors);
    }

    Validation {
        valid: errors.is_empty(),
        errors,
    }
}

/// Extent sanity; returns whether a boundary path can be built from them
fn check_extents(config: &ArenaConfig, errors: &mut Vec<String>) -> bool {
    let mut ok = true;
    for (name, value) in [("width", config.width), ("height", config.height)] {
        if !value.is_finite() || !(MIN_ARENA_EXTENT..=MAX_ARENA_EXTENT).contains(&value) {
            errors.push(format!(
                "{name} must be between {MIN_ARENA_EXTENT} and {MAX_ARENA_EXTENT} (got {value})"
            ));
            ok = false;
        }
    }
    if ok && config.shape == ArenaShape::Racetrack && config.width < config.height {
        errors.push(format!(
            "racetrack width must be at least its height (got {} x {})",
            config.width, config.height
        ));
        ok = false;
    }
    ok
}

/// Per-element radius and containment checks against the arena boundary
fn check_elements(config: &ArenaConfig, boundary: &PathDescriptor, errors: &mut Vec<String>) {
    for (i, o) in config.obstacles.iter().enumerate() {
        if !(o.radius > 0.0) {
            errors.push(format!("obstacle {i}: radius must be positive"));
        } else if !boundary.contains_circle(Vec2::new(o.x, o.y), o.radius) {
            errors.push(format!(
                "obstacle {i}: extends outside the arena at ({}, {})",
                o.x, o.y
            ));
        }
    }

    for (i, p) in config.pits.iter().enumerate() {
        if !(p.radius > 0.0) {
            errors.push(format!("pit {i}: radius must be positive"));
        } else if !boundary.contains_circle(Vec2::new(p.x, p.y), p.radius) {
            errors.push(format!(
                "pit {i}: extends outside the arena at ({}, {})",
                p.x, p.y
            ));
        }
    }

    for (i, g) in config.goal_objects.iter().enumerate() {
        if !(g.radius > 0.0) {
            errors.push(format!("goal object {i}: radius must be positive"));
        } else if !boundary.contains_circle(Vec2::new(g.x, g.y), g.radius) {
            errors.push(format!(
                "goal object {i}: extends outside the arena at ({}, {})",
                g.x, g.y
            ));
        }
    }

    for (i, portal) in config.portals.iter().enumerate() {
        if !(portal.radius > 0.0) {
            errors.push(format!("portal {i}: radius must be positive"));
            continue;
        }
        for (end, point) in [("entry", portal.in_point), ("exit", portal.out_point)] {
            if !boundary.contains_circle(point, portal.radius) {
                errors.push(format!(
                    "portal {i}: {end} point extends outside the arena at ({}, {})",
                    point.x, point.y
                ));
            }
        }
    }

    let max_loop_radius = config.bounding_radius();
    for (i, loop_config) in config.loops.iter().enumerate() {
        if loop_config.radius > max_loop_radius {
            errors.push(format!(
                "loop {i}: radius {} exceeds the arena's {max_loop_radius}",
                loop_config.radius
            ));
        }
    }
}
