//! Seeded random placement of obstacles and pits
//!
//! The only impure part of the engine. All generators take `&mut impl Rng`
//! so callers control reproducibility; the `scatter_*` wrappers seed a
//! `Pcg32` from a `u64` for deterministic layouts. Retry budgets are
//! explicit policy, and exhaustion degrades softly: the returned array is
//! shorter than requested, never an error.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::{ObstacleConfig, ObstacleKind, PitConfig};
use crate::consts::*;
use crate::polar_to_cartesian;

/// A circular region placement must not overlap (loops, central water, ...)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExcludeZone {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// What to do when the retry budget for one element runs out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetryFallback {
    /// Drop the element; the result array comes back shorter than requested
    #[default]
    Skip,
    /// Keep the candidate that overlapped other obstacles the least.
    /// Exclude zones are still never violated.
    BestEffort,
}

/// Bounded-retry policy for random placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementPolicy {
    /// Position attempts per element before giving up
    pub max_attempts: u32,
    pub fallback: RetryFallback,
}

impl Default for PlacementPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            fallback: RetryFallback::Skip,
        }
    }
}

/// Distribution pattern for generated pits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PitPlacement {
    /// Evenly spaced ring just inside the boundary
    Edges,
    /// Clustered near the origin
    Center,
    /// Uniform over the arena with enforced pairwise separation
    Random,
}

#[inline]
fn circles_overlap(ax: f32, ay: f32, ar: f32, bx: f32, by: f32, br: f32) -> bool {
    let dx = ax - bx;
    let dy = ay - by;
    dx * dx + dy * dy < (ar + br) * (ar + br)
}

/// Uniform sample inside a disc of `radius` around the origin
fn sample_in_disc<R: Rng>(rng: &mut R, radius: f32) -> Vec2 {
    let r = radius * rng.random::<f32>().sqrt();
    let theta = rng.random_range(0.0..TAU);
    Vec2::new(r * theta.cos(), r * theta.sin())
}

fn random_obstacle_kind<R: Rng>(rng: &mut R) -> ObstacleKind {
    match rng.random_range(0..4) {
        0 => ObstacleKind::Rock,
        1 => ObstacleKind::Pillar,
        2 => ObstacleKind::Bumper,
        _ => ObstacleKind::Spinner,
    }
}

/// Scatter up to `count` obstacles of random kind and size inside the arena
/// extents, avoiding `exclude_zones` and each other.
///
/// Positions are confined to the ellipse inscribed in the extents (shrunk by
/// each obstacle's radius), which keeps them inside every supported arena
/// shape's bounding circle as well as the rectangular extents.
pub fn generate_random_obstacles<R: Rng>(
    rng: &mut R,
    count: usize,
    arena_width: f32,
    arena_height: f32,
    exclude_zones: &[ExcludeZone],
    policy: &PlacementPolicy,
) -> Vec<ObstacleConfig> {
    let mut obstacles: Vec<ObstacleConfig> = Vec::with_capacity(count);

    for _ in 0..count {
        let radius = rng.random_range(OBSTACLE_MIN_RADIUS..=OBSTACLE_MAX_RADIUS);
        let kind = random_obstacle_kind(rng);

        let half_x = arena_width / 2.0 - radius;
        let half_y = arena_height / 2.0 - radius;
        if half_x <= 0.0 || half_y <= 0.0 {
            // Obstacle can't fit in the arena at all
            continue;
        }

        // Best candidate so far under BestEffort: (overlap depth, position)
        let mut best: Option<(f32, Vec2)> = None;
        let mut placed = false;

        for _ in 0..policy.max_attempts.max(1) {
            let unit = sample_in_disc(rng, 1.0);
            let pos = Vec2::new(unit.x * half_x, unit.y * half_y);

            let in_zone = exclude_zones
                .iter()
                .any(|z| circles_overlap(pos.x, pos.y, radius, z.x, z.y, z.radius));
            if in_zone {
                continue;
            }

            let overlap: f32 = obstacles
                .iter()
                .filter(|o| circles_overlap(pos.x, pos.y, radius, o.x, o.y, o.radius))
                .map(|o| (radius + o.radius) - Vec2::new(pos.x - o.x, pos.y - o.y).length())
                .sum();

            if overlap == 0.0 {
                obstacles.push(ObstacleConfig {
                    kind,
                    x: pos.x,
                    y: pos.y,
                    radius,
                });
                placed = true;
                break;
            }

            if best.is_none_or(|(d, _)| overlap < d) {
                best = Some((overlap, pos));
            }
        }

        if !placed
            && policy.fallback == RetryFallback::BestEffort
            && let Some((_, pos)) = best
        {
            obstacles.push(ObstacleConfig {
                kind,
                x: pos.x,
                y: pos.y,
                radius,
            });
        }
    }

    if obstacles.len() < count {
        log::warn!(
            "obstacle placement: {} of {} dropped after {} attempts each",
            count - obstacles.len(),
            count,
            policy.max_attempts
        );
    }
    log::info!(
        "scattered {}/{} obstacles in {}x{} arena ({} exclude zones)",
        obstacles.len(),
        count,
        arena_width,
        arena_height,
        exclude_zones.len()
    );

    obstacles
}

/// Seeded convenience wrapper around `generate_random_obstacles` with the
/// default retry policy
pub fn scatter_obstacles(
    seed: u64,
    count: usize,
    arena_width: f32,
    arena_height: f32,
    exclude_zones: &[ExcludeZone],
) -> Vec<ObstacleConfig> {
    let mut rng = Pcg32::seed_from_u64(seed);
    generate_random_obstacles(
        &mut rng,
        count,
        arena_width,
        arena_height,
        exclude_zones,
        &PlacementPolicy::default(),
    )
}

fn pit_at(pos: Vec2, radius: f32) -> PitConfig {
    PitConfig {
        x: pos.x,
        y: pos.y,
        radius,
        damage_per_second: PIT_DRAIN_RATE,
        visual_depth: None,
    }
}

/// Produce up to `count` pits of `pit_radius` following `placement`.
///
/// Every pit drains at the engine default rate regardless of caller input;
/// per-pit tuning is not part of the schema.
pub fn generate_random_pits<R: Rng>(
    rng: &mut R,
    count: usize,
    arena_radius: f32,
    placement: PitPlacement,
    pit_radius: f32,
) -> Vec<PitConfig> {
    let mut pits = Vec::with_capacity(count);

    match placement {
        PitPlacement::Edges => {
            let ring_radius = (arena_radius - pit_radius - EDGE_PIT_MARGIN).max(0.0);
            for i in 0..count {
                let angle = i as f32 * 360.0 / count as f32;
                pits.push(pit_at(polar_to_cartesian(ring_radius, angle), pit_radius));
            }
        }
        PitPlacement::Center => {
            let cluster_radius = arena_radius * CENTER_CLUSTER_FRACTION;
            for _ in 0..count {
                pits.push(pit_at(sample_in_disc(rng, cluster_radius), pit_radius));
            }
        }
        PitPlacement::Random => {
            let max_radius = arena_radius - pit_radius;
            if max_radius <= 0.0 {
                return pits;
            }
            for _ in 0..count {
                let mut placed = false;
                for _ in 0..DEFAULT_MAX_ATTEMPTS {
                    let pos = sample_in_disc(rng, max_radius);
                    let separated = pits.iter().all(|p: &PitConfig| {
                        Vec2::new(pos.x - p.x, pos.y - p.y).length() >= 2.0 * pit_radius
                    });
                    if separated {
                        pits.push(pit_at(pos, pit_radius));
                        placed = true;
                        break;
                    }
                }
                if !placed {
                    log::warn!(
                        "pit placement: dropped a pit after {DEFAULT_MAX_ATTEMPTS} attempts"
                    );
                }
            }
        }
    }

    pits
}

/// Seeded convenience wrapper around `generate_random_pits`
pub fn scatter_pits(
    seed: u64,
    count: usize,
    arena_radius: f32,
    placement: PitPlacement,
    pit_radius: f32,
) -> Vec<PitConfig> {
    let mut rng = Pcg32::seed_from_u64(seed);
    generate_random_pits(&mut rng, count, arena_radius, placement, pit_radius)
}
