//! Foothold selection for a single leg.

use glam::Vec2;
use std::f32::consts::{PI, TAU};

use super::sampler::GridSampler;
use crate::constants::*;

/// Candidate indices already claimed by a leg during the current tick.
///
/// Keyed by the sampler's candidate index, so it must be rebuilt whenever the
/// sampler collects a new set of points.
#[derive(Debug, Clone, Default)]
pub struct ClaimSet {
    claimed: Vec<bool>,
}

impl ClaimSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Release every claim and size the set for `len` candidates.
    pub fn reset(&mut self, len: usize) {
        self.claimed.clear();
        self.claimed.resize(len, false);
    }

    pub fn claim(&mut self, index: usize) {
        if let Some(slot) = self.claimed.get_mut(index) {
            *slot = true;
        }
    }

    pub fn is_claimed(&self, index: usize) -> bool {
        self.claimed.get(index).copied().unwrap_or(false)
    }
}

/// Shortest angular distance between two angles, in `[0, PI]`.
pub fn angle_between(a: f32, b: f32) -> f32 {
    let diff = (a - b).abs().rem_euclid(TAU);
    if diff > PI {
        TAU - diff
    } else {
        diff
    }
}

/// Pick the best unclaimed candidate for a leg reaching toward `heading`.
///
/// Candidates must lie in `[min_sq, reach_sq]` from the body and within
/// [`ANGULAR_TOLERANCE`] of the heading. The score is the distance from the
/// ideal point (at [`IDEAL_REACH_RATIO`] of reach along the heading) plus the
/// angular deviation weighted by [`ANGLE_SCORE_WEIGHT`]; the lowest score
/// wins and the first candidate wins ties.
pub fn find_best_foothold(
    body: Vec2,
    heading: f32,
    candidates: &GridSampler,
    claims: &ClaimSet,
    reach_sq: f32,
    min_sq: f32,
) -> Option<usize> {
    let direction = Vec2::from_angle(heading);
    let ideal = body + direction * reach_sq.sqrt() * IDEAL_REACH_RATIO;

    let mut best: Option<(usize, f32)> = None;
    for (index, point) in candidates.points().enumerate() {
        if claims.is_claimed(index) {
            continue;
        }
        let offset = point - body;
        let d_sq = offset.length_squared();
        if d_sq > reach_sq || d_sq < min_sq {
            continue;
        }
        let deviation = angle_between(offset.y.atan2(offset.x), heading);
        if deviation > ANGULAR_TOLERANCE {
            continue;
        }
        let score = point.distance(ideal) + deviation * ANGLE_SCORE_WEIGHT;
        if best.map_or(true, |(_, best_score)| score < best_score) {
            best = Some((index, score));
        }
    }

    best.map(|(index, _)| index)
}
