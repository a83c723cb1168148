//! Alternating two-group gait scheduling.

use super::leg::Leg;
use crate::config::Derived;
use crate::constants::{GAIT_GROUP_A, GAIT_GROUP_B, LEG_COUNT};
use glam::Vec2;

/// One of the two static leg groups. Also used as the gait phase: the
/// phase names the group that gets the first chance to step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaitGroup {
    A,
    B,
}

impl GaitGroup {
    pub fn of(leg: usize) -> Self {
        if GAIT_GROUP_A.contains(&leg) {
            GaitGroup::A
        } else {
            GaitGroup::B
        }
    }

    pub fn members(self) -> &'static [usize] {
        match self {
            GaitGroup::A => &GAIT_GROUP_A,
            GaitGroup::B => &GAIT_GROUP_B,
        }
    }

    pub fn other(self) -> Self {
        match self {
            GaitGroup::A => GaitGroup::B,
            GaitGroup::B => GaitGroup::A,
        }
    }
}

/// Whether a resting leg has to find a new foothold: it has none, or the
/// body has walked too far from it, or the body has overtaken it.
pub fn needs_step(leg: &Leg, body: Vec2, derived: &Derived) -> bool {
    if leg.stepping {
        return false;
    }
    match leg.target {
        None => true,
        Some(target) => {
            let d_sq = target.position.distance_squared(body);
            d_sq > derived.step_far_sq || d_sq < derived.step_near_sq
        }
    }
}

/// Legs needing a step, bucketed by gait group in index order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepNeeds {
    pub a: Vec<usize>,
    pub b: Vec<usize>,
}

impl StepNeeds {
    pub fn evaluate(legs: &[Leg; LEG_COUNT], body: Vec2, derived: &Derived) -> Self {
        let mut needs = Self::default();
        for (i, leg) in legs.iter().enumerate() {
            if needs_step(leg, body, derived) {
                match GaitGroup::of(i) {
                    GaitGroup::A => needs.a.push(i),
                    GaitGroup::B => needs.b.push(i),
                }
            }
        }
        needs
    }

    pub fn group(&self, group: GaitGroup) -> &[usize] {
        match group {
            GaitGroup::A => &self.a,
            GaitGroup::B => &self.b,
        }
    }

    /// The group allowed to step this tick: the active phase if any of its
    /// legs need it, otherwise the other group, otherwise none.
    pub fn select(&self, phase: GaitGroup) -> Option<GaitGroup> {
        if !self.group(phase).is_empty() {
            Some(phase)
        } else if !self.group(phase.other()).is_empty() {
            Some(phase.other())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SpiderConfig;
    use crate::spider::leg::Foothold;
    use crate::spider::sampler::GridCell;

    fn planted_at(col: i32, row: i32) -> Leg {
        let mut leg = Leg::tucked(Vec2::ZERO);
        leg.start_step(Foothold::new(GridCell::new(col, row), 40.0));
        leg.advance(Vec2::ZERO, 1.0, 0.0);
        leg
    }

    #[test]
    fn test_groups_partition_all_legs() {
        let mut seen = [false; LEG_COUNT];
        for group in [GaitGroup::A, GaitGroup::B] {
            for &leg in group.members() {
                assert!(!seen[leg]);
                seen[leg] = true;
                assert_eq!(GaitGroup::of(leg), group);
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_leg_without_target_needs_step() {
        let derived = SpiderConfig::default().derived();
        assert!(needs_step(&Leg::tucked(Vec2::ZERO), Vec2::ZERO, &derived));
    }

    #[test]
    fn test_stepping_leg_never_needs_step() {
        let derived = SpiderConfig::default().derived();
        let mut leg = Leg::tucked(Vec2::ZERO);
        leg.start_step(Foothold::new(GridCell::new(100, 100), 40.0));
        assert!(!needs_step(&leg, Vec2::ZERO, &derived));
    }

    #[test]
    fn test_distance_thresholds() {
        let derived = SpiderConfig::default().derived();
        let leg = planted_at(2, 0); // (80, 0)

        assert!(!needs_step(&leg, Vec2::ZERO, &derived));
        // Too far: more than 138px away
        assert!(needs_step(&leg, Vec2::new(-60.0, 0.0), &derived));
        // Too close: less than 12px away
        assert!(needs_step(&leg, Vec2::new(75.0, 0.0), &derived));
    }

    #[test]
    fn test_select_prefers_active_phase() {
        let needs = StepNeeds { a: vec![0], b: vec![1] };
        assert_eq!(needs.select(GaitGroup::A), Some(GaitGroup::A));
        assert_eq!(needs.select(GaitGroup::B), Some(GaitGroup::B));
    }

    #[test]
    fn test_select_falls_back_to_other_group() {
        let needs = StepNeeds { a: vec![], b: vec![3, 4] };
        assert_eq!(needs.select(GaitGroup::A), Some(GaitGroup::B));
        assert_eq!(StepNeeds::default().select(GaitGroup::A), None);
    }
}
