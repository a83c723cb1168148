//! The spider simulation: foothold sampling, gait scheduling, foot placement
//! and foot motion. Everything here is deterministic and free of rendering.

mod body;
mod gait;
mod leg;
mod planner;
mod sampler;

pub use body::BodyMotion;
pub use gait::{GaitGroup, StepNeeds};
pub use leg::{Foothold, Leg};
pub use planner::{find_best_foothold, ClaimSet};
pub use sampler::{CellRange, GridCell, GridSampler};

use glam::Vec2;

use crate::config::{Derived, SpiderConfig};
use crate::constants::{LEG_ANGLE_OFFSETS, LEG_COUNT};

/// What happened during one simulation tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Group given the chance to step this tick, if any leg needed to
    pub scheduled: Option<GaitGroup>,
    /// Legs that received a new foothold
    pub retargeted: Vec<usize>,
    /// Legs that needed a foothold but found no candidate
    pub unplaced: Vec<usize>,
}

/// Leg and gait state for the single spider on screen.
#[derive(Debug, Clone)]
pub struct Spider {
    legs: [Leg; LEG_COUNT],
    phase: GaitGroup,
    sampler: GridSampler,
    claims: ClaimSet,
}

impl Spider {
    /// A spider whose feet are all tucked under `center` with no footholds.
    pub fn new(center: Vec2) -> Self {
        Self {
            legs: std::array::from_fn(|_| Leg::tucked(center)),
            phase: GaitGroup::A,
            sampler: GridSampler::new(),
            claims: ClaimSet::new(),
        }
    }

    pub fn legs(&self) -> &[Leg; LEG_COUNT] {
        &self.legs
    }

    pub fn phase(&self) -> GaitGroup {
        self.phase
    }

    /// Candidates gathered during the last tick
    pub fn candidates(&self) -> &GridSampler {
        &self.sampler
    }

    /// Advance the spider by one tick with the body at `body` facing `heading`
    /// on a surface of size `bounds`.
    pub fn tick(&mut self, body: Vec2, heading: f32, config: &SpiderConfig, bounds: Vec2) -> TickReport {
        puffin::profile_function!();
        let derived = config.derived();

        self.sampler.collect(
            body,
            config.leg_reach,
            derived.sample_inner_sq,
            config.grid_spacing,
            bounds,
        );
        self.claim_current_targets();

        let mut report = TickReport::default();
        let needs = StepNeeds::evaluate(&self.legs, body, &derived);
        if let Some(group) = needs.select(self.phase) {
            for &i in needs.group(group) {
                if self.retarget(i, body, heading, &derived) {
                    report.retargeted.push(i);
                } else {
                    tracing::trace!(leg = i, "no foothold in reach");
                    report.unplaced.push(i);
                }
            }
            report.scheduled = Some(group);
            self.phase = self.phase.other();
        }

        for leg in &mut self.legs {
            leg.advance(body, config.step_speed, config.step_lift_height);
        }

        report
    }

    /// Reserve every candidate that is already some leg's target, stepping
    /// or planted, so no two legs ever share a grid point.
    fn claim_current_targets(&mut self) {
        self.claims.reset(self.sampler.len());
        for leg in &self.legs {
            if let Some(target) = leg.target {
                if let Some(index) = self.sampler.index_of(target.cell, target.spacing) {
                    self.claims.claim(index);
                }
            }
        }
    }

    /// Try to give leg `i` a new foothold. On failure the leg is untouched.
    fn retarget(&mut self, i: usize, body: Vec2, heading: f32, derived: &Derived) -> bool {
        let Some(index) = find_best_foothold(
            body,
            heading + LEG_ANGLE_OFFSETS[i],
            &self.sampler,
            &self.claims,
            derived.reach_sq,
            derived.foothold_min_sq,
        ) else {
            return false;
        };

        self.claims.claim(index);
        let foothold = Foothold::new(self.sampler.cell(index), self.sampler.spacing());
        self.legs[i].start_step(foothold);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);
    const CENTER: Vec2 = Vec2::new(400.0, 300.0);

    fn distinct_targets(spider: &Spider) -> bool {
        let targets: Vec<Vec2> = spider.legs().iter().filter_map(|l| l.target.map(|t| t.position)).collect();
        targets
            .iter()
            .enumerate()
            .all(|(i, a)| targets.iter().skip(i + 1).all(|b| a != b))
    }

    #[test]
    fn test_first_tick_steps_group_a_then_b() {
        let config = SpiderConfig::default();
        let mut spider = Spider::new(CENTER);

        let report = spider.tick(CENTER, 0.0, &config, BOUNDS);
        assert_eq!(report.scheduled, Some(GaitGroup::A));
        assert_eq!(report.retargeted, vec![0, 2, 5, 7]);
        assert_eq!(spider.phase(), GaitGroup::B);

        let report = spider.tick(CENTER, 0.0, &config, BOUNDS);
        assert_eq!(report.scheduled, Some(GaitGroup::B));
        assert_eq!(report.retargeted, vec![1, 3, 4, 6]);
        assert_eq!(spider.phase(), GaitGroup::A);
    }

    #[test]
    fn test_only_one_group_starts_stepping_per_tick() {
        let config = SpiderConfig::default();
        let mut spider = Spider::new(CENTER);
        let mut body = CENTER;

        for tick in 0..200 {
            body.x = CENTER.x + (tick as f32 * 0.05).sin() * 150.0;
            body.y = CENTER.y + (tick as f32 * 0.03).cos() * 100.0;
            let before: Vec<bool> = spider.legs().iter().map(|l| l.stepping).collect();
            let report = spider.tick(body, 0.7, &config, BOUNDS);

            for (i, leg) in spider.legs().iter().enumerate() {
                let started = leg.stepping && !before[i] || report.retargeted.contains(&i);
                if started {
                    assert_eq!(Some(GaitGroup::of(i)), report.scheduled);
                }
            }
        }
    }

    #[test]
    fn test_no_two_legs_share_a_target() {
        let config = SpiderConfig { step_speed: 0.05, ..SpiderConfig::default() };
        let mut spider = Spider::new(CENTER);
        let mut body = CENTER;

        for tick in 0..300 {
            body.x += if tick % 100 < 50 { 6.0 } else { -6.0 };
            spider.tick(body, 0.0, &config, BOUNDS);
            assert!(distinct_targets(&spider));
        }
    }

    #[test]
    fn test_footholds_from_an_old_spacing_stay_claimed() {
        let config = SpiderConfig { grid_spacing: 20.0, ..SpiderConfig::default() };
        let old_spacing = 40.0;
        let cell = GridCell::new(26, 27);
        let point = cell.position(old_spacing);

        // Put leg 0's ideal point exactly on the foothold leg 3 still holds
        let reach = config.leg_reach * crate::constants::IDEAL_REACH_RATIO;
        let body = point - Vec2::from_angle(LEG_ANGLE_OFFSETS[0]) * reach;
        let mut spider = Spider::new(body);
        spider.legs[3].target = Some(Foothold::new(cell, old_spacing));
        spider.legs[3].current = point;
        spider.legs[3].planted = true;

        let report = spider.tick(body, 0.0, &config, Vec2::new(2000.0, 2000.0));
        assert_eq!(report.scheduled, Some(GaitGroup::A));
        assert!(report.retargeted.contains(&0));
        assert_ne!(spider.legs()[0].target.map(|t| t.position), Some(point));
        assert_eq!(spider.legs()[3].target, Some(Foothold::new(cell, old_spacing)));
        assert!(distinct_targets(&spider));
    }

    #[test]
    fn test_stationary_body_settles() {
        let config = SpiderConfig::default();
        let mut spider = Spider::new(CENTER);

        // Two ticks place both groups, a handful more lets every step land
        for _ in 0..10 {
            spider.tick(CENTER, 0.0, &config, BOUNDS);
        }
        for _ in 0..100 {
            let report = spider.tick(CENTER, 0.0, &config, BOUNDS);
            assert_eq!(report.scheduled, None);
        }
        assert!(spider.legs().iter().all(|l| l.planted && l.target.is_some()));
    }

    #[test]
    fn test_failed_placement_keeps_prior_target() {
        let config = SpiderConfig::default();
        let mut spider = Spider::new(CENTER);
        for _ in 0..10 {
            spider.tick(CENTER, 0.0, &config, BOUNDS);
        }
        let before: Vec<Option<Foothold>> = spider.legs().iter().map(|l| l.target).collect();

        // Far outside the surface: the sampler finds nothing and every leg is too far
        let report = spider.tick(Vec2::new(5000.0, 5000.0), 0.0, &config, BOUNDS);
        assert!(spider.candidates().is_empty());
        assert!(report.retargeted.is_empty());
        assert_eq!(report.unplaced.len(), 4);

        let after: Vec<Option<Foothold>> = spider.legs().iter().map(|l| l.target).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_clawless_legs_stay_clawless_without_candidates() {
        let config = SpiderConfig::default();
        let mut spider = Spider::new(Vec2::new(5000.0, 5000.0));
        let report = spider.tick(Vec2::new(5000.0, 5000.0), 0.0, &config, BOUNDS);
        assert_eq!(report.scheduled, Some(GaitGroup::A));
        assert!(spider.legs().iter().all(|l| l.target.is_none() && !l.stepping));
    }

    #[test]
    fn test_step_progress_is_monotonic_within_a_step() {
        let config = SpiderConfig { step_speed: 0.1, ..SpiderConfig::default() };
        let mut spider = Spider::new(CENTER);
        let mut body = CENTER;
        let mut last: Vec<(Option<Foothold>, f32)> = spider.legs().iter().map(|l| (l.target, l.step_progress)).collect();

        for _ in 0..150 {
            body.x += 3.0;
            spider.tick(body, 0.0, &config, Vec2::new(2000.0, 600.0));
            for (i, leg) in spider.legs().iter().enumerate() {
                let (prev_target, prev_progress) = last[i];
                if leg.target == prev_target {
                    assert!(leg.step_progress >= prev_progress);
                }
                if leg.planted && !leg.stepping {
                    assert_eq!(Some(leg.current), leg.target.map(|t| t.position));
                }
                last[i] = (leg.target, leg.step_progress);
            }
        }
    }
}
