//! Per-frame clock, pointer cell and body smoothing.
//!
//! The driver is the only owner of simulation state. The host writes the
//! pointer whenever input arrives and calls [`AnimationDriver::frame`] once per
//! display refresh; both happen on the event-loop thread, so the pointer cell
//! has exactly one writer and one reader and needs no synchronization.

use glam::Vec2;

use crate::config::SpiderConfig;
use crate::constants::{MAX_FRAME_DT, NOMINAL_FRAME_DT};
use crate::render::Scene;
use crate::spider::{BodyMotion, Spider, TickReport};

/// Converts host timestamps into capped frame deltas.
#[derive(Debug, Clone, Default)]
struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    fn delta(&mut self, now: f64) -> f32 {
        let dt = match self.last {
            Some(last) => ((now - last) as f32).clamp(0.0, MAX_FRAME_DT),
            None => NOMINAL_FRAME_DT,
        };
        self.last = Some(now);
        dt
    }
}

pub struct AnimationDriver {
    /// Logical surface size, `None` until the host reports nonzero dimensions
    surface: Option<Vec2>,
    pointer: Vec2,
    body: BodyMotion,
    heading: f32,
    /// Created on the first nonzero resize and kept for the session
    spider: Option<Spider>,
    clock: FrameClock,
    time: f32,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self {
            surface: None,
            pointer: Vec2::ZERO,
            body: BodyMotion::new(Vec2::ZERO),
            heading: 0.0,
            spider: None,
            clock: FrameClock::default(),
            time: 0.0,
        }
    }

    /// Notify the driver of a new surface size.
    ///
    /// A zero dimension suspends the frame loop. Otherwise body and pointer are
    /// re-centred; legs are created on the first valid size only and keep
    /// their footholds across later resizes.
    pub fn resize(&mut self, size: Vec2) {
        if size.x <= 0.0 || size.y <= 0.0 {
            self.surface = None;
            return;
        }

        let center = size * 0.5;
        tracing::debug!(width = size.x, height = size.y, "surface resized");
        self.surface = Some(size);
        self.body.reset(center);
        self.pointer = center;
        self.heading = 0.0;
        if self.spider.is_none() {
            self.spider = Some(Spider::new(center));
        }
    }

    /// Last-known pointer position in surface coordinates.
    pub fn set_pointer(&mut self, pointer: Vec2) {
        self.pointer = pointer;
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn surface(&self) -> Option<Vec2> {
        self.surface
    }

    pub fn body(&self) -> &BodyMotion {
        &self.body
    }

    pub fn spider(&self) -> Option<&Spider> {
        self.spider.as_ref()
    }

    /// Run one frame at host time `now` (seconds). Returns `None` without
    /// touching any state while there is no usable surface.
    pub fn frame(&mut self, now: f64, config: &SpiderConfig) -> Option<TickReport> {
        puffin::profile_function!();
        let size = self.surface?;
        let spider = self.spider.as_mut()?;

        let dt = self.clock.delta(now);
        self.time = now as f32;

        self.body.chase(self.pointer, config.max_speed);
        self.body.settle(dt);
        self.heading = self.body.heading_to(self.pointer);

        Some(spider.tick(self.body.position, self.heading, config, size))
    }

    /// Everything the renderer needs to draw the current frame.
    pub fn scene<'a>(&'a self, config: &'a SpiderConfig) -> Option<Scene<'a>> {
        let size = self.surface?;
        let spider = self.spider.as_ref()?;
        Some(Scene {
            size,
            body: self.body.position,
            heading: self.heading,
            legs: spider.legs(),
            candidates: spider.candidates(),
            time: self.time,
            config,
        })
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}
