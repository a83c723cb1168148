//! Rendering context - owns rendering resources separate from simulation state.

pub mod background;
mod body;
pub mod canvas;
mod dots;
pub mod egui_canvas;
mod legs;
pub mod palette;

pub use background::BackgroundCache;
pub use body::BodyLayout;
pub use canvas::{Canvas, Layer};
pub use egui_canvas::EguiCanvas;
pub use palette::Palette;

use egui::{LayerId, TextureId};
use glam::Vec2;

use crate::config::{BackgroundKey, SpiderConfig};
use crate::constants::LEG_COUNT;
use crate::spider::{GridSampler, Leg};

/// Borrowed view of everything needed to draw one frame.
pub struct Scene<'a> {
    /// Logical surface size
    pub size: Vec2,
    pub body: Vec2,
    pub heading: f32,
    pub legs: &'a [Leg; LEG_COUNT],
    /// Candidates gathered during the last tick
    pub candidates: &'a GridSampler,
    /// Seconds, only used for decorative flicker
    pub time: f32,
    pub config: &'a SpiderConfig,
}

impl Scene<'_> {
    /// Feet far enough from the body to be seen.
    fn visible_feet(&self, foot_visible_sq: f32) -> Vec<Vec2> {
        self.legs
            .iter()
            .map(|leg| leg.current)
            .filter(|foot| foot.distance_squared(self.body) > foot_visible_sq)
            .collect()
    }
}

/// Draw `scene` in layer order. The background lattice is drawn only when a
/// texture is available; the whole dot group is skipped when the grid is hidden.
pub fn draw_scene<C: Canvas>(canvas: &mut C, scene: &Scene, background: Option<TextureId>) {
    puffin::profile_function!();
    let config = scene.config;
    let derived = config.derived();
    let palette = Palette::for_theme(config.is_dark_mode);

    if config.show_grid {
        if let Some(texture) = background {
            canvas.begin_layer(Layer::Background);
            canvas.draw_image(texture, Vec2::ZERO, scene.size);
        }

        let feet = scene.visible_feet(derived.foot_visible_sq);
        dots::draw_pulled_dots(canvas, scene, &feet, &derived, &palette);
        dots::draw_grabbed_dots(canvas, scene, &palette);
        dots::draw_arcs(canvas, scene, &feet, &derived, &palette);
    }

    let poses = legs::visible_poses(scene, derived.foot_visible_sq);
    legs::draw_legs(canvas, scene.body, &poses, &palette);
    legs::draw_joints(canvas, &poses, &palette);

    let layout = BodyLayout::new(scene.body, scene.heading, config.body_radius, &derived);
    body::draw_body(canvas, &layout, config.body_radius, &derived, &palette);
}

/// Rendering resources - lives in the application shell (main.rs).
pub struct RenderContext {
    pub background: BackgroundCache,
}

impl RenderContext {
    pub fn new() -> Self {
        Self {
            background: BackgroundCache::new(),
        }
    }

    /// Clear the frame to the page colour and queue the scene on egui's
    /// background layer. egui paints it together with the UI.
    pub fn render_frame(&mut self, gl: &glow::Context, ctx: &egui::Context, scene: Option<&Scene>, config: &SpiderConfig) {
        puffin::profile_function!();
        let palette = Palette::for_theme(config.is_dark_mode);

        unsafe {
            use glow::HasContext;
            let [r, g, b, _] = palette.page_background.to_normalized_gamma_f32();
            gl.clear_color(r, g, b, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }

        let Some(scene) = scene else {
            return;
        };

        let texture = {
            puffin::profile_scope!("background");
            self.background.request(BackgroundKey::new(scene.size, config), &palette);
            self.background.poll(ctx)
        };

        let shapes = {
            puffin::profile_scope!("scene");
            let mut canvas = EguiCanvas::new();
            draw_scene(&mut canvas, scene, texture);
            canvas.into_shapes()
        };
        ctx.layer_painter(LayerId::background()).extend(shapes);
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::canvas::recording::{DrawCall, RecordingCanvas};
    use super::*;
    use crate::spider::Spider;

    const SIZE: Vec2 = Vec2::new(800.0, 600.0);
    const CENTER: Vec2 = Vec2::new(400.0, 300.0);

    fn settled_spider(config: &SpiderConfig) -> Spider {
        let mut spider = Spider::new(CENTER);
        for _ in 0..10 {
            spider.tick(CENTER, 0.0, config, SIZE);
        }
        spider
    }

    fn scene<'a>(spider: &'a Spider, config: &'a SpiderConfig) -> Scene<'a> {
        Scene {
            size: SIZE,
            body: CENTER,
            heading: 0.0,
            legs: spider.legs(),
            candidates: spider.candidates(),
            time: 1.25,
            config,
        }
    }

    #[test]
    fn test_layers_are_drawn_in_order() {
        let config = SpiderConfig::default();
        let spider = settled_spider(&config);
        let mut canvas = RecordingCanvas::default();
        draw_scene(&mut canvas, &scene(&spider, &config), Some(TextureId::Managed(1)));

        assert_eq!(
            canvas.layers(),
            vec![
                Layer::Background,
                Layer::PulledDots,
                Layer::GrabbedDots,
                Layer::Arcs,
                Layer::Legs,
                Layer::Joints,
                Layer::Body,
            ]
        );
        // Four markers per grabbed foothold
        assert_eq!(canvas.calls_in(Layer::GrabbedDots).len(), 4 * LEG_COUNT);
    }

    #[test]
    fn test_hidden_grid_draws_only_spider() {
        let config = SpiderConfig { show_grid: false, ..SpiderConfig::default() };
        let spider = settled_spider(&config);
        let mut canvas = RecordingCanvas::default();
        draw_scene(&mut canvas, &scene(&spider, &config), Some(TextureId::Managed(1)));

        assert_eq!(canvas.layers(), vec![Layer::Legs, Layer::Joints, Layer::Body]);
        assert!(canvas
            .calls
            .iter()
            .all(|c| !matches!(c, DrawCall::Image { .. } | DrawCall::Quadratic { .. })));
        assert!(!canvas.calls_in(Layer::Legs).is_empty());
        assert!(!canvas.calls_in(Layer::Body).is_empty());
    }

    #[test]
    fn test_missing_background_skips_only_that_layer() {
        let config = SpiderConfig::default();
        let spider = settled_spider(&config);
        let mut canvas = RecordingCanvas::default();
        draw_scene(&mut canvas, &scene(&spider, &config), None);

        let layers = canvas.layers();
        assert!(!layers.contains(&Layer::Background));
        assert_eq!(layers.first(), Some(&Layer::PulledDots));
    }

    #[test]
    fn test_each_leg_segment_gets_three_passes() {
        let config = SpiderConfig::default();
        let spider = settled_spider(&config);
        let mut canvas = RecordingCanvas::default();
        draw_scene(&mut canvas, &scene(&spider, &config), None);

        let passes: Vec<(usize, f32)> = canvas
            .calls_in(Layer::Legs)
            .into_iter()
            .filter_map(|c| match c {
                DrawCall::Segments { segments, width, .. } => Some((segments.len(), *width)),
                _ => None,
            })
            .collect();
        assert_eq!(passes.len(), 6);
        assert!(passes.iter().all(|&(n, _)| n == LEG_COUNT));
    }

    #[test]
    fn test_arcs_are_capped_per_foot() {
        let config = SpiderConfig { dot_interaction_range: 150.0, ..SpiderConfig::default() };
        let spider = settled_spider(&config);
        let mut canvas = RecordingCanvas::default();
        draw_scene(&mut canvas, &scene(&spider, &config), None);
        assert!(canvas.calls_in(Layer::Arcs).len() <= 3 * LEG_COUNT);
    }
}
