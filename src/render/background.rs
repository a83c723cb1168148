//! Pre-rendered background dot lattice.
//!
//! The lattice is rasterised on a worker thread and uploaded as an egui
//! texture once it arrives. Until then the background layer is skipped.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use egui::{Color32, ColorImage, TextureHandle, TextureId, TextureOptions};
use tiny_skia::{BlendMode, FillRule, Paint, PathBuilder, Pixmap, Transform};

use super::palette::Palette;
use crate::config::BackgroundKey;

/// Colours needed to stamp one lattice dot.
#[derive(Debug, Clone, Copy)]
pub struct DotStyle {
    pub shadow: Color32,
    pub highlight: Color32,
    pub core: Color32,
}

impl From<&Palette> for DotStyle {
    fn from(palette: &Palette) -> Self {
        Self {
            shadow: palette.dot_shadow,
            highlight: palette.dot_highlight,
            core: palette.dot_core,
        }
    }
}

pub struct BackgroundCache {
    key: Option<BackgroundKey>,
    texture: Option<TextureHandle>,
    pending: Option<Receiver<Pixmap>>,
}

impl BackgroundCache {
    pub fn new() -> Self {
        Self {
            key: None,
            texture: None,
            pending: None,
        }
    }

    /// Make sure a lattice matching `key` is ready or being built. A new key
    /// drops the current texture and abandons any older build.
    pub fn request(&mut self, key: BackgroundKey, palette: &Palette) {
        if self.key == Some(key) {
            return;
        }
        self.key = Some(key);
        self.texture = None;
        self.pending = None;
        if key.is_empty() {
            return;
        }

        tracing::debug!(width = key.width, height = key.height, spacing = key.spacing, dark = key.dark, "rebuilding dot lattice");
        let style = DotStyle::from(palette);
        let (tx, rx) = mpsc::channel();
        let spawned = thread::Builder::new()
            .name("dot-lattice".to_owned())
            .spawn(move || {
                if let Some(pixmap) = rasterize_lattice(&key, &style) {
                    // The receiver is gone if a newer request superseded this one
                    let _ = tx.send(pixmap);
                }
            });

        match spawned {
            Ok(_) => self.pending = Some(rx),
            Err(err) => tracing::warn!(%err, "failed to spawn lattice worker"),
        }
    }

    /// Upload a finished lattice if one arrived. Returns the texture to draw,
    /// if any. Never blocks.
    pub fn poll(&mut self, ctx: &egui::Context) -> Option<TextureId> {
        if let Some(rx) = &self.pending {
            match rx.try_recv() {
                Ok(pixmap) => {
                    let size = [pixmap.width() as usize, pixmap.height() as usize];
                    let color_image = ColorImage::from_rgba_premultiplied(size, pixmap.data());
                    self.texture = Some(ctx.load_texture("dot-lattice", color_image, TextureOptions::LINEAR));
                    self.pending = None;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    tracing::warn!("lattice worker exited without a result");
                    self.pending = None;
                }
            }
        }
        self.texture.as_ref().map(|t| t.id())
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for BackgroundCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Offset and radius of the three discs stamped per lattice point, bottom to top.
const SHADOW_DISC: (f32, f32) = (0.6, 2.0);
const HIGHLIGHT_DISC: (f32, f32) = (-0.3, 1.8);
const CORE_DISC: (f32, f32) = (0.0, 1.5);

/// Rasterise every lattice point of a `key`-sized surface as three
/// anti-aliased discs (shadow, highlight, core). `None` for an empty key.
pub fn rasterize_lattice(key: &BackgroundKey, style: &DotStyle) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(key.width, key.height)?;
    if key.spacing <= 0.0 {
        return Some(pixmap);
    }

    let cols = (key.width as f32 / key.spacing).floor() as u32 + 1;
    let rows = (key.height as f32 / key.spacing).floor() as u32 + 1;
    let points: Vec<(f32, f32)> = (0..cols)
        .flat_map(|c| (0..rows).map(move |r| (c as f32 * key.spacing, r as f32 * key.spacing)))
        .collect();

    // Neighbouring dots never overlap, so each layer can be filled in one pass
    for ((offset, radius), color) in [
        (SHADOW_DISC, style.shadow),
        (HIGHLIGHT_DISC, style.highlight),
        (CORE_DISC, style.core),
    ] {
        let mut builder = PathBuilder::new();
        for &(x, y) in &points {
            builder.push_circle(x + offset, y + offset, radius);
        }
        let Some(path) = builder.finish() else {
            continue;
        };
        pixmap.fill_path(&path, &dot_paint(color), FillRule::Winding, Transform::identity(), None);
    }
    Some(pixmap)
}

fn dot_paint(color: Color32) -> Paint<'static> {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint.blend_mode = BlendMode::SourceOver;
    paint
}
