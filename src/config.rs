//! Spider configuration and the geometry derived from it.
//!
//! The host owns a [`SpiderConfig`] and may change it at any time; the
//! simulation recomputes [`Derived`] from it on every tick.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// User-tunable settings, mirrored by the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpiderConfig {
    pub grid_spacing: f32,
    pub leg_reach: f32,
    /// Step progress added per tick
    pub step_speed: f32,
    /// Maximum body translation per tick
    pub max_speed: f32,
    pub step_lift_height: f32,
    pub body_radius: f32,
    pub dot_interaction_range: f32,
    pub is_dark_mode: bool,
    pub show_grid: bool,
}

impl Default for SpiderConfig {
    fn default() -> Self {
        Self {
            grid_spacing: 40.0,
            leg_reach: 120.0,
            step_speed: 0.25,
            max_speed: 8.0,
            step_lift_height: 18.0,
            body_radius: 10.0,
            dot_interaction_range: 60.0,
            is_dark_mode: true,
            show_grid: true,
        }
    }
}

impl SpiderConfig {
    /// Load a configuration from a JSON file. Missing fields use defaults and
    /// out-of-range values are clamped.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: SpiderConfig = serde_json::from_str(text)?;
        Ok(config.sanitized())
    }

    /// Clamp every numeric field into the range the settings panel offers.
    pub fn sanitized(self) -> Self {
        fn clamp(value: f32, range: std::ops::RangeInclusive<f32>) -> f32 {
            if value.is_nan() {
                *range.start()
            } else {
                value.clamp(*range.start(), *range.end())
            }
        }

        Self {
            grid_spacing: clamp(self.grid_spacing, GRID_SPACING_RANGE),
            leg_reach: clamp(self.leg_reach, LEG_REACH_RANGE),
            step_speed: clamp(self.step_speed, STEP_SPEED_RANGE),
            max_speed: clamp(self.max_speed, MAX_SPEED_RANGE),
            step_lift_height: clamp(self.step_lift_height, STEP_LIFT_RANGE),
            body_radius: clamp(self.body_radius, BODY_RADIUS_RANGE),
            dot_interaction_range: clamp(self.dot_interaction_range, INTERACTION_RANGE_RANGE),
            ..self
        }
    }

    pub fn derived(&self) -> Derived {
        Derived::from_config(self)
    }
}

/// Squared radii and thresholds computed from a [`SpiderConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derived {
    pub reach_sq: f32,
    /// Lower bound (exclusive) for sampled candidates
    pub sample_inner_sq: f32,
    /// Lower bound for chosen footholds
    pub foothold_min_sq: f32,
    /// Feet inside this are hidden under the body
    pub foot_visible_sq: f32,
    pub step_far_sq: f32,
    pub step_near_sq: f32,
    pub pull_radius: f32,
    pub pull_radius_sq: f32,
    pub arc_radius: f32,
    pub arc_radius_sq: f32,
    pub head_radius: f32,
    pub abdomen_radii: Vec2,
}

impl Derived {
    pub fn from_config(config: &SpiderConfig) -> Self {
        let reach = config.leg_reach;
        let body = config.body_radius;
        let pull_radius = config.dot_interaction_range;
        let arc_radius = pull_radius * MAG_ARC_RADIUS_RATIO;
        let step_far = reach * STEP_FAR_RATIO;
        let step_near = body * STEP_NEAR_RATIO;

        Self {
            reach_sq: reach * reach,
            sample_inner_sq: (body + SAMPLE_INNER_MARGIN).powi(2),
            foothold_min_sq: (body + FOOTHOLD_INNER_MARGIN).powi(2),
            foot_visible_sq: (body + FOOT_VISIBLE_MARGIN).powi(2),
            step_far_sq: step_far * step_far,
            step_near_sq: step_near * step_near,
            pull_radius,
            pull_radius_sq: pull_radius * pull_radius,
            arc_radius,
            arc_radius_sq: arc_radius * arc_radius,
            head_radius: body * HEAD_RADIUS_RATIO,
            abdomen_radii: Vec2::new(body * ABDOMEN_RX_RATIO, body * ABDOMEN_RY_RATIO),
        }
    }
}

/// Identity of a pre-rendered dot lattice. A cached background is only
/// valid while its key matches the current surface and configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundKey {
    pub width: u32,
    pub height: u32,
    pub spacing: f32,
    pub dark: bool,
}

impl BackgroundKey {
    pub fn new(size: Vec2, config: &SpiderConfig) -> Self {
        Self {
            width: size.x.ceil().max(0.0) as u32,
            height: size.y.ceil().max(0.0) as u32,
            spacing: config.grid_spacing,
            dark: config.is_dark_mode,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = SpiderConfig::default();
        assert_eq!(config.grid_spacing, 40.0);
        assert_eq!(config.leg_reach, 120.0);
        assert_eq!(config.step_speed, 0.25);
        assert_eq!(config.max_speed, 8.0);
        assert!(config.is_dark_mode);
        assert!(config.show_grid);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SpiderConfig::from_json(r#"{ "legReach": 150, "isDarkMode": false }"#).unwrap();
        assert_eq!(config.leg_reach, 150.0);
        assert!(!config.is_dark_mode);
        assert_eq!(config.grid_spacing, 40.0);
        assert_eq!(config.body_radius, 10.0);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let config = SpiderConfig::from_json(r#"{ "gridSpacing": 0, "stepSpeed": 7.5 }"#).unwrap();
        assert_eq!(config.grid_spacing, 20.0);
        assert_eq!(config.step_speed, 1.0);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(SpiderConfig::from_json("{ gridSpacing: ").is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(SpiderConfig::load(Path::new("/definitely/not/here.json")).is_err());
    }

    #[test]
    fn test_derived_thresholds() {
        let derived = SpiderConfig::default().derived();
        assert_eq!(derived.reach_sq, 14400.0);
        assert_eq!(derived.sample_inner_sq, 225.0);
        assert_eq!(derived.foothold_min_sq, 324.0);
        assert_eq!(derived.foot_visible_sq, 144.0);
        assert!((derived.step_far_sq - 138.0 * 138.0).abs() < 0.1);
        assert!((derived.step_near_sq - 144.0).abs() < 0.01);
        assert!((derived.arc_radius - 42.0).abs() < 0.001);
        assert_eq!(derived.head_radius, 6.0);
    }

    #[test]
    fn test_background_key_tracks_theme_and_spacing() {
        let size = Vec2::new(800.0, 600.0);
        let config = SpiderConfig::default();
        let key = BackgroundKey::new(size, &config);
        assert_eq!(key, BackgroundKey::new(size, &config));

        let themed = SpiderConfig { is_dark_mode: false, ..config };
        assert_ne!(key, BackgroundKey::new(size, &themed));

        let spaced = SpiderConfig { grid_spacing: 50.0, ..config };
        assert_ne!(key, BackgroundKey::new(size, &spaced));

        // Step speed has no effect on the lattice bitmap
        let faster = SpiderConfig { step_speed: 0.5, ..config };
        assert_eq!(key, BackgroundKey::new(size, &faster));
    }
}
