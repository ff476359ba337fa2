// src/config/types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "inkburst".to_string(),
        }
    }
}

// Palette and background are hex strings ("#rrggbb"), parsed at load.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub palette: Vec<String>,
    pub background: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            palette: vec![
                "#c9cba3".to_string(),
                "#ffe1a8".to_string(),
                "#e26d5c".to_string(),
                "#723d46".to_string(),
            ],
            background: "#c9cba3".to_string(),
        }
    }
}

/************************* Effect Config ********************/

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub ripple_max_size: f32,          // Cap on the ripple outline radius
    pub ripple_viewport_fraction: f32, // Ripple radius as a share of viewport width
    pub ripple_duration: f32,          // ms
    pub ripple_stroke_weight: f32,
    pub min_cover_duration: f32, // Floor on the fill wave duration, ms
    pub particle_count: usize,
    pub particle_min_radius: f32,
    pub particle_max_radius: f32,
    pub particle_min_duration: f32, // ms
    pub particle_max_duration: f32, // ms
    pub particle_spread_y_factor: f32, // Vertical scatter relative to ripple size
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            ripple_max_size: 200.0,
            ripple_viewport_fraction: 0.4,
            ripple_duration: 900.0,
            ripple_stroke_weight: 3.0,
            min_cover_duration: 750.0,
            particle_count: 32,
            particle_min_radius: 24.0,
            particle_max_radius: 48.0,
            particle_min_duration: 1000.0,
            particle_max_duration: 1300.0,
            particle_spread_y_factor: 1.15,
        }
    }
}
