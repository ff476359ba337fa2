// src/config/config.rs
//
// loading config.toml

use super::config_types::{EffectsConfig, StyleConfig, WindowConfig};
use nannou::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub style: StyleConfig,
    pub effects: EffectsConfig,
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        // First try to load from the executable's directory
        let config = if let Some(exe_config) = Self::load_from_exe_dir() {
            exe_config
        } else if Path::new("config.toml").exists() {
            Self::load_from_working_dir()?
        } else {
            println!("config.toml not found, using built-in defaults");
            Config::default()
        };
        config.validate()?;
        Ok(config)
    }

    fn load_from_exe_dir() -> Option<Self> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            let content = fs::read_to_string(&config_path).ok()?;
            toml::from_str(&content).ok()
        } else {
            None
        }
    }

    fn load_from_working_dir() -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string("config.toml")?;
        Ok(toml::from_str(&content)?)
    }

    fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.style.palette.is_empty() {
            return Err("style.palette must list at least one color".into());
        }
        for entry in &self.style.palette {
            parse_hex_color(entry)?;
        }
        parse_hex_color(&self.style.background)?;
        Ok(())
    }

    pub fn palette_colors(&self) -> Result<Vec<Rgb<f32>>, Box<dyn std::error::Error>> {
        self.style.palette.iter().map(|s| parse_hex_color(s)).collect()
    }

    pub fn background_color(&self) -> Result<Rgb<f32>, Box<dyn std::error::Error>> {
        parse_hex_color(&self.style.background)
    }
}

/// Parse "#rrggbb" (leading '#' optional) into a linear-float color.
pub fn parse_hex_color(value: &str) -> Result<Rgb<f32>, Box<dyn std::error::Error>> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(format!("invalid hex color {:?}", value).into());
    }
    let r = u8::from_str_radix(&hex[0..2], 16)?;
    let g = u8::from_str_radix(&hex[2..4], 16)?;
    let b = u8::from_str_radix(&hex[4..6], 16)?;
    Ok(rgb(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
    ))
}
