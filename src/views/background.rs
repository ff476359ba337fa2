// src/views/background.rs
//
// A simple module to manage background state

use nannou::prelude::*;

pub struct BackgroundManager {
    current_color: Rgb<f32>,
}

impl BackgroundManager {
    pub fn new(color: Rgb<f32>) -> Self {
        Self {
            current_color: color,
        }
    }

    // Only a completed fill wave changes the background.
    pub fn set_color(&mut self, color: Rgb<f32>) {
        self.current_color = color;
    }

    pub fn current_color(&self) -> Rgb<f32> {
        self.current_color
    }

    // Full repaint of the surface, every frame.
    pub fn draw(&self, draw: &Draw) {
        draw.background().color(self.current_color);
    }
}

impl Default for BackgroundManager {
    fn default() -> Self {
        Self::new(rgb(0.0, 0.0, 0.0))
    }
}
