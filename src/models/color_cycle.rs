// src/models/color_cycle.rs
//
// A stateful sequencer over the fixed click palette.

use nannou::prelude::*;

pub struct ColorCycle {
    palette: Vec<Rgb<f32>>,
    index: usize,
}

impl ColorCycle {
    /// The palette must be non-empty; config loading enforces this.
    pub fn new(palette: Vec<Rgb<f32>>) -> Self {
        debug_assert!(!palette.is_empty(), "color palette must not be empty");
        Self { palette, index: 0 }
    }

    pub fn current(&self) -> Rgb<f32> {
        self.palette[self.index]
    }

    // Always advance, wrapping after the last entry.
    pub fn next(&mut self) -> Rgb<f32> {
        self.index = (self.index + 1) % self.palette.len();
        self.palette[self.index]
    }

    pub fn len(&self) -> usize {
        self.palette.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palette.is_empty()
    }
}
