// src/models/mod.rs

pub mod color_cycle;
pub mod shape;

pub use color_cycle::ColorCycle;
pub use shape::{Circle, Property, Stroke};
