// src/lib.rs
//
// inkburst: a full-viewport interactive background. Every pointer-down
// spawns a color fill wave, an expanding ripple outline, and a particle
// burst, all driven by one frame-rate update loop.

pub mod animation;
pub mod config;
pub mod effects;
pub mod models;
pub mod views;
