// src/animation/tween.rs
//
// One running animation: a set of owned shapes, each with property
// tracks interpolated over a shared duration and easing curve.

use super::Easing;
use crate::models::{Circle, Property};
use nannou::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct Track {
    pub property: Property,
    pub from: f32,
    pub to: f32,
}

/// A shape paired with the properties being animated on it. Target
/// values are fixed here, at construction time, never re-sampled.
#[derive(Debug, Clone)]
pub struct Animatable {
    pub shape: Circle,
    tracks: Vec<Track>,
}

impl Animatable {
    pub fn new(shape: Circle) -> Self {
        Self {
            shape,
            tracks: Vec::new(),
        }
    }

    // The starting value is captured from the shape as it is now.
    pub fn animate(mut self, property: Property, to: f32) -> Self {
        let from = self.shape.get(property);
        self.tracks.push(Track { property, from, to });
        self
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}

/// What a finished tween does to shared state. Kept as data so the
/// engine stays free of stored closures and headless-testable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CompletionEffect {
    None,
    SetBackground(Rgb<f32>),
}

pub struct Tween {
    animatables: Vec<Animatable>,
    duration: f32, // milliseconds
    easing: Easing,
    elapsed: f32,
    completion: CompletionEffect,
}

impl Tween {
    pub fn new(
        animatables: Vec<Animatable>,
        duration: f32,
        easing: Easing,
        completion: CompletionEffect,
    ) -> Self {
        Self {
            animatables,
            duration,
            easing,
            elapsed: 0.0,
            completion,
        }
    }

    /// Move the clock forward and write the interpolated value of every
    /// track onto its shape. Returns true once the duration has elapsed;
    /// at that point every track sits exactly on its target value.
    pub fn advance(&mut self, dt_ms: f32) -> bool {
        self.elapsed += dt_ms;
        let progress = if self.duration > 0.0 {
            (self.elapsed / self.duration).min(1.0)
        } else {
            1.0
        };
        let eased = self.easing.apply(progress);

        for animatable in &mut self.animatables {
            for track in &animatable.tracks {
                let value = track.from + (track.to - track.from) * eased;
                animatable.shape.set(track.property, value);
            }
        }
        self.elapsed >= self.duration
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn shapes(&self) -> impl Iterator<Item = &Circle> {
        self.animatables.iter().map(|a| &a.shape)
    }

    pub fn animatables(&self) -> &[Animatable] {
        &self.animatables
    }

    pub fn completion(&self) -> CompletionEffect {
        self.completion
    }
}
