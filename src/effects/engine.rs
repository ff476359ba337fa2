// src/effects/engine.rs
//
// The effect engine: shared state for the whole background — viewport,
// palette cursor, background color, and the set of running animations.
// Headless; the nannou app in main.rs is a thin shell around it.

use crate::animation::{AnimationRegistry, CompletionEffect};
use crate::config::{Config, EffectsConfig};
use crate::effects::spawn_click_burst;
use crate::models::ColorCycle;
use crate::views::{BackgroundManager, Viewport};
use nannou::prelude::*;
use rand::rngs::ThreadRng;

/// A pointer-down in page coordinates. Inert events come from input
/// surfaces marked non-interactive and spawn nothing.
#[derive(Debug, Clone, Copy)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
    pub inert: bool,
}

pub struct EffectEngine {
    viewport: Viewport,
    colors: ColorCycle,
    background: BackgroundManager,
    registry: AnimationRegistry,
    effects: EffectsConfig,
    rng: ThreadRng,
}

impl EffectEngine {
    pub fn new(config: &Config) -> Result<Self, Box<dyn std::error::Error>> {
        let palette = config.palette_colors()?;
        Ok(Self::with_palette(
            palette,
            config.background_color()?,
            config.effects.clone(),
            config.window.width as f32,
            config.window.height as f32,
        ))
    }

    pub fn with_palette(
        palette: Vec<Rgb<f32>>,
        background: Rgb<f32>,
        effects: EffectsConfig,
        width: f32,
        height: f32,
    ) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            colors: ColorCycle::new(palette),
            background: BackgroundManager::new(background),
            registry: AnimationRegistry::new(),
            effects,
            rng: rand::thread_rng(),
        }
    }

    /// One trigger: advance the palette and register the fill, ripple,
    /// and particle animations. Inert events are ignored outright.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        if event.inert {
            return;
        }
        spawn_click_burst(
            &mut self.rng,
            &self.effects,
            &self.viewport,
            &mut self.colors,
            &mut self.registry,
            event.x,
            event.y,
        );
    }

    /// One update tick: advance every running animation, then apply the
    /// completion effects of the ones that just finished.
    pub fn advance(&mut self, dt_ms: f32) {
        for effect in self.registry.advance(dt_ms) {
            match effect {
                CompletionEffect::SetBackground(color) => self.background.set_color(color),
                CompletionEffect::None => {}
            }
        }
    }

    /// One render tick: repaint the background, then every live shape
    /// in registration order.
    pub fn draw(&self, draw: &Draw) {
        self.background.draw(draw);
        for shape in self.registry.shapes() {
            shape.draw(draw, &self.viewport);
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport.set(width, height);
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn background_color(&self) -> Rgb<f32> {
        self.background.current_color()
    }

    pub fn active_animations(&self) -> usize {
        self.registry.len()
    }
}
