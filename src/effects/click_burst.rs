// src/effects/click_burst.rs
//
// Builds the three concurrent animations spawned by one trigger:
// the page fill wave, the ripple outline, and the particle burst.

use crate::animation::{Animatable, AnimationRegistry, CompletionEffect, Easing, Tween, TweenId};
use crate::config::EffectsConfig;
use crate::models::{Circle, ColorCycle, Property};
use crate::views::Viewport;
use rand::Rng;

/// Ids of the fill, ripple, and particle tweens, in registration order.
pub struct BurstHandles {
    pub fill: TweenId,
    pub ripple: TweenId,
    pub particles: TweenId,
}

pub fn ripple_size(config: &EffectsConfig, viewport: &Viewport) -> f32 {
    config
        .ripple_max_size
        .min(viewport.width * config.ripple_viewport_fraction)
}

pub fn spawn_click_burst<R: Rng>(
    rng: &mut R,
    config: &EffectsConfig,
    viewport: &Viewport,
    colors: &mut ColorCycle,
    registry: &mut AnimationRegistry,
    x: f32,
    y: f32,
) -> BurstHandles {
    let current_color = colors.current();
    let next_color = colors.next();
    let target_radius = viewport.fill_radius(x, y);
    let ripple_size = ripple_size(config, viewport);

    // Fill wave: covers the viewport, then becomes the new background.
    let page_fill = Circle::new(x, y, 0.0).fill(next_color);
    let fill = Tween::new(
        vec![Animatable::new(page_fill).animate(Property::Radius, target_radius)],
        (target_radius / 2.0).max(config.min_cover_duration),
        Easing::EaseOutQuart,
        CompletionEffect::SetBackground(next_color),
    );

    // Ripple outline: expands and fades at the trigger point.
    let ripple_shape = Circle::new(x, y, 0.0)
        .fill(current_color)
        .stroke(config.ripple_stroke_weight, current_color);
    let ripple = Tween::new(
        vec![Animatable::new(ripple_shape)
            .animate(Property::Radius, ripple_size)
            .animate(Property::Opacity, 0.0)],
        config.ripple_duration,
        Easing::EaseOutExpo,
        CompletionEffect::None,
    );

    // Particle burst: independent scatter targets, one shared clock.
    // Each particle's target is sampled once, here, not per tick.
    let mut particles = Vec::with_capacity(config.particle_count);
    for _ in 0..config.particle_count {
        let radius = uniform(rng, config.particle_min_radius, config.particle_max_radius);
        let spread_y = config.particle_spread_y_factor * ripple_size;
        let shape = Circle::new(x, y, radius).fill(current_color);
        particles.push(
            Animatable::new(shape)
                .animate(Property::X, x + uniform(rng, -ripple_size, ripple_size))
                .animate(Property::Y, y + uniform(rng, -spread_y, spread_y))
                .animate(Property::Radius, 0.0),
        );
    }
    let burst = Tween::new(
        particles,
        uniform(rng, config.particle_min_duration, config.particle_max_duration),
        Easing::EaseOutExpo,
        CompletionEffect::None,
    );

    BurstHandles {
        fill: registry.add(fill),
        ripple: registry.add(ripple),
        particles: registry.add(burst),
    }
}

// Uniform sample tolerating reversed or degenerate bounds.
fn uniform<R: Rng>(rng: &mut R, a: f32, b: f32) -> f32 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if lo == hi {
        lo
    } else {
        rng.gen_range(lo..=hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nannou::prelude::*;

    fn setup() -> (EffectsConfig, Viewport, ColorCycle, AnimationRegistry) {
        let config = EffectsConfig::default();
        let viewport = Viewport::new(800.0, 600.0);
        let colors = ColorCycle::new(vec![rgb(0.1, 0.1, 0.1), rgb(0.9, 0.9, 0.9)]);
        (config, viewport, colors, AnimationRegistry::new())
    }

    #[test]
    fn test_registers_three_animations() {
        let (config, viewport, mut colors, mut registry) = setup();
        let mut rng = rand::thread_rng();
        spawn_click_burst(&mut rng, &config, &viewport, &mut colors, &mut registry, 10.0, 10.0);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_ripple_size_is_capped() {
        let config = EffectsConfig::default();
        assert_eq!(ripple_size(&config, &Viewport::new(800.0, 600.0)), 200.0);
        assert_eq!(ripple_size(&config, &Viewport::new(200.0, 600.0)), 80.0);
    }

    #[test]
    fn test_fill_wave_parameters() {
        let (config, viewport, mut colors, mut registry) = setup();
        let next = rgb(0.9, 0.9, 0.9);
        let mut rng = rand::thread_rng();
        let handles =
            spawn_click_burst(&mut rng, &config, &viewport, &mut colors, &mut registry, 0.0, 0.0);

        let fill = registry.get(handles.fill).unwrap();
        // Corner click on 800x600 reaches the opposite corner at 1000.
        assert_eq!(fill.duration(), 750.0);
        assert_eq!(fill.completion(), CompletionEffect::SetBackground(next));
        let track = fill.animatables()[0].tracks()[0];
        assert_eq!(track.property, Property::Radius);
        assert!((track.to - 1000.0).abs() < 1e-3);

        let shape = fill.shapes().next().unwrap();
        assert_eq!(shape.fill, Some(next));
        assert_eq!(shape.r, 0.0);
    }

    #[test]
    fn test_fill_duration_scales_with_radius() {
        let (config, _, mut colors, mut registry) = setup();
        let viewport = Viewport::new(4000.0, 3000.0);
        let mut rng = rand::thread_rng();
        let handles =
            spawn_click_burst(&mut rng, &config, &viewport, &mut colors, &mut registry, 0.0, 0.0);
        // target radius 5000 -> duration 2500 beats the 750 floor
        assert_eq!(registry.get(handles.fill).unwrap().duration(), 2500.0);
    }

    #[test]
    fn test_ripple_uses_current_color_and_fades() {
        let (config, viewport, mut colors, mut registry) = setup();
        let current = colors.current();
        let mut rng = rand::thread_rng();
        let handles =
            spawn_click_burst(&mut rng, &config, &viewport, &mut colors, &mut registry, 50.0, 50.0);

        let ripple = registry.get(handles.ripple).unwrap();
        assert_eq!(ripple.duration(), 900.0);
        let shape = ripple.shapes().next().unwrap();
        assert_eq!(shape.fill, Some(current));
        let stroke = shape.stroke.unwrap();
        assert_eq!(stroke.width, 3.0);
        assert_eq!(stroke.color, current);

        let tracks = ripple.animatables()[0].tracks();
        assert_eq!(tracks[0].property, Property::Radius);
        assert_eq!(tracks[0].to, 200.0);
        assert_eq!(tracks[1].property, Property::Opacity);
        assert_eq!(tracks[1].to, 0.0);
    }

    #[test]
    fn test_particles_respect_configured_ranges() {
        let (config, viewport, mut colors, mut registry) = setup();
        let mut rng = rand::thread_rng();
        let handles = spawn_click_burst(
            &mut rng, &config, &viewport, &mut colors, &mut registry, 400.0, 300.0,
        );

        let burst = registry.get(handles.particles).unwrap();
        let spread = ripple_size(&config, &viewport);
        assert!(burst.duration() >= 1000.0 && burst.duration() <= 1300.0);
        assert_eq!(burst.animatables().len(), 32);

        for animatable in burst.animatables() {
            let shape = &animatable.shape;
            assert!(shape.r >= 24.0 && shape.r <= 48.0);
            assert_eq!(shape.fill, Some(rgb(0.1, 0.1, 0.1)));

            let tracks = animatable.tracks();
            let target_x = tracks[0].to;
            let target_y = tracks[1].to;
            assert!(target_x >= 400.0 - spread && target_x <= 400.0 + spread);
            assert!(target_y >= 300.0 - 1.15 * spread && target_y <= 300.0 + 1.15 * spread);
            assert_eq!(tracks[2].to, 0.0);
        }
    }

    #[test]
    fn test_uniform_handles_reversed_bounds() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let value = uniform(&mut rng, 80.0, -80.0);
            assert!((-80.0..=80.0).contains(&value));
        }
        assert_eq!(uniform(&mut rng, 5.0, 5.0), 5.0);
    }
}
