// src/animation/registry.rs
//
// The authoritative set of in-flight tweens. Insertion order is paint
// order for the render pass.

use super::tween::{CompletionEffect, Tween};
use crate::models::Circle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweenId(u64);

#[derive(Default)]
pub struct AnimationRegistry {
    tweens: Vec<(TweenId, Tween)>,
    next_id: u64,
}

impl AnimationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, tween: Tween) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.tweens.push((id, tween));
        id
    }

    // Removing an absent id is a no-op; a completion may race a manual
    // removal and must not fault.
    pub fn remove(&mut self, id: TweenId) {
        if let Some(index) = self.tweens.iter().position(|(tid, _)| *tid == id) {
            self.tweens.remove(index);
        }
    }

    pub fn contains(&self, id: TweenId) -> bool {
        self.tweens.iter().any(|(tid, _)| *tid == id)
    }

    /// Step every tween by dt milliseconds, drop the finished ones, and
    /// hand their completion effects back in registry order for the
    /// caller to apply. Each effect is reported exactly once.
    pub fn advance(&mut self, dt_ms: f32) -> Vec<CompletionEffect> {
        let mut effects = Vec::new();
        let mut done = Vec::new();
        for (id, tween) in &mut self.tweens {
            if tween.advance(dt_ms) {
                effects.push(tween.completion());
                done.push(*id);
            }
        }
        for id in done {
            self.remove(id);
        }
        effects
    }

    pub fn shapes(&self) -> impl Iterator<Item = &Circle> {
        self.tweens.iter().flat_map(|(_, tween)| tween.shapes())
    }

    pub fn get(&self, id: TweenId) -> Option<&Tween> {
        self.tweens
            .iter()
            .find(|(tid, _)| *tid == id)
            .map(|(_, tween)| tween)
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}
