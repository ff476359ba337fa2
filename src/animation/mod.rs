pub mod easing;
pub mod registry;
pub mod tween;

pub use easing::Easing;
pub use registry::{AnimationRegistry, TweenId};
pub use tween::{Animatable, CompletionEffect, Track, Tween};
