pub mod click_burst;
pub mod engine;

pub use click_burst::{ripple_size, spawn_click_burst, BurstHandles};
pub use engine::{EffectEngine, PointerEvent};
