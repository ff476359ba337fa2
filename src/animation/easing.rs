// src/animation/easing.rs
//
// Easing curves for the tween engine. Input and output are both
// normalized to [0, 1].

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOutQuart,
    EaseOutExpo,
}

impl Easing {
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
            // 2^-10t never quite reaches zero, so pin the endpoint.
            Easing::EaseOutExpo => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
        }
    }
}
