// src/views/mod.rs

pub mod background;
pub mod viewport;

pub use background::BackgroundManager;
pub use viewport::Viewport;
