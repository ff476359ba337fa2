// src/views/viewport.rs
//
// Tracks the drawable surface size in page coordinates
// (origin top-left, y down) and converts to nannou's centered space.

use nannou::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    // Called at startup and on every window resize event.
    pub fn set(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Distance from (x, y) to the farthest viewport corner. A circle
    /// grown to this radius covers the whole surface from any point.
    pub fn fill_radius(&self, x: f32, y: f32) -> f32 {
        let l = x.max(self.width - x);
        let h = y.max(self.height - y);
        (l * l + h * h).sqrt()
    }

    // Page coordinates -> nannou centered coordinates (y up).
    pub fn to_screen(&self, x: f32, y: f32) -> Point2 {
        pt2(x - self.width / 2.0, self.height / 2.0 - y)
    }

    // Nannou centered coordinates -> page coordinates.
    pub fn from_screen(&self, point: Point2) -> (f32, f32) {
        (point.x + self.width / 2.0, self.height / 2.0 - point.y)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_radius_covers_every_corner() {
        let vp = Viewport::new(800.0, 600.0);
        let points = [
            (0.0, 0.0),
            (800.0, 600.0),
            (400.0, 300.0),
            (123.0, 456.0),
            (800.0, 0.0),
        ];
        let corners = [(0.0, 0.0), (800.0, 0.0), (0.0, 600.0), (800.0, 600.0)];

        for (px, py) in points {
            let radius = vp.fill_radius(px, py);
            for (cx, cy) in corners {
                let dist = ((px - cx) * (px - cx) + (py - cy) * (py - cy)).sqrt();
                assert!(
                    radius >= dist - 1e-4,
                    "fill radius {} from ({}, {}) misses corner ({}, {}) at {}",
                    radius,
                    px,
                    py,
                    cx,
                    cy,
                    dist
                );
            }
        }
    }

    #[test]
    fn test_fill_radius_from_origin() {
        let vp = Viewport::new(800.0, 600.0);
        assert!((vp.fill_radius(0.0, 0.0) - 1000.0).abs() < 1e-4);
    }

    #[test]
    fn test_screen_round_trip() {
        let vp = Viewport::new(800.0, 600.0);
        let screen = vp.to_screen(100.0, 50.0);
        assert!((screen.x - -300.0).abs() < 1e-6);
        assert!((screen.y - 250.0).abs() < 1e-6);

        let (x, y) = vp.from_screen(screen);
        assert!((x - 100.0).abs() < 1e-6);
        assert!((y - 50.0).abs() < 1e-6);
    }

    #[test]
    fn test_resize_updates_geometry() {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.set(400.0, 300.0);
        assert!((vp.fill_radius(0.0, 0.0) - 500.0).abs() < 1e-4);
    }
}
