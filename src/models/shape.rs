// src/models/shape.rs
//
// The drawable circle used by every click effect. A shape is owned by
// the animation that targets it and disappears with it.

use crate::views::Viewport;
use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    X,
    Y,
    Radius,
    Opacity,
}

#[derive(Debug, Clone, Copy)]
pub struct Stroke {
    pub width: f32,
    pub color: Rgb<f32>,
}

#[derive(Debug, Clone)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub fill: Option<Rgb<f32>>,
    pub stroke: Option<Stroke>,
    pub opacity: f32,
}

impl Circle {
    pub fn new(x: f32, y: f32, r: f32) -> Self {
        Self {
            x,
            y,
            r,
            fill: None,
            stroke: None,
            opacity: 1.0,
        }
    }

    pub fn fill(mut self, color: Rgb<f32>) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn stroke(mut self, width: f32, color: Rgb<f32>) -> Self {
        self.stroke = Some(Stroke { width, color });
        self
    }

    pub fn get(&self, property: Property) -> f32 {
        match property {
            Property::X => self.x,
            Property::Y => self.y,
            Property::Radius => self.r,
            Property::Opacity => self.opacity,
        }
    }

    pub fn set(&mut self, property: Property, value: f32) {
        match property {
            Property::X => self.x = value,
            Property::Y => self.y = value,
            Property::Radius => self.r = value,
            Property::Opacity => self.opacity = value,
        }
    }

    // Opacity multiplies into the alpha channel of both fill and stroke,
    // matching global-alpha semantics on a 2D canvas.
    pub fn draw(&self, draw: &Draw, viewport: &Viewport) {
        let center = viewport.to_screen(self.x, self.y);
        let alpha = self.opacity.clamp(0.0, 1.0);
        let radius = self.r.max(0.0);

        let ellipse = draw.ellipse().x_y(center.x, center.y).radius(radius);
        let ellipse = match self.fill {
            Some(color) => ellipse.color(rgba(color.red, color.green, color.blue, alpha)),
            None => ellipse.no_fill(),
        };
        if let Some(stroke) = self.stroke {
            ellipse
                .stroke(rgba(
                    stroke.color.red,
                    stroke.color.green,
                    stroke.color.blue,
                    alpha,
                ))
                .stroke_weight(stroke.width);
        }
    }
}
