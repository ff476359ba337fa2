// src/main.rs

use nannou::prelude::*;
use std::time::Instant;

use inkburst::{
    config::Config,
    effects::{EffectEngine, PointerEvent},
};

struct Model {
    engine: EffectEngine,

    // When locked, pointer events are delivered as inert and ignored.
    input_locked: bool,

    last_update: Instant,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    let config = Config::load().expect("Failed to load config file");
    let engine = EffectEngine::new(&config).expect("Invalid color configuration");

    app.new_window()
        .title(config.window.title.clone())
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .touch(touch)
        .resized(resized)
        .key_pressed(key_pressed)
        .build()
        .unwrap();

    Model {
        engine,
        input_locked: false,
        last_update: Instant::now(),
    }
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let dt_ms = (now - model.last_update).as_secs_f32() * 1000.0;
    model.last_update = now;

    model.engine.advance(dt_ms);
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    model.engine.draw(&draw);
    draw.to_frame(app, &frame).unwrap();
}

fn mouse_pressed(app: &App, model: &mut Model, _button: MouseButton) {
    trigger(model, app.mouse.position());
}

fn touch(_app: &App, model: &mut Model, event: TouchEvent) {
    if event.phase == TouchPhase::Started {
        trigger(model, event.position);
    }
}

fn trigger(model: &mut Model, position: Point2) {
    let (x, y) = model.engine.viewport().from_screen(position);
    model.engine.handle_pointer(PointerEvent {
        x,
        y,
        inert: model.input_locked,
    });
}

fn resized(_app: &App, model: &mut Model, size: Vec2) {
    model.engine.resize(size.x, size.y);
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        // Toggle the inert flag on the whole surface
        Key::L => {
            model.input_locked = !model.input_locked;
            println!(
                "input {}",
                if model.input_locked { "locked" } else { "unlocked" }
            );
        }
        _ => (),
    }
}
