// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture tracking basics.
//!
//! Replay a scripted drag over a surface that scrolls mid-gesture, and print the
//! record handed to each callback.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_gesture_demos --example gesture_log`

use kurbo::{Point, Rect};
use understory_gesture::clock::SystemClock;
use understory_gesture::driver::{DriverConfig, GestureCallbacks, TouchDriver};
use understory_gesture::sample::PointerSample;
use understory_gesture_demos::LoggingRegistry;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let callbacks = GestureCallbacks::new()
        .on_move_start(|c| println!("start: at ({}, {}) t={}", c.now_x, c.now_y, c.start_time))
        .on_move_xy(|c| {
            println!(
                "move:  at ({}, {}) delta ({}, {}) shift ({}, {})",
                c.now_x, c.now_y, c.delta_x, c.delta_y, c.shift_x, c.shift_y
            );
        })
        .on_move_end(|c| println!("end:   shift ({}, {})", c.shift_x, c.shift_y));

    let config = DriverConfig::default()
        .with_class_name("drag-surface")
        .with_attribute("role", "application");

    let mut driver = TouchDriver::new(LoggingRegistry::default(), SystemClock)
        .with_config(config)
        .with_callbacks(callbacks);
    driver.mount();

    let mut surface = Rect::new(100.0, 50.0, 400.0, 350.0);
    driver.pointer_down(&PointerSample::mouse(Point::new(110.0, 60.0)), surface);
    println!("suppress native scroll: {}", driver.suppresses_scroll());

    for (x, y) in [(130.0, 60.0), (150.0, 72.0), (170.0, 92.0)] {
        driver.pointer_move(&PointerSample::mouse(Point::new(x, y)), surface);
    }

    // The page scrolls by 30 while the pointer is held still.
    surface = surface.with_origin((100.0, 20.0));
    driver.pointer_move(&PointerSample::mouse(Point::new(170.0, 92.0)), surface);

    // Leaving the surface bounds keeps the gesture alive.
    driver.pointer_move(&PointerSample::mouse(Point::new(520.0, 40.0)), surface);
    driver.pointer_up();

    // Listeners are gone, so this sample is dropped.
    driver.pointer_move(&PointerSample::mouse(Point::new(600.0, 40.0)), surface);

    println!("attached after gesture: {:?}", driver.registry().attached());
}
