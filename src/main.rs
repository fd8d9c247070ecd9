// ============================================================================
// main.rs — Guppy
// Scripted demo driver. Feeds a canned event stream through the snapshot
// frame by frame and logs the edges a game loop would react to.
// ============================================================================

use guppy::{InputEvent, InputState, Key, MouseButton};

fn main() {
    env_logger::init();

    let mut input = InputState::new();

    // One entry per frame: the events the backend would deliver before the
    // frame boundary.
    let script: &[&[InputEvent]] = &[
        &[
            InputEvent::KeyDown(Key::W),
            InputEvent::PointerMove { raw_x: 100, raw_y: 50, scale: 2 },
        ],
        &[],
        &[
            InputEvent::KeyUp(Key::W),
            InputEvent::ButtonDown(MouseButton::LEFT),
            InputEvent::Scroll(3),
            InputEvent::Scroll(-2),
        ],
        &[InputEvent::ButtonUp(MouseButton::LEFT)],
        &[],
    ];

    for (frame, events) in script.iter().enumerate() {
        for &event in *events {
            input.apply(event);
        }

        if input.key_pressed(Key::W) {
            log::info!("frame {frame}: W pressed");
        }
        if input.key_held(Key::W) {
            log::info!("frame {frame}: W held");
        }
        if input.key_released(Key::W) {
            log::info!("frame {frame}: W released");
        }
        if input.button_pressed(MouseButton::LEFT) {
            log::info!(
                "frame {frame}: click at ({}, {})",
                input.pointer_x(),
                input.pointer_y()
            );
        }
        if input.button_released(MouseButton::LEFT) {
            log::info!("frame {frame}: click released");
        }
        if input.scroll_delta() != 0 {
            log::info!("frame {frame}: scroll {}", input.scroll_delta());
        }

        input.advance();
    }
}
