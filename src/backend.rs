// ============================================================================
// backend.rs — Guppy
// winit adapter: translates platform window events into the closed event set.
// ============================================================================

use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::event::{InputEvent, Key, MouseButton};

/// Translate one winit window event into the closed event set.
///
/// `scale` is the host-supplied divisor from display pixels into logical
/// game coordinates, captured into pointer-move events at translation time.
/// Returns `None` for events the snapshot does not track; inputs without a
/// slot in the tracked space are dropped here with a warning rather than
/// reaching the buffers.
pub fn translate(event: &WindowEvent, scale: i32) -> Option<InputEvent> {
    match event {
        WindowEvent::KeyboardInput { event, .. } => {
            // OS key repeats would re-assert a slot that is already down;
            // the fold result is identical, so they are dropped up front.
            if event.repeat {
                return None;
            }
            let PhysicalKey::Code(code) = event.physical_key else {
                log::warn!("Unidentified physical key ignored: {:?}", event.physical_key);
                return None;
            };
            let key = match map_key(code) {
                Some(key) => key,
                None => {
                    log::warn!("Unmapped physical key ignored: {:?}", code);
                    return None;
                }
            };
            Some(match event.state {
                ElementState::Pressed => InputEvent::KeyDown(key),
                ElementState::Released => InputEvent::KeyUp(key),
            })
        }

        WindowEvent::MouseInput { state, button, .. } => {
            let button = map_button(*button)?;
            Some(match state {
                ElementState::Pressed => InputEvent::ButtonDown(button),
                ElementState::Released => InputEvent::ButtonUp(button),
            })
        }

        // Moved and dragged positions update the pointer identically; winit
        // reports both as cursor motion.
        WindowEvent::CursorMoved { position, .. } => Some(InputEvent::PointerMove {
            raw_x: position.x as i32,
            raw_y: position.y as i32,
            scale,
        }),

        WindowEvent::MouseWheel { delta, .. } => Some(InputEvent::Scroll(scroll_notches(delta))),

        _ => None,
    }
}

/// Map a winit physical key onto its slot in the 256-entry key space.
///
/// Covers the keys a 2D game loop binds: letters, digits, arrows, and the
/// common named keys. Everything else has no slot and maps to `None`.
pub fn map_key(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::KeyA => Key::A,
        KeyCode::KeyB => Key::B,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyF => Key::F,
        KeyCode::KeyG => Key::G,
        KeyCode::KeyH => Key::H,
        KeyCode::KeyI => Key::I,
        KeyCode::KeyJ => Key::J,
        KeyCode::KeyK => Key::K,
        KeyCode::KeyL => Key::L,
        KeyCode::KeyM => Key::M,
        KeyCode::KeyN => Key::N,
        KeyCode::KeyO => Key::O,
        KeyCode::KeyP => Key::P,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyT => Key::T,
        KeyCode::KeyU => Key::U,
        KeyCode::KeyV => Key::V,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyX => Key::X,
        KeyCode::KeyY => Key::Y,
        KeyCode::KeyZ => Key::Z,

        KeyCode::Digit0 => Key::DIGIT_0,
        KeyCode::Digit1 => Key::DIGIT_1,
        KeyCode::Digit2 => Key::DIGIT_2,
        KeyCode::Digit3 => Key::DIGIT_3,
        KeyCode::Digit4 => Key::DIGIT_4,
        KeyCode::Digit5 => Key::DIGIT_5,
        KeyCode::Digit6 => Key::DIGIT_6,
        KeyCode::Digit7 => Key::DIGIT_7,
        KeyCode::Digit8 => Key::DIGIT_8,
        KeyCode::Digit9 => Key::DIGIT_9,

        KeyCode::ArrowLeft => Key::LEFT,
        KeyCode::ArrowUp => Key::UP,
        KeyCode::ArrowRight => Key::RIGHT,
        KeyCode::ArrowDown => Key::DOWN,

        KeyCode::Backspace => Key::BACKSPACE,
        KeyCode::Tab => Key::TAB,
        KeyCode::Enter => Key::ENTER,
        KeyCode::ShiftLeft | KeyCode::ShiftRight => Key::SHIFT,
        KeyCode::ControlLeft | KeyCode::ControlRight => Key::CONTROL,
        KeyCode::AltLeft | KeyCode::AltRight => Key::ALT,
        KeyCode::Escape => Key::ESCAPE,
        KeyCode::Space => Key::SPACE,

        _ => return None,
    };
    Some(key)
}

/// Map a winit mouse button onto its slot in the 5-entry button space.
///
/// Forward and high-numbered extra buttons have no slot and are rejected
/// with a warning.
pub fn map_button(button: winit::event::MouseButton) -> Option<MouseButton> {
    match button {
        winit::event::MouseButton::Left => Some(MouseButton::LEFT),
        winit::event::MouseButton::Middle => Some(MouseButton::MIDDLE),
        winit::event::MouseButton::Right => Some(MouseButton::RIGHT),
        winit::event::MouseButton::Back => Some(MouseButton::BACK),
        winit::event::MouseButton::Forward => {
            log::warn!("Mouse button without a tracked slot ignored: Forward");
            None
        }
        winit::event::MouseButton::Other(code) => match MouseButton::from_raw(u32::from(code)) {
            Ok(button) => Some(button),
            Err(err) => {
                log::warn!("Mouse button ignored: {}", err);
                None
            }
        },
    }
}

/// Reduce a winit scroll delta to whole wheel notches.
///
/// winit counts upward scroll as positive; wheel rotation here counts
/// notches toward the user as positive, so the sign flips. Pixel deltas
/// from touchpads are reduced to a single notch per event.
pub fn scroll_notches(delta: &MouseScrollDelta) -> i32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y.round() as i32,
        MouseScrollDelta::PixelDelta(pos) => {
            if pos.y > 0.0 {
                -1
            } else if pos.y < 0.0 {
                1
            } else {
                0
            }
        }
    }
}
