// ============================================================================
// state.rs — Guppy
// Double-buffered keyboard/mouse snapshot with per-frame edge queries.
// ============================================================================

use crate::event::{InputEvent, Key, MouseButton, NUM_BUTTONS, NUM_KEYS};

/// Per-frame input snapshot.
///
/// Holds two generations of boolean state for keys and mouse buttons, plus
/// the last known pointer position (logical coordinates) and the wheel delta
/// seen since the last frame boundary. The owning game loop feeds events in
/// through the handlers (or [`apply`](Self::apply)) and calls
/// [`advance`](Self::advance) exactly once per frame; everything delivered
/// between two `advance` calls folds into a single snapshot, last write wins
/// per slot.
///
/// Single-threaded by construction: every mutating operation takes
/// `&mut self`, so `advance` cannot interleave with a handler or query
/// without an external lock.
pub struct InputState {
    keys: [bool; NUM_KEYS],
    keys_last: [bool; NUM_KEYS],
    buttons: [bool; NUM_BUTTONS],
    buttons_last: [bool; NUM_BUTTONS],
    pointer_x: i32,
    pointer_y: i32,
    scroll_delta: i32,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    /// Fresh snapshot: all slots up, pointer at (0, 0), scroll 0.
    pub fn new() -> Self {
        Self {
            keys: [false; NUM_KEYS],
            keys_last: [false; NUM_KEYS],
            buttons: [false; NUM_BUTTONS],
            buttons_last: [false; NUM_BUTTONS],
            pointer_x: 0,
            pointer_y: 0,
            scroll_delta: 0,
        }
    }

    // ======================== Event handlers ========================

    pub fn key_down(&mut self, key: Key) {
        self.keys[key.index()] = true;
    }

    pub fn key_up(&mut self, key: Key) {
        self.keys[key.index()] = false;
    }

    pub fn button_down(&mut self, button: MouseButton) {
        self.buttons[button.index()] = true;
    }

    pub fn button_up(&mut self, button: MouseButton) {
        self.buttons[button.index()] = false;
    }

    /// Record a pointer move. The raw display-pixel position is divided by
    /// the host-supplied `scale` with truncating integer division, so
    /// `(5, 5)` at scale 2 lands on logical `(2, 2)`.
    ///
    /// Precondition: `scale >= 1`.
    pub fn pointer_moved(&mut self, raw_x: i32, raw_y: i32, scale: i32) {
        debug_assert!(scale >= 1, "display scale must be at least 1");
        self.pointer_x = raw_x / scale;
        self.pointer_y = raw_y / scale;
    }

    /// Record a wheel event. Overwrites rather than accumulates: if several
    /// wheel events land in one frame, only the last delta is observable.
    pub fn scrolled(&mut self, delta: i32) {
        self.scroll_delta = delta;
    }

    /// Dispatch one event of the closed set to the matching handler.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(key) => self.key_down(key),
            InputEvent::KeyUp(key) => self.key_up(key),
            InputEvent::ButtonDown(button) => self.button_down(button),
            InputEvent::ButtonUp(button) => self.button_up(button),
            InputEvent::PointerMove { raw_x, raw_y, scale } => {
                self.pointer_moved(raw_x, raw_y, scale)
            }
            InputEvent::Scroll(delta) => self.scrolled(delta),
        }
    }

    // ======================== Frame boundary ========================

    /// Roll the current frame into the previous one.
    ///
    /// Must be called exactly once per frame, after the frame's queries have
    /// been consumed. Copies current key/button state into the previous
    /// generation and zeroes the scroll delta. With no intervening events a
    /// second call copies identical buffers, so no spurious edges appear.
    pub fn advance(&mut self) {
        self.keys_last = self.keys;
        self.buttons_last = self.buttons;
        self.scroll_delta = 0;
    }

    // ======================== Queries ========================

    /// Is the key down in the current frame?
    pub fn key_held(&self, key: Key) -> bool {
        self.keys[key.index()]
    }

    /// Rising edge: down this frame, up last frame.
    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys[key.index()] && !self.keys_last[key.index()]
    }

    /// Falling edge: up this frame, down last frame.
    pub fn key_released(&self, key: Key) -> bool {
        !self.keys[key.index()] && self.keys_last[key.index()]
    }

    /// Is the button down in the current frame?
    pub fn button_held(&self, button: MouseButton) -> bool {
        self.buttons[button.index()]
    }

    /// Rising edge: down this frame, up last frame.
    pub fn button_pressed(&self, button: MouseButton) -> bool {
        self.buttons[button.index()] && !self.buttons_last[button.index()]
    }

    /// Falling edge: up this frame, down last frame.
    pub fn button_released(&self, button: MouseButton) -> bool {
        !self.buttons[button.index()] && self.buttons_last[button.index()]
    }

    /// Last known pointer X in logical coordinates.
    pub fn pointer_x(&self) -> i32 {
        self.pointer_x
    }

    /// Last known pointer Y in logical coordinates.
    pub fn pointer_y(&self) -> i32 {
        self.pointer_y
    }

    /// Wheel rotation since the last `advance`, 0 if none.
    pub fn scroll_delta(&self) -> i32 {
        self.scroll_delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_all_up() {
        let input = InputState::new();
        for code in 0..=u8::MAX {
            let key = Key::new(code);
            assert!(!input.key_held(key));
            assert!(!input.key_pressed(key));
            assert!(!input.key_released(key));
        }
        for code in 0..NUM_BUTTONS as u32 {
            let button = MouseButton::from_raw(code).unwrap();
            assert!(!input.button_held(button));
            assert!(!input.button_pressed(button));
            assert!(!input.button_released(button));
        }
        assert_eq!(input.pointer_x(), 0);
        assert_eq!(input.pointer_y(), 0);
        assert_eq!(input.scroll_delta(), 0);
    }

    #[test]
    fn press_before_first_advance_is_a_rising_edge() {
        let mut input = InputState::new();
        input.key_down(Key::W);
        assert!(input.key_held(Key::W));
        assert!(input.key_pressed(Key::W));
        assert!(!input.key_released(Key::W));
    }

    #[test]
    fn advance_consumes_the_rising_edge() {
        let mut input = InputState::new();
        input.key_down(Key::W);
        input.advance();
        assert!(input.key_held(Key::W));
        assert!(!input.key_pressed(Key::W));
        assert!(!input.key_released(Key::W));
    }

    #[test]
    fn release_after_hold_is_a_falling_edge() {
        let mut input = InputState::new();
        input.key_down(Key::Q);
        input.advance();
        input.key_up(Key::Q);
        assert!(!input.key_held(Key::Q));
        assert!(!input.key_pressed(Key::Q));
        assert!(input.key_released(Key::Q));

        input.advance();
        assert!(!input.key_released(Key::Q));
    }

    #[test]
    fn button_edges_mirror_key_edges() {
        let mut input = InputState::new();
        input.button_down(MouseButton::LEFT);
        assert!(input.button_pressed(MouseButton::LEFT));
        input.advance();
        assert!(input.button_held(MouseButton::LEFT));
        assert!(!input.button_pressed(MouseButton::LEFT));
        input.button_up(MouseButton::LEFT);
        assert!(input.button_released(MouseButton::LEFT));
    }

    #[test]
    fn scroll_resets_at_frame_boundary() {
        let mut input = InputState::new();
        input.scrolled(5);
        assert_eq!(input.scroll_delta(), 5);
        input.advance();
        assert_eq!(input.scroll_delta(), 0);
    }

    #[test]
    fn same_frame_scroll_is_last_write_wins() {
        let mut input = InputState::new();
        input.scrolled(3);
        input.scrolled(-2);
        assert_eq!(input.scroll_delta(), -2);
    }

    #[test]
    fn pointer_division_truncates() {
        let mut input = InputState::new();
        input.pointer_moved(100, 50, 2);
        assert_eq!((input.pointer_x(), input.pointer_y()), (50, 25));
        input.pointer_moved(5, 5, 2);
        assert_eq!((input.pointer_x(), input.pointer_y()), (2, 2));
        input.pointer_moved(-5, 7, 3);
        assert_eq!((input.pointer_x(), input.pointer_y()), (-1, 2));
    }

    #[test]
    fn double_advance_without_events_is_stable() {
        let mut input = InputState::new();
        input.key_down(Key::SPACE);
        input.button_down(MouseButton::RIGHT);
        input.advance();
        input.advance();
        assert!(input.key_held(Key::SPACE));
        assert!(!input.key_pressed(Key::SPACE));
        assert!(!input.key_released(Key::SPACE));
        assert!(input.button_held(MouseButton::RIGHT));
        assert!(!input.button_pressed(MouseButton::RIGHT));
        assert!(!input.button_released(MouseButton::RIGHT));
    }

    #[test]
    fn apply_dispatches_every_variant() {
        let mut input = InputState::new();
        input.apply(InputEvent::KeyDown(Key::A));
        input.apply(InputEvent::ButtonDown(MouseButton::MIDDLE));
        input.apply(InputEvent::PointerMove { raw_x: 64, raw_y: 48, scale: 4 });
        input.apply(InputEvent::Scroll(-1));
        assert!(input.key_held(Key::A));
        assert!(input.button_held(MouseButton::MIDDLE));
        assert_eq!((input.pointer_x(), input.pointer_y()), (16, 12));
        assert_eq!(input.scroll_delta(), -1);

        input.apply(InputEvent::KeyUp(Key::A));
        input.apply(InputEvent::ButtonUp(MouseButton::MIDDLE));
        assert!(!input.key_held(Key::A));
        assert!(!input.button_held(MouseButton::MIDDLE));
    }

    #[test]
    fn tap_folded_within_one_frame_leaves_no_edges() {
        // Down and up before any query fold to "still up": last write wins
        // per slot, so a sub-frame tap is invisible unless queried mid-frame.
        let mut input = InputState::new();
        input.key_down(Key::E);
        input.key_up(Key::E);
        assert!(!input.key_held(Key::E));
        assert!(!input.key_pressed(Key::E));
        assert!(!input.key_released(Key::E));
    }
}
