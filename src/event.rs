// ============================================================================
// event.rs — Guppy
// Closed input-event set, validated key/button codes, and bounds errors.
// ============================================================================

use thiserror::Error;

/// Number of keyboard slots tracked per frame.
pub const NUM_KEYS: usize = 256;

/// Number of mouse-button slots tracked per frame.
pub const NUM_BUTTONS: usize = 5;

/// A raw backend code fell outside the tracked slot space.
///
/// Bounds violations are the only runtime errors in this crate: once a
/// [`Key`] or [`MouseButton`] has been constructed, every snapshot
/// operation over it is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("key code {0} outside tracked range 0..{NUM_KEYS}")]
    KeyOutOfRange(u32),
    #[error("mouse button {0} outside tracked range 0..{NUM_BUTTONS}")]
    ButtonOutOfRange(u32),
}

/// A keyboard slot index.
///
/// The slot space has exactly [`NUM_KEYS`] entries, so every value of the
/// underlying byte is a valid slot and a constructed `Key` can never index
/// out of bounds. Raw integers from a backend go through [`Key::from_raw`].
///
/// The named constants follow the classic desktop-toolkit numbering:
/// letters are their uppercase ASCII codes, digits 48..=57, arrows 37..=40.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key(u8);

impl Key {
    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    /// Validate a raw backend key code against the tracked slot space.
    pub fn from_raw(code: u32) -> Result<Self, InputError> {
        if code < NUM_KEYS as u32 {
            Ok(Self(code as u8))
        } else {
            Err(InputError::KeyOutOfRange(code))
        }
    }

    /// Slot index into the per-frame key buffers.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const BACKSPACE: Key = Key(8);
    pub const TAB: Key = Key(9);
    pub const ENTER: Key = Key(10);
    pub const SHIFT: Key = Key(16);
    pub const CONTROL: Key = Key(17);
    pub const ALT: Key = Key(18);
    pub const ESCAPE: Key = Key(27);
    pub const SPACE: Key = Key(32);
    pub const LEFT: Key = Key(37);
    pub const UP: Key = Key(38);
    pub const RIGHT: Key = Key(39);
    pub const DOWN: Key = Key(40);

    pub const DIGIT_0: Key = Key(48);
    pub const DIGIT_1: Key = Key(49);
    pub const DIGIT_2: Key = Key(50);
    pub const DIGIT_3: Key = Key(51);
    pub const DIGIT_4: Key = Key(52);
    pub const DIGIT_5: Key = Key(53);
    pub const DIGIT_6: Key = Key(54);
    pub const DIGIT_7: Key = Key(55);
    pub const DIGIT_8: Key = Key(56);
    pub const DIGIT_9: Key = Key(57);

    pub const A: Key = Key(b'A');
    pub const B: Key = Key(b'B');
    pub const C: Key = Key(b'C');
    pub const D: Key = Key(b'D');
    pub const E: Key = Key(b'E');
    pub const F: Key = Key(b'F');
    pub const G: Key = Key(b'G');
    pub const H: Key = Key(b'H');
    pub const I: Key = Key(b'I');
    pub const J: Key = Key(b'J');
    pub const K: Key = Key(b'K');
    pub const L: Key = Key(b'L');
    pub const M: Key = Key(b'M');
    pub const N: Key = Key(b'N');
    pub const O: Key = Key(b'O');
    pub const P: Key = Key(b'P');
    pub const Q: Key = Key(b'Q');
    pub const R: Key = Key(b'R');
    pub const S: Key = Key(b'S');
    pub const T: Key = Key(b'T');
    pub const U: Key = Key(b'U');
    pub const V: Key = Key(b'V');
    pub const W: Key = Key(b'W');
    pub const X: Key = Key(b'X');
    pub const Y: Key = Key(b'Y');
    pub const Z: Key = Key(b'Z');
}

/// A mouse-button slot index, valid range `0..NUM_BUTTONS`.
///
/// Slot 0 is reserved for "no button" per the toolkit numbering the named
/// constants follow; physical buttons occupy slots 1..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseButton(u8);

impl MouseButton {
    pub const LEFT: MouseButton = MouseButton(1);
    pub const MIDDLE: MouseButton = MouseButton(2);
    pub const RIGHT: MouseButton = MouseButton(3);
    pub const BACK: MouseButton = MouseButton(4);

    /// Validate a raw backend button code against the tracked slot space.
    pub fn from_raw(code: u32) -> Result<Self, InputError> {
        if code < NUM_BUTTONS as u32 {
            Ok(Self(code as u8))
        } else {
            Err(InputError::ButtonOutOfRange(code))
        }
    }

    /// Slot index into the per-frame button buffers.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// The closed set of notifications a backend can deliver to the snapshot.
///
/// Backend adapters translate platform-native events into this set before
/// dispatch, keeping the snapshot independent of any windowing library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    ButtonDown(MouseButton),
    ButtonUp(MouseButton),
    /// Cursor moved to `(raw_x, raw_y)` in display pixels; `scale` is the
    /// host-supplied divisor into logical game coordinates.
    PointerMove { raw_x: i32, raw_y: i32, scale: i32 },
    /// Wheel rotation in whole notches since the last event.
    Scroll(i32),
}
