// ============================================================================
// lib.rs — Guppy
// Per-frame keyboard/mouse input snapshot for 2D game loops.
// ============================================================================

pub mod backend;
pub mod event;
pub mod state;

pub use event::{InputError, InputEvent, Key, MouseButton, NUM_BUTTONS, NUM_KEYS};
pub use state::InputState;
