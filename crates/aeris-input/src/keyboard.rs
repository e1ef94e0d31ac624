//! Frame-coherent keyboard state.
//!
//! [`KeyTracker`] accumulates winit [`KeyEvent`]s during a frame and answers
//! two questions for any physical key: is it held right now, and did it
//! transition to pressed this frame. Physical key codes are used throughout
//! so WASD movement is layout-independent.

use std::collections::HashSet;

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Tracks held and freshly pressed keys across one frame.
///
/// Feed every window [`KeyEvent`] to [`handle`](Self::handle); query with
/// [`held`](Self::held) and [`just_pressed`](Self::just_pressed); call
/// [`end_frame`](Self::end_frame) after the frame's phases have run.
#[derive(Debug, Clone, Default)]
pub struct KeyTracker {
    held: HashSet<KeyCode>,
    just_pressed: HashSet<KeyCode>,
}

impl KeyTracker {
    /// Creates a tracker with no keys held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a winit key event into the tracker. Repeat events and
    /// unidentified (non-code) keys are ignored.
    pub fn handle(&mut self, event: &KeyEvent) {
        if event.repeat {
            return;
        }
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        match event.state {
            ElementState::Pressed => self.press(code),
            ElementState::Released => self.release(code),
        }
    }

    /// Marks a key as pressed. Split out from [`handle`](Self::handle) so
    /// tests and scripted drivers can feed keys without a winit event.
    pub fn press(&mut self, code: KeyCode) {
        if self.held.insert(code) {
            self.just_pressed.insert(code);
        }
    }

    /// Marks a key as released.
    pub fn release(&mut self, code: KeyCode) {
        self.held.remove(&code);
    }

    /// Returns `true` while the key is held down.
    #[must_use]
    pub fn held(&self, code: KeyCode) -> bool {
        self.held.contains(&code)
    }

    /// Returns `true` only during the frame the key went down.
    #[must_use]
    pub fn just_pressed(&self, code: KeyCode) -> bool {
        self.just_pressed.contains(&code)
    }

    /// Clears the per-frame transition set. Call once per frame, after all
    /// phases have sampled input.
    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
    }
}
