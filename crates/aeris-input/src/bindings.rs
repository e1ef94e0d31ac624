//! Movement key bindings and the once-per-frame input snapshot.

use glam::DQuat;
use winit::keyboard::KeyCode;

use aeris_world::FrameInput;

use crate::keyboard::KeyTracker;

/// Maps physical keys to the movement flags of a [`FrameInput`].
///
/// Defaults: WASD planar movement, E/Q for altitude, left shift for boost.
#[derive(Clone, Copy, Debug)]
pub struct MovementBindings {
    /// Move along local -Z.
    pub forward: KeyCode,
    /// Move along local +Z.
    pub back: KeyCode,
    /// Move along local -X.
    pub left: KeyCode,
    /// Move along local +X.
    pub right: KeyCode,
    /// Climb along the global up.
    pub ascend: KeyCode,
    /// Descend along the global up.
    pub descend: KeyCode,
    /// Speed boost while held.
    pub boost: KeyCode,
}

impl Default for MovementBindings {
    fn default() -> Self {
        Self {
            forward: KeyCode::KeyW,
            back: KeyCode::KeyS,
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
            ascend: KeyCode::KeyE,
            descend: KeyCode::KeyQ,
            boost: KeyCode::ShiftLeft,
        }
    }
}

impl MovementBindings {
    /// Samples the tracker into a [`FrameInput`] snapshot, pairing the held
    /// flags with the near camera's current orientation. Called exactly
    /// once per frame; the snapshot is then passed by value so the movement
    /// logic stays decoupled from input polling.
    #[must_use]
    pub fn sample(&self, keys: &KeyTracker, camera_orientation: DQuat) -> FrameInput {
        FrameInput {
            forward: keys.held(self.forward),
            back: keys.held(self.back),
            left: keys.held(self.left),
            right: keys.held(self.right),
            ascend: keys.held(self.ascend),
            descend: keys.held(self.descend),
            boost: keys.held(self.boost),
            orientation: camera_orientation,
        }
    }
}
