//! Smoothed camera zoom offset for the near viewport.

/// Exponential-style damping of a camera's local forward translation.
///
/// While any movement flag is held the offset eases toward
/// [`max_offset`](Self::max_offset); when input stops it eases back to
/// zero. Purely a per-viewport visual detail: the returned step is applied
/// as a camera-local translation and never touches the world state.
#[derive(Clone, Copy, Debug)]
pub struct ZoomOffset {
    /// Current offset in meters.
    pub offset: f64,
    /// Offset approached while moving, meters.
    pub max_offset: f64,
    /// Damping rate per second.
    pub rate: f64,
}

impl Default for ZoomOffset {
    fn default() -> Self {
        Self {
            offset: 0.0,
            max_offset: 10.0,
            rate: 2.0,
        }
    }
}

impl ZoomOffset {
    /// Advance the damping by one frame and return the incremental step the
    /// camera should translate along its local forward axis this frame.
    pub fn update(&mut self, moving: bool, dt: f64) -> f64 {
        let target = if moving { self.max_offset } else { 0.0 };
        let step = (target - self.offset) * self.rate * dt;
        self.offset += step;
        step
    }
}
