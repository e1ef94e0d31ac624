//! The per-frame coordinator.
//!
//! Exactly one [`FrameCoordinator`] exists per process. It owns the shared
//! [`WorldState`] and runs both viewport phases inside a single
//! [`tick`](FrameCoordinator::tick) call, in a fixed order: the near
//! (avatar) phase applies movement and writes the orientation, then the far
//! (planet-scale) phase reads the resulting pose. That makes the host
//! framework's serialized-callback assumption an explicit code path: no
//! globals, no locks, and no way for the far camera to observe a
//! half-updated frame. Porting to real multithreading would mean wrapping
//! the coordinator in a mutex, not sprinkling one inside it.

use aeris_config::Config;
use aeris_world::{
    CameraPose, FrameInput, LocationPreset, WorldState, ZoomOffset, advance, far_camera_pose,
    teleport,
};

/// What one frame produces for the renderer.
#[derive(Clone, Copy, Debug)]
pub struct TickOutput {
    /// Pose the planet-scale camera copies verbatim.
    pub far_pose: CameraPose,
    /// Camera-local forward translation step for the near camera's zoom
    /// damping this frame.
    pub zoom_step: f64,
}

/// Owns the world state and sequences the frame phases.
#[derive(Clone, Debug)]
pub struct FrameCoordinator {
    state: WorldState,
    zoom: ZoomOffset,
    diag_elapsed_s: f64,
}

impl FrameCoordinator {
    /// Coordinator with the default orbital start state, tuned from config.
    pub fn new(config: &Config) -> Self {
        let mut state = WorldState::new();
        state.speed = config.movement.base_speed_m_s;
        Self {
            state,
            zoom: ZoomOffset {
                offset: 0.0,
                max_offset: config.zoom.max_offset_m,
                rate: config.zoom.rate_per_s,
            },
            diag_elapsed_s: 0.0,
        }
    }

    /// Read-only view of the shared state, for the avatar layer and tests.
    pub fn state(&self) -> &WorldState {
        &self.state
    }

    /// Jump to a location preset. Both state fields are written before this
    /// returns, so the next tick's phases see the completed teleport.
    pub fn teleport_to(&mut self, preset: &LocationPreset) {
        teleport(&mut self.state, preset);
        tracing::info!(
            name = %preset.name,
            altitude_m = preset.altitude_m,
            distance_m = self.state.position.length(),
            "teleport"
        );
    }

    /// Run one frame: near phase (movement + orientation write), then far
    /// phase (consistent pose read). `input` is this frame's sampled
    /// snapshot; `dt` is the frame delta in seconds.
    pub fn tick(&mut self, input: &FrameInput, dt: f64) -> TickOutput {
        advance(&mut self.state, input, dt);

        let zoom_step = self.zoom.update(input.any_active(), dt);

        self.diag_elapsed_s += dt;
        if self.diag_elapsed_s >= 1.0 {
            self.diag_elapsed_s -= 1.0;
            let distance = self.state.position.length();
            let radius = aeris_geodesy::local_radius(self.state.position);
            tracing::debug!(
                distance_m = distance,
                local_radius_m = radius,
                altitude_m = distance - radius,
                "frame sync"
            );
        }

        TickOutput {
            far_pose: far_camera_pose(&self.state),
            zoom_step,
        }
    }
}
