//! Shared world state for the Aeris dual-viewport viewer.
//!
//! A single [`WorldState`] record holds the global (ECEF) position, the
//! local (surface-relative) orientation, and the base movement speed. The
//! near (avatar) viewport writes it once per frame via [`advance`]; the far
//! (planet-scale) viewport reads a consistent [`CameraPose`] from it. All
//! rotation bookkeeping goes through the surface-alignment basis from
//! `aeris-geodesy`.

mod frame;
mod movement;
mod preset;
mod state;
mod teleport;
mod zoom;

pub use frame::{CameraPose, far_camera_pose, global_to_local, local_to_global};
pub use movement::{FrameInput, MIN_ALTITUDE_MARGIN_M, advance};
pub use preset::LocationPreset;
pub use state::WorldState;
pub use teleport::teleport;
pub use zoom::ZoomOffset;
