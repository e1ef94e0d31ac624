//! Avatar presentation state: the flight animation state machine and the
//! movement-facing rotation.
//!
//! Clip playback and skinning belong to the external mixer; this crate only
//! decides *which* clip should be active and emits crossfade commands, plus
//! the smoothed model rotation that keeps the avatar facing its movement
//! direction.

mod animation;
mod facing;

pub use animation::{AvatarClip, Crossfade, FlightAnimator, LoopMode};
pub use facing::face_movement;
