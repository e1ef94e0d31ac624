//! Top-level composition for the Aeris viewer: the frame coordinator that
//! owns the shared world state and sequences the two viewport phases.

mod coordinator;

pub use coordinator::{FrameCoordinator, TickOutput};
