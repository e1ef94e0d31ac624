//! Keyboard tracking and per-frame input snapshots for the Aeris viewer.
//!
//! The movement logic in `aeris-world` takes a [`FrameInput`] value each
//! frame rather than polling any ambient key table. This crate owns the
//! other half of that contract: a frame-coherent tracker fed by winit key
//! events, and a binding table that turns held keys plus the near camera's
//! orientation into the snapshot.
//!
//! [`FrameInput`]: aeris_world::FrameInput

mod bindings;
mod keyboard;

pub use bindings::MovementBindings;
pub use keyboard::KeyTracker;
