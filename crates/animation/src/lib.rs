//! Animation Coordination - live handles over declarative descriptors
//!
//! This crate bridges the story model's declarative animation descriptors to
//! imperative, live animation handles: per-target generator lists, a hoisted
//! handle registry with batch playback, and one aggregated finish event per
//! play cycle.

mod coordinator;
mod handle;

pub use coordinator::*;
pub use handle::*;
