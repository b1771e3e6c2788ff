//! Gridventure: Turn Engine.
//!
//! Owns the player's position and the turn phase, and sequences one turn:
//! roll, move, resolve at most one boost or setback, settle. Every visual
//! step is gated by a delay in the timing coordinator, and every delay is
//! tagged with the turn that scheduled it so a reset makes stale timers
//! harmless.

pub mod application;
pub mod domain;
