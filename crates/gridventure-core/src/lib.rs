//! Gridventure Core: shared domain abstractions.
//!
//! This crate defines the fundamental traits and types that every
//! component crate depends on: time, randomness, errors, domain events,
//! commands and the audio cue seam. It contains no game rules.

pub mod clock;
pub mod command;
pub mod cue;
pub mod error;
pub mod event;
pub mod rng;
