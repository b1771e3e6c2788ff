//! Turn engine domain types.

pub mod aggregates;
pub mod commands;
pub mod errors;
pub mod events;
pub mod phase;
pub(crate) mod timers;
