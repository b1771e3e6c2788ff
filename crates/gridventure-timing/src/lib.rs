//! Gridventure: Timing Coordinator.
//!
//! A single-threaded, cooperative timer queue. Nothing here sleeps or
//! spawns: the owner asks for due timers with [`Scheduler::pop_due`] and
//! runs them itself. Every timer carries the [`TurnToken`] that was current
//! when it was scheduled so the owner can recognise and drop stale ones.

pub mod scheduler;
pub mod timings;
pub mod token;

pub use scheduler::{ScheduledTimer, Scheduler, TimerId};
pub use timings::TurnTimings;
pub use token::TurnToken;
