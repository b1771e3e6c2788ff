//! Gridventure: Notification Surface.
//!
//! Selects a message from the pool matching a transition or win, keeps
//! exactly one of them visible, and knows when it expires. Scheduling the
//! dismissal is left to the caller's timer queue; the surface only
//! guarantees that a stale dismissal never clears a newer message.

pub mod message;
pub mod pools;
pub mod surface;

pub use message::{Message, MessageCategory};
pub use pools::MessagePools;
pub use surface::{ActiveMessage, NotificationSurface};
