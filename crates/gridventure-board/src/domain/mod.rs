//! Board domain types.

pub mod board;
pub mod config;
pub mod geometry;
pub mod layout;
pub mod theme;
