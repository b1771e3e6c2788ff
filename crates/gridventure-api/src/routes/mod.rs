//! Route modules.

pub mod board;
pub mod game;
pub mod health;
