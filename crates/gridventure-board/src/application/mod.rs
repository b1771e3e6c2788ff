//! Board application services.

pub mod query_handlers;
pub mod theme_loader;
