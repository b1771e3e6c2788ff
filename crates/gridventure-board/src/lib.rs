//! Gridventure: Board Model.
//!
//! Static board configuration, the boustrophedon (snake-pattern) layout
//! mapping cell numbers to grid coordinates, and O(1) classification of
//! cells as boost or setback sources. A [`domain::board::Board`] is
//! validated once and immutable afterwards.

pub mod application;
pub mod domain;
