//! The data models for the delivery core.
//!
//! Models are plain values: they are read fresh from the cart/order for each
//! build, and the delivery groups produced from them are serialized and sent
//! out immediately. Nothing in here persists anything.

#[macro_use]
mod lib;

// kind of trying to load based on dependency order here.
pub mod dimensions;
pub mod warehouse;
pub mod line_item;
pub mod dropoff;
pub mod delivery;
