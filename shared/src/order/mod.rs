//! Cart and order types
//!
//! The cart is the customer's in-progress, single-restaurant selection;
//! an order is the immutable (except status/prep-time) record of a
//! checkout, tracked through a linear preparation lifecycle.

pub mod types;

pub use types::*;
