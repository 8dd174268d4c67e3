//! Order & cart state management
//!
//! - [`manager`] - the single state container and its mutation operations
//! - [`tracker`] - deferred, cancellable clearing of the active order

pub mod manager;
pub mod tracker;

pub use manager::{
    OrderError, OrdersManager, PlaceOrderError, RewardSummary, Session, SessionError,
};
pub use tracker::ActiveOrderTracker;
