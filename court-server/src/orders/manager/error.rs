use shared::order::OrderStatus;
use thiserror::Error;

/// Checkout rejection reasons
///
/// Every precondition failure is surfaced; checkout never silently no-ops.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaceOrderError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Cart is not bound to a restaurant")]
    UnboundCart,

    #[error("No customer is logged in")]
    NoCustomer,
}

/// Vendor-side order operation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// Transition not matching the linear lifecycle
    #[error("Illegal status transition: {from} -> {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// Extra prep time requested after the order left the kitchen
    #[error("Order no longer accepts extra time: {0}")]
    OrderClosed(String),
}

/// Login errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Restaurant not found: {0}")]
    UnknownRestaurant(String),
}
