//! Shared types for cart and order state

use crate::models::MenuItem;
use crate::types::Timestamp;
use serde::{Deserialize, Serialize};

// ============================================================================
// Order Status
// ============================================================================

/// Order preparation lifecycle
///
/// Linear state machine: `New -> InPreparation -> ReadyForPickup -> Completed`.
/// No stage may be skipped and no transition moves backward.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    New,
    InPreparation,
    ReadyForPickup,
    Completed,
}

impl OrderStatus {
    /// The single legal successor, if any
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            Self::New => Some(Self::InPreparation),
            Self::InPreparation => Some(Self::ReadyForPickup),
            Self::ReadyForPickup => Some(Self::Completed),
            Self::Completed => None,
        }
    }

    /// Whether `target` is a legal transition from this status
    pub fn can_transition_to(&self, target: OrderStatus) -> bool {
        self.next() == Some(target)
    }

    /// Terminal status: nothing follows `Completed`
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Extra prep time only makes sense before the food is ready
    pub fn accepts_extra_time(&self) -> bool {
        matches!(self, Self::New | Self::InPreparation)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::New => write!(f, "NEW"),
            Self::InPreparation => write!(f, "IN_PREPARATION"),
            Self::ReadyForPickup => write!(f, "READY_FOR_PICKUP"),
            Self::Completed => write!(f, "COMPLETED"),
        }
    }
}

// ============================================================================
// Cart Types
// ============================================================================

/// A menu item plus the quantity selected
///
/// Quantity is >= 1 while the item is in the cart; dropping to 0 or
/// below removes the entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub menu_item: MenuItem,
    pub quantity: i32,
}

impl CartItem {
    /// Line total for this entry
    pub fn line_total(&self) -> f64 {
        self.menu_item.price * self.quantity as f64
    }
}

/// The customer's in-progress selection, bound to at most one restaurant
///
/// Invariant: all items in a non-empty cart reference menu items of the
/// bound restaurant. Item order is order of first add (stable for display).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Cart {
    pub restaurant_id: Option<String>,
    pub restaurant_name: Option<String>,
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Whether the cart holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of price × quantity over all entries
    pub fn total(&self) -> f64 {
        self.items.iter().map(|i| i.line_total()).sum()
    }

    /// Quantity of the named item, 0 if absent
    pub fn quantity_of(&self, item_id: &str) -> i32 {
        self.items
            .iter()
            .find(|i| i.menu_item.id == item_id)
            .map(|i| i.quantity)
            .unwrap_or(0)
    }

    /// Reset to the empty, unbound state
    pub fn reset(&mut self) {
        self.restaurant_id = None;
        self.restaurant_name = None;
        self.items.clear();
    }
}

// ============================================================================
// Order
// ============================================================================

/// An order placed at checkout
///
/// Immutable snapshot of the cart at checkout time, except for `status`
/// and `estimated_prep_time` which vendor operations mutate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub items: Vec<CartItem>,
    /// Total in currency unit, computed at checkout
    pub total: f64,
    pub status: OrderStatus,
    /// Estimated preparation time in minutes
    pub estimated_prep_time: i64,
    /// Checkout time (Unix millis)
    pub order_time: Timestamp,
    pub customer_name: String,
    pub customer_email: String,
}
