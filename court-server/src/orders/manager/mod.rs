//! OrdersManager - the order & cart state container
//!
//! This module owns every piece of mutable application state: the
//! single-restaurant cart, the live order list (vendor-visible), the
//! customer's order history, the active-order pointer, the reward
//! counters, and the session. Presentation surfaces call the operations
//! here and render the returned snapshots; no other mutation path exists.
//!
//! # Concurrency model
//!
//! One logical actor: every operation takes the state write lock exactly
//! once and runs to completion, so no operation observes another mid-
//! mutation. The only deferred effect is the active-order clear, which is
//! keyed by order identity and cancellable (see [`ActiveOrderTracker`]).

mod error;
pub use error::*;

use crate::orders::tracker::ActiveOrderTracker;
use crate::services::CatalogService;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use shared::models::{DEFAULT_PREP_MINUTES, MenuItem, Restaurant};
use shared::order::{Cart, CartItem, Order, OrderStatus};
use shared::types::UserRole;
use shared::util;
use std::sync::Arc;
use std::time::Duration;

/// How long the tracker card lingers after the order completes
pub const ACTIVE_CLEAR_DELAY: Duration = Duration::from_secs(5);

/// Minutes added per vendor "add time" action
pub const PREP_TIME_INCREMENT_MINUTES: i64 = 5;

/// Weekly order count above which every further order earns a reward
pub const REWARD_THRESHOLD: u32 = 7;

/// Gift-card units credited per rewarded order
pub const REWARD_AMOUNT: i64 = 10;

// ============================================================================
// Session
// ============================================================================

/// Current session: who is at the terminal
///
/// Set by the login operations, cleared atomically by [`OrdersManager::logout`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Session {
    pub role: UserRole,
    /// Restaurant the logged-in vendor operates (role = Vendor)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_restaurant_id: Option<String>,
    /// Display name of the logged-in customer (role = Customer)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    /// Contact address of the logged-in customer (role = Customer)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
}

/// Reward counters snapshot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RewardSummary {
    pub weekly_order_count: u32,
    pub gift_card_balance: i64,
}

// ============================================================================
// State
// ============================================================================

/// All mutable state, guarded by one lock
///
/// Live orders and history are kept most-recent-first; status and prep
/// time updates are mirrored into every collection holding the order.
#[derive(Debug, Default)]
pub struct CourtState {
    pub(crate) session: Session,
    pub(crate) cart: Cart,
    /// Live orders, vendor-visible, most-recent-first
    pub(crate) orders: Vec<Order>,
    /// Per-customer order history, most-recent-first
    pub(crate) customer_order_history: Vec<Order>,
    /// The order the customer is currently watching, if any
    pub(crate) active_customer_order: Option<Order>,
    pub(crate) weekly_order_count: u32,
    pub(crate) gift_card_balance: i64,
}

// ============================================================================
// OrdersManager
// ============================================================================

/// State manager exposed to the presentation surfaces
///
/// Cheap to clone: clones share the same state container.
#[derive(Clone)]
pub struct OrdersManager {
    state: Arc<RwLock<CourtState>>,
    catalog: Arc<CatalogService>,
    tracker: ActiveOrderTracker,
    clear_delay: Duration,
}

impl std::fmt::Debug for OrdersManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let st = self.state.read();
        f.debug_struct("OrdersManager")
            .field("role", &st.session.role)
            .field("cart_items", &st.cart.items.len())
            .field("live_orders", &st.orders.len())
            .field("active_order", &st.active_customer_order.as_ref().map(|o| &o.id))
            .finish()
    }
}

impl OrdersManager {
    /// Create a manager over the given read-only catalog
    pub fn new(catalog: Arc<CatalogService>) -> Self {
        Self {
            state: Arc::new(RwLock::new(CourtState::default())),
            catalog,
            tracker: ActiveOrderTracker::new(),
            clear_delay: ACTIVE_CLEAR_DELAY,
        }
    }

    /// Seed the reward counters (demo data)
    pub fn with_reward_seed(self, weekly_order_count: u32, gift_card_balance: i64) -> Self {
        {
            let mut st = self.state.write();
            st.weekly_order_count = weekly_order_count;
            st.gift_card_balance = gift_card_balance;
        }
        self
    }

    // ========================================================================
    // Session operations
    // ========================================================================

    /// Log in a customer; the display name is the capitalized local part
    /// of the address (demo login, no password verification)
    pub fn login_customer(&self, email: &str) -> Session {
        let name = capitalize(email.split('@').next().unwrap_or(email));
        let mut st = self.state.write();
        st.session = Session {
            role: UserRole::Customer,
            vendor_restaurant_id: None,
            customer_name: Some(name),
            customer_email: Some(email.to_string()),
        };
        tracing::info!(customer = %st.session.customer_name.as_deref().unwrap_or(""), "Customer logged in");
        st.session.clone()
    }

    /// Log in a vendor for one of the catalog's restaurants
    pub fn login_vendor(&self, restaurant_id: &str) -> Result<Session, SessionError> {
        if self.catalog.restaurant(restaurant_id).is_none() {
            return Err(SessionError::UnknownRestaurant(restaurant_id.to_string()));
        }
        let mut st = self.state.write();
        st.session = Session {
            role: UserRole::Vendor,
            vendor_restaurant_id: Some(restaurant_id.to_string()),
            customer_name: None,
            customer_email: None,
        };
        tracing::info!(restaurant_id, "Vendor logged in");
        Ok(st.session.clone())
    }

    /// Clear the session atomically
    pub fn logout(&self) -> Session {
        let mut st = self.state.write();
        st.session = Session::default();
        tracing::info!("Session cleared");
        st.session.clone()
    }

    // ========================================================================
    // Cart operations
    // ========================================================================

    /// Add one unit of `item` to the cart
    ///
    /// A cart bound to a different restaurant is replaced wholesale; a
    /// matching entry is incremented; otherwise the item is appended and
    /// an empty cart is bound to `restaurant`. Always succeeds.
    pub fn add_to_cart(&self, item: &MenuItem, restaurant: &Restaurant) -> Cart {
        let mut st = self.state.write();

        let other_restaurant = st
            .cart
            .restaurant_id
            .as_deref()
            .is_some_and(|id| id != restaurant.id);
        if other_restaurant {
            tracing::debug!(
                from = st.cart.restaurant_name.as_deref().unwrap_or(""),
                to = %restaurant.name,
                "Cart switched restaurants, replacing contents"
            );
            st.cart.items.clear();
        }

        if other_restaurant || st.cart.restaurant_id.is_none() {
            st.cart.restaurant_id = Some(restaurant.id.clone());
            st.cart.restaurant_name = Some(restaurant.name.clone());
        }

        match st.cart.items.iter_mut().find(|e| e.menu_item.id == item.id) {
            Some(entry) => entry.quantity += 1,
            None => st.cart.items.push(CartItem {
                menu_item: item.clone(),
                quantity: 1,
            }),
        }

        st.cart.clone()
    }

    /// Set the named cart item's quantity; `<= 0` removes the entry
    ///
    /// Unknown `item_id` is a no-op. The restaurant binding is untouched
    /// even if this empties the cart (only `clear_cart`/`place_order`
    /// unbind).
    pub fn update_cart_quantity(&self, item_id: &str, quantity: i32) -> Cart {
        let mut st = self.state.write();
        if quantity <= 0 {
            st.cart.items.retain(|e| e.menu_item.id != item_id);
        } else if let Some(entry) = st.cart.items.iter_mut().find(|e| e.menu_item.id == item_id) {
            entry.quantity = quantity;
        }
        st.cart.clone()
    }

    /// Reset the cart to the empty, unbound state
    pub fn clear_cart(&self) -> Cart {
        let mut st = self.state.write();
        st.cart.reset();
        st.cart.clone()
    }

    // ========================================================================
    // Checkout
    // ========================================================================

    /// Place an order from the current cart
    ///
    /// Preconditions: non-empty cart, bound restaurant, logged-in customer
    /// with name and contact address. The estimate is the lower bound of
    /// the restaurant's prep-time range (default 15 when unresolvable).
    pub fn place_order(&self) -> Result<Order, PlaceOrderError> {
        let mut st = self.state.write();

        if st.cart.is_empty() {
            return Err(PlaceOrderError::EmptyCart);
        }
        let restaurant_id = st
            .cart
            .restaurant_id
            .clone()
            .ok_or(PlaceOrderError::UnboundCart)?;
        let restaurant_name = st
            .cart
            .restaurant_name
            .clone()
            .ok_or(PlaceOrderError::UnboundCart)?;
        let (customer_name, customer_email) =
            match (&st.session.customer_name, &st.session.customer_email) {
                (Some(name), Some(email)) => (name.clone(), email.clone()),
                _ => return Err(PlaceOrderError::NoCustomer),
            };

        let estimated_prep_time = self
            .catalog
            .restaurant(&restaurant_id)
            .map(|r| r.prep_time_lower_bound())
            .unwrap_or(DEFAULT_PREP_MINUTES);

        let order = Order {
            id: util::order_id(),
            restaurant_id,
            restaurant_name,
            items: st.cart.items.clone(),
            total: st.cart.total(),
            status: OrderStatus::New,
            estimated_prep_time,
            order_time: util::now_millis(),
            customer_name,
            customer_email,
        };

        st.orders.insert(0, order.clone());
        st.customer_order_history.insert(0, order.clone());

        // A new active order supersedes any pending deferred clear
        self.tracker.cancel();
        st.active_customer_order = Some(order.clone());

        st.weekly_order_count += 1;
        if st.weekly_order_count > REWARD_THRESHOLD {
            st.gift_card_balance += REWARD_AMOUNT;
            tracing::info!(
                weekly_order_count = st.weekly_order_count,
                gift_card_balance = st.gift_card_balance,
                "Gift card credited"
            );
        }

        st.cart.reset();

        tracing::info!(
            order_id = %order.id,
            restaurant = %order.restaurant_name,
            total = order.total,
            prep_minutes = order.estimated_prep_time,
            "Order placed"
        );
        Ok(order)
    }

    // ========================================================================
    // Vendor operations
    // ========================================================================

    /// Advance an order along the preparation lifecycle
    ///
    /// Unknown `order_id` is a silent no-op. A transition not matching
    /// the linear `New -> InPreparation -> ReadyForPickup -> Completed`
    /// order is rejected and mutates nothing. Completing the active order
    /// arms the deferred clear of the tracker card.
    pub fn update_order_status(
        &self,
        order_id: &str,
        new_status: OrderStatus,
    ) -> Result<(), OrderError> {
        let mut st = self.state.write();

        let Some(current) = find_status(&st, order_id) else {
            tracing::debug!(order_id, "Status update for unknown order ignored");
            return Ok(());
        };
        if !current.can_transition_to(new_status) {
            return Err(OrderError::InvalidTransition {
                from: current,
                to: new_status,
            });
        }

        for order in st.orders.iter_mut().filter(|o| o.id == order_id) {
            order.status = new_status;
        }
        for order in st
            .customer_order_history
            .iter_mut()
            .filter(|o| o.id == order_id)
        {
            order.status = new_status;
        }

        let mut arm_clear = false;
        if let Some(active) = st
            .active_customer_order
            .as_mut()
            .filter(|o| o.id == order_id)
        {
            active.status = new_status;
            arm_clear = new_status.is_terminal();
        }
        drop(st);

        if arm_clear {
            self.tracker
                .arm(order_id.to_string(), self.clear_delay, self.state.clone());
        }

        tracing::info!(order_id, status = %new_status, "Order status updated");
        Ok(())
    }

    /// Add five minutes to an order's preparation estimate
    ///
    /// Unknown `order_id` is a silent no-op; an order past `InPreparation`
    /// no longer accepts extra time.
    pub fn add_time_to_order(&self, order_id: &str) -> Result<(), OrderError> {
        let mut st = self.state.write();

        let Some(current) = find_status(&st, order_id) else {
            tracing::debug!(order_id, "Extra time for unknown order ignored");
            return Ok(());
        };
        if !current.accepts_extra_time() {
            return Err(OrderError::OrderClosed(order_id.to_string()));
        }

        for order in st.orders.iter_mut().filter(|o| o.id == order_id) {
            order.estimated_prep_time += PREP_TIME_INCREMENT_MINUTES;
        }
        for order in st
            .customer_order_history
            .iter_mut()
            .filter(|o| o.id == order_id)
        {
            order.estimated_prep_time += PREP_TIME_INCREMENT_MINUTES;
        }
        if let Some(active) = st
            .active_customer_order
            .as_mut()
            .filter(|o| o.id == order_id)
        {
            active.estimated_prep_time += PREP_TIME_INCREMENT_MINUTES;
        }

        tracing::info!(order_id, "Extra prep time added");
        Ok(())
    }

    // ========================================================================
    // Snapshot accessors
    // ========================================================================

    pub fn session(&self) -> Session {
        self.state.read().session.clone()
    }

    pub fn cart(&self) -> Cart {
        self.state.read().cart.clone()
    }

    /// Live orders across all restaurants, most-recent-first
    pub fn orders(&self) -> Vec<Order> {
        self.state.read().orders.clone()
    }

    /// Live orders for one restaurant (vendor view)
    pub fn orders_for_restaurant(&self, restaurant_id: &str) -> Vec<Order> {
        self.state
            .read()
            .orders
            .iter()
            .filter(|o| o.restaurant_id == restaurant_id)
            .cloned()
            .collect()
    }

    pub fn customer_order_history(&self) -> Vec<Order> {
        self.state.read().customer_order_history.clone()
    }

    pub fn active_customer_order(&self) -> Option<Order> {
        self.state.read().active_customer_order.clone()
    }

    pub fn rewards(&self) -> RewardSummary {
        let st = self.state.read();
        RewardSummary {
            weekly_order_count: st.weekly_order_count,
            gift_card_balance: st.gift_card_balance,
        }
    }
}

/// Current status of an order, looked up in the live list first
fn find_status(st: &CourtState, order_id: &str) -> Option<OrderStatus> {
    st.orders
        .iter()
        .find(|o| o.id == order_id)
        .or_else(|| st.customer_order_history.iter().find(|o| o.id == order_id))
        .map(|o| o.status)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests;
