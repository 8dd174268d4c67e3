//! Deferred active-order clearing
//!
//! When the active order reaches its terminal status, the customer keeps
//! seeing the tracker card for a fixed delay before it disappears. The
//! deferred clear must never remove a *different*, newer active order:
//! arming cancels the previous timer outright, and the fired task still
//! re-checks order identity under the state lock before clearing.

use crate::orders::manager::CourtState;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

struct PendingClear {
    order_id: String,
    token: CancellationToken,
}

/// Cancellable deferred clear, keyed by order identity
#[derive(Clone, Default)]
pub struct ActiveOrderTracker {
    pending: Arc<Mutex<Option<PendingClear>>>,
}

impl ActiveOrderTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel any armed clear (the active order identity changed)
    pub fn cancel(&self) {
        if let Some(prev) = self.pending.lock().take() {
            prev.token.cancel();
            tracing::debug!(order_id = %prev.order_id, "Deferred clear cancelled");
        }
    }

    /// Arm a deferred clear of the active-order pointer
    ///
    /// Replaces (and cancels) any previously armed clear. Outside an
    /// async runtime there is nothing to drive the timer; the previous
    /// clear is still cancelled and the pointer stays as-is.
    pub fn arm(&self, order_id: String, delay: Duration, state: Arc<RwLock<CourtState>>) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            self.cancel();
            tracing::debug!(order_id, "No async runtime, active order stays pinned");
            return;
        };

        let token = CancellationToken::new();
        if let Some(prev) = self.pending.lock().replace(PendingClear {
            order_id: order_id.clone(),
            token: token.clone(),
        }) {
            prev.token.cancel();
        }

        let pending = self.pending.clone();
        handle.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    {
                        let mut st = state.write();
                        // Identity check: only clear the order this timer was armed for
                        if st
                            .active_customer_order
                            .as_ref()
                            .is_some_and(|o| o.id == order_id)
                        {
                            st.active_customer_order = None;
                            tracing::debug!(order_id = %order_id, "Active order tracking cleared");
                        }
                    }
                    let mut slot = pending.lock();
                    if slot.as_ref().is_some_and(|p| p.order_id == order_id) {
                        *slot = None;
                    }
                }
            }
        });
    }
}

impl std::fmt::Debug for ActiveOrderTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let armed = self.pending.lock().as_ref().map(|p| p.order_id.clone());
        f.debug_struct("ActiveOrderTracker")
            .field("armed_for", &armed)
            .finish()
    }
}
