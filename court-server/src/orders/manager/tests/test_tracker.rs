//! Deferred-clear behavior under paused tokio time

use super::*;


#[tokio::test(start_paused = true)]
async fn test_active_order_clears_after_delay() {
    let (manager, catalog) = create_test_manager();
    let order = place_test_order(&manager, &catalog);
    advance_to(&manager, &order.id, OrderStatus::Completed);

    // Still visible right after completion
    let active = manager.active_customer_order().unwrap();
    assert_eq!(active.id, order.id);
    assert_eq!(active.status, OrderStatus::Completed);

    tokio::time::sleep(ACTIVE_CLEAR_DELAY + Duration::from_secs(1)).await;
    assert!(manager.active_customer_order().is_none());
}


#[tokio::test(start_paused = true)]
async fn test_new_order_survives_stale_timer() {
    let (manager, catalog) = create_test_manager();
    let first = place_test_order(&manager, &catalog);
    advance_to(&manager, &first.id, OrderStatus::Completed);

    // A fresh order placed inside the delay window becomes active and
    // must not be clobbered when the old timer would have fired
    add(&manager, &catalog, "rest-2", "item-c");
    let second = manager.place_order().unwrap();

    tokio::time::sleep(Duration::from_secs(10)).await;

    let active = manager.active_customer_order().unwrap();
    assert_eq!(active.id, second.id);
}


#[tokio::test(start_paused = true)]
async fn test_second_completion_rearms_and_clears() {
    let (manager, catalog) = create_test_manager();
    let first = place_test_order(&manager, &catalog);
    advance_to(&manager, &first.id, OrderStatus::Completed);

    add(&manager, &catalog, "rest-2", "item-c");
    let second = manager.place_order().unwrap();
    advance_to(&manager, &second.id, OrderStatus::Completed);

    tokio::time::sleep(ACTIVE_CLEAR_DELAY + Duration::from_secs(1)).await;
    assert!(manager.active_customer_order().is_none());
}


#[tokio::test(start_paused = true)]
async fn test_completing_non_active_order_never_arms() {
    let (manager, catalog) = create_test_manager();
    let first = place_test_order(&manager, &catalog);

    // The second order displaces the first as active
    add(&manager, &catalog, "rest-2", "item-c");
    let second = manager.place_order().unwrap();

    advance_to(&manager, &first.id, OrderStatus::Completed);

    tokio::time::sleep(Duration::from_secs(60)).await;

    // Completing a non-active order leaves the tracker card alone
    let active = manager.active_customer_order().unwrap();
    assert_eq!(active.id, second.id);
    assert_eq!(active.status, OrderStatus::New);
}


#[test]
fn test_completion_without_runtime_keeps_active_pinned() {
    let (manager, catalog) = create_test_manager();
    let order = place_test_order(&manager, &catalog);

    // No async runtime here: completing the active order must not panic,
    // and with nothing to drive the timer the pointer stays put
    advance_to(&manager, &order.id, OrderStatus::Completed);

    let active = manager.active_customer_order().unwrap();
    assert_eq!(active.id, order.id);
    assert_eq!(active.status, OrderStatus::Completed);
}


#[tokio::test(start_paused = true)]
async fn test_non_terminal_updates_do_not_arm() {
    let (manager, catalog) = create_test_manager();
    let order = place_test_order(&manager, &catalog);
    advance_to(&manager, &order.id, OrderStatus::ReadyForPickup);

    tokio::time::sleep(Duration::from_secs(60)).await;

    let active = manager.active_customer_order().unwrap();
    assert_eq!(active.id, order.id);
    assert_eq!(active.status, OrderStatus::ReadyForPickup);
}
