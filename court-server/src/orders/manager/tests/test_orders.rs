use super::*;
use shared::models::{DEFAULT_PREP_MINUTES, MenuItem, Restaurant};


#[test]
fn test_place_order_empty_cart_rejected() {
    let (manager, _catalog) = create_test_manager();
    login(&manager);

    assert_eq!(manager.place_order(), Err(PlaceOrderError::EmptyCart));

    // Nothing moved
    assert!(manager.orders().is_empty());
    assert!(manager.customer_order_history().is_empty());
    assert!(manager.active_customer_order().is_none());
    let rewards = manager.rewards();
    assert_eq!(rewards.weekly_order_count, 0);
    assert_eq!(rewards.gift_card_balance, 0);
}


#[test]
fn test_place_order_requires_customer() {
    let (manager, catalog) = create_test_manager();
    add(&manager, &catalog, "rest-1", "item-a");

    assert_eq!(manager.place_order(), Err(PlaceOrderError::NoCustomer));
    assert!(manager.orders().is_empty());
    // The cart is untouched by a rejected checkout
    assert_eq!(manager.cart().quantity_of("item-a"), 1);
}


#[test]
fn test_place_order_requires_customer_even_as_vendor() {
    let (manager, catalog) = create_test_manager();
    add(&manager, &catalog, "rest-1", "item-a");
    manager.login_vendor("rest-1").unwrap();

    assert_eq!(manager.place_order(), Err(PlaceOrderError::NoCustomer));
}


#[test]
fn test_place_order_success() {
    let (manager, catalog) = create_test_manager();
    login(&manager);
    add(&manager, &catalog, "rest-1", "item-a");
    add(&manager, &catalog, "rest-1", "item-a");
    add(&manager, &catalog, "rest-1", "item-b");

    let order = manager.place_order().unwrap();

    // 2 x 50 + 1 x 30
    assert_eq!(order.total, 130.0);
    assert_eq!(order.status, OrderStatus::New);
    assert_eq!(order.restaurant_id, "rest-1");
    assert_eq!(order.restaurant_name, "Spice Route");
    // Lower bound of "10-15"
    assert_eq!(order.estimated_prep_time, 10);
    assert!(order.id.starts_with("ORD-"));
    assert!(order.order_time > 0);
    assert_eq!(order.customer_name, "Asha");
    assert_eq!(order.customer_email, "asha@example.com");

    // Prepended to both collections and set active
    assert_eq!(manager.orders()[0].id, order.id);
    assert_eq!(manager.customer_order_history()[0].id, order.id);
    assert_eq!(manager.active_customer_order().unwrap().id, order.id);

    // Cart emptied and unbound
    let cart = manager.cart();
    assert!(cart.is_empty());
    assert_eq!(cart.restaurant_id, None);
}


#[test]
fn test_orders_most_recent_first() {
    let (manager, catalog) = create_test_manager();
    login(&manager);

    add(&manager, &catalog, "rest-1", "item-a");
    let first = manager.place_order().unwrap();
    add(&manager, &catalog, "rest-2", "item-c");
    let second = manager.place_order().unwrap();

    let live: Vec<String> = manager.orders().iter().map(|o| o.id.clone()).collect();
    assert_eq!(live, [second.id.clone(), first.id.clone()]);
    let history: Vec<String> = manager
        .customer_order_history()
        .iter()
        .map(|o| o.id.clone())
        .collect();
    assert_eq!(history, [second.id, first.id]);
}


#[test]
fn test_prep_time_defaults_when_restaurant_unresolvable() {
    let (manager, _catalog) = create_test_manager();
    login(&manager);

    // A stall the catalog provider does not know about
    let stray = Restaurant {
        id: "rest-popup".to_string(),
        name: "Popup Stand".to_string(),
        cuisine: "Fusion".to_string(),
        rating: 4.0,
        prep_time: "12-18".to_string(),
        image_url: String::new(),
        contact_email: "popup@example.com".to_string(),
        menu: vec![MenuItem {
            id: "item-x".to_string(),
            name: "Mystery Box".to_string(),
            description: String::new(),
            price: 99.0,
            image: String::new(),
        }],
    };
    manager.add_to_cart(&stray.menu[0], &stray);

    let order = manager.place_order().unwrap();
    assert_eq!(order.estimated_prep_time, DEFAULT_PREP_MINUTES);
}


#[test]
fn test_orders_for_restaurant_filters() {
    let (manager, catalog) = create_test_manager();
    login(&manager);

    add(&manager, &catalog, "rest-1", "item-a");
    let spice = manager.place_order().unwrap();
    add(&manager, &catalog, "rest-2", "item-c");
    let wok = manager.place_order().unwrap();

    let spice_orders = manager.orders_for_restaurant("rest-1");
    assert_eq!(spice_orders.len(), 1);
    assert_eq!(spice_orders[0].id, spice.id);

    let wok_orders = manager.orders_for_restaurant("rest-2");
    assert_eq!(wok_orders.len(), 1);
    assert_eq!(wok_orders[0].id, wok.id);

    assert!(manager.orders_for_restaurant("rest-ghost").is_empty());
}


#[test]
fn test_vendor_login_unknown_restaurant() {
    let (manager, _catalog) = create_test_manager();
    assert_eq!(
        manager.login_vendor("rest-ghost"),
        Err(SessionError::UnknownRestaurant("rest-ghost".to_string()))
    );
    assert_eq!(manager.session().role, shared::types::UserRole::None);
}


#[test]
fn test_logout_clears_session_atomically() {
    let (manager, _catalog) = create_test_manager();
    login(&manager);
    assert_eq!(manager.session().role, shared::types::UserRole::Customer);

    let session = manager.logout();
    assert_eq!(session, Session::default());
    assert_eq!(manager.session(), Session::default());
}
