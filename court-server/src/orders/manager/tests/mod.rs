use super::*;
use crate::services::CatalogService;
use shared::order::Order;

mod test_orders;
mod test_rewards;
mod test_tracker;

/// Two stalls, fixed prices, known prep-time ranges
const TEST_CATALOG: &str = r#"[
    {
        "id": "rest-1",
        "name": "Spice Route",
        "cuisine": "North Indian",
        "rating": 4.6,
        "prep_time": "10-15",
        "image_url": "",
        "contact_email": "spice@example.com",
        "menu": [
            {"id": "item-a", "name": "Paneer Tikka", "description": "", "price": 50.0, "image": ""},
            {"id": "item-b", "name": "Garlic Naan", "description": "", "price": 30.0, "image": ""}
        ]
    },
    {
        "id": "rest-2",
        "name": "Wok Express",
        "cuisine": "Chinese",
        "rating": 4.3,
        "prep_time": "8-12",
        "image_url": "",
        "contact_email": "wok@example.com",
        "menu": [
            {"id": "item-c", "name": "Hakka Noodles", "description": "", "price": 120.0, "image": ""}
        ]
    }
]"#;


fn test_catalog() -> Arc<CatalogService> {
    Arc::new(CatalogService::from_json(TEST_CATALOG).unwrap())
}


fn create_test_manager() -> (OrdersManager, Arc<CatalogService>) {
    let catalog = test_catalog();
    (OrdersManager::new(catalog.clone()), catalog)
}


fn login(manager: &OrdersManager) {
    manager.login_customer("asha@example.com");
}


/// Add one unit of a catalog item to the cart
fn add(manager: &OrdersManager, catalog: &CatalogService, restaurant_id: &str, item_id: &str) {
    let restaurant = catalog.restaurant(restaurant_id).unwrap();
    let item = restaurant.menu_item(item_id).unwrap();
    manager.add_to_cart(item, restaurant);
}


/// Log in, add one item-a, and check out
fn place_test_order(manager: &OrdersManager, catalog: &CatalogService) -> Order {
    login(manager);
    add(manager, catalog, "rest-1", "item-a");
    manager.place_order().unwrap()
}


/// Walk an order along the lifecycle up to and including `target`
fn advance_to(manager: &OrdersManager, order_id: &str, target: OrderStatus) {
    let mut current = manager
        .orders()
        .iter()
        .find(|order| order.id == order_id)
        .map(|order| order.status)
        .unwrap();
    while current != target {
        let next = current.next().unwrap();
        manager.update_order_status(order_id, next).unwrap();
        current = next;
    }
}
