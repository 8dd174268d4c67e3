use super::*;


#[test]
fn test_no_credit_below_threshold() {
    let (manager, catalog) = create_test_manager();
    place_test_order(&manager, &catalog);

    let rewards = manager.rewards();
    assert_eq!(rewards.weekly_order_count, 1);
    assert_eq!(rewards.gift_card_balance, 0);
}


#[test]
fn test_credit_fires_above_threshold() {
    let (manager, catalog) = create_test_manager();
    let manager = manager.with_reward_seed(REWARD_THRESHOLD, 0);

    // Order number 8 crosses the threshold
    place_test_order(&manager, &catalog);

    let rewards = manager.rewards();
    assert_eq!(rewards.weekly_order_count, REWARD_THRESHOLD + 1);
    assert_eq!(rewards.gift_card_balance, REWARD_AMOUNT);
}


#[test]
fn test_credit_fires_on_every_further_order() {
    let (manager, catalog) = create_test_manager();
    let manager = manager.with_reward_seed(REWARD_THRESHOLD, 0);
    login(&manager);

    for _ in 0..3 {
        add(&manager, &catalog, "rest-1", "item-a");
        manager.place_order().unwrap();
    }

    let rewards = manager.rewards();
    assert_eq!(rewards.weekly_order_count, REWARD_THRESHOLD + 3);
    assert_eq!(rewards.gift_card_balance, 3 * REWARD_AMOUNT);
}


#[test]
fn test_exact_threshold_does_not_credit() {
    let (manager, catalog) = create_test_manager();
    let manager = manager.with_reward_seed(REWARD_THRESHOLD - 1, 0);

    // This lands exactly on the threshold; credit requires strictly above
    place_test_order(&manager, &catalog);

    let rewards = manager.rewards();
    assert_eq!(rewards.weekly_order_count, REWARD_THRESHOLD);
    assert_eq!(rewards.gift_card_balance, 0);
}


#[test]
fn test_seed_is_reported_as_is() {
    let (manager, _catalog) = create_test_manager();
    let manager = manager.with_reward_seed(3, 20);

    let rewards = manager.rewards();
    assert_eq!(rewards.weekly_order_count, 3);
    assert_eq!(rewards.gift_card_balance, 20);
}


#[test]
fn test_rejected_checkout_leaves_counters_alone() {
    let (manager, _catalog) = create_test_manager();
    let manager = manager.with_reward_seed(REWARD_THRESHOLD, 0);
    login(&manager);

    assert_eq!(manager.place_order(), Err(PlaceOrderError::EmptyCart));

    let rewards = manager.rewards();
    assert_eq!(rewards.weekly_order_count, REWARD_THRESHOLD);
    assert_eq!(rewards.gift_card_balance, 0);
}
