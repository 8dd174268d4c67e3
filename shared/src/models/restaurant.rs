//! Restaurant and Menu Models

use serde::{Deserialize, Serialize};

/// Fallback preparation estimate when a prep-time range cannot be parsed
pub const DEFAULT_PREP_MINUTES: i64 = 15;

/// Menu item entity
///
/// Immutable reference data; `id` is unique within its restaurant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price in currency unit (non-negative)
    pub price: f64,
    pub image: String,
}

/// Restaurant entity
///
/// Immutable reference data owned by the catalog provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub rating: f64,
    /// Prep-time range as displayed, e.g. "10-15" (minutes)
    pub prep_time: String,
    pub image_url: String,
    pub contact_email: String,
    /// Ordered menu as displayed to customers
    pub menu: Vec<MenuItem>,
}

impl Restaurant {
    /// Find a menu item by ID
    pub fn menu_item(&self, item_id: &str) -> Option<&MenuItem> {
        self.menu.iter().find(|m| m.id == item_id)
    }

    /// Lower bound of the prep-time range in minutes
    ///
    /// "10-15" parses to 10; a bare "20" parses to 20. Anything
    /// unparseable falls back to [`DEFAULT_PREP_MINUTES`].
    pub fn prep_time_lower_bound(&self) -> i64 {
        self.prep_time
            .split('-')
            .next()
            .and_then(|s| s.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_PREP_MINUTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant_with_prep(prep: &str) -> Restaurant {
        Restaurant {
            id: "rest-1".to_string(),
            name: "Test Stall".to_string(),
            cuisine: "Test".to_string(),
            rating: 4.5,
            prep_time: prep.to_string(),
            image_url: String::new(),
            contact_email: "stall@example.com".to_string(),
            menu: vec![],
        }
    }

    #[test]
    fn test_prep_time_range() {
        assert_eq!(restaurant_with_prep("10-15").prep_time_lower_bound(), 10);
    }

    #[test]
    fn test_prep_time_single_value() {
        assert_eq!(restaurant_with_prep("20").prep_time_lower_bound(), 20);
    }

    #[test]
    fn test_prep_time_unparseable_defaults() {
        assert_eq!(
            restaurant_with_prep("soon").prep_time_lower_bound(),
            DEFAULT_PREP_MINUTES
        );
        assert_eq!(
            restaurant_with_prep("").prep_time_lower_bound(),
            DEFAULT_PREP_MINUTES
        );
    }
}
