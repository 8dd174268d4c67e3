//! Catalog Service - immutable restaurant and menu reference data
//!
//! Loaded once at startup (embedded demo catalog or `CATALOG_PATH`),
//! queried by identifier, never mutated. The state manager treats this
//! as read-only input; ownership stays here.

use serde::Serialize;
use shared::models::{MenuItem, Restaurant};
use std::collections::HashMap;
use thiserror::Error;

/// Demo catalog compiled into the binary
const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate restaurant id: {0}")]
    DuplicateRestaurant(String),
}

// =============================================================================
// Catalog view (for the recommendation prompt)
// =============================================================================

/// Serializable menu entry handed to the recommendation service
#[derive(Debug, Clone, Serialize)]
pub struct MenuItemView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Serializable restaurant entry handed to the recommendation service
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantView {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub menu: Vec<MenuItemView>,
}

/// The whole catalog as the recommendation service sees it
pub type CatalogView = Vec<RestaurantView>;

// =============================================================================
// CatalogService
// =============================================================================

/// In-memory catalog with id lookup
pub struct CatalogService {
    restaurants: Vec<Restaurant>,
    by_id: HashMap<String, usize>,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("restaurants", &self.restaurants.len())
            .finish()
    }
}

impl CatalogService {
    /// Build a catalog from a JSON array of restaurants
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let restaurants: Vec<Restaurant> = serde_json::from_str(json)?;
        let mut by_id = HashMap::with_capacity(restaurants.len());
        for (idx, restaurant) in restaurants.iter().enumerate() {
            if by_id.insert(restaurant.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateRestaurant(restaurant.id.clone()));
            }
        }
        Ok(Self { restaurants, by_id })
    }

    /// Load a catalog from a JSON file
    pub fn from_file(path: &str) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The demo catalog compiled into the binary
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// All restaurants, in display order
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Look up a restaurant by id
    pub fn restaurant(&self, id: &str) -> Option<&Restaurant> {
        self.by_id.get(id).map(|&idx| &self.restaurants[idx])
    }

    /// Look up a menu item within a restaurant
    pub fn menu_item(&self, restaurant_id: &str, item_id: &str) -> Option<&MenuItem> {
        self.restaurant(restaurant_id)?.menu_item(item_id)
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    /// Id/name/cuisine/menu projection for the recommendation prompt
    pub fn view(&self) -> CatalogView {
        self.restaurants
            .iter()
            .map(|r| RestaurantView {
                id: r.id.clone(),
                name: r.name.clone(),
                cuisine: r.cuisine.clone(),
                menu: r
                    .menu
                    .iter()
                    .map(|m| MenuItemView {
                        id: m.id.clone(),
                        name: m.name.clone(),
                        description: m.description.clone(),
                        price: m.price,
                    })
                    .collect(),
            })
            .collect()
    }
}
