//! External collaborators of the state manager
//!
//! - [`catalog_service`] - immutable restaurant/menu reference data
//! - [`recommendation`] - injected AI recommendation capability

pub mod catalog_service;
pub mod recommendation;

pub use catalog_service::{CatalogError, CatalogService, CatalogView};
pub use recommendation::{
    GeminiRecommender, RecommendError, Recommendation, Recommender, ResolvedRecommendation,
    resolve_recommendations,
};
