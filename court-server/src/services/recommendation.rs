//! AI recommendation capability
//!
//! Customers can ask for a dish in natural language; the query plus a
//! serializable catalog view goes to a generative API which answers with
//! `{restaurantId, menuItemId, reason}` triples. The capability is an
//! injected trait so the core stays testable without a live network
//! dependency, and a failed or malformed call is reported as a
//! recoverable error that never touches cart/order state.

use crate::services::catalog_service::{CatalogService, CatalogView};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::models::MenuItem;
use std::time::Duration;
use thiserror::Error;

/// Upper bound on recommendations requested from the model
const MAX_RECOMMENDATIONS: usize = 3;

/// Recommendation request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

// ============================================================================
// Contract
// ============================================================================

/// One triple as returned by the recommendation service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub restaurant_id: String,
    pub menu_item_id: String,
    pub reason: String,
}

/// A triple resolved against the catalog, ready for the cart
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedRecommendation {
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub menu_item: MenuItem,
    pub reason: String,
}

/// Recommendation boundary errors (recoverable, user-reportable)
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("Recommendation request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Recommendation service returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Recommendation service returned no content")]
    EmptyResponse,

    #[error("Failed to parse recommendations: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Injected capability: (query, catalog view) -> recommendation triples
#[async_trait]
pub trait Recommender: Send + Sync {
    async fn recommend(
        &self,
        query: &str,
        catalog: &CatalogView,
    ) -> Result<Vec<Recommendation>, RecommendError>;
}

// ============================================================================
// Gemini implementation
// ============================================================================

/// Recommender backed by the Gemini `generateContent` API
pub struct GeminiRecommender {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiRecommender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiRecommender")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiRecommender {
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            http,
            api_key,
            model,
            base_url,
        }
    }

    fn build_prompt(query: &str, catalog: &CatalogView) -> String {
        let catalog_json = serde_json::to_string(catalog).unwrap_or_else(|_| "[]".to_string());
        format!(
            "You are a helpful food court assistant. A customer is asking for a food \
             recommendation. Their request is: \"{query}\". Based on their request, recommend \
             up to {MAX_RECOMMENDATIONS} menu items from the available restaurants. Here is \
             the list of available restaurants and their menus in JSON format: {catalog_json}. \
             For each recommendation, briefly explain why it is a good match. Respond with \
             ONLY a valid JSON array of objects with the keys \"restaurantId\", \
             \"menuItemId\" and \"reason\", where the ids reference the catalog above."
        )
    }
}

#[async_trait]
impl Recommender for GeminiRecommender {
    async fn recommend(
        &self,
        query: &str,
        catalog: &CatalogView,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Self::build_prompt(query, catalog),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        };

        let response = self.http.post(&url).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RecommendError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let payload: GenerateContentResponse = response.json().await?;
        let text = payload
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .filter(|t| !t.is_empty())
            .ok_or(RecommendError::EmptyResponse)?;

        let recommendations: Vec<Recommendation> = serde_json::from_str(extract_json(text))?;
        tracing::debug!(count = recommendations.len(), "Recommendations received");
        Ok(recommendations)
    }
}

/// Strip a Markdown code fence if the model wrapped its JSON in one
fn extract_json(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve triples against the catalog
///
/// Malformed or unresolvable entries are skipped silently; survivors are
/// eligible to be passed to `add_to_cart`.
pub fn resolve_recommendations(
    recommendations: Vec<Recommendation>,
    catalog: &CatalogService,
) -> Vec<ResolvedRecommendation> {
    recommendations
        .into_iter()
        .filter_map(|rec| {
            let Some(restaurant) = catalog.restaurant(&rec.restaurant_id) else {
                tracing::debug!(restaurant_id = %rec.restaurant_id, "Skipping recommendation for unknown restaurant");
                return None;
            };
            let Some(menu_item) = restaurant.menu_item(&rec.menu_item_id) else {
                tracing::debug!(
                    restaurant_id = %rec.restaurant_id,
                    menu_item_id = %rec.menu_item_id,
                    "Skipping recommendation for unknown menu item"
                );
                return None;
            };
            Some(ResolvedRecommendation {
                restaurant_id: restaurant.id.clone(),
                restaurant_name: restaurant.name.clone(),
                menu_item: menu_item.clone(),
                reason: rec.reason,
            })
        })
        .collect()
}
