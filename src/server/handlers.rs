use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{info, warn};
use serde_json::json;
use std::collections::HashMap;

use crate::error::{ScrapeError, MISSING_URL_MESSAGE, RECIPE_NOT_FOUND_MESSAGE};
use crate::model::RecipeResult;
use crate::pipelines;
use crate::server::state::AppState;

/// Terminal outcomes of a scrape request.
#[derive(Debug)]
pub enum ScrapeResponse {
    /// No usable `url` parameter
    MissingUrl,
    /// Recipe node found and mapped
    Found(RecipeResult),
    /// Page fetched, but it carries no Recipe node
    NotFound(RecipeResult),
    /// Fetching or mapping failed
    Failed(RecipeResult),
}

impl ScrapeResponse {
    pub fn from_outcome(source_url: &str, outcome: Result<Option<RecipeResult>, ScrapeError>) -> Self {
        match outcome {
            Ok(Some(recipe)) => ScrapeResponse::Found(recipe),
            Ok(None) => ScrapeResponse::NotFound(RecipeResult::failed(source_url, RECIPE_NOT_FOUND_MESSAGE)),
            Err(ScrapeError::MissingUrl) => ScrapeResponse::MissingUrl,
            Err(e) => ScrapeResponse::Failed(RecipeResult::failed(source_url, e.to_string())),
        }
    }
}

impl IntoResponse for ScrapeResponse {
    fn into_response(self) -> Response {
        match self {
            ScrapeResponse::MissingUrl => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": MISSING_URL_MESSAGE }))).into_response()
            }
            ScrapeResponse::Found(recipe) | ScrapeResponse::NotFound(recipe) => {
                (StatusCode::OK, Json(recipe)).into_response()
            }
            ScrapeResponse::Failed(recipe) => (StatusCode::INTERNAL_SERVER_ERROR, Json(recipe)).into_response(),
        }
    }
}

/// `GET /api/scrape?url=...`
pub async fn scrape(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ScrapeResponse {
    let Some(url) = params.get("url").filter(|url| !url.trim().is_empty()) else {
        warn!("scrape: request without url parameter");
        return ScrapeResponse::MissingUrl;
    };

    let outcome = pipelines::url::process(url, state.fetcher.as_ref()).await;
    let response = ScrapeResponse::from_outcome(url, outcome);

    match &response {
        ScrapeResponse::Found(recipe) => info!("scrape: found '{}' at {}", recipe.title, url),
        ScrapeResponse::NotFound(_) => info!("scrape: no recipe at {}", url),
        ScrapeResponse::Failed(recipe) => {
            warn!("scrape: failed for {}: {}", url, recipe.error.as_deref().unwrap_or_default())
        }
        ScrapeResponse::MissingUrl => {}
    }
    response
}

/// `GET /api/hello`
pub async fn hello() -> Json<serde_json::Value> {
    Json(json!({ "message": "Hello from Podunk Pantry!" }))
}
