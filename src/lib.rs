pub mod config;
pub mod error;
pub mod model;
pub mod pipelines;
pub mod server;
pub mod url_to_recipe;

pub use error::{FetchError, ScrapeError};
pub use model::RecipeResult;

use url_to_recipe::fetchers::RequestFetcher;

/// Fetch a recipe page and extract its schema.org Recipe.
///
/// Uses the default 10 second fetch timeout.
///
/// # Returns
/// * `Ok(Some(recipe))` - The page has a Recipe node
/// * `Ok(None)` - No Recipe node in the page's JSON-LD
/// * `Err(ScrapeError)` - Fetching or mapping failed
pub async fn url_to_recipe(url: &str) -> Result<Option<RecipeResult>, ScrapeError> {
    if url.trim().is_empty() {
        return Err(ScrapeError::MissingUrl);
    }
    let fetcher = RequestFetcher::new(None)?;
    pipelines::url::process(url, &fetcher).await
}
