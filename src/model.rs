use serde::Serialize;

/// Normalized view of a schema.org Recipe, as returned by the scrape endpoint.
///
/// `servings`, `total_time_minutes` and `image_url` always serialize (as `null`
/// when unknown); `error` only appears when something went wrong.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecipeResult {
    pub source_url: String,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub servings: Option<String>,
    pub total_time_minutes: Option<u64>,
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RecipeResult {
    /// An otherwise empty result that only carries the source URL and an error message.
    pub fn failed(source_url: &str, error: impl Into<String>) -> Self {
        Self {
            source_url: source_url.to_string(),
            error: Some(error.into()),
            ..Self::default()
        }
    }
}
