use crate::error::ScrapeError;
use crate::model::RecipeResult;
use crate::url_to_recipe::fetchers::Fetcher;
use crate::url_to_recipe::html::extractors::{JsonLdExtractor, ParsingContext};
use scraper::Html;

/// Process a URL to extract a normalized recipe
///
/// This pipeline:
/// 1. Fetches HTML with the given fetcher
/// 2. Locates the page's JSON-LD blocks
/// 3. Maps the first schema.org Recipe node found
///
/// # Returns
/// * `Ok(Some(recipe))` - A Recipe node was found and mapped
/// * `Ok(None)` - The page has no Recipe node
/// * `Err(...)` - Fetching or mapping failed
pub async fn process(url: &str, fetcher: &dyn Fetcher) -> Result<Option<RecipeResult>, ScrapeError> {
    let html_content = fetcher.fetch(url).await?;
    extract(url, &html_content)
}

/// Extraction half of the pipeline, for HTML that is already in hand
pub fn extract(url: &str, html_content: &str) -> Result<Option<RecipeResult>, ScrapeError> {
    let context = ParsingContext {
        url: url.to_string(),
        document: Html::parse_document(html_content),
    };

    Ok(JsonLdExtractor.parse(&context)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use async_trait::async_trait;
    use std::time::Duration;

    struct StaticPage(&'static str);

    #[async_trait]
    impl Fetcher for StaticPage {
        async fn fetch(&self, _url: &str) -> Result<String, FetchError> {
            Ok(self.0.to_string())
        }
    }

    struct TimingOut;

    #[async_trait]
    impl Fetcher for TimingOut {
        async fn fetch(&self, url: &str) -> Result<String, FetchError> {
            Err(FetchError::Timeout {
                url: url.to_string(),
                timeout: Duration::from_secs(10),
            })
        }
    }

    const PAGE: &str = r#"<html><head>
        <script type="application/ld+json">{"@type":"Recipe","name":"Toast","recipeIngredient":["bread"]}</script>
        </head></html>"#;

    #[tokio::test]
    async fn test_process_found() {
        let recipe = process("http://example.com/toast", &StaticPage(PAGE))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(recipe.title, "Toast");
        assert_eq!(recipe.ingredients, vec!["bread"]);
    }

    #[tokio::test]
    async fn test_process_not_found() {
        let result = process("http://example.com", &StaticPage("<html></html>"))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_process_propagates_fetch_error() {
        let err = process("http://slow.example", &TimingOut).await.unwrap_err();
        assert!(matches!(err, ScrapeError::Fetch(FetchError::Timeout { .. })));
    }

    #[test]
    fn test_extract_is_idempotent() {
        let first = extract("http://example.com/toast", PAGE).unwrap();
        let second = extract("http://example.com/toast", PAGE).unwrap();
        assert_eq!(first, second);
    }
}
