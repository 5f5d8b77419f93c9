use log::debug;
use scraper::{Html, Selector};
use serde_json::Value;
use std::sync::OnceLock;

const JSON_LD_MIME: &str = "application/ld+json";

fn script_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("script[type]").unwrap())
}

/// Lazily yields every `<script type="application/ld+json">` block of the
/// document that parses as JSON, in document order.
///
/// The `type` attribute is matched case-insensitively. Blocks that are not
/// valid JSON are skipped. Nothing is read past the block a caller stops at.
pub fn json_ld_blocks(document: &Html) -> impl Iterator<Item = Value> + '_ {
    document
        .select(script_selector())
        .filter(|script| {
            script
                .value()
                .attr("type")
                .is_some_and(|t| t.trim().eq_ignore_ascii_case(JSON_LD_MIME))
        })
        .enumerate()
        .filter_map(|(index, script)| {
            let raw_json: String = script.text().collect();
            match serde_json::from_str::<Value>(&raw_json) {
                Ok(value) => Some(value),
                Err(e) => {
                    debug!("JSON-LD locator: skipping block {}: {}", index, e);
                    None
                }
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn blocks(html: &str) -> Vec<Value> {
        let document = Html::parse_document(html);
        json_ld_blocks(&document).collect()
    }

    #[test]
    fn test_finds_blocks_in_document_order() {
        let html = r#"
            <html><head>
            <script type="application/ld+json">{"@type": "WebSite"}</script>
            </head><body>
            <script type="application/ld+json">
                {
                    "@type": "Recipe",
                    "name": "Soup"
                }
            </script>
            </body></html>
        "#;

        assert_eq!(
            blocks(html),
            vec![
                json!({"@type": "WebSite"}),
                json!({"@type": "Recipe", "name": "Soup"})
            ]
        );
    }

    #[test]
    fn test_type_attribute_is_case_insensitive() {
        let html = r#"<script type="Application/LD+JSON">{"a": 1}</script>"#;
        assert_eq!(blocks(html), vec![json!({"a": 1})]);
    }

    #[test]
    fn test_invalid_json_block_is_skipped() {
        let html = r#"
            <script type="application/ld+json">{ not json </script>
            <script type="application/ld+json">[{"@type": "Recipe"}]</script>
        "#;
        assert_eq!(blocks(html), vec![json!([{"@type": "Recipe"}])]);
    }

    #[test]
    fn test_blocks_are_yielded_on_demand() {
        let document = Html::parse_document(
            r#"
            <script type="application/ld+json">{"@type": "Recipe", "name": "First"}</script>
            <script type="application/ld+json">{"@type": "Recipe", "name": "Second"}</script>
            <script type="application/ld+json">{"@type": "Recipe", "name": "Third"}</script>
            "#,
        );

        let mut blocks = json_ld_blocks(&document);
        assert_eq!(blocks.next().unwrap()["name"], "First");
        assert_eq!(blocks.next().unwrap()["name"], "Second");
        assert_eq!(blocks.count(), 1);
    }

    #[test]
    fn test_other_scripts_are_ignored() {
        let html = r#"
            <script>var x = {"@type": "Recipe"};</script>
            <script type="application/json">{"@type": "Recipe"}</script>
        "#;
        assert!(blocks(html).is_empty());
    }
}
