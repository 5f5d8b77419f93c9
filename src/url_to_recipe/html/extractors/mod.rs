use scraper::Html;

mod json_ld;
mod selector;

pub use json_ld::{map_recipe, JsonLdExtractor};
pub use selector::{candidates, find_recipe, is_recipe, node_types, JsonObject};

pub struct ParsingContext {
    pub url: String,
    pub document: Html,
}
