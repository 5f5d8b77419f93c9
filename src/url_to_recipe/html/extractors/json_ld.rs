use log::debug;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::selector::{find_recipe, JsonObject};
use super::ParsingContext;
use crate::model::RecipeResult;
use crate::url_to_recipe::html::locator::json_ld_blocks;

pub struct JsonLdExtractor;

impl JsonLdExtractor {
    /// Finds the first schema.org Recipe node in the page's JSON-LD and maps it.
    ///
    /// Returns `Ok(None)` when the page carries no Recipe node at all.
    pub fn parse(&self, context: &ParsingContext) -> Result<Option<RecipeResult>, serde_json::Error> {
        debug!("JsonLdExtractor: Starting parse for URL: {}", context.url);

        let Some(node) = find_recipe(json_ld_blocks(&context.document)) else {
            debug!("JsonLdExtractor: No Recipe node in any JSON-LD block");
            return Ok(None);
        };

        debug!("JsonLdExtractor: Found recipe node: {:#?}", node);
        map_recipe(node, &context.url).map(Some)
    }
}

/// Maps a Recipe node onto the normalized result.
///
/// Every field accepts any JSON shape through its catch-all variant, so for an
/// object node this never fails in practice; the error is serde's own.
pub fn map_recipe(node: JsonObject, source_url: &str) -> Result<RecipeResult, serde_json::Error> {
    let recipe: JsonLdRecipe = serde_json::from_value(Value::Object(node))?;
    Ok(recipe.into_result(source_url))
}

#[derive(Debug, Deserialize)]
struct JsonLdRecipe {
    name: Option<Value>,
    description: Option<Value>,
    image: Option<ImageField>,
    // `null` is a present value here, unlike for the other fields
    #[serde(rename = "recipeIngredient", default, deserialize_with = "present")]
    recipe_ingredient: Option<IngredientsField>,
    #[serde(rename = "recipeInstructions")]
    recipe_instructions: Option<InstructionsField>,
    #[serde(rename = "recipeYield")]
    recipe_yield: Option<YieldField>,
    #[serde(rename = "totalTime")]
    total_time: Option<DurationField>,
}

/// Wraps any present value, `null` included, in `Some`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

// Objects are taken as maps rather than structs: a derived struct would also
// accept a JSON array positionally.

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ImageField {
    Url(String),
    List(Vec<ImageEntry>),
    Object(JsonObject),
    Unrecognized(IgnoredAny),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ImageEntry {
    Url(String),
    Object(JsonObject),
    Unrecognized(IgnoredAny),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IngredientsField {
    List(Vec<Value>),
    Single(Value),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InstructionsField {
    Steps(Vec<InstructionStep>),
    Text(String),
    Unrecognized(IgnoredAny),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InstructionStep {
    Object(JsonObject),
    Other(Value),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum YieldField {
    List(Vec<Value>),
    Single(Value),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DurationField {
    Iso(String),
    Unrecognized(IgnoredAny),
}

impl JsonLdRecipe {
    fn into_result(self, source_url: &str) -> RecipeResult {
        RecipeResult {
            source_url: source_url.to_string(),
            title: self.name.as_ref().map(text_of).unwrap_or_default(),
            description: self.description.as_ref().map(text_of).unwrap_or_default(),
            ingredients: self
                .recipe_ingredient
                .map(IngredientsField::into_lines)
                .unwrap_or_default(),
            instructions: self
                .recipe_instructions
                .map(InstructionsField::into_lines)
                .unwrap_or_default(),
            servings: self.recipe_yield.and_then(YieldField::into_servings),
            total_time_minutes: self.total_time.and_then(DurationField::minutes),
            image_url: self.image.and_then(ImageField::into_url),
            error: None,
        }
    }
}

impl IngredientsField {
    fn into_lines(self) -> Vec<String> {
        match self {
            IngredientsField::List(items) => items.iter().map(text_of).collect(),
            IngredientsField::Single(value) => vec![text_of(&value)],
        }
    }
}

impl InstructionsField {
    fn into_lines(self) -> Vec<String> {
        match self {
            InstructionsField::Steps(steps) => steps.into_iter().map(InstructionStep::into_text).collect(),
            InstructionsField::Text(text) => vec![text],
            InstructionsField::Unrecognized(_) => Vec::new(),
        }
    }
}

impl InstructionStep {
    fn into_text(self) -> String {
        match self {
            InstructionStep::Object(step) => {
                if let Some(text) = step.get("text") {
                    return text_of(text);
                }
                text_of(&Value::Object(step))
            }
            InstructionStep::Other(value) => text_of(&value),
        }
    }
}

impl YieldField {
    fn into_servings(self) -> Option<String> {
        match self {
            YieldField::List(items) => items.first().and_then(optional_text),
            YieldField::Single(value) => optional_text(&value),
        }
    }
}

impl DurationField {
    fn minutes(self) -> Option<u64> {
        match self {
            DurationField::Iso(duration) => minutes_component(&duration),
            DurationField::Unrecognized(_) => None,
        }
    }
}

impl ImageField {
    fn into_url(self) -> Option<String> {
        match self {
            ImageField::Url(url) => Some(url),
            ImageField::List(entries) => entries.into_iter().next().and_then(ImageEntry::into_url),
            ImageField::Object(obj) => url_of_image_object(&obj),
            ImageField::Unrecognized(_) => None,
        }
    }
}

impl ImageEntry {
    fn into_url(self) -> Option<String> {
        match self {
            ImageEntry::Url(url) => Some(url),
            ImageEntry::Object(obj) => url_of_image_object(&obj),
            ImageEntry::Unrecognized(_) => None,
        }
    }
}

/// `url` of an ImageObject, falling back to its `@id`.
fn url_of_image_object(obj: &JsonObject) -> Option<String> {
    ["url", "@id"]
        .iter()
        .filter_map(|key| obj.get(*key).and_then(Value::as_str))
        .find(|url| !url.is_empty())
        .map(str::to_string)
}

/// Strings as-is; every other JSON value as its compact JSON text.
fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn optional_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        other => Some(text_of(other)),
    }
}

/// Minutes designator of an ISO-8601 `PT…` duration.
///
/// Only the first number directly followed by `M` is read, so `PT1H30M`
/// gives 30 and `PT1H` gives `None`. Hours and seconds are not converted.
fn minutes_component(duration: &str) -> Option<u64> {
    if !duration.starts_with("PT") {
        return None;
    }

    let mut digits_start = None;
    for (i, c) in duration.char_indices() {
        if c.is_ascii_digit() {
            digits_start.get_or_insert(i);
        } else if let Some(start) = digits_start.take() {
            if c == 'M' {
                return duration[start..i].parse().ok();
            }
        }
    }
    None
}
