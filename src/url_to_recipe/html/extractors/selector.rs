use serde_json::{Map, Value};
use std::collections::HashSet;

pub type JsonObject = Map<String, Value>;

/// Objects inside one JSON-LD value that may describe a Recipe, in the order
/// they are inspected: the object itself, then its `@graph` objects; or, for a
/// top-level list, each object element.
pub fn candidates(value: &Value) -> Box<dyn Iterator<Item = &JsonObject> + '_> {
    match value {
        Value::Object(obj) => {
            let graph = obj
                .get("@graph")
                .and_then(Value::as_array)
                .into_iter()
                .flatten()
                .filter_map(Value::as_object);
            Box::new(std::iter::once(obj).chain(graph))
        }
        Value::Array(items) => Box::new(items.iter().filter_map(Value::as_object)),
        _ => Box::new(std::iter::empty()),
    }
}

/// Lowercased `@type` names of a node; accepts a single string or a list of strings.
pub fn node_types(node: &JsonObject) -> HashSet<String> {
    match node.get("@type") {
        Some(Value::String(t)) => HashSet::from([t.to_lowercase()]),
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_lowercase)
            .collect(),
        _ => HashSet::new(),
    }
}

pub fn is_recipe(node: &JsonObject) -> bool {
    node_types(node).contains("recipe")
}

/// First Recipe node across all blocks, in block order then candidate order.
pub fn find_recipe<I>(blocks: I) -> Option<JsonObject>
where
    I: IntoIterator<Item = Value>,
{
    for block in blocks {
        if let Some(node) = candidates(&block).find(|node| is_recipe(node)) {
            return Some(node.clone());
        }
    }
    None
}
