//! Item-name keys for recipe responses.
//!
//! Recipe entries reference items only by `appId`. The LLM cannot read
//! those, so recipe tools append a key mapping each `appId` to its name.

use futures::future::join_all;
use serde_json::{Map, Value};

use crate::client::NmsClient;

/// Every `appId` referenced by a list of recipes, first occurrence first.
///
/// Each entry contributes its own `appId`, those of its `inputs` and the one
/// of its `output`. Missing ids are skipped.
pub fn extract_app_ids(recipes: &Value) -> Vec<String> {
    let Some(entries) = recipes.as_array() else {
        return Vec::new();
    };

    let mut ids: Vec<String> = Vec::new();
    let mut push = |value: Option<&Value>| {
        let id = match value {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => return,
        };
        if !ids.contains(&id) {
            ids.push(id);
        }
    };

    for entry in entries {
        push(entry.get("appId"));
        if let Some(inputs) = entry.get("inputs").and_then(Value::as_array) {
            for input in inputs {
                push(input.get("appId"));
            }
        }
        push(entry.get("output").and_then(|output| output.get("appId")));
    }

    ids
}

/// Render `recipes` followed by the name key for the items they use.
///
/// Names are fetched concurrently.
pub async fn with_name_key(client: &NmsClient, recipes: &Value) -> String {
    let ids = extract_app_ids(recipes);
    let names = join_all(ids.iter().map(|id| client.item_name(id))).await;

    let key: Map<String, Value> = ids
        .into_iter()
        .zip(names)
        .map(|(id, name)| (id, Value::String(name)))
        .collect();

    format!(
        "{}; key for item names used in above data: {}",
        recipes,
        Value::Object(key)
    )
}
