//! Request body serialization.

use serde::Serialize;

use wingskills_protocols::Diagnostics;

/// Render `body` as compact JSON.
///
/// Falls back to `{}` when the value cannot be serialized; the failure is
/// only reported through `diagnostics`.
pub fn serialize_body<T: Serialize + ?Sized>(body: &T, diagnostics: &Diagnostics) -> String {
    match serde_json::to_string(body) {
        Ok(text) => text,
        Err(e) => {
            diagnostics.info(format_args!("Cannot convert data into valid json: {}.", e));
            "{}".to_string()
        }
    }
}
