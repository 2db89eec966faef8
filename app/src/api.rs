//! Tauri API client module
//!
//! Type-safe wrappers around Tauri invoke() calls used by the table filters.

use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::types::{GroupSummary, TableConfig};
use crate::utils::js_set;

// ─────────────────────────────────────────────────────────────────────────────
// Helper Functions
// ─────────────────────────────────────────────────────────────────────────────

/// Build a JsValue object with a single key-value pair
fn build_args<T: Serialize + ?Sized>(key: &str, value: &T) -> JsValue {
    let args = serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL);
    let obj = js_sys::Object::new();
    js_set(&obj, key, &args);
    obj.into()
}

/// Deserialize a JsValue into a type, returning None on failure
fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Option<T> {
    serde_wasm_bindgen::from_value(value).ok()
}

/// Invoke a Tauri command, swallowing errors.
/// Returns JsValue::NULL on failure; use for reads where a miss is harmless.
async fn invoke(cmd: &str, args: JsValue) -> JsValue {
    try_invoke(cmd, args).await.unwrap_or(JsValue::NULL)
}

/// Invoke a Tauri command, surfacing the rejection message on failure.
async fn try_invoke(cmd: &str, args: JsValue) -> Result<JsValue, String> {
    use js_sys::Promise;
    use wasm_bindgen_futures::JsFuture;

    let window = web_sys::window().ok_or("No window")?;
    let tauri = js_sys::Reflect::get(&window, &JsValue::from_str("__TAURI__"))
        .map_err(|_| "No __TAURI__")?;
    let core = js_sys::Reflect::get(&tauri, &JsValue::from_str("core")).map_err(|_| "No core")?;
    let invoke_fn =
        js_sys::Reflect::get(&core, &JsValue::from_str("invoke")).map_err(|_| "No invoke")?;
    let invoke_fn: js_sys::Function = invoke_fn.dyn_into().map_err(|_| "invoke not a function")?;

    let promise = invoke_fn
        .call2(&JsValue::NULL, &JsValue::from_str(cmd), &args)
        .map_err(|e| format!("invoke call failed: {:?}", e))?;
    let promise: Promise = promise.dyn_into().map_err(|_| "not a promise")?;

    JsFuture::from(promise)
        .await
        .map_err(|e| e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Config Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Get the table scope (organisation, project) from the host
pub async fn get_config() -> Option<TableConfig> {
    let result = invoke("get_config", JsValue::NULL).await;
    from_js(result)
}

// ─────────────────────────────────────────────────────────────────────────────
// Group Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Get the group summaries of an organisation
pub async fn get_group_summaries(organisation_id: i64) -> Result<Vec<GroupSummary>, String> {
    let result = try_invoke(
        "get_group_summaries",
        build_args("organisationId", &organisation_id),
    )
    .await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
