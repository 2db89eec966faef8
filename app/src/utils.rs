//! Small JS interop helpers

use wasm_bindgen::JsValue;

/// Set `key` on a JS object, ignoring failures (the object is always a plain literal).
pub fn js_set(obj: &js_sys::Object, key: &str, value: &JsValue) {
    let _ = js_sys::Reflect::set(obj, &JsValue::from_str(key), value);
}
