use wasm_bindgen::JsValue;

fn main() {
    if let Err(err) = checkbox_grid::start() {
        // The logger may not be up yet, so report straight to the console.
        web_sys::console::error_1(&JsValue::from_str(&format!("checkbox-grid: {err}")));
    }
}
