use brain_web::layout::landing_page;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod navigation;
mod pages;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}

/// JSON dump of the landing page tree, for browser automation harnesses.
#[wasm_bindgen(js_name = landingLayout)]
pub fn landing_layout() -> Result<String, JsError> {
    Ok(landing_page().to_json()?)
}
