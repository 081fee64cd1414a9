//! Weather chat widget — WASM entry point.
//!
//! This crate is the composition root (DI wiring layer).
//! It assembles the fetch backend and hands it to the egui UI.

mod app;

pub use app::WeatherBotApp;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// WASM entry point — called from index.html
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn main() {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Weather chat widget starting...");

    let web_options = eframe::WebOptions::default();

    // Get the canvas element by ID
    let document = web_sys::window()
        .expect("No window")
        .document()
        .expect("No document");
    let canvas = document
        .get_element_by_id("weatherbot_canvas")
        .expect("No canvas element with id 'weatherbot_canvas'")
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .expect("Element is not a canvas");

    wasm_bindgen_futures::spawn_local(async move {
        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(app::WeatherBotApp::new(cc)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}
