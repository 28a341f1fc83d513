use wasm_bindgen::prelude::*;

use stationmap_core::{MapRenderer, Plot, RenderConfig};

/// Called automatically when the WASM module is instantiated.
/// Sets up panic hook so Rust panics appear as console.error in the browser.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn js_err(e: impl ToString) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn render(metrics_csv: &str, states_geojson: &str, config_json: Option<String>) -> anyhow::Result<Plot> {
    let config = match config_json {
        Some(json) => RenderConfig::from_json_str(&json)?,
        None => RenderConfig::default(),
    };
    MapRenderer::new(config).render_bytes(metrics_csv.as_bytes(), states_geojson.as_bytes())
}

/// Render the map and legend from dataset text the page has already fetched.
/// Returns both SVG surfaces, map first, ready to append to `div#plot`.
#[wasm_bindgen(js_name = "renderPlot")]
pub fn render_plot(metrics_csv: &str, states_geojson: &str, config_json: Option<String>) -> Result<String, JsValue> {
    let plot = render(metrics_csv, states_geojson, config_json).map_err(|e| js_err(format!("{e:#}")))?;
    Ok(format!("{}{}", plot.map_svg, plot.legend_svg))
}

/// Join report and value domain for the same inputs, as a plain JS object.
#[wasm_bindgen(js_name = "joinReport")]
pub fn join_report(metrics_csv: &str, states_geojson: &str, config_json: Option<String>) -> Result<JsValue, JsValue> {
    let plot = render(metrics_csv, states_geojson, config_json).map_err(|e| js_err(format!("{e:#}")))?;
    serde_wasm_bindgen::to_value(&(plot.domain, plot.report)).map_err(|e| e.into())
}
