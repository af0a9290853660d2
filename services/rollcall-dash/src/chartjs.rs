// services/rollcall-dash/src/chartjs.rs
//
// Roll Call Dashboard - Chart.js bindings
// Chart.js is loaded by index.html; each chart binds to its slot's canvas.
//

use dashkit::{ChartBackend, ChartHandle, ChartSlot, ChartSpec, DashError};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use crate::web::js_error;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Chart)]
    type JsChart;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<JsChart, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &JsChart);
}

pub struct ChartJsHandle(JsChart);

impl ChartHandle for ChartJsHandle {
    fn destroy(self) {
        self.0.destroy();
    }
}

pub struct ChartJs {
    document: web_sys::Document,
}

impl ChartJs {
    pub fn new() -> Self {
        Self {
            document: leptos::document(),
        }
    }

    fn canvas(&self, slot: ChartSlot) -> Result<HtmlCanvasElement, DashError> {
        self.document
            .get_element_by_id(slot.canvas_id())
            .ok_or_else(|| DashError::MissingTarget(slot.canvas_id().to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| DashError::Chart(format!("#{} is not a canvas", slot.canvas_id())))
    }
}

impl Default for ChartJs {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartBackend for ChartJs {
    type Handle = ChartJsHandle;

    fn create(&mut self, slot: ChartSlot, spec: &ChartSpec) -> Result<ChartJsHandle, DashError> {
        let canvas = self.canvas(slot)?;
        // json_compatible: objects become plain JS objects, not Maps
        let config = spec
            .to_chartjs_config()
            .serialize(&Serializer::json_compatible())
            .map_err(|e| DashError::Chart(e.to_string()))?;
        let chart = JsChart::new(&canvas, &config)
            .map_err(|e| DashError::Chart(format!("{}: {}", slot.canvas_id(), js_error(&e))))?;
        Ok(ChartJsHandle(chart))
    }
}
