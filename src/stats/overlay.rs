use wasm_bindgen::prelude::*;
use web_sys::Element;
use super::frame_stats::FrameStats;

/// Text overlay showing the frame rate in a page element
pub struct StatsOverlay {
    element: Element,
}

impl StatsOverlay {
    /// Bind to the element with `id` in the current document
    pub fn attach(id: &str) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("No document available")?;
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("No element with id '{}'", id)))?;
        Ok(Self { element })
    }

    pub fn show(&self, stats: &FrameStats) {
        self.element.set_text_content(Some(&stats.summary()));
    }
}
