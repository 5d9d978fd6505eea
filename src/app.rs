// ============================================================================
// APP - Root element plus full re-render on every route change
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::router::current_path;
use crate::utils::APP_ROOT_ID;
use crate::views::render_route;

pub struct App {
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(APP_ROOT_ID)
            .ok_or_else(|| JsValue::from_str(&format!("No #{} element found", APP_ROOT_ID)))?;
        Ok(Self { root })
    }

    /// Drop the current screen (and with it every listener and form value)
    /// and draw the one matching the location.
    pub fn render(&mut self) -> Result<(), JsValue> {
        let path = current_path();
        log::debug!("🎬 [APP] Rendering {}", path);

        set_inner_html(&self.root, "");
        if let Some(view) = render_route(&path)? {
            append_child(&self.root, &view)?;
        }
        Ok(())
    }
}
