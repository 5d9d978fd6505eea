use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::utils::LOGIN_PATH;

pub fn render_not_found(path: &str) -> Result<Element, JsValue> {
    let back = ElementBuilder::new("a")?
        .attr("href", LOGIN_PATH)?
        .text("Back to login")
        .build();

    Ok(ElementBuilder::new("div")?
        .class("wrapper not-found")
        .child(&ElementBuilder::new("h1")?.text("Page not found").build())?
        .child(&ElementBuilder::new("p")?.text(&format!("Nothing lives at {}", path)).build())?
        .child(&back)?
        .build())
}
