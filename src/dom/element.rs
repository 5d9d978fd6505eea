// ============================================================================
// ELEMENT HELPERS
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement, Window};

/// Global window
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Document of the global window
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Element by id
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Create a detached element
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// `<input type=...>` ready for `.value()` reads.
pub fn create_input(input_type: &str, placeholder: &str) -> Result<HtmlInputElement, JsValue> {
    let input = create_element("input")?.dyn_into::<HtmlInputElement>()?;
    input.set_type(input_type);
    input.set_placeholder(placeholder);
    Ok(input)
}

/// `<button type=...>` with a text label.
pub fn create_button(button_type: &str, label: &str) -> Result<HtmlButtonElement, JsValue> {
    let button = create_element("button")?.dyn_into::<HtmlButtonElement>()?;
    button.set_type(button_type);
    button.set_text_content(Some(label));
    Ok(button)
}

/// Set class name (replaces all classes)
pub fn set_class_name(element: &Element, class: &str) {
    element.set_class_name(class);
}

/// Set text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Set inner HTML
pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

/// Append a child
pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Set an attribute
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Remove an attribute
pub fn remove_attribute(element: &Element, name: &str) -> Result<(), JsValue> {
    element.remove_attribute(name)
}

/// Toggle the `hidden` attribute.
pub fn set_hidden(element: &Element, hidden: bool) -> Result<(), JsValue> {
    if hidden {
        set_attribute(element, "hidden", "")
    } else {
        remove_attribute(element, "hidden")
    }
}
