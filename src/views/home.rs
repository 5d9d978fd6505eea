// ============================================================================
// HOME VIEW - Protected screen
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{append_child, create_button, on_click, set_hidden, set_text_content, ElementBuilder};
use crate::viewmodels::{mask_token, BrowserHomeViewModel};

/// `None` when there is no stored credential and the router was sent back
/// to the login screen.
pub fn render_home() -> Result<Option<Element>, JsValue> {
    let vm = BrowserHomeViewModel::browser(&CONFIG);
    let Some(credential) = vm.on_mount() else {
        return Ok(None);
    };

    let container = ElementBuilder::new("div")?
        .class("wrapper home")
        .child(&ElementBuilder::new("h1")?.text("Home").build())?
        .child(&ElementBuilder::new("p")?.text("You are logged in.").build())?
        .build();

    if let Some(access) = credential.access_token() {
        let token = ElementBuilder::new("p")?
            .class("token-preview")
            .text(&format!("Access token: {}", mask_token(&access)))
            .build();
        append_child(&container, &token)?;
    }

    let error = ElementBuilder::new("p")?
        .class("logout-error")
        .attr("style", "color: red")?
        .build();
    set_hidden(&error, true)?;

    let logout = create_button("button", "Logout")?;
    {
        let error = error.clone();
        on_click(&logout, move |_| {
            if let Err(e) = vm.logout() {
                log::error!("❌ [HOME] Logout failed: {}", e);
                set_text_content(&error, "Logout failed. Please try again.");
                if let Err(e) = set_hidden(&error, false) {
                    log::error!("❌ [HOME] Could not show error: {:?}", e);
                }
            }
        })?;
    }

    append_child(&container, &error)?;
    append_child(&container, &logout)?;
    Ok(Some(container))
}
