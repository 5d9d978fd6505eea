pub mod login;
pub mod home;
pub mod not_found;

pub use login::render_login;
pub use home::render_home;
pub use not_found::render_not_found;

use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::router::Route;

/// Screen for `path`, or `None` when the screen redirected instead.
pub fn render_route(path: &str) -> Result<Option<Element>, JsValue> {
    match Route::from_path(path) {
        Some(Route::Login) => render_login(),
        Some(Route::Home) => render_home(),
        None => {
            log::warn!("⚠️ [ROUTER] Unknown path {}", path);
            render_not_found(path).map(Some)
        }
    }
}
