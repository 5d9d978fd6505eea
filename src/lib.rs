// ============================================================================
// GRADESYNC LOGIN - Browser login front end (pure Rust, MVVM)
// ============================================================================
// - views:      DOM rendering, no logic
// - viewmodels: login/logout flows over injectable ports
// - services:   token endpoint + credential store
// - state:      Rc<RefCell> state with notifications
// - router:     "/" and "/home"
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod errors;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;
use crate::dom::on_window_event;
use crate::utils::ROUTE_CHANGE_EVENT;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 [APP] Starting, token endpoint {}", CONFIG.token_url());

    let mut app = App::new()?;
    app.render()?;
    APP.with(|cell| *cell.borrow_mut() = Some(app));

    // Router pushes fire ROUTE_CHANGE_EVENT, back/forward fire popstate.
    on_window_event(ROUTE_CHANGE_EVENT, |_| rerender_app())?;
    on_window_event("popstate", |_| rerender_app())?;

    Ok(())
}

pub fn rerender_app() {
    APP.with(|cell| match cell.try_borrow_mut() {
        Ok(mut guard) => match guard.as_mut() {
            Some(app) => {
                if let Err(e) = app.render() {
                    log::error!("❌ [APP] Render failed: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [APP] Not initialised"),
        },
        Err(_) => log::warn!("⚠️ [APP] Render already in progress, skipped"),
    });
}
