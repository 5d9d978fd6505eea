// ============================================================================
// ROUTER - Path <-> screen mapping and history navigation
// ============================================================================

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;

use crate::utils::{HOME_PATH, LOGIN_PATH, ROUTE_CHANGE_EVENT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Home,
}

impl Route {
    /// `None` for any path that is not one of the two screens.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(Self::Login);
        }
        if trimmed == HOME_PATH {
            return Some(Self::Home);
        }
        None
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Login => LOGIN_PATH,
            Self::Home => HOME_PATH,
        }
    }
}

/// Moves the app to another screen.
pub trait Navigator {
    fn navigate(&self, route: Route);
}

/// Navigator backed by `window.history`.
///
/// The re-render is requested through a window event fired on a later
/// microtask, never while the current render is still running.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl BrowserNavigator {
    pub fn new() -> Self {
        Self
    }
}

impl Navigator for BrowserNavigator {
    fn navigate(&self, route: Route) {
        let Some(win) = web_sys::window() else {
            log::error!("❌ [ROUTER] No window, cannot navigate to {}", route.path());
            return;
        };

        match win.history() {
            Ok(history) => {
                if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(route.path())) {
                    log::error!("❌ [ROUTER] pushState failed: {:?}", e);
                    return;
                }
            }
            Err(e) => {
                log::error!("❌ [ROUTER] No history object: {:?}", e);
                return;
            }
        }

        log::info!("🧭 [ROUTER] -> {}", route.path());

        spawn_local(async move {
            let Some(win) = web_sys::window() else { return };
            match web_sys::Event::new(ROUTE_CHANGE_EVENT) {
                Ok(event) => {
                    if win.dispatch_event(&event).is_err() {
                        log::warn!("⚠️ [ROUTER] Could not dispatch {}", ROUTE_CHANGE_EVENT);
                    }
                }
                Err(e) => log::error!("❌ [ROUTER] Could not create {}: {:?}", ROUTE_CHANGE_EVENT, e),
            }
        });
    }
}

/// Current location path, `"/"` when unavailable.
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_else(|| LOGIN_PATH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/", Some(Route::Login))]
    #[case("", Some(Route::Login))]
    #[case("/home", Some(Route::Home))]
    #[case("/home/", Some(Route::Home))]
    #[case("/homes", None)]
    #[case("/home/profile", None)]
    #[case("/admin", None)]
    fn paths_map_to_routes(#[case] path: &str, #[case] expected: Option<Route>) {
        assert_eq!(Route::from_path(path), expected);
    }

    #[test]
    fn route_paths_are_literal() {
        assert_eq!(Route::Login.path(), "/");
        assert_eq!(Route::Home.path(), "/home");
        assert_eq!(Route::from_path(Route::Home.path()), Some(Route::Home));
    }
}
