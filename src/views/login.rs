// ============================================================================
// LOGIN VIEW
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlButtonElement, HtmlInputElement};

use crate::config::CONFIG;
use crate::dom::{append_child, create_button, create_input, on_input, on_submit, set_hidden, set_text_content, ElementBuilder};
use crate::state::{LoginState, ReactiveState};
use crate::viewmodels::{BrowserLoginViewModel, MountOutcome};

/// Render the login screen. `None` when a stored credential sent the user
/// straight to `/home` and nothing should be shown.
pub fn render_login() -> Result<Option<Element>, JsValue> {
    let vm = Rc::new(BrowserLoginViewModel::browser(&CONFIG));
    if vm.on_mount() == MountOutcome::Redirected {
        return Ok(None);
    }

    log::debug!("🎬 [LOGIN] Rendering form");

    // Fresh per render: input does not survive navigating away.
    let state = ReactiveState::new(LoginState::new());

    let heading = ElementBuilder::new("h1")?.text("Login").build();

    let username = create_input("text", "Username")?;
    username.set_name("username");
    username.set_autocomplete("username");
    let password = create_input("password", "Password")?;
    password.set_name("password");
    password.set_autocomplete("current-password");

    bind_input(&username, &state, |s: &mut LoginState, v: String| s.set_username(v))?;
    bind_input(&password, &state, |s: &mut LoginState, v: String| s.set_password(v))?;

    let username_box = ElementBuilder::new("div")?.class("input-box").child(&username)?.build();
    let password_box = ElementBuilder::new("div")?.class("input-box").child(&password)?.build();
    let inputs = ElementBuilder::new("div")?
        .class("input-container")
        .child(&username_box)?
        .child(&password_box)?
        .build();

    let error = ElementBuilder::new("p")?
        .class("login-error")
        .attr("style", "color: red")?
        .attr("role", "alert")?
        .build();

    let remember_forget = render_remember_forget()?;

    let submit = create_button("submit", "Login")?;

    sync_form(&state, &error, &submit)?;
    {
        let reader = state.clone();
        let error = error.clone();
        let submit = submit.clone();
        state.subscribe(move || {
            if let Err(e) = sync_form(&reader, &error, &submit) {
                log::error!("❌ [LOGIN] Could not update form: {:?}", e);
            }
        });
    }

    let form = ElementBuilder::new("form")?
        .attr("novalidate", "")?
        .child(&heading)?
        .child(&inputs)?
        .child(&error)?
        .child(&remember_forget)?
        .child(&submit)?
        .build();

    {
        let state = state.clone();
        let vm = vm.clone();
        on_submit(&form, move |e| {
            e.prevent_default();
            let state = state.clone();
            let vm = vm.clone();
            spawn_local(async move {
                if let Err(err) = vm.submit(&state).await {
                    log::debug!("[LOGIN] Attempt ended: {}", err.reason());
                }
            });
        })?;
    }

    let wrapper = ElementBuilder::new("div")?.class("wrapper").child(&form)?.build();
    Ok(Some(wrapper))
}

fn bind_input(
    input: &HtmlInputElement,
    state: &ReactiveState<LoginState>,
    setter: fn(&mut LoginState, String),
) -> Result<(), JsValue> {
    let state = state.clone();
    let source = input.clone();
    on_input(input, move |_| {
        let value = source.value();
        state.update(|s| setter(s, value));
    })
}

/// Error text, button label and disabled flag follow the login phase.
fn sync_form(state: &ReactiveState<LoginState>, error: &Element, submit: &HtmlButtonElement) -> Result<(), JsValue> {
    let (message, loading, label) = state.with(|s| (s.error_message(), s.is_loading(), s.button_label()));

    match message {
        Some(text) => {
            set_text_content(error, text);
            set_hidden(error, false)?;
        }
        None => {
            set_text_content(error, "");
            set_hidden(error, true)?;
        }
    }

    submit.set_disabled(loading);
    submit.set_text_content(Some(label));
    Ok(())
}

fn render_remember_forget() -> Result<Element, JsValue> {
    let checkbox = create_input("checkbox", "")?;
    let label = ElementBuilder::new("label")?.child(&checkbox)?.build();
    append_child(&label, &ElementBuilder::new("span")?.text("Remember me").build())?;

    let forgot = ElementBuilder::new("a")?.attr("href", "#")?.text("Forgot password?").build();

    Ok(ElementBuilder::new("div")?
        .class("remember-forget")
        .child(&label)?
        .child(&forgot)?
        .build())
}
