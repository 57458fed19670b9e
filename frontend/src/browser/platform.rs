//! Platform status queries and the install-offer action.

use common::install::InstallChoice;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Event;

/// `navigator.onLine`; assumes online when there is no window.
pub fn is_online() -> bool {
    web_sys::window()
        .map(|window| window.navigator().on_line())
        .unwrap_or(true)
}

/// Running as an installed app: standalone display mode, or iOS home-screen.
pub fn is_standalone() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let display_mode = window
        .match_media("(display-mode: standalone)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false);
    let ios_standalone = Reflect::get(&window.navigator(), &JsValue::from_str("standalone"))
        .ok()
        .and_then(|value| value.as_bool())
        .unwrap_or(false);
    display_mode || ios_standalone
}

/// Calls `prompt()` on a deferred `beforeinstallprompt` event and waits for
/// the user's answer.
pub async fn present_install_offer(event: Event) -> Result<InstallChoice, JsValue> {
    let prompt: Function = Reflect::get(&event, &JsValue::from_str("prompt"))?.dyn_into()?;
    prompt.call0(&event)?;

    let user_choice: Promise = Reflect::get(&event, &JsValue::from_str("userChoice"))?.dyn_into()?;
    let result = JsFuture::from(user_choice).await?;
    let outcome = Reflect::get(&result, &JsValue::from_str("outcome"))?
        .as_string()
        .unwrap_or_default();
    Ok(InstallChoice::from_outcome(&outcome))
}
