use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Event;

/// A `window` event listener that is removed when dropped.
///
/// Components keep these in their state so subscriptions last exactly as long
/// as the component.
pub struct WindowListener {
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new(event: &'static str, callback: impl FnMut(Event) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        if let Err(err) =
            window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::warn!("could not listen for `{event}`: {err:?}");
            return None;
        }
        Some(Self { event, closure })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
        }
    }
}
