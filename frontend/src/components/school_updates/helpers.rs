//! Utility functions for the school updates component.
//!
//! - **User Feedback**: turning `common` errors into toast notifications.
//! - **Timers**: driving the welcome typing effect from `gloo-timers`.
//! - **Formatting**: the guest counter shown in the admin panel.

use common::error::{ActionError, StoreError};
use common::typing::Next;
use num_format::{Locale, ToFormattedString};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::browser::toast::show_toast;

use super::messages::Msg;
use super::state::SchoolUpdatesComponent;

/// Logs an action failure and shows its user-facing message.
pub fn show_error(err: &ActionError) {
    log::warn!("{err}");
    show_toast(&err.user_message());
}

pub fn show_store_error(err: &StoreError) {
    show_error(&ActionError::Store(err.clone()));
}

/// Shows a toast for a failed action; always asks for a re-render.
pub fn report<T>(result: Result<T, ActionError>) -> bool {
    if let Err(err) = result {
        show_error(&err);
    }
    true
}

/// Posts `Msg::TypingTick` back to the component once the requested delay has
/// passed. Ticks for an abandoned run are discarded by the typing effect.
pub fn schedule_typing(ctx: &Context<SchoolUpdatesComponent>, next: Next) {
    if let Next::After {
        generation,
        delay_ms,
    } = next
    {
        let link = ctx.link().clone();
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(delay_ms).await;
            link.send_message(Msg::TypingTick(generation));
        });
    }
}

/// `Guests visited: 1,204`.
pub fn guest_label(count: u64) -> String {
    format!("Guests visited: {}", count.to_formatted_string(&Locale::en))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_label_groups_thousands() {
        assert_eq!(guest_label(0), "Guests visited: 0");
        assert_eq!(guest_label(1204), "Guests visited: 1,204");
    }
}
