//! School updates app: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `SchoolUpdatesProps`, `SchoolUpdatesComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - On first render, report storage load problems and subscribe to the
//!   browser's `online`/`offline` events for the rest of the session.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod screens;
mod state;
mod update;
mod view;

use helpers::show_store_error;
pub use messages::Msg;
pub use props::SchoolUpdatesProps;
pub use state::SchoolUpdatesComponent;

use crate::browser::events::WindowListener;

impl Component for SchoolUpdatesComponent {
    type Message = Msg;
    type Properties = SchoolUpdatesProps;

    fn create(ctx: &Context<Self>) -> Self {
        SchoolUpdatesComponent::new(ctx.props().config.as_ref().clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            for err in self.load_errors.drain(..) {
                show_store_error(&err);
            }

            for (event, online) in [("online", true), ("offline", false)] {
                let link = ctx.link().clone();
                if let Some(listener) = WindowListener::new(event, move |_| {
                    link.send_message(Msg::NetworkChanged(online));
                }) {
                    self.listeners.push(listener);
                }
            }
        }
    }
}
