//! View rendering for the school updates component.
//!
//! Exactly one screen is rendered, picked from the current view of the
//! controller. Every screen shares the offline banner and the school header.

use common::model::view::View;
use yew::prelude::*;

use super::screens;
use super::state::SchoolUpdatesComponent;

/// Main view function for the component.
pub fn view(component: &SchoolUpdatesComponent, ctx: &Context<SchoolUpdatesComponent>) -> Html {
    let link = ctx.link();
    let screen = match component.app.view() {
        View::Home => screens::home::home(link),
        View::Login => screens::login::login(component, link),
        View::Posts => screens::posts::posts(component, link),
        View::Detail => screens::detail::detail(component, link),
        View::Admin => screens::admin::admin(component, link),
    };

    html! {
        <div class={classes!("school-updates", component.app.view().as_str())}>
            { offline_banner(component) }
            { school_header() }
            <main class="screen">{ screen }</main>
        </div>
    }
}

fn offline_banner(component: &SchoolUpdatesComponent) -> Html {
    match component.app.offline_banner() {
        Some(text) => html! {
            <div class="offline-banner" role="status">
                <span>{ text }</span>
            </div>
        },
        None => html! {},
    }
}

fn school_header() -> Html {
    html! {
        <header class="school-header">
            <div>
                <h1>{"ELIM CHRISTIAN COLLEGE, BANKET📚"}</h1>
                <h2>{"Gadziriro Yeramangwana"}</h2>
            </div>
        </header>
    }
}

/// Small speaker button used by cards and the detail view.
///
/// Stops the click from reaching an enclosing clickable card.
pub fn speak_button(link: &yew::html::Scope<SchoolUpdatesComponent>, text: String) -> Html {
    let link = link.clone();
    let onclick = Callback::from(move |e: MouseEvent| {
        e.stop_propagation();
        link.send_message(super::Msg::ReadAloud(text.clone()));
    });
    html! {
        <button class="icon-btn speak" title="Read aloud" aria-label="Read aloud" {onclick}>
            {"🔊"}
        </button>
    }
}
