use common::speech::detail_script;
use yew::html::Scope;
use yew::prelude::*;

use super::super::messages::Msg;
use super::super::state::SchoolUpdatesComponent;
use super::super::view::speak_button;

pub fn detail(component: &SchoolUpdatesComponent, link: &Scope<SchoolUpdatesComponent>) -> Html {
    let Some(detail) = component.app.detail() else {
        return html! {};
    };

    html! {
        <section class="card detail">
            <div class="card-header">
                <h3 class="card-title">{ detail.title.clone() }</h3>
                { speak_button(link, detail_script(detail)) }
            </div>
            <p class="card-text">{ detail.content.clone() }</p>
            <div class="actions">
                <button class="primary" onclick={link.callback(|_| Msg::Back)}>{"Close"}</button>
            </div>
        </section>
    }
}
