use yew::html::Scope;
use yew::prelude::*;

use super::super::messages::Msg;
use super::super::state::SchoolUpdatesComponent;

pub fn home(link: &Scope<SchoolUpdatesComponent>) -> Html {
    html! {
        <section class="splash">
            <h1>{"Welcome to Elim Christian College, BANKET📚"}</h1>
            <p>{"Your webpage to stay updated on school activities, events, and announcements."}</p>
            <p>{"Join us in nurturing a brighter future for our students!"}</p>
            <button class="primary" onclick={link.callback(|_| Msg::Advance)}>{"Next"}</button>
        </section>
    }
}
