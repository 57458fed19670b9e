use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::super::messages::Msg;
use super::super::state::SchoolUpdatesComponent;

/// Login card: account, password, "save login" and the guest entrance.
/// Enter in either field submits.
pub fn login(component: &SchoolUpdatesComponent, link: &Scope<SchoolUpdatesComponent>) -> Html {
    let form = &component.login_form;

    html! {
        <section class="card login">
            <h3 class="card-title">{"Login"}</h3>
            <input
                type="text"
                placeholder="Account"
                value={form.account.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SetAccount(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
                onkeypress={submit_on_enter(link)}
            />
            <input
                type="password"
                placeholder="Password"
                value={form.password.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SetPassword(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
                onkeypress={submit_on_enter(link)}
            />
            <label class="save-login">
                <input
                    type="checkbox"
                    checked={form.save_login}
                    onchange={link.callback(|e: Event| {
                        Msg::SetSaveLogin(e.target_unchecked_into::<HtmlInputElement>().checked())
                    })}
                />
                {"Save login information"}
            </label>
            <div class="actions">
                <button class="primary" onclick={link.callback(|_| Msg::Login)}>{"Login"}</button>
                <button class="outline" onclick={link.callback(|_| Msg::GuestAccess)}>
                    {"Continue as Guest"}
                </button>
            </div>
        </section>
    }
}

fn submit_on_enter(link: &Scope<SchoolUpdatesComponent>) -> Callback<KeyboardEvent> {
    link.batch_callback(|e: KeyboardEvent| {
        if e.key() == "Enter" {
            vec![Msg::Login]
        } else {
            vec![]
        }
    })
}
