use common::model::content::Category;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::super::helpers::guest_label;
use super::super::messages::Msg;
use super::super::state::{AdminTab, SchoolUpdatesComponent};

/// Admin panel with three tabs: content editor, submitted reviews, and the
/// credential form.
pub fn admin(component: &SchoolUpdatesComponent, link: &Scope<SchoolUpdatesComponent>) -> Html {
    let tabs = AdminTab::ALL.into_iter().map(|tab| {
        html! {
            <button
                class={classes!("tab-btn", (tab == component.admin_tab).then_some("active"))}
                onclick={link.callback(move |_| Msg::SetAdminTab(tab))}
            >
                { tab.label() }
            </button>
        }
    });

    let pane = match component.admin_tab {
        AdminTab::Edit => edit_tab(component, link),
        AdminTab::Reviews => reviews_tab(component),
        AdminTab::Account => account_tab(component, link),
    };

    html! {
        <>
            <div class="toolbar">
                <button class="outline small" onclick={link.callback(|_| Msg::Back)}>{"Back"}</button>
                <h2>{"Admin Panel"}</h2>
                <div class="guest-count">{ guest_label(component.app.store().guest_count()) }</div>
            </div>
            <div class="tab-bar">{ for tabs }</div>
            <div class="tab-pane">{ pane }</div>
        </>
    }
}

fn edit_tab(component: &SchoolUpdatesComponent, link: &Scope<SchoolUpdatesComponent>) -> Html {
    let editors = Category::ALL.into_iter().map(|category| {
        html! {
            <div class="card">
                <h3 class="card-title">{ category.title() }</h3>
                <textarea
                    value={component.edited_updates.get(category).to_string()}
                    oninput={link.callback(move |e: InputEvent| {
                        let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
                        Msg::EditUpdate(category, value)
                    })}
                />
            </div>
        }
    });

    html! {
        <>
            <button class="primary small" onclick={link.callback(|_| Msg::SaveUpdates)}>
                {"Save Changes"}
            </button>
            <div class="editors">{ for editors }</div>
        </>
    }
}

fn reviews_tab(component: &SchoolUpdatesComponent) -> Html {
    let comments = component.app.store().comments();
    html! {
        <div class="card">
            <h3 class="card-title">{"Submitted Reviews"}</h3>
            {
                if comments.is_empty() {
                    html! { <p class="muted">{"No reviews submitted yet."}</p> }
                } else {
                    html! {
                        <>
                            { for comments.iter().map(|comment| html! {
                                <div class="comment">{ comment.clone() }</div>
                            }) }
                        </>
                    }
                }
            }
        </div>
    }
}

fn account_tab(component: &SchoolUpdatesComponent, link: &Scope<SchoolUpdatesComponent>) -> Html {
    html! {
        <div class="card">
            <h3 class="card-title">{"Change Admin Username & Password"}</h3>
            <div>
                <label>{"New Username:"}</label>
                <input
                    type="text"
                    value={component.new_username.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetNewUsername(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
            </div>
            <div>
                <label>{"New Password:"}</label>
                <input
                    type="password"
                    value={component.new_password.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetNewPassword(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
            </div>
            <button class="primary small" onclick={link.callback(|_| Msg::ChangeCredentials)}>
                {"Change Credentials"}
            </button>
        </div>
    }
}
