use common::model::content::Category;
use common::speech::reviews_script;
use web_sys::HtmlTextAreaElement;
use yew::html::Scope;
use yew::prelude::*;

use super::super::messages::Msg;
use super::super::state::SchoolUpdatesComponent;
use super::super::view::speak_button;

/// The updates feed: one clickable card per category, then the reviews card
/// with the comment box. Hosts the guest welcome popup.
pub fn posts(component: &SchoolUpdatesComponent, link: &Scope<SchoolUpdatesComponent>) -> Html {
    let updates = component.app.store().updates();
    let comments = component.app.store().comments();

    let cards = Category::ALL.into_iter().map(|category| {
        let text = updates.get(category).to_string();
        html! {
            <div
                class="card category"
                onclick={link.callback(move |_| Msg::ViewDetail(category))}
            >
                <h3 class="card-title">
                    { category.title() }
                    { speak_button(link, text.clone()) }
                </h3>
                <p class="card-text">{ text }</p>
            </div>
        }
    });

    html! {
        <>
            <div class="toolbar">
                <button class="outline small" onclick={link.callback(|_| Msg::Back)}>{"Back"}</button>
                <h2>{"Updates"}</h2>
                <div></div>
            </div>
            <div class="feed">{ for cards }</div>
            <section class="card reviews">
                <h3 class="card-title">
                    {"Your Reviews"}
                    { speak_button(link, reviews_script(comments)) }
                </h3>
                <textarea
                    placeholder="Leave a comment..."
                    value={component.comment_draft.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::UpdateComment(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                    })}
                />
                <button class="primary small" onclick={link.callback(|_| Msg::SubmitComment)}>
                    {"Submit"}
                </button>
                <div class="comment-list">
                    { for comments.iter().map(|comment| html! { <p class="comment">{ comment.clone() }</p> }) }
                </div>
            </section>
            { welcome_popup(component) }
        </>
    }
}

fn welcome_popup(component: &SchoolUpdatesComponent) -> Html {
    if !component.welcome.popup_visible() {
        return html! {};
    }
    html! {
        <div class="welcome-overlay">
            <div class="welcome-popup">
                <div class="welcome-text">{ component.welcome.text().to_string() }</div>
            </div>
        </div>
    }
}
