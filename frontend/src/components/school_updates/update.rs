//! Update function for the school updates component.
//!
//! This module contains a single `update` function following an Elm-style architecture:
//! it receives the current `SchoolUpdatesComponent` state, the `Context`, and a `Msg`,
//! mutates the state accordingly, and returns a `bool` indicating whether the view should
//! re-render.
//!
//! Key behaviors
//! - Form drafts are edited in place and never persisted by themselves.
//! - Every durable change goes through `AppState`, which writes storage immediately.
//! - Outcomes are reported with toast messages.

use common::app::{CONTENT_SAVED, CREDENTIALS_SAVED, LOGIN_SUCCESS};
use common::model::view::View;
use common::speech::read_aloud;
use yew::prelude::*;

use crate::browser::toast::show_toast;

use super::helpers::{report, schedule_typing, show_error};
use super::messages::Msg;
use super::state::{AdminTab, SchoolUpdatesComponent};

/// Central update function for the component.
///
/// Contract
/// - Mutates `component` based on `msg`.
/// - May schedule further messages via `ctx.link()` (the typing effect timer).
/// - Returns `true` to re-render the view, `false` when only side effects occur.
pub fn update(
    component: &mut SchoolUpdatesComponent,
    ctx: &Context<SchoolUpdatesComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Advance => report(component.app.advance()),
        Msg::SetAccount(account) => {
            component.login_form.account = account;
            true
        }
        Msg::SetPassword(password) => {
            component.login_form.password = password;
            true
        }
        Msg::SetSaveLogin(save_login) => {
            component.login_form.save_login = save_login;
            true
        }
        Msg::Login => {
            match component.app.login(&component.login_form) {
                Ok(_) => {
                    component.edited_updates = component.app.store().updates().clone();
                    component.admin_tab = AdminTab::Edit;
                    show_toast(LOGIN_SUCCESS);
                }
                Err(err) => show_error(&err),
            }
            true
        }
        Msg::GuestAccess => {
            if let Err(err) = component.app.guest_access() {
                show_error(&err);
            }
            if component.app.view() == View::Posts {
                let text = component.app.config().typing.text.clone();
                if let Some(next) = component.welcome.start(&text) {
                    schedule_typing(ctx, next);
                }
            }
            true
        }
        Msg::TypingTick(generation) => {
            let next = component.welcome.tick(generation);
            schedule_typing(ctx, next);
            true
        }
        Msg::ViewDetail(category) => report(component.app.view_detail(category)),
        Msg::Back => {
            let left = component.app.view();
            let result = component.app.back();
            if left == View::Posts && result.is_ok() {
                component.welcome.cancel();
            }
            report(result)
        }
        Msg::UpdateComment(text) => {
            component.comment_draft = text;
            true
        }
        Msg::SubmitComment => {
            match component.app.submit_comment(&component.comment_draft) {
                Ok(()) => component.comment_draft.clear(),
                Err(err) => {
                    // Already in the log; a resubmit would add it again.
                    if err.change_kept() {
                        component.comment_draft.clear();
                    }
                    show_error(&err);
                }
            }
            true
        }
        Msg::ReadAloud(text) => {
            if let Err(err) = read_aloud(&component.speech, &text) {
                show_error(&err);
            }
            false
        }
        Msg::SetAdminTab(tab) => {
            component.admin_tab = tab;
            true
        }
        Msg::EditUpdate(category, text) => {
            component.edited_updates.set(category, text);
            true
        }
        Msg::SaveUpdates => {
            match component.app.save_updates(component.edited_updates.clone()) {
                Ok(()) => show_toast(CONTENT_SAVED),
                Err(err) => show_error(&err),
            }
            true
        }
        Msg::SetNewUsername(username) => {
            component.new_username = username;
            true
        }
        Msg::SetNewPassword(password) => {
            component.new_password = password;
            true
        }
        Msg::ChangeCredentials => {
            match component
                .app
                .update_credentials(&component.new_username, &component.new_password)
            {
                Ok(()) => {
                    component.new_username.clear();
                    component.new_password.clear();
                    show_toast(CREDENTIALS_SAVED);
                }
                Err(err) => show_error(&err),
            }
            true
        }
        Msg::NetworkChanged(online) => {
            component.app.set_online(online);
            true
        }
    }
}
