//! "Install app" card.
//!
//! Listens for the browser's `beforeinstallprompt` and `appinstalled` events,
//! keeps the deferred offer, and shows the card according to
//! [`InstallPolicy`]. A dismissal is remembered in session storage.

use std::rc::Rc;

use common::config::{AppConfig, InstallConfig};
use common::install::{InstallChoice, InstallPolicy};
use common::store::KeyValueBackend;
use web_sys::Event;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::browser::events::WindowListener;
use crate::browser::platform::{is_standalone, present_install_offer};
use crate::browser::storage::BrowserBackend;

pub enum Msg {
    OfferAvailable(Event),
    DelayElapsed,
    Installed,
    Install,
    ChoiceMade(InstallChoice),
    Dismiss,
}

#[derive(Properties, PartialEq, Clone)]
pub struct InstallPromptProps {
    pub config: Rc<AppConfig>,
}

pub struct InstallPromptComponent {
    config: InstallConfig,
    policy: InstallPolicy,
    /// The `beforeinstallprompt` event, kept until the offer is presented.
    deferred: Option<Event>,
    session: BrowserBackend,
    listeners: Vec<WindowListener>,
}

impl Component for InstallPromptComponent {
    type Message = Msg;
    type Properties = InstallPromptProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = ctx.props().config.install.clone();
        let session = BrowserBackend::session().unwrap_or_else(|err| {
            log::warn!("{err}");
            BrowserBackend::memory()
        });
        let dismissed = matches!(session.get(&config.dismissed_key), Ok(Some(_)));
        let policy = InstallPolicy::new(&config, is_standalone(), dismissed);

        Self {
            config,
            policy,
            deferred: None,
            session,
            listeners: Vec::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::OfferAvailable(event) => {
                self.deferred = Some(event);
                if let Some(delay_ms) = self.policy.offer_available() {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(delay_ms).await;
                        link.send_message(Msg::DelayElapsed);
                    });
                }
                false
            }
            Msg::DelayElapsed => {
                self.policy.delay_elapsed();
                true
            }
            Msg::Installed => {
                self.policy.installed();
                self.deferred = None;
                true
            }
            Msg::Install => {
                if !self.policy.can_present() {
                    return false;
                }
                if let Some(event) = self.deferred.take() {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let choice = present_install_offer(event).await.unwrap_or_else(|err| {
                            log::warn!("install offer failed: {err:?}");
                            InstallChoice::Dismissed
                        });
                        link.send_message(Msg::ChoiceMade(choice));
                    });
                }
                false
            }
            Msg::ChoiceMade(choice) => {
                self.policy.choice_made(choice);
                true
            }
            Msg::Dismiss => {
                self.policy.dismiss();
                if let Err(err) = self.session.set(&self.config.dismissed_key, "true") {
                    log::warn!("{err}");
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !self.policy.is_visible() {
            return html! {};
        }
        let link = ctx.link();
        html! {
            <div class="install-prompt">
                <div class="card">
                    <div class="card-header">
                        <h3>{"Install ECC InterMedia Club"}</h3>
                        <button class="icon-btn" aria-label="Close" onclick={link.callback(|_| Msg::Dismiss)}>
                            {"✕"}
                        </button>
                    </div>
                    <p>{"Install our app for quick access to school updates, even when offline!"}</p>
                    <div class="actions">
                        <button class="primary" onclick={link.callback(|_| Msg::Install)}>{"Install App"}</button>
                        <button class="outline" onclick={link.callback(|_| Msg::Dismiss)}>{"Not Now"}</button>
                    </div>
                </div>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let link = ctx.link().clone();
        if let Some(listener) = WindowListener::new("beforeinstallprompt", move |event: Event| {
            event.prevent_default();
            link.send_message(Msg::OfferAvailable(event));
        }) {
            self.listeners.push(listener);
        }
        let link = ctx.link().clone();
        if let Some(listener) = WindowListener::new("appinstalled", move |_| {
            link.send_message(Msg::Installed);
        }) {
            self.listeners.push(listener);
        }
    }
}
