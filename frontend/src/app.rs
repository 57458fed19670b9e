use std::rc::Rc;

use common::config::AppConfig;
use yew::{html, Component, Context, Html};

use crate::components::install_prompt::InstallPromptComponent;
use crate::components::school_updates::SchoolUpdatesComponent;

pub struct App {
    config: Rc<AppConfig>,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            config: Rc::new(AppConfig::default()),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <SchoolUpdatesComponent config={self.config.clone()} />
                <InstallPromptComponent config={self.config.clone()} />
            </div>
        }
    }
}
